use storyapp_shared::models::Story;

use crate::api::{ApiError, StoriesResponse};

/// What the home presenter can ask of the page.
pub trait HomeView {
    fn show_loading(&mut self);
    fn hide_loading(&mut self);
    fn show_map_loading(&mut self);
    fn hide_map_loading(&mut self);
    fn initial_map(&mut self);
    fn populate_reports_list(&mut self, message: &str, reports: Vec<Story>);
    fn populate_reports_list_error(&mut self, message: &str);
}

/// Source of story reports.
#[allow(async_fn_in_trait)]
pub trait StoryModel {
    async fn get_all_reports(&self) -> Result<StoriesResponse, ApiError>;
}

pub struct HomePresenter<V, M> {
    view: V,
    model: M,
}

impl<V: HomeView, M: StoryModel> HomePresenter<V, M> {
    pub fn new(view: V, model: M) -> Self {
        Self { view, model }
    }

    /// Load the story list and prepare the map.
    ///
    /// Both loaders are cleared whatever the outcome.
    pub async fn initial_gallery_and_map(&mut self) {
        self.view.show_loading();
        self.view.show_map_loading();
        self.view.initial_map();

        match self.model.get_all_reports().await {
            Ok(resp) => {
                tracing::info!(count = resp.list_story.len(), "stories loaded");
                self.view.populate_reports_list(&resp.message, resp.list_story);
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load stories");
                self.view.populate_reports_list_error(&e.to_string());
            }
        }

        self.view.hide_loading();
        self.view.hide_map_loading();
    }

    #[cfg(test)]
    fn into_view(self) -> V {
        self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[derive(Default)]
    struct RecordingView {
        events: Vec<String>,
    }

    impl HomeView for RecordingView {
        fn show_loading(&mut self) {
            self.events.push("show_loading".into());
        }
        fn hide_loading(&mut self) {
            self.events.push("hide_loading".into());
        }
        fn show_map_loading(&mut self) {
            self.events.push("show_map_loading".into());
        }
        fn hide_map_loading(&mut self) {
            self.events.push("hide_map_loading".into());
        }
        fn initial_map(&mut self) {
            self.events.push("initial_map".into());
        }
        fn populate_reports_list(&mut self, message: &str, reports: Vec<Story>) {
            self.events
                .push(format!("populate:{}:{}", message, reports.len()));
        }
        fn populate_reports_list_error(&mut self, message: &str) {
            self.events.push(format!("error:{}", message));
        }
    }

    struct FakeModel(Result<StoriesResponse, ApiError>);

    impl StoryModel for FakeModel {
        async fn get_all_reports(&self) -> Result<StoriesResponse, ApiError> {
            self.0.clone()
        }
    }

    fn story(name: &str) -> Story {
        Story {
            id: format!("story-{name}"),
            name: name.to_string(),
            description: String::new(),
            photo_url: String::new(),
            created_at: String::new(),
            lat: Some(-6.2),
            lon: Some(106.8),
        }
    }

    fn run(result: Result<StoriesResponse, ApiError>) -> Vec<String> {
        let mut presenter = HomePresenter::new(RecordingView::default(), FakeModel(result));
        block_on(presenter.initial_gallery_and_map());
        presenter.into_view().events
    }

    #[test]
    fn test_success_populates_list() {
        let events = run(Ok(StoriesResponse {
            error: false,
            message: "Stories fetched successfully".to_string(),
            list_story: vec![story("Ayu"), story("Budi")],
        }));
        assert_eq!(
            events,
            vec![
                "show_loading",
                "show_map_loading",
                "initial_map",
                "populate:Stories fetched successfully:2",
                "hide_loading",
                "hide_map_loading",
            ]
        );
    }

    #[test]
    fn test_empty_list_is_still_populated() {
        let events = run(Ok(StoriesResponse {
            error: false,
            message: "ok".to_string(),
            list_story: vec![],
        }));
        assert!(events.contains(&"populate:ok:0".to_string()));
    }

    #[test]
    fn test_server_error_shows_message() {
        let events = run(Err(ApiError::Server("Missing authentication".to_string())));
        assert_eq!(events[3], "error:Missing authentication");
        assert_eq!(&events[4..], &["hide_loading", "hide_map_loading"]);
    }

    #[test]
    fn test_network_error_still_hides_loaders() {
        let events = run(Err(ApiError::Network("offline".to_string())));
        assert_eq!(events[3], "error:request failed: offline");
        assert_eq!(events.last().map(String::as_str), Some("hide_map_loading"));
    }
}
