use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use storyapp_shared::geo::{self, MapMarker};
use storyapp_shared::models::Story;
use storyapp_shared::pagination::Pagination;

use crate::api::StoryApi;
use crate::components::loader::LoaderAbsolute;
use crate::components::map_view::{MapSection, StoryMap};
use crate::components::pagination::PaginationBar;
use crate::components::story_list::{StoryList, StoryListEmpty, StoryListError};
use crate::config::ApiConfig;
use crate::presenter::{HomePresenter, HomeView};

/// Delay between mounting the page and starting the presenter, so `#map`
/// exists in the DOM before Leaflet looks for it.
const MOUNT_DELAY_MS: u32 = 100;

#[derive(Debug, Clone, PartialEq)]
enum ListState {
    Idle,
    Ready,
    Empty,
    Error(String),
}

/// All reports of the page view plus what the list currently shows.
///
/// Populating and page clicks return the markers to plot, or `None` when the
/// map should stay as it is.
#[derive(Debug, Clone, PartialEq)]
struct ReportsPage {
    state: ListState,
    reports: Vec<Story>,
    pagination: Pagination,
}

impl Default for ReportsPage {
    fn default() -> Self {
        Self {
            state: ListState::Idle,
            reports: Vec::new(),
            pagination: Pagination::default(),
        }
    }
}

impl ReportsPage {
    fn paginated(&self) -> &[Story] {
        self.pagination.slice(&self.reports)
    }

    /// Pagination to render; empty unless the list is showing stories.
    fn visible_pagination(&self) -> Pagination {
        if self.state == ListState::Ready {
            self.pagination
        } else {
            Pagination::default()
        }
    }

    /// An empty list only switches to the empty state; stored reports and
    /// pagination stay untouched.
    fn populate(&mut self, reports: Vec<Story>) -> Option<Vec<MapMarker>> {
        if reports.is_empty() {
            self.state = ListState::Empty;
            return None;
        }
        self.pagination.repopulate(reports.len());
        self.reports = reports;
        self.state = ListState::Ready;
        Some(geo::markers_for(self.paginated()))
    }

    /// Clicking the current page does nothing.
    fn select_page(&mut self, page: usize) -> Option<Vec<MapMarker>> {
        if !self.pagination.select(page) {
            return None;
        }
        let reports = std::mem::take(&mut self.reports);
        self.populate(reports)
    }

    fn fail(&mut self, message: &str) {
        self.state = ListState::Error(message.to_string());
    }
}

/// Page state shared between the component and the presenter.
#[derive(Clone, Copy)]
struct HomeViewHandle {
    page: Signal<ReportsPage>,
    list_loading: Signal<bool>,
    map_loading: Signal<bool>,
    map: Signal<Option<StoryMap>>,
}

impl HomeViewHandle {
    fn handle_pagination_click(&mut self, page: usize) {
        let markers = self.page.write().select_page(page);
        if let Some(markers) = markers {
            self.add_markers_to_map(&markers);
        }
    }

    fn add_markers_to_map(&mut self, markers: &[MapMarker]) {
        if self.map.read().is_none() {
            self.initial_map();
        }
        match &*self.map.read() {
            Some(map) => map.add_markers(markers),
            None => tracing::warn!("map unavailable, skipping markers"),
        }
    }
}

impl HomeView for HomeViewHandle {
    fn show_loading(&mut self) {
        self.list_loading.set(true);
    }

    fn hide_loading(&mut self) {
        self.list_loading.set(false);
    }

    fn show_map_loading(&mut self) {
        self.map_loading.set(true);
    }

    fn hide_map_loading(&mut self) {
        self.map_loading.set(false);
    }

    fn initial_map(&mut self) {
        if self.map.read().is_some() {
            return;
        }
        match StoryMap::initialize_default() {
            Ok(map) => self.map.set(Some(map)),
            Err(e) => tracing::warn!(error = %e, "failed to initialize map"),
        }
    }

    fn populate_reports_list(&mut self, message: &str, reports: Vec<Story>) {
        tracing::debug!(api_message = message, count = reports.len(), "populating reports list");
        let markers = self.page.write().populate(reports);
        if let Some(markers) = markers {
            self.add_markers_to_map(&markers);
        }
    }

    fn populate_reports_list_error(&mut self, message: &str) {
        self.page.write().fail(message);
    }
}

#[component]
pub fn HomePage() -> Element {
    let mut view = HomeViewHandle {
        page: use_signal(ReportsPage::default),
        list_loading: use_signal(|| false),
        map_loading: use_signal(|| false),
        map: use_signal(|| None::<StoryMap>),
    };

    let _presenter = use_future(move || async move {
        TimeoutFuture::new(MOUNT_DELAY_MS).await;
        let mut presenter = HomePresenter::new(view, StoryApi::new(ApiConfig::load()));
        presenter.initial_gallery_and_map().await;
    });

    let list_loading = *view.list_loading.read();
    let map_loading = *view.map_loading.read();
    let (list_state, stories, pagination) = {
        let page = view.page.read();
        (page.state.clone(), page.paginated().to_vec(), page.visible_pagination())
    };

    let list_body = match list_state {
        ListState::Idle => rsx! {},
        ListState::Ready => rsx! {
            StoryList { stories }
        },
        ListState::Empty => rsx! {
            StoryListEmpty {}
        },
        ListState::Error(message) => rsx! {
            StoryListError { message }
        },
    };

    rsx! {
        MapSection { loading: map_loading }

        section { class: "container",
            h1 { class: "section-title", "Daftar Stories" }
            div { class: "reports-list__container",
                div { id: "reports-list", {list_body} }
                PaginationBar {
                    pagination,
                    on_select: move |page: usize| view.handle_pagination_click(page),
                }
                div { id: "reports-list-loading-container",
                    if list_loading {
                        LoaderAbsolute {}
                    }
                }
            }
        }
    }
}
