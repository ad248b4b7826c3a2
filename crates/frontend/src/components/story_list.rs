use dioxus::prelude::*;
use storyapp_shared::models::Story;

/// "lat, lon" to five decimals, or a placeholder for stories without a location.
fn format_location(story: &Story) -> String {
    match story.location() {
        Some((lat, lon)) => format!("{:.5}, {:.5}", lat, lon),
        None => "Lokasi tidak tersedia".to_string(),
    }
}

#[component]
pub fn StoryItem(story: Story) -> Element {
    let created_at = story.formatted_created_at();
    let location = format_location(&story);
    let reporter_name = story.reporter_name().to_string();

    rsx! {
        div { tabindex: "0", class: "report-item", "data-reportid": "{story.id}",
            img {
                class: "report-item__image",
                src: "{story.photo_url}",
                alt: "{story.description}",
            }
            div { class: "report-item__body",
                div { class: "report-item__main",
                    div { class: "report-item__more-info",
                        div { class: "report-item__createdat", "{created_at}" }
                        div { class: "report-item__location", "{location}" }
                    }
                }
                div { class: "report-item__description", "{story.description}" }
                div { class: "report-item__more-info",
                    div { class: "report-item__author", "Dilaporkan oleh: {reporter_name}" }
                }
            }
        }
    }
}

#[component]
pub fn StoryList(stories: Vec<Story>) -> Element {
    rsx! {
        div { class: "reports-list",
            for story in stories {
                StoryItem { key: "{story.id}", story: story.clone() }
            }
        }
    }
}

#[component]
pub fn StoryListEmpty() -> Element {
    rsx! {
        div { id: "reports-list-empty", class: "reports-list__empty",
            h2 { "Tidak ada story yang tersedia" }
            p { "Saat ini, tidak ada story yang dapat ditampilkan." }
        }
    }
}

#[component]
pub fn StoryListError(message: String) -> Element {
    let detail = if message.is_empty() {
        "Gunakan jaringan lain atau laporkan error ini.".to_string()
    } else {
        message
    };

    rsx! {
        div { id: "reports-list-error", class: "reports-list__error",
            h2 { "Terjadi kesalahan pengambilan daftar story" }
            p { "{detail}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(lat: Option<f64>, lon: Option<f64>) -> Story {
        Story {
            id: "story-1".to_string(),
            name: "Ayu".to_string(),
            description: String::new(),
            photo_url: String::new(),
            created_at: String::new(),
            lat,
            lon,
        }
    }

    #[test]
    fn test_format_location_rounds() {
        assert_eq!(
            format_location(&story(Some(-6.352052), Some(106.83252))),
            "-6.35205, 106.83252"
        );
    }

    #[test]
    fn test_format_location_missing() {
        assert_eq!(format_location(&story(None, None)), "Lokasi tidak tersedia");
    }
}
