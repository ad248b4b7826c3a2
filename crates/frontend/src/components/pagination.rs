use dioxus::prelude::*;
use storyapp_shared::pagination::{PageButton, Pagination};

pub const PAGINATION_CONTAINER_ID: &str = "pagination-container";

fn button_class(button: &PageButton) -> &'static str {
    if button.active {
        "pagination-btn active"
    } else {
        "pagination-btn"
    }
}

/// Prev / numbered / Next buttons. Renders an empty container when everything
/// fits on one page.
#[component]
pub fn PaginationBar(pagination: Pagination, on_select: EventHandler<usize>) -> Element {
    let buttons = pagination.buttons();

    rsx! {
        div { id: PAGINATION_CONTAINER_ID, class: "pagination-container",
            for btn in buttons {
                button {
                    key: "{btn.label}",
                    class: button_class(&btn),
                    "data-page": "{btn.page}",
                    onclick: move |_| on_select.call(btn.page),
                    "{btn.label}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_button_class() {
        let mut p = Pagination::new(13);
        p.select(2);
        let classes: Vec<&str> = p.buttons().iter().map(button_class).collect();
        assert_eq!(
            classes,
            vec![
                "pagination-btn",
                "pagination-btn",
                "pagination-btn active",
                "pagination-btn",
                "pagination-btn",
            ]
        );
    }
}
