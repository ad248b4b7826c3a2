use dioxus::prelude::*;

#[component]
pub fn LoaderAbsolute() -> Element {
    rsx! {
        div { class: "loader loader-absolute" }
    }
}
