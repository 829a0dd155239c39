use dioxus::prelude::*;
use ui::ErrorNotice;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "no route");
    rsx! {
        ErrorNotice { code: 404, message: "This page does not exist." }
    }
}
