use dioxus::prelude::*;
use ui::ProfileView;

#[component]
pub fn Profile() -> Element {
    rsx! {
        ProfileView {}
    }
}
