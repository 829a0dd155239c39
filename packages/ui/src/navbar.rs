use dioxus::prelude::*;

/// Top navigation bar. The app passes its router links as children.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        nav {
            class: "main-nav",
            {children}
        }
    }
}
