use dioxus::prelude::*;
use ui::{use_session, Navbar, SignOutButton};

use crate::Route;

/// Shared layout: the nav bar above the routed page.
#[component]
pub fn AppNavbar() -> Element {
    let session = use_session();
    let nav = use_navigator();

    let state = session();
    let logged = state.logged;
    let signed_in = state.user_data.filter(|_| logged).map(|user| user.first_name);

    rsx! {
        Navbar {
            Link {
                class: "main-nav-logo",
                to: Route::Home {},
                h1 { class: "main-nav-logo-text", "Argent Bank" }
            }
            div {
                match signed_in {
                    Some(first_name) => rsx! {
                        Link {
                            class: "main-nav-item",
                            to: Route::Profile {},
                            i { class: "fa fa-user-circle" }
                            " {first_name} "
                        }
                        SignOutButton {
                            class: "main-nav-item",
                            on_signed_out: move |_| {
                                nav.push(Route::Home {});
                            },
                        }
                    },
                    None => rsx! {
                        Link {
                            class: "main-nav-item",
                            to: Route::Login {},
                            i { class: "fa fa-user-circle" }
                            " Sign In"
                        }
                    },
                }
            }
        }

        Outlet::<Route> {}

        footer {
            class: "footer",
            p { class: "footer-text", "Copyright 2020 Argent Bank" }
        }
    }
}
