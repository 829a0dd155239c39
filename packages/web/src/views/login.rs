//! Sign-in page.

use dioxus::prelude::*;
use ui::{use_session, SignIn};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let nav = use_navigator();

    // Already signed in, go straight to the profile
    if session().logged {
        nav.replace(Route::Profile {});
        return rsx! {};
    }

    rsx! {
        SignIn {
            on_signed_in: move |_| {
                nav.push(Route::Profile {});
            },
        }
    }
}
