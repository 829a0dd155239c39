//! Profile page: welcome header with inline name editing, then the accounts.

use api::ProfileForm;
use dioxus::prelude::*;
use store::UserData;

use crate::accounts::AccountList;
use crate::auth::{use_flows, use_session, use_view_cancellation};

/// The signed-in user's page. Renders a 401 notice when nobody is signed in.
#[component]
pub fn ProfileView() -> Element {
    let session = use_session();
    let mut editing = use_signal(|| false);

    let state = session();
    let Some(user) = state.user_data.filter(|_| state.logged) else {
        return rsx! {
            ErrorNotice { code: 401, message: "You must sign in to view this page." }
        };
    };

    rsx! {
        main {
            class: "main bg-dark",
            div {
                class: "header",
                if editing() {
                    EditingHeader {
                        user: user.clone(),
                        on_close: move |_| editing.set(false),
                    }
                } else {
                    HeaderMessage {
                        username: user.full_name(),
                        on_edit: move |_| editing.set(true),
                    }
                }
            }
            h2 { class: "sr-only", "Accounts" }
            AccountList {}
        }
    }
}

#[component]
fn HeaderMessage(username: String, on_edit: EventHandler<()>) -> Element {
    rsx! {
        h1 {
            "Welcome back"
            br {}
            "{username}"
        }
        button {
            class: "edit-button",
            onclick: move |_| on_edit.call(()),
            "Edit Name"
        }
    }
}

#[component]
fn EditingHeader(user: UserData, on_close: EventHandler<()>) -> Element {
    let flows = use_flows();
    let cancel = use_view_cancellation();

    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut error_message = use_signal(String::new);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let flows = flows.clone();
        let cancel = cancel.clone();
        let form = ProfileForm::new(first_name(), last_name());
        spawn(async move {
            match flows.edit_profile(&form, &cancel).await {
                Ok(_) => {
                    error_message.set(String::new());
                    on_close.call(());
                }
                Err(e) if e.is_cancelled() => {}
                Err(e) => error_message.set(e.to_string()),
            }
        });
    };

    rsx! {
        h1 { "Welcome back" }
        form {
            class: "flex-center",
            onsubmit: onsubmit,
            div {
                class: "input-wrapper flex-right",
                input {
                    r#type: "text",
                    placeholder: "{user.first_name}",
                    required: true,
                    value: "{first_name}",
                    oninput: move |e| first_name.set(e.value()),
                }
                button { class: "edit-button", r#type: "submit", "Save" }
            }
            div {
                class: "input-wrapper flex-left",
                input {
                    r#type: "text",
                    placeholder: "{user.last_name}",
                    required: true,
                    value: "{last_name}",
                    oninput: move |e| last_name.set(e.value()),
                }
                button {
                    class: "edit-button",
                    r#type: "button",
                    onclick: move |_| on_close.call(()),
                    "Cancel"
                }
            }
        }
        div { class: "errorMessage", "{error_message}" }
    }
}

/// Full-page error with an HTTP-style code.
#[component]
pub fn ErrorNotice(code: u16, message: String) -> Element {
    rsx! {
        main {
            class: "main bg-dark error-page",
            h1 { "{code}" }
            p { "{message}" }
        }
    }
}
