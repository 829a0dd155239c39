//! Sign-in form: username, password and "remember me".

use api::SignInForm;
use dioxus::prelude::*;

use crate::auth::{use_flows, use_view_cancellation};

/// The sign-in card.
///
/// `on_signed_in` fires once the session has been stored; the caller decides
/// where to navigate.
#[component]
pub fn SignIn(on_signed_in: EventHandler<()>) -> Element {
    let flows = use_flows();
    let cancel = use_view_cancellation();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut remember_me = use_signal(|| false);
    let mut error_message = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        // Claimed before spawning so a second click cannot slip in
        if !claim(&mut submitting.write()) {
            return;
        }
        let flows = flows.clone();
        let cancel = cancel.clone();
        let form = SignInForm::new(email(), password(), remember_me());
        spawn(async move {
            match flows.sign_in(&form, &cancel).await {
                Ok(_) => {
                    error_message.set(String::new());
                    submitting.set(false);
                    on_signed_in.call(());
                }
                Err(e) if e.is_cancelled() => {}
                Err(e) => {
                    error_message.set(e.to_string());
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        main {
            class: "main bg-dark",
            section {
                class: "sign-in-content",
                i { class: "fa fa-user-circle sign-in-icon" }
                h1 { "Sign In" }
                form {
                    onsubmit: onsubmit,
                    div {
                        class: "input-wrapper",
                        label { r#for: "username", "Username" }
                        input {
                            r#type: "text",
                            id: "username",
                            autocomplete: "username",
                            required: true,
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                    }
                    div {
                        class: "input-wrapper",
                        label { r#for: "password", "Password" }
                        input {
                            r#type: "password",
                            id: "password",
                            autocomplete: "current-password",
                            required: true,
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                        }
                    }
                    div {
                        class: "input-remember",
                        input {
                            r#type: "checkbox",
                            id: "remember-me",
                            checked: remember_me(),
                            onchange: move |_| remember_me.set(!remember_me()),
                        }
                        label { r#for: "remember-me", "Remember me" }
                    }
                    button {
                        r#type: "submit",
                        class: "sign-in-button",
                        disabled: submitting(),
                        if submitting() { "Signing in..." } else { "Sign In" }
                    }
                    div { class: "errorMessage", "{error_message}" }
                }
            }
        }
    }
}

/// Set `flag` if it was clear. Returns whether this call set it.
fn claim(flag: &mut bool) -> bool {
    !std::mem::replace(flag, true)
}
