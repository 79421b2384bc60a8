use dioxus::prelude::*;

use crate::{sync_auth, use_auth, use_session};

/// Shortest password the form accepts.
const MIN_PASSWORD_LEN: usize = 6;

#[component]
pub fn RegisterView(on_success: EventHandler<()>, on_login: EventHandler<()>) -> Element {
    let session = use_session();
    let auth = use_auth();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if password().chars().count() < MIN_PASSWORD_LEN {
            error.set(Some(format!("Password must be at least {MIN_PASSWORD_LEN} characters")));
            return;
        }
        error.set(None);
        submitting.set(true);
        let session = session.clone();
        spawn(async move {
            let result = session.register(&name(), &email(), &password()).await;
            sync_auth(&session, auth);
            submitting.set(false);
            match result {
                Ok(user) => {
                    tracing::info!("Registered {}", user.email);
                    on_success.call(());
                }
                Err(e) => {
                    tracing::warn!("Registration failed: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page min-h-screen flex items-center justify-center px-4",
            div {
                class: "w-full max-w-md",
                div {
                    class: "text-center mb-8",
                    div { class: "auth-logo mx-auto mb-4", "F" }
                    h1 { class: "text-3xl font-bold mb-2", "Join Flux" }
                    p { class: "text-gray-500", "Create your workspace account" }
                }

                form {
                    class: "space-y-4",
                    onsubmit: submit,
                    if let Some(message) = error() {
                        div { class: "form-error", "{message}" }
                    }
                    div {
                        label { class: "block text-sm font-medium mb-2", "Name" }
                        input {
                            r#type: "text",
                            class: "form-input w-full",
                            required: true,
                            placeholder: "Your name",
                            value: "{name}",
                            oninput: move |evt| name.set(evt.value()),
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium mb-2", "Email" }
                        input {
                            r#type: "email",
                            class: "form-input w-full",
                            required: true,
                            placeholder: "you@example.com",
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium mb-2", "Password" }
                        input {
                            r#type: "password",
                            class: "form-input w-full",
                            required: true,
                            minlength: "{MIN_PASSWORD_LEN}",
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                        p { class: "text-xs text-gray-500 mt-1", "At least {MIN_PASSWORD_LEN} characters" }
                    }
                    button {
                        r#type: "submit",
                        class: "btn primary w-full",
                        disabled: submitting(),
                        if submitting() { "Creating account..." } else { "Create account" }
                    }
                }

                p {
                    class: "text-center mt-6 text-sm text-gray-500",
                    "Already have an account? "
                    button { class: "link", onclick: move |_| on_login.call(()), "Sign in" }
                }
            }
        }
    }
}
