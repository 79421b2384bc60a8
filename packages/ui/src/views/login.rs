use dioxus::prelude::*;

use crate::{sync_auth, use_auth, use_session};

/// Email/password sign-in form.
#[component]
pub fn LoginView(
    /// Called after a successful sign-in.
    on_success: EventHandler<()>,
    on_register: EventHandler<()>,
) -> Element {
    let session = use_session();
    let auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);
        submitting.set(true);
        let session = session.clone();
        spawn(async move {
            let result = session.login(&email(), &password()).await;
            sync_auth(&session, auth);
            submitting.set(false);
            match result {
                Ok(user) => {
                    tracing::info!("Signed in as {}", user.email);
                    on_success.call(());
                }
                Err(e) => {
                    tracing::warn!("Sign-in failed: {}", e);
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
                    h1 { class: "text-3xl font-bold mb-2", "Welcome back" }
                    p { class: "text-gray-500", "Sign in to your Flux workspace" }
                }

                form {
                    class: "space-y-4",
                    onsubmit: submit,
                    if let Some(message) = error() {
                        div { class: "form-error", "{message}" }
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
                            placeholder: "\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}",
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn primary w-full",
                        disabled: submitting(),
                        if submitting() { "Signing in..." } else { "Sign in" }
                    }
                }

                p {
                    class: "text-center mt-6 text-sm text-gray-500",
                    "Don't have an account? "
                    button { class: "link", onclick: move |_| on_register.call(()), "Sign up" }
                }
            }
        }
    }
}
