use dioxus::prelude::*;

use crate::use_auth;

/// Centered loading spinner.
#[component]
pub fn Spinner() -> Element {
    rsx! {
        div {
            class: "flex items-center justify-center h-full",
            div { class: "spinner" }
        }
    }
}

/// Renders `children` only for a signed-in user. While the session is still
/// being restored a spinner is shown; afterwards a sign-in prompt.
#[component]
pub fn RequireAuth(on_login: EventHandler<()>, children: Element) -> Element {
    let auth = use_auth();
    let state = auth();

    if state.loading {
        return rsx! { Spinner {} };
    }
    if state.user.is_none() {
        return rsx! {
            div {
                class: "flex items-center justify-center h-full",
                div {
                    class: "text-center",
                    h2 { class: "text-2xl font-bold mb-4", "Please sign in" }
                    button {
                        class: "link",
                        onclick: move |_| on_login.call(()),
                        "Go to login"
                    }
                }
            }
        };
    }

    rsx! {
        {children}
    }
}
