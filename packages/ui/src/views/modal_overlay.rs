use dioxus::prelude::*;

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(
    on_close: EventHandler<()>,
    #[props(default = "max-w-md".to_string())] width: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 flex items-center justify-center bg-black/50",
            style: "z-index: 2000",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card rounded-xl shadow-lg {width} w-full mx-4",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Yes/no prompt shown before a destructive request.
#[component]
pub fn ConfirmDialog(
    message: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            div {
                class: "p-6",
                p { class: "mb-6", "{message}" }
                div {
                    class: "flex justify-end gap-2",
                    button {
                        class: "btn secondary",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn danger",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
