use dioxus::prelude::*;
use store::{Block, BlockKind, BlockUpdate, TaskStatus};

use crate::time::date_input_value;

/// One block of the page editor with its drag handle.
#[component]
pub fn BlockRow(
    block: Block,
    #[props(default)] selected: bool,
    #[props(default)] dragging: bool,
    #[props(default)] drop_target: bool,
    on_update: EventHandler<BlockUpdate>,
    on_toggle: EventHandler<()>,
    on_select: EventHandler<()>,
    on_remove: EventHandler<()>,
    on_grab: EventHandler<()>,
    on_handle_key: EventHandler<KeyboardEvent>,
    on_mounted: EventHandler<MountedEvent>,
) -> Element {
    let mut row_class = String::from("block-row group flex items-start gap-1 -ml-8 pl-8 relative");
    if selected {
        row_class.push_str(" selected");
    }
    if dragging {
        row_class.push_str(" dragging");
    }
    if drop_target {
        row_class.push_str(" drop-target");
    }

    let oninput = move |evt: FormEvent| on_update.call(BlockUpdate::content(evt.value()));

    rsx! {
        div {
            class: "{row_class}",
            onmounted: move |evt| on_mounted.call(evt),

            div {
                class: "block-handle absolute left-0 top-1 p-1 cursor-grab",
                tabindex: 0,
                role: "button",
                aria_label: "Drag to reorder",
                onmousedown: move |evt: MouseEvent| {
                    evt.prevent_default();
                    on_grab.call(());
                },
                onkeydown: move |evt| on_handle_key.call(evt),
                "\u{2807}"
            }

            div {
                class: "flex-1",
                match block.kind.clone() {
                    BlockKind::Heading1 { content } => rsx! {
                        input { class: "block-input text-3xl font-bold", value: "{content}", placeholder: "Heading 1", oninput }
                    },
                    BlockKind::Heading2 { content } => rsx! {
                        input { class: "block-input text-2xl font-semibold", value: "{content}", placeholder: "Heading 2", oninput }
                    },
                    BlockKind::Heading3 { content } => rsx! {
                        input { class: "block-input text-xl font-semibold", value: "{content}", placeholder: "Heading 3", oninput }
                    },
                    BlockKind::Paragraph { content } => rsx! {
                        input { class: "block-input", value: "{content}", placeholder: "Type something", oninput }
                    },
                    BlockKind::Todo { content, checked, status, due_date } => rsx! {
                        div {
                            class: "todo-row flex items-center gap-2 py-1 px-2 rounded cursor-pointer",
                            onclick: move |_| on_select.call(()),
                            div {
                                class: if checked { "todo-check checked" } else { "todo-check" },
                                role: "checkbox",
                                aria_checked: "{checked}",
                                onclick: move |evt: MouseEvent| {
                                    evt.stop_propagation();
                                    on_toggle.call(());
                                },
                                if checked { "\u{2713}" }
                            }
                            input {
                                class: if checked { "block-input line-through text-gray-400" } else { "block-input" },
                                value: "{content}",
                                placeholder: "New task",
                                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                                oninput,
                            }
                            div {
                                class: "todo-meta flex items-center gap-4 text-xs text-gray-400",
                                if due_date.is_some() {
                                    span { "\u{1F4C5} {date_input_value(due_date)}" }
                                }
                                span { class: status_class(status), "{status.as_str()}" }
                            }
                        }
                    },
                    BlockKind::Other { tag, .. } => rsx! {
                        input {
                            class: "block-input",
                            title: tag.unwrap_or_default(),
                            value: "{block.content()}",
                            oninput,
                        }
                    },
                }
            }

            button {
                class: "block-remove opacity-0 group-hover:opacity-100 text-gray-400",
                title: "Delete block",
                onclick: move |_| on_remove.call(()),
                "\u{2715}"
            }
        }
    }
}

fn status_class(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Done => "status-dot done",
        TaskStatus::InProgress => "status-dot in-progress",
        TaskStatus::NotStarted => "status-dot",
    }
}
