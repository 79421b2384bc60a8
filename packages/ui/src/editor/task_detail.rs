use dioxus::prelude::*;
use store::{Block, BlockKind, BlockUpdate, TaskStatus};

use crate::time::{date_input_value, parse_date_input};

/// Side panel editing one todo block's name, due date, and status.
#[component]
pub fn TaskDetail(
    block: Block,
    on_update: EventHandler<BlockUpdate>,
    on_close: EventHandler<()>,
) -> Element {
    let BlockKind::Todo {
        content,
        status,
        due_date,
        ..
    } = block.kind
    else {
        return rsx! {};
    };

    rsx! {
        aside {
            class: "task-detail w-96 border-l flex flex-col h-full",
            div {
                class: "p-4 border-b flex items-center justify-between",
                span { class: "text-xs font-medium truncate", "Task" }
                button {
                    class: "p-1 rounded text-gray-500",
                    title: "Close",
                    onclick: move |_| on_close.call(()),
                    "\u{2715}"
                }
            }

            div {
                class: "flex-1 overflow-y-auto p-6 space-y-6",
                input {
                    class: "text-3xl font-bold w-full bg-transparent outline-none",
                    value: "{content}",
                    placeholder: "Task name",
                    oninput: move |evt| on_update.call(BlockUpdate::content(evt.value())),
                }

                div {
                    class: "task-property flex items-center gap-8",
                    span { class: "text-sm text-gray-500 w-24", "Due date" }
                    input {
                        r#type: "date",
                        value: "{date_input_value(due_date)}",
                        onchange: move |evt| {
                            on_update.call(BlockUpdate::due_date(parse_date_input(&evt.value())));
                        },
                    }
                }

                div {
                    class: "task-property flex items-center gap-8",
                    span { class: "text-sm text-gray-500 w-24", "Status" }
                    select {
                        value: "{status.as_str()}",
                        onchange: move |evt| {
                            if let Some(status) = TaskStatus::parse(&evt.value()) {
                                on_update.call(BlockUpdate::status(status));
                            }
                        },
                        for option in TaskStatus::ALL {
                            option {
                                value: "{option.as_str()}",
                                selected: option == status,
                                "{option.as_str()}"
                            }
                        }
                    }
                }
            }
        }
    }
}
