use dioxus::prelude::*;

use crate::filter::{FieldKind, FilterComposer};

/// Chips for the active filters plus an "Add filter" picker.
///
/// Edits go straight into `composer`; views read it to filter their records.
#[component]
pub fn AdvancedFilter(composer: Signal<FilterComposer>) -> Element {
    let mut composer = composer;
    let mut picker_open = use_signal(|| false);
    let mut search = use_signal(String::new);

    let current = composer.read().clone();
    let has_available = !current.available("").is_empty();
    let choices: Vec<(String, String)> = current
        .available(&search())
        .into_iter()
        .map(|f| (f.id.clone(), f.label.clone()))
        .collect();

    rsx! {
        div {
            class: "advanced-filter relative",
            div {
                class: "flex flex-wrap gap-2 mb-4",
                for (index, entry) in current.entries().iter().cloned().enumerate() {
                    if let Some(field) = current.field(&entry.field).cloned() {
                        div {
                            key: "{entry.field}",
                            class: "filter-chip flex items-center gap-2 rounded-lg px-3 py-2",
                            span { class: "text-sm font-medium", "{field.label}:" }
                            match field.kind {
                                FieldKind::Text => rsx! {
                                    input {
                                        r#type: "text",
                                        class: "bg-transparent outline-none text-sm w-32",
                                        placeholder: "Enter value...",
                                        value: "{entry.value}",
                                        oninput: move |evt| composer.write().set_value(index, evt.value()),
                                    }
                                },
                                FieldKind::Select(options) => rsx! {
                                    select {
                                        class: "bg-transparent outline-none text-sm",
                                        value: "{entry.value}",
                                        onchange: move |evt| composer.write().set_value(index, evt.value()),
                                        option { value: "", "Select..." }
                                        for opt in options {
                                            option {
                                                key: "{opt}",
                                                value: "{opt}",
                                                selected: opt == entry.value,
                                                "{opt}"
                                            }
                                        }
                                    }
                                },
                                FieldKind::Date => rsx! {
                                    input {
                                        r#type: "date",
                                        class: "bg-transparent outline-none text-sm",
                                        value: "{entry.value}",
                                        onchange: move |evt| composer.write().set_value(index, evt.value()),
                                    }
                                },
                            }
                            button {
                                class: "ml-2 p-1 rounded",
                                title: "Remove filter",
                                onclick: move |_| composer.write().remove(index),
                                "\u{2715}"
                            }
                        }
                    }
                }

                if has_available {
                    button {
                        class: "add-filter flex items-center gap-2 px-3 py-2 rounded-lg",
                        onclick: move |_| picker_open.set(!picker_open()),
                        "+ Add filter"
                    }
                }
            }

            if picker_open() {
                div {
                    class: "fixed inset-0 z-10",
                    onclick: move |_| picker_open.set(false),
                }
                div {
                    class: "filter-picker absolute top-full left-0 mt-2 w-80 rounded-xl shadow-xl z-20",
                    div {
                        class: "p-3 border-b",
                        input {
                            r#type: "text",
                            class: "w-full px-3 py-2 rounded-lg outline-none text-sm",
                            placeholder: "Filter by...",
                            autofocus: true,
                            value: "{search}",
                            oninput: move |evt| search.set(evt.value()),
                        }
                    }
                    div {
                        class: "max-h-64 overflow-y-auto",
                        for (id, label) in choices {
                            button {
                                key: "{id}",
                                class: "w-full flex items-center gap-3 px-4 py-2 text-left",
                                onclick: move |_| {
                                    if let Err(e) = composer.write().add(&id) {
                                        tracing::warn!("{}", e);
                                    }
                                    picker_open.set(false);
                                    search.set(String::new());
                                },
                                span { class: "text-sm", "{label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
