use dioxus::prelude::*;
use store::models::{ProjectStatus, SearchResults};

use crate::search::{is_searchable, sleep, Debounce};
use crate::{use_config, use_session};

/// A search result the user picked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchHit {
    Page(String),
    Project(String),
    Task(String),
}

/// Global search over pages, projects, and tasks.
///
/// Requests are debounced: each keystroke restarts the timer and only the
/// last one sends `GET /api/search`.
#[component]
pub fn SearchModal(on_close: EventHandler<()>, on_open: EventHandler<SearchHit>) -> Element {
    let session = use_session();
    let config = use_config();
    let mut query = use_signal(String::new);
    let mut results = use_signal(SearchResults::default);
    let mut loading = use_signal(|| false);
    let mut debounce = use_signal(|| Debounce::from_millis(u64::from(config.search.debounce_ms)));

    let oninput = move |evt: FormEvent| {
        let q = evt.value();
        query.set(q.clone());
        if !is_searchable(&q) {
            debounce.write().cancel();
            results.set(SearchResults::default());
            loading.set(false);
            return;
        }

        let ticket = debounce.write().schedule();
        let delay = debounce.peek().delay();
        let client = session.client();
        spawn(async move {
            sleep(delay).await;
            if !debounce.peek().is_current(ticket) || client.token().is_none() {
                return;
            }
            loading.set(true);
            match client.search(&q).await {
                Ok(found) => results.set(found),
                Err(e) => tracing::error!("Search failed: {}", e),
            }
            loading.set(false);
        });
    };

    let open = move |hit: SearchHit| {
        on_close.call(());
        on_open.call(hit);
    };

    let found = results();
    let q = query();

    rsx! {
        div {
            class: "fixed inset-0 bg-black/50 flex items-start justify-center pt-20",
            style: "z-index: 2000",
            onclick: move |_| on_close.call(()),
            div {
                class: "search-modal rounded-xl w-full max-w-2xl shadow-2xl overflow-hidden",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),

                div {
                    class: "flex items-center gap-3 p-4 border-b",
                    span { class: "text-gray-400", "\u{1F50D}" }
                    input {
                        class: "flex-1 bg-transparent outline-none text-lg",
                        r#type: "text",
                        autofocus: true,
                        placeholder: "Search pages, projects, and tasks...",
                        value: "{q}",
                        oninput,
                        onkeydown: move |evt: KeyboardEvent| {
                            if evt.key() == Key::Escape {
                                on_close.call(());
                            }
                        },
                    }
                    if loading() {
                        div { class: "spinner small" }
                    }
                    button {
                        class: "p-1 rounded",
                        onclick: move |_| on_close.call(()),
                        "\u{2715}"
                    }
                }

                div {
                    class: "max-h-96 overflow-y-auto p-2",
                    if !is_searchable(&q) {
                        div {
                            class: "text-center py-12 text-gray-500",
                            p { "Start typing to search..." }
                        }
                    } else if found.is_empty() && !loading() {
                        div {
                            class: "text-center py-12 text-gray-500",
                            p { "No results found for \"{q}\"" }
                        }
                    } else {
                        if !found.pages.is_empty() {
                            div {
                                class: "mb-4",
                                h3 { class: "search-group", "Pages" }
                                for page in found.pages.clone() {
                                    div {
                                        key: "{page.id}",
                                        class: "search-hit",
                                        onclick: {
                                            let id = page.id.clone();
                                            move |_| open(SearchHit::Page(id.clone()))
                                        },
                                        span { class: "text-gray-400", "\u{1F4C4}" }
                                        div {
                                            class: "flex-1 min-w-0",
                                            p { class: "font-medium truncate", if page.title.is_empty() { "Untitled" } else { "{page.title}" } }
                                            p { class: "text-xs text-gray-500", "Page" }
                                        }
                                    }
                                }
                            }
                        }
                        if !found.projects.is_empty() {
                            div {
                                class: "mb-4",
                                h3 { class: "search-group", "Projects" }
                                for project in found.projects.clone() {
                                    div {
                                        key: "{project.id}",
                                        class: "search-hit",
                                        onclick: {
                                            let id = project.id.clone();
                                            move |_| open(SearchHit::Project(id.clone()))
                                        },
                                        span { class: "text-gray-400", "\u{1F4C1}" }
                                        div {
                                            class: "flex-1 min-w-0",
                                            p { class: "font-medium truncate", "{project.title}" }
                                            p { class: "text-xs text-gray-500", if project.description.is_empty() { "Project" } else { "{project.description}" } }
                                        }
                                        span {
                                            class: if project.status == ProjectStatus::Active { "badge green" } else { "badge" },
                                            "{project.status.as_str()}"
                                        }
                                    }
                                }
                            }
                        }
                        if !found.tasks.is_empty() {
                            div {
                                class: "mb-4",
                                h3 { class: "search-group", "Tasks" }
                                for task in found.tasks.clone() {
                                    div {
                                        key: "{task.id}",
                                        class: "search-hit",
                                        onclick: {
                                            let id = task.id.clone();
                                            move |_| open(SearchHit::Task(id.clone()))
                                        },
                                        span { class: "text-gray-400", "\u{2611}\u{FE0F}" }
                                        div {
                                            class: "flex-1 min-w-0",
                                            p { class: "font-medium truncate", "{task.title}" }
                                            p { class: "text-xs text-gray-500", "{task.status.as_str()}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
