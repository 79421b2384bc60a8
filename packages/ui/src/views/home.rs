use chrono::{Local, Timelike};
use dioxus::prelude::*;
use store::{PageSummary, PageTemplate};

use super::sidebar_layout::{create_from_template, use_page_list};
use super::Spinner;
use crate::{use_auth, use_session};

/// Number of cards in the "Recently visited" row.
const RECENT_COUNT: usize = 4;

/// Salutation for a local hour of the day.
pub fn greeting(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    }
}

/// The `limit` most recently updated pages, newest first. Pages without a
/// timestamp sort last.
pub fn recent_pages(pages: &[PageSummary], limit: usize) -> Vec<PageSummary> {
    let mut sorted = pages.to_vec();
    sorted.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    sorted.truncate(limit);
    sorted
}

/// Landing screen. Signed-out visitors get a welcome with sign-in links;
/// signed-in users get the dashboard.
#[component]
pub fn HomeView(
    on_open_page: EventHandler<String>,
    on_open_database: EventHandler<()>,
    on_login: EventHandler<()>,
    on_register: EventHandler<()>,
) -> Element {
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
                    class: "text-center max-w-md p-8",
                    h1 { class: "text-4xl font-bold mb-4", "Welcome to Flux" }
                    p { class: "text-gray-500 mb-8", "A powerful workspace for your projects and tasks" }
                    div {
                        class: "flex gap-4 justify-center",
                        button { class: "btn primary", onclick: move |_| on_login.call(()), "Sign In" }
                        button { class: "btn secondary", onclick: move |_| on_register.call(()), "Sign Up" }
                    }
                }
            }
        };
    }

    rsx! {
        Dashboard { on_open_page, on_open_database }
    }
}

#[component]
fn Dashboard(on_open_page: EventHandler<String>, on_open_database: EventHandler<()>) -> Element {
    let session = use_session();
    let pages = use_page_list();
    let mut show_new_menu = use_signal(|| false);

    let new_page = move |_| {
        show_new_menu.set(false);
        let client = session.client();
        spawn(async move {
            match create_from_template(&client, pages, PageTemplate::Empty).await {
                Ok(id) => on_open_page.call(id),
                Err(e) => tracing::error!("Failed to create page: {}", e),
            }
        });
    };

    let hello = greeting(Local::now().hour());
    let recent = recent_pages(&pages.read(), RECENT_COUNT);

    rsx! {
        div {
            class: "max-w-5xl mx-auto pt-20 px-12 relative",

            div {
                class: "absolute top-4 right-4",
                button {
                    class: "btn primary flex items-center gap-2",
                    onclick: move |_| show_new_menu.set(!show_new_menu()),
                    "+ New \u{25BE}"
                }
                if show_new_menu() {
                    div { class: "fixed inset-0 z-10", onclick: move |_| show_new_menu.set(false) }
                    div {
                        class: "menu absolute right-0 mt-2 w-64 rounded-xl z-20 p-2",
                        button {
                            class: "menu-item",
                            onclick: new_page,
                            div { class: "font-medium text-sm", "New Page" }
                            div { class: "text-xs text-gray-500", "Create a blank page" }
                        }
                        button {
                            class: "menu-item",
                            onclick: move |_| {
                                show_new_menu.set(false);
                                on_open_database.call(());
                            },
                            div { class: "font-medium text-sm", "New Database" }
                            div { class: "text-xs text-gray-500", "Create a table, board, or list" }
                        }
                    }
                }
            }

            h1 { class: "text-3xl font-bold mb-8 text-center", "{hello}" }

            section {
                class: "mb-12",
                div {
                    class: "flex items-center gap-2 text-sm text-gray-500 mb-4",
                    span { "\u{1F552}" }
                    span { class: "font-medium", "Recently visited" }
                }
                if recent.is_empty() {
                    p { class: "text-sm text-gray-500", "No pages yet" }
                }
                div {
                    class: "grid grid-cols-1 sm:grid-cols-2 md:grid-cols-4 gap-4",
                    for page in recent {
                        div {
                            key: "{page.id}",
                            class: "page-card flex flex-col h-32 p-4 rounded-xl cursor-pointer",
                            onclick: {
                                let id = page.id.clone();
                                move |_| on_open_page.call(id.clone())
                            },
                            div {
                                class: "mb-auto text-3xl",
                                {page.icon.clone().unwrap_or_else(|| "\u{1F4C4}".to_string())}
                            }
                            div {
                                class: "font-medium truncate",
                                if page.title.is_empty() { "Untitled" } else { "{page.title}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn summary(id: &str, day: Option<u32>) -> PageSummary {
        PageSummary {
            id: id.into(),
            title: id.into(),
            icon: None,
            updated_at: day.map(|d| Utc.with_ymd_and_hms(2024, 5, d, 9, 0, 0).unwrap()),
        }
    }

    #[test]
    fn test_greeting_by_hour() {
        assert_eq!(greeting(0), "Good morning");
        assert_eq!(greeting(11), "Good morning");
        assert_eq!(greeting(12), "Good afternoon");
        assert_eq!(greeting(17), "Good afternoon");
        assert_eq!(greeting(18), "Good evening");
        assert_eq!(greeting(23), "Good evening");
    }

    #[test]
    fn test_recent_pages_newest_first() {
        let pages = vec![
            summary("old", Some(1)),
            summary("undated", None),
            summary("newest", Some(20)),
            summary("mid", Some(10)),
            summary("early", Some(3)),
        ];
        let ids: Vec<String> = recent_pages(&pages, RECENT_COUNT).into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["newest", "mid", "early", "old"]);
    }
}
