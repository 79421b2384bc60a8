use chrono::Utc;
use dioxus::prelude::*;
use store::models::Notification;

use super::{RequireAuth, Spinner};
use crate::collection::Collection;
use crate::time::relative_time;
use crate::{use_auth, use_session};

/// Notification list with an all/unread switch.
#[component]
pub fn InboxView(on_login: EventHandler<()>) -> Element {
    let session = use_session();
    let auth = use_auth();
    let mut notifications = use_signal(Collection::<Notification>::default);
    let mut unread_only = use_signal(|| false);

    let _loader = use_resource({
        let session = session.clone();
        move || {
            let signed_in = auth().user.is_some();
            let unread = unread_only();
            let client = session.client();
            async move {
                if !signed_in {
                    return;
                }
                match client.list_notifications(unread).await {
                    Ok(items) => notifications.write().replace(items),
                    Err(e) => {
                        tracing::error!("Failed to fetch notifications: {}", e);
                        notifications.write().fetch_failed();
                    }
                }
            }
        }
    });

    let mark_read = use_callback({
        let session = session.clone();
        move |id: String| {
            let client = session.client();
            spawn(async move {
                match client.mark_notification_read(&id).await {
                    Ok(()) => {
                        notifications.write().update_where(|n| n.id == id, |n| n.read = true);
                    }
                    Err(e) => tracing::error!("Failed to mark notification {} read: {}", id, e),
                }
            });
        }
    });

    let mark_all_read = {
        let session = session.clone();
        move |_| {
            let client = session.client();
            spawn(async move {
                match client.mark_all_notifications_read().await {
                    Ok(()) => {
                        notifications.write().update_where(|_| true, |n| n.read = true);
                    }
                    Err(e) => tracing::error!("Failed to mark notifications read: {}", e),
                }
            });
        }
    };

    let delete = use_callback(move |id: String| {
        let client = session.client();
        spawn(async move {
            match client.delete_notification(&id).await {
                Ok(()) => {
                    notifications.write().remove(&id);
                }
                Err(e) => tracing::error!("Failed to delete notification {}: {}", id, e),
            }
        });
    });

    let list = notifications.read();
    let loading = list.is_loading();
    // The server already filters in unread mode; marking read keeps the row
    // visible until the next load.
    let items = list.items().to_vec();
    let unread_count = items.iter().filter(|n| !n.read).count();
    drop(list);
    let now = Utc::now();

    rsx! {
        RequireAuth {
            on_login,
            if loading {
                Spinner {}
            } else {
                div {
                    class: "max-w-4xl mx-auto p-8",
                    div {
                        class: "flex items-center justify-between mb-6",
                        h1 { class: "text-3xl font-bold", "Inbox" }
                        if unread_count > 0 {
                            button {
                                class: "btn secondary",
                                onclick: mark_all_read,
                                "Mark all as read"
                            }
                        }
                    }

                    div {
                        class: "tabs flex gap-2 mb-6 border-b",
                        button {
                            class: if !unread_only() { "tab active" } else { "tab" },
                            onclick: move |_| unread_only.set(false),
                            "All"
                        }
                        button {
                            class: if unread_only() { "tab active" } else { "tab" },
                            onclick: move |_| unread_only.set(true),
                            "Unread"
                            if unread_count > 0 {
                                span { class: "badge blue ml-2", "{unread_count}" }
                            }
                        }
                    }

                    if items.is_empty() {
                        div {
                            class: "text-center py-12",
                            div { class: "text-6xl mb-4", "\u{1F4EC}" }
                            p { class: "text-gray-500",
                                if unread_only() { "No unread notifications" } else { "No notifications yet" }
                            }
                        }
                    }

                    div {
                        class: "space-y-2",
                        for n in items {
                            div {
                                key: "{n.id}",
                                class: if n.read { "notification group p-4 rounded-lg" } else { "notification unread group p-4 rounded-lg" },
                                div {
                                    class: "flex items-start gap-4",
                                    div { class: "text-2xl", "{n.kind.glyph()}" }
                                    div {
                                        class: "flex-1 min-w-0",
                                        div {
                                            class: "flex items-start justify-between gap-2",
                                            h3 {
                                                class: if n.read { "font-medium" } else { "font-semibold" },
                                                "{n.title}"
                                            }
                                            span { class: "text-xs text-gray-500 whitespace-nowrap", "{relative_time(n.created_at, now)}" }
                                        }
                                        p { class: "text-sm text-gray-600 mt-1", "{n.message}" }
                                    }
                                    div {
                                        class: "flex items-center gap-1 opacity-0 group-hover:opacity-100",
                                        if !n.read {
                                            button {
                                                class: "p-2 rounded",
                                                title: "Mark as read",
                                                onclick: {
                                                    let id = n.id.clone();
                                                    move |_| mark_read.call(id.clone())
                                                },
                                                "\u{2713}"
                                            }
                                        }
                                        button {
                                            class: "p-2 rounded",
                                            title: "Delete",
                                            onclick: {
                                                let id = n.id.clone();
                                                move |_| delete.call(id.clone())
                                            },
                                            "\u{1F5D1}\u{FE0F}"
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
