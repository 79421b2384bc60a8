use chrono::Utc;
use dioxus::prelude::*;
use store::models::{PageSummary, TrashItem, TrashItemType};

use super::{ConfirmDialog, RequireAuth, Spinner};
use crate::collection::{Collection, Confirmation};
use crate::time::relative_time;
use crate::{use_auth, use_session};

/// Days an item stays in the trash before the server purges it.
pub const RETENTION_DAYS: u32 = 30;

/// Items whose title contains `query` (case-insensitive) and, when given,
/// whose type matches.
pub fn filter_trash<'a>(items: &'a [TrashItem], query: &str, kind: Option<TrashItemType>) -> Vec<&'a TrashItem> {
    let needle = query.trim().to_lowercase();
    items
        .iter()
        .filter(|i| kind.is_none_or(|k| i.item_type == k))
        .filter(|i| needle.is_empty() || i.title.to_lowercase().contains(&needle))
        .collect()
}

#[component]
pub fn TrashView(on_login: EventHandler<()>) -> Element {
    let session = use_session();
    let auth = use_auth();
    let pages = try_use_context::<Signal<Vec<PageSummary>>>();
    let mut items = use_signal(Collection::<TrashItem>::default);
    let mut query = use_signal(String::new);
    let mut kind = use_signal(|| Option::<TrashItemType>::None);
    let mut confirm = use_signal(Confirmation::<TrashItem>::default);

    let _loader = use_resource({
        let session = session.clone();
        move || {
            let signed_in = auth().user.is_some();
            let client = session.client();
            async move {
                if !signed_in {
                    return;
                }
                match client.list_trash().await {
                    Ok(list) => items.write().replace(list),
                    Err(e) => {
                        tracing::error!("Failed to fetch trash: {}", e);
                        items.write().fetch_failed();
                    }
                }
            }
        }
    });

    let restore = use_callback({
        let session = session.clone();
        move |item: TrashItem| {
            let client = session.client();
            spawn(async move {
                if let Err(e) = client.restore_item(&item.id, item.item_type).await {
                    tracing::error!("Failed to restore {} {}: {}", item.item_type.as_str(), item.id, e);
                    return;
                }
                items.write().remove(&item.id);
                tracing::info!("Restored {} {}", item.item_type.as_str(), item.id);

                // Put a restored page back into the sidebar.
                if let (TrashItemType::Page, Some(mut pages)) = (item.item_type, pages) {
                    match client.get_page(&item.id).await {
                        Ok(page) => pages.write().insert(0, PageSummary::from(&page)),
                        Err(e) => tracing::warn!("Restored page {} not reloaded: {}", item.id, e),
                    }
                }
            });
        }
    });

    let delete = move |_| {
        let Some(item) = confirm.write().confirm() else {
            return;
        };
        let client = session.client();
        spawn(async move {
            match client.delete_permanently(&item.id, item.item_type).await {
                Ok(()) => {
                    items.write().remove(&item.id);
                }
                Err(e) => tracing::error!("Failed to delete {} {}: {}", item.item_type.as_str(), item.id, e),
            }
        });
    };

    let list = items.read();
    let loading = list.is_loading();
    let visible: Vec<TrashItem> = filter_trash(list.items(), &query(), kind()).into_iter().cloned().collect();
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
                    h1 { class: "text-3xl font-bold mb-2", "Trash" }
                    p {
                        class: "text-gray-500 mb-6",
                        "Items in trash will be permanently deleted after {RETENTION_DAYS} days"
                    }

                    div {
                        class: "flex gap-4 mb-6",
                        input {
                            r#type: "text",
                            class: "form-input flex-1",
                            placeholder: "Search in trash...",
                            value: "{query}",
                            oninput: move |evt| query.set(evt.value()),
                        }
                        select {
                            class: "form-input",
                            onchange: move |evt: FormEvent| {
                                kind.set(match evt.value().as_str() {
                                    "project" => Some(TrashItemType::Project),
                                    "page" => Some(TrashItemType::Page),
                                    _ => None,
                                });
                            },
                            option { value: "all", selected: kind().is_none(), "All items" }
                            option { value: "project", selected: kind() == Some(TrashItemType::Project), "Projects" }
                            option { value: "page", selected: kind() == Some(TrashItemType::Page), "Pages" }
                        }
                    }

                    if visible.is_empty() {
                        div {
                            class: "text-center py-12",
                            div { class: "text-6xl mb-4", "\u{1F5D1}\u{FE0F}" }
                            p { class: "text-gray-500",
                                if query().trim().is_empty() { "Trash is empty" } else { "No items found" }
                            }
                        }
                    }

                    div {
                        class: "space-y-2",
                        for item in visible {
                            div {
                                key: "{item.id}",
                                class: "trash-row group flex items-center gap-4 p-4 rounded-lg",
                                div {
                                    class: "text-2xl",
                                    if item.item_type == TrashItemType::Project { "\u{1F4C1}" } else { "\u{1F4C4}" }
                                }
                                div {
                                    class: "flex-1 min-w-0",
                                    h3 { class: "font-medium truncate", "{item.title}" }
                                    div {
                                        class: "flex items-center gap-2 text-sm text-gray-500",
                                        span { class: "capitalize", "{item.item_type.as_str()}" }
                                        span { "\u{2022}" }
                                        span { "Deleted {relative_time(item.deleted_at, now)}" }
                                        if let Some(by) = &item.deleted_by {
                                            span { "\u{2022}" }
                                            span { "by {by.name}" }
                                        }
                                    }
                                }
                                div {
                                    class: "flex items-center gap-2 opacity-0 group-hover:opacity-100",
                                    button {
                                        class: "btn secondary",
                                        onclick: {
                                            let item = item.clone();
                                            move |_| restore.call(item.clone())
                                        },
                                        "Restore"
                                    }
                                    button {
                                        class: "btn danger",
                                        onclick: {
                                            let item = item.clone();
                                            move |_| confirm.write().request(item.clone())
                                        },
                                        "Delete forever"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        if let Some(item) = confirm.read().pending() {
            ConfirmDialog {
                message: format!("Permanently delete \"{}\"? This action cannot be undone.", item.title),
                confirm_label: "Delete forever",
                on_confirm: delete,
                on_cancel: move |_| confirm.write().cancel(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, title: &str, item_type: TrashItemType) -> TrashItem {
        TrashItem {
            id: id.into(),
            title: title.into(),
            item_type,
            deleted_at: Utc::now(),
            deleted_by: None,
        }
    }

    #[test]
    fn test_search_and_type_filter_combine() {
        let items = vec![
            item("1", "Roadmap", TrashItemType::Project),
            item("2", "Road trip notes", TrashItemType::Page),
            item("3", "Budget", TrashItemType::Page),
        ];
        let ids = |q: &str, k| -> Vec<&str> { filter_trash(&items, q, k).iter().map(|i| i.id.as_str()).collect() };

        assert_eq!(ids("", None), vec!["1", "2", "3"]);
        assert_eq!(ids("ROAD", None), vec!["1", "2"]);
        assert_eq!(ids("road", Some(TrashItemType::Page)), vec!["2"]);
        assert_eq!(ids("", Some(TrashItemType::Project)), vec!["1"]);
        assert!(ids("nothing", None).is_empty());
    }
}
