use std::collections::HashMap;
use std::rc::Rc;

use dioxus::prelude::*;
use store::{BlockId, BlockUpdate, PageSummary};

use super::block_row::BlockRow;
use super::document::{PageDocument, PendingSave};
use super::reorder::{Direction, DragAndDrop, DragInput, Point, Rect, SortableBlocks};
use super::task_detail::TaskDetail;
use crate::icons::FaTrashCan;
use crate::{use_auth, use_config, use_session, AuthState, Icon};

/// Backgrounds offered by "Add cover", in cycling order.
const COVER_PRESETS: [&str; 4] = [
    "linear-gradient(135deg, #f6d365 0%, #fda085 100%)",
    "linear-gradient(135deg, #a1c4fd 0%, #c2e9fb 100%)",
    "linear-gradient(135deg, #d4fc79 0%, #96e6a1 100%)",
    "linear-gradient(135deg, #e0c3fc 0%, #8ec5fc 100%)",
];

fn next_cover(current: Option<&str>) -> String {
    let position = current.and_then(|c| COVER_PRESETS.iter().position(|p| *p == c));
    let next = position.map(|i| (i + 1) % COVER_PRESETS.len()).unwrap_or(0);
    COVER_PRESETS[next].to_string()
}

/// Who a page fetch is made for, or `None` while the stored session is still
/// being restored. Changes exactly when the bearer token does.
fn fetch_viewer(auth: &AuthState) -> Option<Option<String>> {
    (!auth.loading).then(|| auth.user.as_ref().map(|u| u.id.clone()))
}

/// The page editor: header (cover, icon, title, share), the sortable block
/// list, and the task side panel.
#[component]
pub fn PageEditor(
    page_id: String,
    /// Called once the page has been moved to the trash.
    #[props(default)]
    on_trashed: EventHandler<()>,
) -> Element {
    // Track the id in a signal so the loader re-runs on route change
    let mut id_signal = use_signal(|| page_id.clone());
    if *id_signal.peek() != page_id {
        id_signal.set(page_id.clone());
    }

    let session = use_session();
    let config = use_config();
    let mut doc = use_signal(|| PageDocument::loading(page_id.clone()));
    let mut sortable = use_signal(SortableBlocks::default);
    let mut mounted = use_signal(HashMap::<BlockId, Rc<MountedData>>::new);
    let mut selected = use_signal(|| Option::<BlockId>::None);
    let mut show_share = use_signal(|| false);
    let mut share_url = use_signal(String::new);

    let auth = use_auth();
    let viewer = use_memo(move || fetch_viewer(&auth.read()));

    let _loader = use_resource({
        let session = session.clone();
        move || {
            let id = id_signal();
            let viewer = viewer();
            let client = session.client();
            async move {
                doc.set(PageDocument::loading(&id));
                selected.set(None);
                // Wait for bootstrap so the request carries the restored token
                if viewer.is_none() {
                    return;
                }
                doc.set(PageDocument::load(&id, &client).await);
            }
        }
    });

    // Keep the drag engine's order in step with the document
    use_effect(move || {
        let order: Vec<BlockId> = doc.read().blocks().iter().map(|b| b.id.clone()).collect();
        mounted.write().retain(|id, _| order.contains(id));
        sortable.write().set_order(order);
    });

    // Mirror title and icon edits into the sidebar's page list
    let page_list = try_use_context::<Signal<Vec<PageSummary>>>();
    use_effect(move || {
        let Some(mut pages) = page_list else {
            return;
        };
        let Some(summary) = doc.read().page().map(PageSummary::from) else {
            return;
        };
        let stale = pages
            .peek()
            .iter()
            .any(|p| p.id == summary.id && (p.title != summary.title || p.icon != summary.icon));
        if stale {
            if let Some(entry) = pages.write().iter_mut().find(|p| p.id == summary.id) {
                *entry = summary;
            }
        }
    });

    let trash_page = {
        let session = session.clone();
        move |_| {
            let id = id_signal();
            let client = session.client();
            spawn(async move {
                match client.trash_page(&id).await {
                    Ok(()) => {
                        tracing::info!("Moved page {} to trash", id);
                        if let Some(mut pages) = page_list {
                            pages.write().retain(|p| p.id != id);
                        }
                        on_trashed.call(());
                    }
                    Err(e) => tracing::error!("Failed to trash page {}: {}", id, e),
                }
            });
        }
    };

    let persist = use_callback(move |pending: Option<PendingSave>| {
        let Some(pending) = pending else {
            return;
        };
        let client = session.client();
        spawn(async move {
            pending.send(&client).await;
            doc.write().finish_save();
        });
    });

    let mut drop_block = move || {
        let outcome = sortable.write().commit_drop();
        let pending = outcome.apply(&mut doc.write());
        persist.call(pending);
    };

    let mut grab_with_pointer = move |id: BlockId| {
        sortable.write().begin_drag(id, DragInput::Pointer);
        spawn(async move {
            let elements: Vec<(BlockId, Rc<MountedData>)> = mounted
                .read()
                .iter()
                .map(|(id, el)| (id.clone(), el.clone()))
                .collect();
            for (id, el) in elements {
                if let Ok(r) = el.get_client_rect().await {
                    let rect = Rect::new(r.origin.x, r.origin.y, r.size.width, r.size.height);
                    sortable.write().set_rect(id, rect);
                }
            }
        });
    };

    let mut handle_key = move |id: BlockId, evt: KeyboardEvent| {
        let dragging = sortable.read().source() == Some(&id);
        match evt.key() {
            Key::Enter => {
                evt.prevent_default();
                if dragging {
                    drop_block();
                } else {
                    sortable.write().begin_drag(id, DragInput::Keyboard);
                }
            }
            Key::Character(c) if c == " " => {
                evt.prevent_default();
                if dragging {
                    drop_block();
                } else {
                    sortable.write().begin_drag(id, DragInput::Keyboard);
                }
            }
            Key::ArrowUp if dragging => {
                evt.prevent_default();
                sortable.write().step_target(Direction::Up);
            }
            Key::ArrowDown if dragging => {
                evt.prevent_default();
                sortable.write().step_target(Direction::Down);
            }
            Key::Escape if dragging => sortable.write().cancel_drop(),
            _ => {}
        }
    };

    let open_share = move |_| {
        let open = !show_share();
        show_share.set(open);
        if open {
            spawn(async move {
                let href = document::eval("return window.location.href;").join::<String>().await;
                match href {
                    Ok(href) => share_url.set(href),
                    Err(e) => tracing::warn!("Could not read page URL: {:?}", e),
                }
            });
        }
    };

    let copy_link = move |_| {
        let url = share_url();
        spawn(async move {
            let script = format!("navigator.clipboard.writeText({url:?});");
            if let Err(e) = document::eval(&script).await {
                tracing::warn!("Could not copy link: {:?}", e);
            }
        });
    };

    let current = doc.read();
    if current.is_loading() {
        return rsx! {
            div { class: "flex items-center justify-center h-full", div { class: "spinner" } }
        };
    }
    let Some(page) = current.page().cloned() else {
        return rsx! {
            div { class: "p-10 text-gray-500", "Page not found" }
        };
    };
    let saving = current.is_saving();
    drop(current);

    let drag = sortable.read();
    let source = drag.source().cloned();
    let target = drag.target().cloned();
    drop(drag);

    let selected_index = selected().and_then(|id| page.position(&id));
    let selected_block = selected_index.and_then(|i| page.content.get(i).cloned());
    let default_block = config.editor.default_block_type();

    rsx! {
        div {
            class: "flex h-full",
            div {
                class: "flex-1 overflow-y-auto",

                if let Some(cover) = page.cover_image.clone() {
                    div {
                        class: "page-cover group relative h-48 w-full",
                        style: "background: {cover}",
                        div {
                            class: "absolute bottom-2 right-12 flex gap-2 opacity-0 group-hover:opacity-100",
                            button {
                                class: "text-xs bg-white px-2 py-1 rounded",
                                onclick: move |_| {
                                    let next = next_cover(doc.read().page().and_then(|p| p.cover_image.as_deref()));
                                    let pending = doc.write().set_cover(Some(next));
                                    persist.call(pending);
                                },
                                "Change cover"
                            }
                            button {
                                class: "text-xs bg-white px-2 py-1 rounded",
                                onclick: move |_| {
                                    let pending = doc.write().set_cover(None);
                                    persist.call(pending);
                                },
                                "Remove"
                            }
                        }
                    }
                }

                div {
                    class: "max-w-3xl mx-auto pt-32 pb-40 px-12 relative",

                    div {
                        class: "absolute top-8 right-12 flex gap-2",
                        button {
                            class: "share-button",
                            title: "Move to trash",
                            onclick: trash_page,
                            Icon { icon: FaTrashCan, width: 14, height: 14 }
                        }
                        div {
                            class: "relative",
                            button {
                                class: if show_share() { "share-button active" } else { "share-button" },
                                onclick: open_share,
                                "Share"
                            }
                            if show_share() {
                                div {
                                    class: "share-popover absolute right-0 top-full mt-2 w-64 rounded-md shadow-lg p-4 z-10",
                                    div {
                                        class: "flex items-center justify-between mb-4",
                                        span { class: "text-sm font-medium", "Share to web" }
                                        button {
                                            class: if page.is_public { "switch on" } else { "switch" },
                                            role: "switch",
                                            aria_checked: "{page.is_public}",
                                            onclick: move |_| {
                                                let pending = doc.write().toggle_public();
                                                persist.call(pending);
                                            },
                                            div { class: "switch-knob" }
                                        }
                                    }
                                    if page.is_public {
                                        div {
                                            class: "flex gap-2",
                                            input {
                                                class: "text-xs p-2 rounded flex-1 truncate",
                                                readonly: true,
                                                value: "{share_url}",
                                            }
                                            button {
                                                class: "text-xs bg-blue-500 text-white px-3 py-1 rounded",
                                                onclick: copy_link,
                                                "Copy"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    if page.cover_image.is_none() {
                        div {
                            class: "group relative mb-8 opacity-0 hover:opacity-100",
                            button {
                                class: "text-xs text-gray-500 px-2 py-1 rounded",
                                onclick: move |_| {
                                    let pending = doc.write().set_cover(Some(next_cover(None)));
                                    persist.call(pending);
                                },
                                "Add cover"
                            }
                        }
                    }

                    div {
                        class: "group relative mb-4",
                        if let Some(icon) = page.icon.clone() {
                            div {
                                class: "page-icon relative inline-block",
                                div {
                                    class: "text-7xl cursor-pointer rounded p-2",
                                    title: "Change icon",
                                    onclick: move |_| {
                                        let pending = doc.write().cycle_icon();
                                        persist.call(pending);
                                    },
                                    "{icon}"
                                }
                                button {
                                    class: "page-icon-remove absolute -top-2 -right-2 rounded-full p-1",
                                    title: "Remove icon",
                                    onclick: move |_| {
                                        let pending = doc.write().remove_icon();
                                        persist.call(pending);
                                    },
                                    "\u{2715}"
                                }
                            }
                        } else {
                            button {
                                class: "text-xs text-gray-500 px-2 py-1 rounded opacity-0 group-hover:opacity-100",
                                onclick: move |_| {
                                    let pending = doc.write().cycle_icon();
                                    persist.call(pending);
                                },
                                "Add icon"
                            }
                        }
                    }

                    input {
                        class: "page-title w-full text-4xl font-bold bg-transparent border-none outline-none mb-8",
                        value: "{page.title}",
                        placeholder: "Untitled",
                        oninput: move |evt: FormEvent| {
                            let pending = doc.write().set_title(evt.value());
                            persist.call(pending);
                        },
                    }

                    div {
                        class: if source.is_some() { "block-list dragging space-y-1" } else { "block-list space-y-1" },
                        onmousemove: move |evt: MouseEvent| {
                            if sortable.read().is_dragging() {
                                let p = evt.client_coordinates();
                                sortable.write().pointer_moved(Point::new(p.x, p.y));
                            }
                        },
                        onmouseup: move |_| {
                            if sortable.read().is_dragging() {
                                drop_block();
                            }
                        },
                        onmouseleave: move |_| {
                            if sortable.read().is_dragging() {
                                sortable.write().cancel_drop();
                            }
                        },

                        for (index, block) in page.content.iter().cloned().enumerate() {
                            BlockRow {
                                key: "{block.id}",
                                selected: selected_index == Some(index),
                                dragging: source.as_ref() == Some(&block.id),
                                drop_target: target.as_ref() == Some(&block.id) && source.as_ref() != Some(&block.id),
                                on_update: move |update: BlockUpdate| {
                                    let pending = doc.write().update_block(index, &update);
                                    persist.call(pending);
                                },
                                on_toggle: move |_| {
                                    let pending = doc.write().toggle_block(index);
                                    persist.call(pending);
                                },
                                on_select: {
                                    let id = block.id.clone();
                                    move |_| selected.set(Some(id.clone()))
                                },
                                on_remove: {
                                    let id = block.id.clone();
                                    move |_| {
                                        if selected.peek().as_ref() == Some(&id) {
                                            selected.set(None);
                                        }
                                        let pending = doc.write().remove_block(&id);
                                        persist.call(pending);
                                    }
                                },
                                on_grab: {
                                    let id = block.id.clone();
                                    move |_| grab_with_pointer(id.clone())
                                },
                                on_handle_key: {
                                    let id = block.id.clone();
                                    move |evt: KeyboardEvent| handle_key(id.clone(), evt)
                                },
                                on_mounted: {
                                    let id = block.id.clone();
                                    move |evt: MountedEvent| {
                                        mounted.write().insert(id.clone(), evt.data());
                                    }
                                },
                                block,
                            }
                        }

                        button {
                            class: "new-block flex items-center gap-2 text-gray-400 px-2 py-1 rounded mt-2",
                            onclick: move |_| {
                                let pending = doc.write().add_block(default_block);
                                persist.call(pending);
                            },
                            span { "+" }
                            span { "New task" }
                        }
                    }

                    if saving {
                        div { class: "saving-indicator fixed bottom-4 right-4 text-xs text-gray-400", "Saving..." }
                    }
                }
            }

            if let (Some(index), Some(block)) = (selected_index, selected_block) {
                if block.is_todo() {
                    TaskDetail {
                        block,
                        on_update: move |update: BlockUpdate| {
                            let pending = doc.write().update_block(index, &update);
                            persist.call(pending);
                        },
                        on_close: move |_| selected.set(None),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cover_cycles_through_presets() {
        assert_eq!(next_cover(None), COVER_PRESETS[0]);
        assert_eq!(next_cover(Some(COVER_PRESETS[0])), COVER_PRESETS[1]);
        assert_eq!(next_cover(Some(COVER_PRESETS[3])), COVER_PRESETS[0]);
        assert_eq!(next_cover(Some("url(custom.png)")), COVER_PRESETS[0]);
    }

    #[test]
    fn test_fetch_waits_for_session_restore() {
        let restoring = AuthState {
            user: None,
            loading: true,
        };
        assert_eq!(fetch_viewer(&restoring), None);

        let anonymous = AuthState::default();
        assert_eq!(fetch_viewer(&anonymous), Some(None));

        let restored = AuthState {
            user: Some(store::UserInfo {
                id: "u1".into(),
                name: "Ada".into(),
                email: "ada@example.com".into(),
                role: "user".into(),
                profile_pic: None,
                status: None,
            }),
            loading: false,
        };
        assert_eq!(fetch_viewer(&restored), Some(Some("u1".to_string())));
        assert_ne!(fetch_viewer(&restored), fetch_viewer(&anonymous));
    }
}
