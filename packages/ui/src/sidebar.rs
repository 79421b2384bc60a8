use api::UserInfo;
use dioxus::prelude::*;
use store::models::Theme;
use store::storage::{load_theme, save_theme};
use store::{PageSummary, PageTemplate};

use crate::icons::{
    FaFolder, FaHouse, FaInbox, FaMagnifyingGlass, FaMoon, FaSquareCheck, FaSun, FaTable, FaTrashCan,
};
use crate::views::ModalOverlay;
use crate::Icon;
use crate::{use_session, LogoutButton};

const SIDEBAR_CSS: Asset = asset!("/assets/sidebar.css");

/// Fixed destinations reachable from the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarLink {
    Home,
    Projects,
    ProjectsTable,
    Tasks,
    Inbox,
    Trash,
}

impl SidebarLink {
    const PRIMARY: [SidebarLink; 5] = [
        Self::Home,
        Self::Projects,
        Self::ProjectsTable,
        Self::Tasks,
        Self::Inbox,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Projects => "Projects",
            Self::ProjectsTable => "Projects Database",
            Self::Tasks => "Tasks",
            Self::Inbox => "Inbox",
            Self::Trash => "Trash",
        }
    }
}

#[component]
fn LinkIcon(link: SidebarLink) -> Element {
    match link {
        SidebarLink::Home => rsx! { Icon { icon: FaHouse, width: 14, height: 14 } },
        SidebarLink::Projects => rsx! { Icon { icon: FaFolder, width: 14, height: 14 } },
        SidebarLink::ProjectsTable => rsx! { Icon { icon: FaTable, width: 14, height: 14 } },
        SidebarLink::Tasks => rsx! { Icon { icon: FaSquareCheck, width: 14, height: 14 } },
        SidebarLink::Inbox => rsx! { Icon { icon: FaInbox, width: 14, height: 14 } },
        SidebarLink::Trash => rsx! { Icon { icon: FaTrashCan, width: 14, height: 14 } },
    }
}

/// Signal holding the active colour scheme.
pub type ThemeSignal = Signal<Theme>;

/// Switch the document between light and dark styling.
pub fn apply_theme(theme: Theme) {
    let dark = theme == Theme::Dark;
    document::eval(&format!(
        "document.documentElement.classList.toggle('dark', {dark});"
    ));
}

/// Hook for the persisted theme. Applies it once on mount.
pub fn use_theme() -> ThemeSignal {
    let session = use_session();
    let theme = use_signal(|| load_theme(session.storage()));
    use_effect(move || apply_theme(theme()));
    theme
}

#[component]
pub fn Sidebar(
    pages: Vec<PageSummary>,
    active_page: Option<String>,
    user: Option<UserInfo>,
    on_navigate: EventHandler<SidebarLink>,
    on_select_page: EventHandler<String>,
    on_create_page: EventHandler<PageTemplate>,
    on_search: EventHandler<()>,
    #[props(default)] on_logout: EventHandler<()>,
) -> Element {
    let session = use_session();
    let mut theme = use_theme();
    let mut show_templates = use_signal(|| false);

    let toggle_theme = move |_| {
        let next = theme().toggled();
        if let Err(e) = save_theme(session.storage(), next) {
            tracing::warn!("Failed to save theme preference: {}", e);
        }
        theme.set(next);
    };

    let workspace_name = user
        .as_ref()
        .map(|u| u.display_name().to_string())
        .unwrap_or_else(|| "Flux HQ".to_string());
    let trash = SidebarLink::Trash;
    let initial = workspace_name.chars().next().unwrap_or('F').to_uppercase().to_string();

    rsx! {
        document::Stylesheet { href: SIDEBAR_CSS }

        aside {
            class: "sidebar",

            div {
                class: "sidebar-workspace",
                div { class: "sidebar-workspace-badge", "{initial}" }
                span { class: "truncate", "{workspace_name}" }
            }

            nav {
                class: "sidebar-nav",
                div {
                    class: "sidebar-item muted",
                    onclick: move |_| on_search.call(()),
                    span { class: "sidebar-glyph", Icon { icon: FaMagnifyingGlass, width: 14, height: 14 } }
                    span { "Search" }
                }
                for link in SidebarLink::PRIMARY {
                    div {
                        key: "{link.label()}",
                        class: "sidebar-item",
                        onclick: move |_| on_navigate.call(link),
                        span { class: "sidebar-glyph", LinkIcon { link } }
                        span { "{link.label()}" }
                    }
                }
            }

            div {
                class: "sidebar-pages",
                div {
                    class: "sidebar-section-header",
                    span { "Private" }
                    button {
                        class: "sidebar-add",
                        title: "New page",
                        onclick: move |_| show_templates.set(true),
                        "+"
                    }
                }
                for page in pages {
                    div {
                        key: "{page.id}",
                        class: if active_page.as_deref() == Some(page.id.as_str()) { "sidebar-item page active" } else { "sidebar-item page" },
                        onclick: {
                            let id = page.id.clone();
                            move |_| on_select_page.call(id.clone())
                        },
                        span { class: "sidebar-glyph", {page.icon.clone().unwrap_or_else(|| "\u{1F4C4}".to_string())} }
                        span {
                            class: "truncate flex-1",
                            if page.title.is_empty() { "Untitled" } else { "{page.title}" }
                        }
                    }
                }
                div {
                    class: "sidebar-item muted",
                    onclick: move |_| show_templates.set(true),
                    span { class: "sidebar-glyph", "+" }
                    span { "Add new" }
                }
            }

            div {
                class: "sidebar-footer",
                div {
                    class: "sidebar-item muted",
                    onclick: toggle_theme,
                    if theme() == Theme::Dark {
                        span { class: "sidebar-glyph", Icon { icon: FaSun, width: 14, height: 14 } }
                        span { "Light mode" }
                    } else {
                        span { class: "sidebar-glyph", Icon { icon: FaMoon, width: 14, height: 14 } }
                        span { "Dark mode" }
                    }
                }
                div {
                    class: "sidebar-item muted",
                    onclick: move |_| on_navigate.call(trash),
                    span { class: "sidebar-glyph", LinkIcon { link: trash } }
                    span { "{trash.label()}" }
                }
                if user.is_some() {
                    LogoutButton {
                        class: "sidebar-item muted w-full",
                        on_logout: move |_| on_logout.call(()),
                    }
                }
            }
        }

        if show_templates() {
            ModalOverlay {
                on_close: move |_| show_templates.set(false),
                div {
                    class: "p-6",
                    h2 { class: "m-0 mb-5 text-lg font-semibold", "New page" }
                    div {
                        class: "grid gap-2",
                        for template in PageTemplate::ALL {
                            button {
                                key: "{template.label()}",
                                class: "template-option",
                                onclick: move |_| {
                                    show_templates.set(false);
                                    on_create_page.call(template);
                                },
                                "{template.label()}"
                            }
                        }
                    }
                }
            }
        }
    }
}
