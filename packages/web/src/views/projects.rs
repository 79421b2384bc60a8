use dioxus::prelude::*;
use ui::views::{ProjectDetailView, ProjectsTableView, ProjectsView};

use crate::Route;

#[component]
pub fn Projects() -> Element {
    let nav = use_navigator();

    rsx! {
        ProjectsView {
            on_open_project: move |id| {
                nav.push(Route::ProjectDetail { id });
            },
            on_login: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}

#[component]
pub fn ProjectDetail(id: String) -> Element {
    let nav = use_navigator();

    rsx! {
        ProjectDetailView {
            project_id: id,
            on_back: move |_| {
                nav.push(Route::Projects {});
            },
            on_login: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}

#[component]
pub fn ProjectsTable() -> Element {
    let nav = use_navigator();

    rsx! {
        ProjectsTableView {
            on_open_project: move |id| {
                nav.push(Route::ProjectDetail { id });
            },
            on_login: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}
