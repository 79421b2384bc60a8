//! Tasks, inbox and trash: list views that only need a way to the login page.

use dioxus::prelude::*;
use ui::views::{InboxView, TasksView, TrashView};

use crate::Route;

#[component]
pub fn Tasks() -> Element {
    let nav = use_navigator();
    rsx! {
        TasksView { on_login: move |_| { nav.push(Route::Login {}); } }
    }
}

#[component]
pub fn Inbox() -> Element {
    let nav = use_navigator();
    rsx! {
        InboxView { on_login: move |_| { nav.push(Route::Login {}); } }
    }
}

#[component]
pub fn Trash() -> Element {
    let nav = use_navigator();
    rsx! {
        TrashView { on_login: move |_| { nav.push(Route::Login {}); } }
    }
}
