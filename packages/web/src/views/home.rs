use dioxus::prelude::*;
use ui::views::HomeView;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();

    rsx! {
        HomeView {
            on_open_page: move |page_id| {
                nav.push(Route::PageDetail { page_id });
            },
            on_open_database: move |_| {
                nav.push(Route::ProjectsTable {});
            },
            on_login: move |_| {
                nav.push(Route::Login {});
            },
            on_register: move |_| {
                nav.push(Route::Register {});
            },
        }
    }
}
