use dioxus::prelude::*;
use ui::views::RegisterView;

use crate::Route;

#[component]
pub fn Register() -> Element {
    let nav = use_navigator();

    rsx! {
        RegisterView {
            on_success: move |_| {
                nav.push(Route::Home {});
            },
            on_login: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}
