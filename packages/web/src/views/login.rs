//! Login page view.

use dioxus::prelude::*;
use ui::use_auth;
use ui::views::LoginView;

use crate::Route;

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    // Already signed in: nothing to do here
    if !auth().loading && auth().user.is_some() {
        nav.replace(Route::Home {});
    }

    rsx! {
        LoginView {
            on_success: move |_| {
                nav.push(Route::Home {});
            },
            on_register: move |_| {
                nav.push(Route::Register {});
            },
        }
    }
}
