use dioxus::prelude::*;
use ui::PageEditor;

use crate::Route;

/// A page opened by id. Public pages render for signed-out visitors too; the
/// backend decides what they may see.
#[component]
pub fn PageDetail(page_id: String) -> Element {
    let nav = use_navigator();

    rsx! {
        PageEditor {
            page_id,
            on_trashed: move |_| {
                nav.push(Route::Home {});
            },
        }
    }
}
