use api::{ApiClient, ApiResult};
use dioxus::prelude::*;
use store::{PageSummary, PageTemplate};

use crate::search_modal::{SearchHit, SearchModal};
use crate::sidebar::{Sidebar, SidebarLink};
use crate::{use_auth, use_session};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Pages listed in the sidebar, shared with child views through context.
pub type PageList = Signal<Vec<PageSummary>>;

/// The sidebar's page list. Only available below [`SidebarLayoutView`].
pub fn use_page_list() -> PageList {
    use_context::<PageList>()
}

/// Create a page from `template` and put it at the top of `pages`.
/// Returns the new page's id.
pub async fn create_from_template(client: &ApiClient, mut pages: PageList, template: PageTemplate) -> ApiResult<String> {
    let page = client.create_page(&template.to_new_page()).await?;
    tracing::info!("Created page {} from {:?} template", page.id, template);
    pages.write().insert(0, PageSummary::from(&page));
    Ok(page.id)
}

/// Shared sidebar layout view.
///
/// Platform packages provide navigation callbacks and an `Outlet` as children.
#[component]
pub fn SidebarLayoutView(
    /// Id of the page being edited, if any.
    active_page: Option<String>,
    /// The router outlet for child routes.
    children: Element,
    on_navigate: EventHandler<SidebarLink>,
    /// Called when the user opens a page, including a freshly created one.
    on_navigate_page: EventHandler<String>,
    /// Called when the user picks a search result.
    on_open_hit: EventHandler<SearchHit>,
    #[props(default)] on_logged_out: EventHandler<()>,
) -> Element {
    let mut pages: PageList = use_context_provider(|| Signal::new(Vec::new()));
    let mut show_search = use_signal(|| false);
    let session = use_session();
    let auth = use_auth();

    // Reload the page list whenever the signed-in user changes
    let _loader = use_resource({
        let session = session.clone();
        move || {
            let signed_in = auth().user.is_some();
            let client = session.client();
            async move {
                if !signed_in {
                    pages.set(Vec::new());
                    return;
                }
                match client.list_pages().await {
                    Ok(list) => pages.set(list),
                    Err(e) => tracing::error!("Failed to fetch pages: {}", e),
                }
            }
        }
    });

    let on_create_page = move |template: PageTemplate| {
        let client = session.client();
        spawn(async move {
            match create_from_template(&client, pages, template).await {
                Ok(id) => on_navigate_page.call(id),
                Err(e) => tracing::error!("Failed to create page: {}", e),
            }
        });
    };

    let on_open = move |hit: SearchHit| {
        show_search.set(false);
        on_open_hit.call(hit);
    };

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "app-shell flex h-screen overflow-hidden",
            Sidebar {
                pages: pages(),
                active_page,
                user: auth().user,
                on_navigate,
                on_select_page: move |id| on_navigate_page.call(id),
                on_create_page,
                on_search: move |_| show_search.set(true),
                on_logout: move |_| on_logged_out.call(()),
            }

            main {
                class: "flex-1 overflow-y-auto",
                {children}
            }
        }

        if show_search() {
            SearchModal {
                on_close: move |_| show_search.set(false),
                on_open,
            }
        }
    }
}
