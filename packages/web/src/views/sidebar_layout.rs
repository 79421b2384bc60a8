use dioxus::prelude::*;

use ui::views::SidebarLayoutView;
use ui::{SearchHit, SidebarLink};

use crate::Route;

fn link_route(link: SidebarLink) -> Route {
    match link {
        SidebarLink::Home => Route::Home {},
        SidebarLink::Projects => Route::Projects {},
        SidebarLink::ProjectsTable => Route::ProjectsTable {},
        SidebarLink::Tasks => Route::Tasks {},
        SidebarLink::Inbox => Route::Inbox {},
        SidebarLink::Trash => Route::Trash {},
    }
}

fn hit_route(hit: SearchHit) -> Route {
    match hit {
        SearchHit::Page(page_id) => Route::PageDetail { page_id },
        SearchHit::Project(id) => Route::ProjectDetail { id },
        SearchHit::Task(_) => Route::Tasks {},
    }
}

#[component]
pub fn SidebarLayout() -> Element {
    let nav = use_navigator();

    // Highlight the open page in the sidebar
    let route = use_route::<Route>();
    let active_page = match route {
        Route::PageDetail { ref page_id } => Some(page_id.clone()),
        _ => None,
    };

    rsx! {
        SidebarLayoutView {
            active_page,
            on_navigate: move |link| {
                nav.push(link_route(link));
            },
            on_navigate_page: move |page_id| {
                nav.push(Route::PageDetail { page_id });
            },
            on_open_hit: move |hit| {
                nav.push(hit_route(hit));
            },
            on_logged_out: move |_| {
                nav.push(Route::Login {});
            },
            Outlet::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_hits_open_their_screens() {
        assert_eq!(
            hit_route(SearchHit::Page("p1".into())),
            Route::PageDetail { page_id: "p1".into() }
        );
        assert_eq!(
            hit_route(SearchHit::Project("x".into())),
            Route::ProjectDetail { id: "x".into() }
        );
        assert_eq!(hit_route(SearchHit::Task("t".into())), Route::Tasks {});
    }

    #[test]
    fn test_sidebar_links_render_as_paths() {
        assert_eq!(link_route(SidebarLink::ProjectsTable).to_string(), "/projects-table");
        assert_eq!(link_route(SidebarLink::Home).to_string(), "/");
    }
}
