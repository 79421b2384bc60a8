use dioxus::prelude::*;

use ui::AuthProvider;
use views::{
    Home, Inbox, Login, PageDetail, ProjectDetail, Projects, ProjectsTable, Register, SidebarLayout, Tasks,
    Trash,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[layout(SidebarLayout)]
        #[route("/")]
        Home {},
        #[route("/projects")]
        Projects {},
        #[route("/projects/:id")]
        ProjectDetail { id: String },
        #[route("/projects-table")]
        ProjectsTable {},
        #[route("/tasks")]
        Tasks {},
        #[route("/inbox")]
        Inbox {},
        #[route("/trash")]
        Trash {},
        #[route("/:page_id")]
        PageDetail { page_id: String },
    #[end_layout]
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            config: ui::load_config(),
            Router::<Route> {}
        }
    }
}
