mod modal_overlay;
pub use modal_overlay::{ConfirmDialog, ModalOverlay};

mod require_auth;
pub use require_auth::{RequireAuth, Spinner};

mod sidebar_layout;
pub use sidebar_layout::{create_from_template, use_page_list, PageList, SidebarLayoutView};

mod home;
pub use home::{greeting, recent_pages, HomeView};

mod login;
pub use login::LoginView;

mod register;
pub use register::RegisterView;

mod projects;
pub use projects::{project_filters, ProjectsView};

mod project_detail;
pub use project_detail::ProjectDetailView;

mod projects_table;
pub use projects_table::ProjectsTableView;

mod tasks;
pub use tasks::{tasks_in_tab, TasksView};

mod inbox;
pub use inbox::InboxView;

mod trash;
pub use trash::{filter_trash, TrashView, RETENTION_DAYS};
