mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod sidebar_layout;
pub use sidebar_layout::SidebarLayout;

mod home;
pub use home::Home;

mod projects;
pub use projects::{ProjectDetail, Projects, ProjectsTable};

mod workspace;
pub use workspace::{Inbox, Tasks, Trash};

mod page;
pub use page::PageDetail;
