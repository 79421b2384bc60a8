//! This crate contains all shared UI for the workspace.
//!
//! Views take navigation callbacks instead of routes; platform packages wire
//! them to their router.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{sync_auth, use_auth, use_config, use_session, AuthProvider, ClientSession, LogoutButton};
pub use api::AuthState;

mod platform;
pub use platform::{api_environment, load_config, make_storage, ClientStorage};

pub mod collection;
pub use collection::{Collection, Confirmation, Record};

pub mod filter;
pub use filter::{FieldKind, FilterComposer, FilterError, FilterField};

pub mod search;
pub mod time;

pub mod editor;
pub use editor::PageEditor;

mod sidebar;
pub use sidebar::{apply_theme, use_theme, Sidebar, SidebarLink, ThemeSignal};

mod search_modal;
pub use search_modal::{SearchHit, SearchModal};

mod advanced_filter;
pub use advanced_filter::AdvancedFilter;

pub mod views;
