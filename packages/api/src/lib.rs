//! # API crate — HTTP client for the Flux workspace backend
//!
//! Every screen of the client talks to the backend through [`ApiClient`].
//! Endpoint wrappers are inherent methods grouped by resource, one module per
//! resource; each returns typed `store` models or an [`ApiError`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`gateway`] | Base URL resolution, request building, bearer header, error mapping |
//! | [`auth`] | `/api/auth/*` calls and the [`Session`] that owns the signed-in identity |
//! | `pages` | Page list/get/create/patch and soft delete |
//! | `projects` | Project CRUD |
//! | `tasks` | Task CRUD |
//! | `notifications` | Inbox listing, mark read, mark all read, delete |
//! | `trash` | Trash listing, restore, permanent delete |
//! | `search` | Cross-resource search |
//! | [`models`] | Auth request/response bodies |
//!
//! Calls to signed-in-only endpoints fail with [`ApiError::NotAuthenticated`]
//! before anything is sent when the client carries no token.

pub mod auth;
pub mod error;
pub mod gateway;
pub mod models;

mod notifications;
mod pages;
mod projects;
mod search;
mod tasks;
mod trash;

pub use auth::{AuthState, Session};
pub use error::{ApiError, ApiResult};
pub use gateway::{resolve_base_url, ApiClient, ApiEnvironment, DEFAULT_BASE_URL};
pub use models::UserInfo;
