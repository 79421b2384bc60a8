//! Request and response bodies of the auth endpoints.

mod auth;

pub use auth::{AuthResponse, LoginRequest, RegisterRequest};
pub use store::UserInfo;
