//! Authentication endpoints and the client session built on them.

use reqwest::Method;
use store::UserInfo;

use crate::error::ApiResult;
use crate::gateway::ApiClient;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest};

mod session;

pub use session::{AuthState, Session};

impl ApiClient {
    /// `GET /api/auth/me` with this client's bearer token.
    pub async fn current_user(&self) -> ApiResult<UserInfo> {
        self.require_token()?;
        self.get_json("/api/auth/me").await
    }

    /// `POST /api/auth/login`. A rejected login carries the server's message.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<AuthResponse> {
        let body = serde_json::to_string(&LoginRequest { email, password })?;
        let request = self.request(Method::POST, "/api/auth/login").body(body);
        let response = self.execute(request, "Login failed").await?;
        Self::decode(response).await
    }

    /// `POST /api/auth/register`. Same contract as [`login`](Self::login).
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> ApiResult<AuthResponse> {
        let body = serde_json::to_string(&RegisterRequest {
            name,
            email,
            password,
        })?;
        let request = self.request(Method::POST, "/api/auth/register").body(body);
        let response = self.execute(request, "Registration failed").await?;
        Self::decode(response).await
    }

    /// `POST /api/auth/logout`.
    pub async fn logout(&self) -> ApiResult<()> {
        self.require_token()?;
        self.send_empty(self.request(Method::POST, "/api/auth/logout"))
            .await
    }
}
