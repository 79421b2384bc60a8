//! # API gateway — base URL resolution and request plumbing
//!
//! [`resolve_base_url`] picks the backend origin once at startup:
//!
//! 1. an explicitly configured URL (`flux.toml` or `FLUX_API_URL`);
//! 2. the page's own origin, when the client is served by the backend
//!    (skipped in development, where the origin is the dev server);
//! 3. `http://localhost:5000`.
//!
//! [`ApiClient`] composes `base_url + path`, always sends
//! `Content-Type: application/json`, and adds `Authorization: Bearer <token>`
//! when it carries a token. There is no retry, timeout, or backoff: a failed
//! call surfaces as an [`ApiError`] for the caller to log or show.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};

/// Local development backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// What the running client knows about where it is.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApiEnvironment {
    pub configured_url: Option<String>,
    pub origin: Option<String>,
    pub development: bool,
}

/// Pick the backend base URL for `env`. Never ends with a slash.
pub fn resolve_base_url(env: &ApiEnvironment) -> String {
    let non_empty = |s: &Option<String>| {
        s.as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    let url = non_empty(&env.configured_url)
        .or_else(|| {
            if env.development {
                None
            } else {
                non_empty(&env.origin)
            }
        })
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    url.trim_end_matches('/').to_string()
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// HTTP client bound to one backend, optionally carrying a bearer token.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn from_environment(env: &ApiEnvironment) -> Self {
        Self::new(resolve_base_url(env))
    }

    /// A client sharing this one's connection pool but carrying `token`.
    pub fn with_token(&self, token: Option<String>) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            token,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!("{} {}", method, path);
        let mut request = self
            .http
            .request(method, self.url(path))
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        request
    }

    /// Fail fast for endpoints that only answer signed-in users.
    pub(crate) fn require_token(&self) -> ApiResult<()> {
        match self.token {
            Some(_) => Ok(()),
            None => Err(ApiError::NotAuthenticated),
        }
    }

    /// Send `request`, turning a non-2xx status into [`ApiError::Status`].
    /// `fallback` is the message used when the body carries none.
    pub(crate) async fn execute(
        &self,
        request: RequestBuilder,
        fallback: &str,
    ) -> ApiResult<Response> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback.to_string());
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let request = self.request(Method::GET, path);
        let response = self.execute(request, "Request failed").await?;
        Self::decode(response).await
    }

    pub(crate) async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(method, path).body(serde_json::to_string(body)?);
        let response = self.execute(request, "Request failed").await?;
        Self::decode(response).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(Method::POST, path, body).await
    }

    pub(crate) async fn patch_json<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(Method::PATCH, path, body).await
    }

    pub(crate) async fn delete(&self, path: &str) -> ApiResult<()> {
        self.send_empty(self.request(Method::DELETE, path)).await
    }

    /// Send a call whose response body is ignored.
    pub(crate) async fn send_empty(&self, request: RequestBuilder) -> ApiResult<()> {
        self.execute(request, "Request failed").await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_url_wins() {
        let env = ApiEnvironment {
            configured_url: Some("https://api.example.com/".into()),
            origin: Some("https://app.example.com".into()),
            development: false,
        };
        assert_eq!(resolve_base_url(&env), "https://api.example.com");
    }

    #[test]
    fn test_same_origin_fallback() {
        let env = ApiEnvironment {
            configured_url: Some("  ".into()),
            origin: Some("https://app.example.com".into()),
            development: false,
        };
        assert_eq!(resolve_base_url(&env), "https://app.example.com");
    }

    #[test]
    fn test_development_skips_origin() {
        let env = ApiEnvironment {
            configured_url: None,
            origin: Some("http://127.0.0.1:8080".into()),
            development: true,
        };
        assert_eq!(resolve_base_url(&env), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_default_when_nothing_known() {
        assert_eq!(resolve_base_url(&ApiEnvironment::default()), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_url_composition() {
        let client = ApiClient::new("http://localhost:5000/");
        assert_eq!(client.url("/api/pages"), "http://localhost:5000/api/pages");
        assert!(client.token().is_none());
        assert_eq!(client.with_token(Some("t".into())).token(), Some("t"));
    }

    #[tokio::test]
    async fn test_headers_and_error_message() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/projects")
            .match_header("authorization", "Bearer tok")
            .match_header("content-type", "application/json")
            .with_status(500)
            .with_body(r#"{"message":"boom"}"#)
            .create_async()
            .await;

        let client = ApiClient::new(server.url()).with_token(Some("tok".into()));
        let err = client
            .get_json::<serde_json::Value>("/api/projects")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "boom");
        assert_eq!(err.status(), Some(500));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_missing_token_is_rejected_before_sending() {
        let client = ApiClient::new("http://127.0.0.1:9");
        let err = client.list_projects().await.unwrap_err();
        assert!(matches!(err, ApiError::NotAuthenticated));
    }
}
