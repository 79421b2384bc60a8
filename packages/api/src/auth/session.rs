//! # Client session
//!
//! [`Session`] is the one place that knows who is signed in. It is built
//! explicitly at startup, handed to the UI through context, and cloned
//! freely: clones share state.
//!
//! ## Lifecycle
//!
//! | Operation | Effect |
//! |-----------|--------|
//! | [`bootstrap`](Session::bootstrap) | Validates the persisted access token against `/api/auth/me`. A rejected token is purged; a transport failure leaves it for the next start. Always ends loading. |
//! | [`login`](Session::login) / [`register`](Session::register) | Persists both tokens, then records user + token. On failure nothing changes. |
//! | [`logout`](Session::logout) | Tells the backend (best effort), then clears memory and storage unconditionally. |
//!
//! A user is never held without its token: both live in one `Identity`.

use std::sync::{Arc, Mutex, MutexGuard};

use store::storage::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
use store::{KeyValueStore, StorageError, UserInfo};

use crate::error::{ApiError, ApiResult};
use crate::gateway::ApiClient;
use crate::models::AuthResponse;

#[derive(Clone, Debug)]
struct Identity {
    user: UserInfo,
    token: String,
}

#[derive(Debug)]
struct SessionState {
    identity: Option<Identity>,
    loading: bool,
}

/// What the UI renders from: the current user and whether bootstrap is
/// still running.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub loading: bool,
}

/// The signed-in identity and its persisted credentials.
#[derive(Clone)]
pub struct Session<S> {
    api: ApiClient,
    storage: S,
    state: Arc<Mutex<SessionState>>,
}

impl<S: KeyValueStore> Session<S> {
    /// A session that has not bootstrapped yet (`is_loading()` is true).
    pub fn new(api: ApiClient, storage: S) -> Self {
        Self {
            api,
            storage,
            state: Arc::new(Mutex::new(SessionState {
                identity: None,
                loading: true,
            })),
        }
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.state().identity.as_ref().map(|i| i.user.clone())
    }

    pub fn token(&self) -> Option<String> {
        self.state().identity.as_ref().map(|i| i.token.clone())
    }

    pub fn is_loading(&self) -> bool {
        self.state().loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.state().identity.is_some()
    }

    pub fn snapshot(&self) -> AuthState {
        let state = self.state();
        AuthState {
            user: state.identity.as_ref().map(|i| i.user.clone()),
            loading: state.loading,
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// A client carrying the current bearer token, if any.
    pub fn client(&self) -> ApiClient {
        self.api.with_token(self.token())
    }

    /// Restore the session from the persisted access token.
    pub async fn bootstrap(&self) {
        let stored = match self.storage.get(ACCESS_TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::warn!("Failed to read stored token: {}", e);
                None
            }
        };

        if let Some(token) = stored {
            match self.api.with_token(Some(token.clone())).current_user().await {
                Ok(user) => {
                    tracing::info!("Session restored for {}", user.email);
                    self.state().identity = Some(Identity { user, token });
                }
                Err(ApiError::Status { status, .. }) => {
                    tracing::info!("Stored token rejected ({}), signing out", status);
                    self.clear();
                }
                Err(e) => {
                    tracing::error!("Failed to fetch user: {}", e);
                }
            }
        }

        self.state().loading = false;
    }

    /// Sign in with email and password.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<UserInfo> {
        let response = self.api.login(email, password).await?;
        self.establish(response)
    }

    /// Create an account and sign in to it.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> ApiResult<UserInfo> {
        let response = self.api.register(name, email, password).await?;
        self.establish(response)
    }

    /// Sign out. Backend failures are logged, never returned.
    pub async fn logout(&self) {
        if let Some(token) = self.token() {
            if let Err(e) = self.api.with_token(Some(token)).logout().await {
                tracing::warn!("Logout error: {}", e);
            }
        }
        self.clear();
        tracing::info!("Signed out");
    }

    /// Persist the tokens, then adopt the identity. The access token is
    /// written last since bootstrap reads only it; if that write fails the
    /// previous refresh token is put back and the old identity stays.
    fn establish(&self, response: AuthResponse) -> ApiResult<UserInfo> {
        let previous_refresh = self.storage.get(REFRESH_TOKEN_KEY)?;
        self.write_refresh(response.refresh_token.as_deref())?;
        if let Err(e) = self.storage.set(ACCESS_TOKEN_KEY, &response.access_token) {
            if let Err(restore) = self.write_refresh(previous_refresh.as_deref()) {
                tracing::warn!("Failed to restore {}: {}", REFRESH_TOKEN_KEY, restore);
            }
            return Err(e.into());
        }

        let user = response.user;
        tracing::info!("Signed in as {}", user.email);
        self.state().identity = Some(Identity {
            user: user.clone(),
            token: response.access_token,
        });
        Ok(user)
    }

    fn write_refresh(&self, refresh: Option<&str>) -> Result<(), StorageError> {
        match refresh {
            Some(refresh) => self.storage.set(REFRESH_TOKEN_KEY, refresh),
            None => self.storage.remove(REFRESH_TOKEN_KEY),
        }
    }

    /// Drop the identity and both persisted tokens.
    fn clear(&self) {
        self.state().identity = None;
        for key in [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY] {
            if let Err(e) = self.storage.remove(key) {
                tracing::warn!("Failed to remove {}: {}", key, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryStore;

    const USER_JSON: &str =
        r#"{"_id":"u1","name":"Ada","email":"a@x.com","role":"member"}"#;

    fn auth_body() -> String {
        format!(r#"{{"user":{USER_JSON},"accessToken":"new-access","refreshToken":"new-refresh"}}"#)
    }

    fn session(url: String, storage: MemoryStore) -> Session<MemoryStore> {
        Session::new(ApiClient::new(url), storage)
    }

    #[tokio::test]
    async fn test_login_invalid_credentials_keeps_stored_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/auth/login")
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"Invalid credentials"}"#)
            .create_async()
            .await;

        let storage = MemoryStore::new();
        storage.set(ACCESS_TOKEN_KEY, "old-token").unwrap();
        let session = session(server.url(), storage.clone());

        let err = session.login("a@x.com", "wrongpass").await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid credentials");
        assert_eq!(err.status(), Some(401));
        assert_eq!(
            storage.get(ACCESS_TOKEN_KEY).unwrap().as_deref(),
            Some("old-token")
        );
        assert!(session.user().is_none());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_login_failure_without_message_uses_default() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/auth/login")
            .with_status(500)
            .with_body("oops")
            .create_async()
            .await;

        let session = session(server.url(), MemoryStore::new());
        let err = session.login("a@x.com", "pw").await.unwrap_err();
        assert_eq!(err.to_string(), "Login failed");
    }

    #[tokio::test]
    async fn test_login_persists_both_tokens() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/auth/login")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "email": "a@x.com",
                "password": "secret"
            })))
            .with_status(200)
            .with_body(auth_body())
            .create_async()
            .await;

        let storage = MemoryStore::new();
        let session = session(server.url(), storage.clone());
        let user = session.login("a@x.com", "secret").await.unwrap();

        assert_eq!(user.name, "Ada");
        assert_eq!(session.token().as_deref(), Some("new-access"));
        assert_eq!(session.client().token(), Some("new-access"));
        assert_eq!(
            storage.get(ACCESS_TOKEN_KEY).unwrap().as_deref(),
            Some("new-access")
        );
        assert_eq!(
            storage.get(REFRESH_TOKEN_KEY).unwrap().as_deref(),
            Some("new-refresh")
        );
    }

    #[tokio::test]
    async fn test_register_uses_registration_endpoint() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/auth/register")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({ "name": "Ada" })))
            .with_status(201)
            .with_body(auth_body())
            .create_async()
            .await;

        let session = session(server.url(), MemoryStore::new());
        session.register("Ada", "a@x.com", "secret").await.unwrap();
        assert!(session.is_authenticated());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_register_conflict_surfaces_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/auth/register")
            .with_status(409)
            .with_body(r#"{"message":"Email already registered"}"#)
            .create_async()
            .await;

        let session = session(server.url(), MemoryStore::new());
        let err = session.register("Ada", "a@x.com", "pw").await.unwrap_err();
        assert_eq!(err.to_string(), "Email already registered");
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_bootstrap_restores_user() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/auth/me")
            .match_header("authorization", "Bearer stored")
            .with_status(200)
            .with_body(USER_JSON)
            .create_async()
            .await;

        let storage = MemoryStore::new();
        storage.set(ACCESS_TOKEN_KEY, "stored").unwrap();
        let session = session(server.url(), storage);
        assert!(session.is_loading());

        session.bootstrap().await;
        let snapshot = session.snapshot();
        assert!(!snapshot.loading);
        assert_eq!(snapshot.user.map(|u| u.id), Some("u1".to_string()));
        assert_eq!(session.token().as_deref(), Some("stored"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_bootstrap_purges_rejected_token() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/auth/me")
            .with_status(401)
            .with_body(r#"{"message":"jwt expired"}"#)
            .create_async()
            .await;

        let storage = MemoryStore::new();
        storage.set(ACCESS_TOKEN_KEY, "expired").unwrap();
        storage.set(REFRESH_TOKEN_KEY, "r").unwrap();
        let session = session(server.url(), storage.clone());

        session.bootstrap().await;
        assert!(!session.is_loading());
        assert!(!session.is_authenticated());
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn test_bootstrap_without_token_makes_no_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/auth/me")
            .expect(0)
            .create_async()
            .await;

        let session = session(server.url(), MemoryStore::new());
        session.bootstrap().await;
        assert!(!session.is_loading());
        assert!(session.user().is_none());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_bootstrap_network_failure_keeps_stored_token() {
        let storage = MemoryStore::new();
        storage.set(ACCESS_TOKEN_KEY, "stored").unwrap();
        // Nothing listens on the discard port.
        let session = session("http://127.0.0.1:9".to_string(), storage.clone());

        session.bootstrap().await;
        assert!(!session.is_loading());
        assert!(!session.is_authenticated());
        assert_eq!(storage.get(ACCESS_TOKEN_KEY).unwrap().as_deref(), Some("stored"));
    }

    async fn signed_in(server: &mut mockito::Server, storage: MemoryStore) -> Session<MemoryStore> {
        server
            .mock("POST", "/api/auth/login")
            .with_status(200)
            .with_body(auth_body())
            .create_async()
            .await;
        let session = session(server.url(), storage);
        session.login("a@x.com", "secret").await.unwrap();
        session
    }

    #[tokio::test]
    async fn test_logout_clears_everything() {
        let mut server = mockito::Server::new_async().await;
        let storage = MemoryStore::new();
        let session = signed_in(&mut server, storage.clone()).await;
        let mock = server
            .mock("POST", "/api/auth/logout")
            .match_header("authorization", "Bearer new-access")
            .with_status(200)
            .create_async()
            .await;

        session.logout().await;
        assert!(session.user().is_none());
        assert!(session.token().is_none());
        assert!(storage.get(ACCESS_TOKEN_KEY).unwrap().is_none());
        assert!(storage.get(REFRESH_TOKEN_KEY).unwrap().is_none());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_logout_clears_even_when_backend_fails() {
        let mut server = mockito::Server::new_async().await;
        let storage = MemoryStore::new();
        let session = signed_in(&mut server, storage.clone()).await;
        server
            .mock("POST", "/api/auth/logout")
            .with_status(500)
            .create_async()
            .await;

        session.logout().await;
        assert!(!session.is_authenticated());
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn test_logout_clears_when_backend_unreachable() {
        let mut server = mockito::Server::new_async().await;
        let storage = MemoryStore::new();
        let session = signed_in(&mut server, storage.clone()).await;
        drop(server);

        session.logout().await;
        assert!(!session.is_authenticated());
        assert!(storage.is_empty());
    }

    /// Memory storage that refuses to write the access token.
    #[derive(Clone)]
    struct AccessWriteFails(MemoryStore);

    impl KeyValueStore for AccessWriteFails {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if key == ACCESS_TOKEN_KEY {
                return Err(StorageError::Unavailable("quota exceeded".into()));
            }
            self.0.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.0.remove(key)
        }
    }

    #[tokio::test]
    async fn test_failed_token_write_keeps_previous_credentials() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/auth/login")
            .with_status(200)
            .with_body(auth_body())
            .create_async()
            .await;

        let inner = MemoryStore::new();
        inner.set(ACCESS_TOKEN_KEY, "old-access").unwrap();
        inner.set(REFRESH_TOKEN_KEY, "old-refresh").unwrap();
        let session = Session::new(ApiClient::new(server.url()), AccessWriteFails(inner.clone()));

        let err = session.login("a@x.com", "secret").await.unwrap_err();
        assert!(matches!(err, ApiError::Storage(_)));
        assert!(!session.is_authenticated());
        assert_eq!(inner.get(ACCESS_TOKEN_KEY).unwrap().as_deref(), Some("old-access"));
        assert_eq!(inner.get(REFRESH_TOKEN_KEY).unwrap().as_deref(), Some("old-refresh"));
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let mut server = mockito::Server::new_async().await;
        let session = signed_in(&mut server, MemoryStore::new()).await;
        let other = session.clone();
        assert!(other.is_authenticated());
        session.logout().await;
        assert!(!other.is_authenticated());
    }
}
