//! Error taxonomy for every backend call.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused connection, CORS, ...).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status. `message` is the body's
    /// `message` field when it has one.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// A 2xx body that does not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] store::StorageError),

    /// An operation that needs a bearer token was called without one.
    #[error("not signed in")]
    NotAuthenticated,
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for 401/403: the credential itself was refused.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
