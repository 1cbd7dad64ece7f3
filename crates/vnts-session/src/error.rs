use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session storage error: {0}")]
    Storage(String),

    #[error("session serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("token store error: {0}")]
    TokenStore(String),

    #[error("invalid access token: {0}")]
    InvalidJwt(String),
}
