//! API error types.

use thiserror::Error;

/// Errors that can occur when talking to the VNTS backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error (connection refused, timeout, TLS, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Backend rejected the request's credentials (401).
    ///
    /// For requests sent without a bearer token this is the ordinary
    /// bad-credentials outcome; for authenticated requests it means the
    /// one permitted refresh-and-retry already happened.
    #[error("unauthorized ({status}): {message}")]
    Unauthorized { status: u16, message: String },

    /// The session can no longer be refreshed. The stored session and
    /// credentials have been cleared; the user must sign in again.
    #[error("session expired (status {status}) - run `vnts auth login`")]
    SessionExpired { status: u16 },

    /// Session or credential storage failed mid-request.
    #[error(transparent)]
    Session(#[from] vnts_session::SessionError),

    /// A response body did not match the expected shape.
    #[error("parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// Status code of the backend response, when one was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. }
            | Self::Unauthorized { status, .. }
            | Self::SessionExpired { status } => Some(*status),
            Self::Http(_) | Self::Session(_) | Self::Parse(_) => None,
        }
    }
}
