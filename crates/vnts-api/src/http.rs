//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks (401 → [`ApiError::Unauthorized`],
//! other non-success → [`ApiError::Api`] with status code and body) so the
//! resource modules stay focused on request construction and response
//! mapping.

use crate::error::ApiError;

/// Check an HTTP response for error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **401 Unauthorized** → [`ApiError::Unauthorized`] with the response
///   body as the message.
/// - **Other non-success status** → [`ApiError::Api`] with status code and
///   response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    if !status.is_success() {
        return Err(ApiError::Api {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}
