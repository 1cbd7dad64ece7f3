//! The VNTS API client and its token lifecycle.
//!
//! Every authenticated request goes through [`ApiClient::execute`]: attach
//! the stored access token as a bearer header, and on a 401 perform exactly
//! one refresh-and-retry. Anonymous requests (login, registration, tenant
//! lookup) bypass both the bearer header and the refresh path entirely.

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use vnts_config::ApiConfig;
use vnts_session::{SessionStore, TokenKind, TokenStore};

use crate::error::ApiError;
use crate::http::check_response;

#[derive(Serialize)]
struct RefreshRequest<'a> {
    refresh: &'a str,
}

#[derive(Deserialize)]
struct RefreshResponse {
    access: String,
    /// Present when the backend rotates refresh tokens.
    #[serde(default)]
    refresh: Option<String>,
}

/// HTTP client for the VNTS backend.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore,
    tokens: TokenStore,
    /// Coalesces concurrent refresh attempts into one exchange.
    refresh_gate: tokio::sync::Mutex<()>,
}

impl ApiClient {
    /// Create a client against `config.base_url`.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(config: &ApiConfig, session: SessionStore, tokens: TokenStore) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent(concat!("vnts/", env!("CARGO_PKG_VERSION")))
                .timeout(config.timeout())
                .build()
                .expect("reqwest client should build"),
            base_url: config.base_url_trimmed().to_string(),
            session,
            tokens,
            refresh_gate: tokio::sync::Mutex::new(()),
        }
    }

    /// Base URL this client talks to (without trailing slash).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The session store behind this client.
    #[must_use]
    pub const fn session(&self) -> &SessionStore {
        &self.session
    }

    /// The credential store behind this client.
    #[must_use]
    pub const fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    // --- Dispatch ---

    /// Send a request with the token lifecycle applied.
    ///
    /// If an access token is stored it is attached as a bearer header. A 401
    /// on such a request triggers one refresh-and-retry; a second 401 is
    /// surfaced as-is. Requests sent while no access token is stored behave
    /// like anonymous requests.
    pub(crate) async fn execute(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        let Some(access) = self.tokens.load(TokenKind::Access) else {
            let resp = req.send().await?;
            return check_response(resp).await;
        };

        // Clone before attaching auth so the retry can attach a fresh token.
        let retry = req.try_clone();
        let resp = req.bearer_auth(&access).send().await?;
        if resp.status() != reqwest::StatusCode::UNAUTHORIZED {
            return check_response(resp).await;
        }
        let original_status = resp.status().as_u16();

        let Some(retry) = retry else {
            // Streaming bodies cannot be replayed; surface the 401 as-is.
            return check_response(resp).await;
        };

        tracing::debug!(status = original_status, "bearer request rejected; attempting refresh");
        let fresh = self.refresh_access(&access, original_status).await?;
        let resp = retry.bearer_auth(&fresh).send().await?;
        check_response(resp).await
    }

    /// Send a request without a bearer header and without the refresh path.
    ///
    /// A 401 here is an ordinary [`ApiError::Unauthorized`] (bad
    /// credentials), never a session-expiry trigger.
    pub(crate) async fn execute_anonymous(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        let resp = req.send().await?;
        check_response(resp).await
    }

    /// Exchange the refresh token for a new access token, single-flight.
    ///
    /// `stale` is the access token the failing request carried. Waiters that
    /// queue behind an in-flight refresh find the stored token already
    /// changed and reuse it without a second exchange.
    async fn refresh_access(&self, stale: &str, original_status: u16) -> Result<String, ApiError> {
        let _guard = self.refresh_gate.lock().await;

        if let Some(current) = self.tokens.load(TokenKind::Access) {
            if current != stale {
                tracing::debug!("access token already refreshed by a concurrent request");
                return Ok(current);
            }
        }

        let Some(refresh) = self.tokens.load(TokenKind::Refresh) else {
            tracing::warn!("access token rejected and no refresh token stored; clearing session");
            self.expire_session();
            return Err(ApiError::SessionExpired {
                status: original_status,
            });
        };

        // A transport failure here leaves the session intact: the refresh
        // token was never evaluated by the backend.
        let resp = self
            .http
            .post(self.url("/auth/token/refresh"))
            .json(&RefreshRequest { refresh: &refresh })
            .send()
            .await?;

        if !resp.status().is_success() {
            tracing::warn!(
                status = resp.status().as_u16(),
                "refresh token rejected; clearing session"
            );
            self.expire_session();
            return Err(ApiError::SessionExpired {
                status: original_status,
            });
        }

        let body: RefreshResponse = resp.json().await?;
        self.tokens.store(TokenKind::Access, &body.access)?;
        if let Some(rotated) = &body.refresh {
            self.tokens.store(TokenKind::Refresh, rotated)?;
        }
        tracing::debug!("access token refreshed");
        Ok(body.access)
    }

    /// Drop all local traces of the session after an irrecoverable refresh.
    fn expire_session(&self) {
        if let Err(error) = self.session.clear() {
            tracing::warn!(%error, "failed to clear session file");
        }
        if let Err(error) = self.tokens.clear() {
            tracing::warn!(%error, "failed to clear stored credentials");
        }
    }

    // --- JSON helpers used by the resource modules ---

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.execute(self.http.get(self.url(path))).await?;
        Ok(resp.json().await?)
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self
            .execute(self.http.post(self.url(path)).json(body))
            .await?;
        Ok(resp.json().await?)
    }

    pub(crate) async fn patch_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self
            .execute(self.http.patch(self.url(path)).json(body))
            .await?;
        Ok(resp.json().await?)
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(self.http.delete(self.url(path))).await?;
        Ok(())
    }

    pub(crate) async fn post_json_anonymous<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self
            .execute_anonymous(self.http.post(self.url(path)).json(body))
            .await?;
        Ok(resp.json().await?)
    }

    pub(crate) async fn get_anonymous(&self, path: &str) -> Result<reqwest::Response, ApiError> {
        self.execute_anonymous(self.http.get(self.url(path))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(root: &std::path::Path) -> ApiClient {
        let config = ApiConfig {
            base_url: "http://localhost:8000/api".into(),
            ..Default::default()
        };
        ApiClient::new(
            &config,
            SessionStore::with_root(root),
            TokenStore::file_only(root),
        )
    }

    #[test]
    fn url_joins_paths() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let client = test_client(tmp.path());
        assert_eq!(
            client.url("/organizations/acme"),
            "http://localhost:8000/api/organizations/acme"
        );
        assert_eq!(client.base_url(), "http://localhost:8000/api");
    }

    #[test]
    fn refresh_response_tolerates_missing_rotation() {
        let fixed: RefreshResponse =
            serde_json::from_str(r#"{"access": "new_access"}"#).expect("parses");
        assert_eq!(fixed.access, "new_access");
        assert!(fixed.refresh.is_none());

        let rotated: RefreshResponse =
            serde_json::from_str(r#"{"access": "a2", "refresh": "r2"}"#).expect("parses");
        assert_eq!(rotated.refresh.as_deref(), Some("r2"));
    }
}
