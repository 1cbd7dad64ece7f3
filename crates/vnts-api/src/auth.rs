//! Sign-in flows and identity mapping.
//!
//! These endpoints are anonymous by contract: they never carry a bearer
//! header, so a 401 from them means bad credentials, not an expired
//! session. On success the flows persist the returned tokens and write the
//! mapped [`Identity`] to the session store as one whole value.

use serde::{Deserialize, Serialize};

use vnts_core::{Identity, Role, de};
use vnts_session::TokenKind;

use crate::client::ApiClient;
use crate::error::ApiError;

#[derive(Deserialize)]
struct WireUser {
    #[serde(deserialize_with = "de::id_string")]
    id: String,
    email: String,
    #[serde(default)]
    full_name: Option<String>,
    #[serde(default)]
    role: Option<Role>,
    /// Tenant scope; a sign-in payload without it is malformed.
    #[serde(deserialize_with = "de::id_string")]
    organization: String,
}

impl WireUser {
    fn into_identity(self) -> Identity {
        Identity {
            id: self.id,
            email: self.email,
            role: self.role.unwrap_or(Role::Admin),
            name: self.full_name.unwrap_or_default(),
            organization_id: self.organization,
            active_branch_id: None,
            active_branch_name: None,
        }
    }
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    access: String,
    refresh: String,
    user: WireUser,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    email: &'a str,
    password: &'a str,
    full_name: &'a str,
    organization_name: &'a str,
}

#[derive(Serialize)]
struct SellerLoginRequest<'a> {
    code: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    organization: Option<&'a str>,
}

/// The slice of the seller payload the identity needs. Unlike the list
/// endpoints, seller login always states the organization.
#[derive(Deserialize)]
struct WireSeller {
    #[serde(deserialize_with = "de::id_string")]
    id: String,
    name: String,
    #[serde(deserialize_with = "de::id_string")]
    organization_id: String,
}

#[derive(Deserialize)]
struct SellerLoginResponse {
    seller: WireSeller,
    /// Legacy backends issue no tokens for sellers.
    #[serde(default)]
    access: Option<String>,
    #[serde(default)]
    refresh: Option<String>,
}

impl ApiClient {
    /// Email/password sign-in (the admin entry).
    ///
    /// Persists the returned access and refresh tokens and the mapped
    /// identity.
    ///
    /// # Errors
    ///
    /// [`ApiError::Unauthorized`] for bad credentials (the session is left
    /// untouched); other [`ApiError`] variants for transport, backend or
    /// storage failures.
    pub async fn login(&self, email: &str, password: &str) -> Result<Identity, ApiError> {
        let resp: LoginResponse = self
            .post_json_anonymous("/auth/login", &LoginRequest { email, password })
            .await?;
        self.tokens().store(TokenKind::Access, &resp.access)?;
        self.tokens().store(TokenKind::Refresh, &resp.refresh)?;

        let identity = resp.user.into_identity();
        self.session().write(&identity)?;
        tracing::info!(user = %identity.email, "signed in");
        Ok(identity)
    }

    /// Create an owner account plus its organization, then behave like
    /// [`ApiClient::login`].
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::login`]; field-level rejections arrive as
    /// [`ApiError::Api`] with the backend's validation body.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
        organization_name: &str,
    ) -> Result<Identity, ApiError> {
        let resp: LoginResponse = self
            .post_json_anonymous(
                "/auth/register",
                &RegisterRequest {
                    email,
                    password,
                    full_name,
                    organization_name,
                },
            )
            .await?;
        self.tokens().store(TokenKind::Access, &resp.access)?;
        self.tokens().store(TokenKind::Refresh, &resp.refresh)?;

        let identity = resp.user.into_identity();
        self.session().write(&identity)?;
        tracing::info!(user = %identity.email, "account registered");
        Ok(identity)
    }

    /// Seller code sign-in.
    ///
    /// The identity gets an empty email and the seller's organization id.
    /// Tokens are stored only when the backend issues them; without tokens
    /// the client runs in the credential-less seller mode and any 401 later
    /// is an ordinary error.
    ///
    /// # Errors
    ///
    /// [`ApiError::Unauthorized`] for an unknown code; other [`ApiError`]
    /// variants for transport, backend or storage failures.
    pub async fn seller_login(
        &self,
        code: &str,
        organization: Option<&str>,
    ) -> Result<Identity, ApiError> {
        let resp: SellerLoginResponse = self
            .post_json_anonymous("/auth/seller-login", &SellerLoginRequest { code, organization })
            .await?;
        if let Some(access) = &resp.access {
            self.tokens().store(TokenKind::Access, access)?;
        }
        if let Some(refresh) = &resp.refresh {
            self.tokens().store(TokenKind::Refresh, refresh)?;
        }

        let seller = resp.seller;
        let identity = Identity {
            id: seller.id,
            email: String::new(),
            role: Role::Seller,
            name: seller.name,
            organization_id: seller.organization_id,
            active_branch_id: None,
            active_branch_name: None,
        };
        self.session().write(&identity)?;
        tracing::info!(seller = %identity.name, "seller signed in");
        Ok(identity)
    }

    /// Fetch the identity the backend currently associates with the access
    /// token. Does not touch the session store.
    ///
    /// # Errors
    ///
    /// [`ApiError::SessionExpired`] when the token can no longer be
    /// refreshed; other [`ApiError`] variants otherwise.
    pub async fn me(&self) -> Result<Identity, ApiError> {
        let user: WireUser = self.get_json("/auth/me").await?;
        Ok(user.into_identity())
    }

    /// Forget the local session: stored identity and both credentials.
    ///
    /// Purely local; the backend keeps its refresh token blacklist.
    ///
    /// # Errors
    ///
    /// Propagates [`vnts_session::SessionError`] when local storage cannot
    /// be cleared.
    pub fn logout(&self) -> Result<(), ApiError> {
        self.session().clear()?;
        self.tokens().clear()?;
        tracing::info!("signed out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_user_maps_to_admin_identity() {
        let user: WireUser = serde_json::from_str(
            r#"{"id": 9, "email": "owner@acme.example", "full_name": "Owner", "organization": 7}"#,
        )
        .expect("parses");
        let identity = user.into_identity();
        assert_eq!(identity.id, "9");
        assert_eq!(identity.role, Role::Admin);
        assert_eq!(identity.name, "Owner");
        assert_eq!(identity.organization_id, "7");
        assert!(identity.active_branch_id.is_none());
    }

    #[test]
    fn wire_user_respects_explicit_role() {
        let user: WireUser = serde_json::from_str(
            r#"{"id": "3", "email": "s@acme.example", "role": "seller", "organization": "7"}"#,
        )
        .expect("parses");
        assert_eq!(user.into_identity().role, Role::Seller);
    }

    #[test]
    fn wire_user_without_organization_is_rejected() {
        let result =
            serde_json::from_str::<WireUser>(r#"{"id": "3", "email": "s@acme.example"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn seller_login_response_tolerates_missing_tokens() {
        let resp: SellerLoginResponse = serde_json::from_str(
            r#"{"seller": {"id": 4, "name": "Ana", "code": "1234", "organization_id": 7}}"#,
        )
        .expect("parses");
        assert!(resp.access.is_none());
        assert!(resp.refresh.is_none());
        assert_eq!(resp.seller.organization_id, "7");
    }
}
