//! Tenant directory lookup.

use vnts_core::models::Organization;

use crate::client::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// Look up an organization by its URL slug.
    ///
    /// Anonymous by contract (branding resolution happens before sign-in).
    /// Returns `Ok(None)` for an unknown slug; every other failure is an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures and non-404 error
    /// statuses.
    pub async fn organization_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<Organization>, ApiError> {
        let path = format!("/organizations/{}", urlencoding::encode(slug));
        match self.get_anonymous(&path).await {
            Ok(resp) => Ok(Some(resp.json().await?)),
            Err(ApiError::Api { status: 404, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
