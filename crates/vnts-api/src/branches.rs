//! Branch CRUD.

use vnts_core::ListEnvelope;
use vnts_core::models::{Branch, BranchUpdate, NewBranch};

use crate::client::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// List the organization's branches.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, auth or backend failure.
    pub async fn list_branches(&self) -> Result<Vec<Branch>, ApiError> {
        let envelope: ListEnvelope<Branch> = self.get_json("/branches").await?;
        Ok(envelope.into_vec())
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, auth or backend failure.
    pub async fn create_branch(&self, branch: &NewBranch) -> Result<Branch, ApiError> {
        self.post_json("/branches", branch).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, auth or backend failure.
    pub async fn update_branch(&self, id: &str, update: &BranchUpdate) -> Result<Branch, ApiError> {
        self.patch_json(&format!("/branches/{}", urlencoding::encode(id)), update)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, auth or backend failure.
    pub async fn delete_branch(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/branches/{}", urlencoding::encode(id)))
            .await
    }
}
