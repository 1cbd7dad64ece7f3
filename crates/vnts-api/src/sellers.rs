//! Seller CRUD.

use vnts_core::ListEnvelope;
use vnts_core::models::{NewSeller, Seller, SellerUpdate};

use crate::client::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// List the organization's sellers.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, auth or backend failure.
    pub async fn list_sellers(&self) -> Result<Vec<Seller>, ApiError> {
        let envelope: ListEnvelope<Seller> = self.get_json("/sellers").await?;
        Ok(envelope.into_vec())
    }

    /// Fetch one seller by id. Used to refresh the displayed name of a
    /// signed-in seller.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, auth or backend failure.
    pub async fn get_seller(&self, id: &str) -> Result<Seller, ApiError> {
        self.get_json(&format!("/sellers/{}", urlencoding::encode(id)))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, auth or backend failure.
    pub async fn create_seller(&self, seller: &NewSeller) -> Result<Seller, ApiError> {
        self.post_json("/sellers", seller).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, auth or backend failure.
    pub async fn update_seller(&self, id: &str, update: &SellerUpdate) -> Result<Seller, ApiError> {
        self.patch_json(&format!("/sellers/{}", urlencoding::encode(id)), update)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, auth or backend failure.
    pub async fn delete_seller(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/sellers/{}", urlencoding::encode(id)))
            .await
    }
}
