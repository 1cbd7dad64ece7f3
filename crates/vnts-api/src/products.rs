//! Product CRUD.

use vnts_core::ListEnvelope;
use vnts_core::models::{NewProduct, Product, ProductUpdate};

use crate::client::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// List products, optionally scoped to one branch.
    ///
    /// Sellers resolve their active branch before loading products, so the
    /// filter is what keeps a branch terminal from seeing the whole
    /// organization's stock.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, auth or backend failure.
    pub async fn list_products(&self, branch_id: Option<&str>) -> Result<Vec<Product>, ApiError> {
        let path = match branch_id {
            Some(id) => format!("/products?branch={}", urlencoding::encode(id)),
            None => "/products".to_string(),
        };
        let envelope: ListEnvelope<Product> = self.get_json(&path).await?;
        Ok(envelope.into_vec())
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, auth or backend failure.
    pub async fn create_product(&self, product: &NewProduct) -> Result<Product, ApiError> {
        self.post_json("/products", product).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, auth or backend failure.
    pub async fn update_product(
        &self,
        id: &str,
        update: &ProductUpdate,
    ) -> Result<Product, ApiError> {
        self.patch_json(&format!("/products/{}", urlencoding::encode(id)), update)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, auth or backend failure.
    pub async fn delete_product(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/products/{}", urlencoding::encode(id)))
            .await
    }
}
