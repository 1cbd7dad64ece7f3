//! Client (customer) CRUD.

use vnts_core::ListEnvelope;
use vnts_core::models::{Client, ClientUpdate, NewClient};

use crate::client::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// List the organization's clients.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, auth or backend failure.
    pub async fn list_clients(&self) -> Result<Vec<Client>, ApiError> {
        let envelope: ListEnvelope<Client> = self.get_json("/clients").await?;
        Ok(envelope.into_vec())
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, auth or backend failure.
    pub async fn create_client(&self, client: &NewClient) -> Result<Client, ApiError> {
        self.post_json("/clients", client).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, auth or backend failure.
    pub async fn update_client(&self, id: &str, update: &ClientUpdate) -> Result<Client, ApiError> {
        self.patch_json(&format!("/clients/{}", urlencoding::encode(id)), update)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, auth or backend failure.
    pub async fn delete_client(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/clients/{}", urlencoding::encode(id)))
            .await
    }
}
