//! Payment method CRUD.

use vnts_core::ListEnvelope;
use vnts_core::models::{NewPaymentMethod, PaymentMethod, PaymentMethodUpdate};

use crate::client::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// List the organization's payment methods.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, auth or backend failure.
    pub async fn list_payment_methods(&self) -> Result<Vec<PaymentMethod>, ApiError> {
        let envelope: ListEnvelope<PaymentMethod> = self.get_json("/payment-methods").await?;
        Ok(envelope.into_vec())
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, auth or backend failure.
    pub async fn create_payment_method(
        &self,
        method: &NewPaymentMethod,
    ) -> Result<PaymentMethod, ApiError> {
        self.post_json("/payment-methods", method).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, auth or backend failure.
    pub async fn update_payment_method(
        &self,
        id: &str,
        update: &PaymentMethodUpdate,
    ) -> Result<PaymentMethod, ApiError> {
        self.patch_json(
            &format!("/payment-methods/{}", urlencoding::encode(id)),
            update,
        )
        .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, auth or backend failure.
    pub async fn delete_payment_method(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/payment-methods/{}", urlencoding::encode(id)))
            .await
    }
}
