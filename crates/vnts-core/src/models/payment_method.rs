use serde::{Deserialize, Serialize};

use crate::de;

use super::default_true;

/// A tender type accepted at checkout (cash, card, transfer, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    #[serde(deserialize_with = "de::id_string")]
    pub id: String,
    pub name: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewPaymentMethod {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
