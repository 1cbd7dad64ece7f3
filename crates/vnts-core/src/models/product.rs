use serde::{Deserialize, Serialize};

use crate::de;

/// A sellable item. Prices arrive as strings or numbers depending on
/// the backend serializer, so they are normalized on the way in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "de::id_string")]
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "de::decimal")]
    pub price: f64,
    #[serde(default)]
    pub stock: Option<i64>,
    #[serde(default, deserialize_with = "de::opt_id_string")]
    pub branch_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<String>,
}
