use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::de;

/// One line of a sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleItem {
    #[serde(deserialize_with = "de::id_string")]
    pub product_id: String,
    #[serde(default)]
    pub product_name: Option<String>,
    pub quantity: u32,
    #[serde(deserialize_with = "de::decimal")]
    pub unit_price: f64,
}

/// A completed sale as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    #[serde(deserialize_with = "de::id_string")]
    pub id: String,
    #[serde(default, deserialize_with = "de::opt_id_string")]
    pub seller_id: Option<String>,
    #[serde(default, deserialize_with = "de::opt_id_string")]
    pub client_id: Option<String>,
    #[serde(default, deserialize_with = "de::opt_id_string")]
    pub payment_method_id: Option<String>,
    #[serde(deserialize_with = "de::decimal")]
    pub total: f64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub items: Vec<SaleItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewSaleItem {
    pub product_id: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewSale {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_id: Option<String>,
    pub items: Vec<NewSaleItem>,
}

/// Aggregates for the reports screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesSummary {
    #[serde(default)]
    pub sale_count: u64,
    #[serde(default, deserialize_with = "de::decimal")]
    pub total_amount: f64,
    #[serde(default, deserialize_with = "de::decimal")]
    pub commission_total: f64,
}

/// One row of the per-seller sales report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesReportRow {
    pub seller_name: String,
    #[serde(default)]
    pub sale_count: u64,
    #[serde(default, deserialize_with = "de::decimal")]
    pub total_amount: f64,
    #[serde(default, deserialize_with = "de::decimal")]
    pub commission: f64,
}
