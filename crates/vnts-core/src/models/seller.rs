use serde::{Deserialize, Serialize};

use crate::de;

use super::default_true;

/// A seller account. Sellers sign in with their organization slug plus
/// a short numeric code instead of email credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    #[serde(deserialize_with = "de::id_string")]
    pub id: String,
    pub name: String,
    pub code: String,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    pub commission_rate: Option<f64>,
    #[serde(default, deserialize_with = "de::id_string_vec")]
    pub branches: Vec<String>,
    #[serde(default, deserialize_with = "de::opt_id_string")]
    pub organization_id: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewSeller {
    pub name: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commission_rate: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub branches: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SellerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commission_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branches: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn seller_branches_accept_numeric_ids() {
        let seller: Seller = serde_json::from_str(
            r#"{"id": 4, "name": "Ana", "code": "1234", "branches": [1, "2"]}"#,
        )
        .unwrap();
        assert_eq!(seller.branches, vec!["1".to_string(), "2".to_string()]);
        assert!(seller.is_active);
        assert_eq!(seller.commission_rate, None);
    }
}
