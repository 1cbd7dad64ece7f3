use serde::{Deserialize, Serialize};

use crate::de;

/// A physical point-of-sale location within an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    #[serde(deserialize_with = "de::id_string")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
}

/// Create payload.
#[derive(Debug, Clone, Serialize)]
pub struct NewBranch {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Partial update payload: only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BranchUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}
