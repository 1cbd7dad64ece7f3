use serde::{Deserialize, Serialize};

use crate::de;

/// A tenant record from the organization directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    #[serde(deserialize_with = "de::id_string")]
    pub id: String,
    pub name: String,
    pub slug: String,
    /// Raw accent color as stored server-side. Validated by the branding
    /// resolver, not here: an invalid value falls back to the default accent.
    #[serde(default)]
    pub primary_color: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_id_and_missing_color_deserialize() {
        let org: Organization =
            serde_json::from_str(r#"{"id":3,"name":"Acme","slug":"acme"}"#).unwrap();
        assert_eq!(org.id, "3");
        assert!(org.primary_color.is_none());
    }
}
