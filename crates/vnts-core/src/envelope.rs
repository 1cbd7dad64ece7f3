//! List-response normalization.
//!
//! Backend list endpoints are inconsistent about their shape: some return a
//! bare JSON array, others a paginated `{"results": [...]}` envelope. Every
//! list response is deserialized through [`ListEnvelope`] so downstream code
//! only ever sees a `Vec`.

use serde::Deserialize;

/// Either a bare array or a `results` envelope, normalized via
/// [`ListEnvelope::into_vec`].
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Paginated { results: Vec<T> },
    Bare(Vec<T>),
}

impl<T> ListEnvelope<T> {
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Paginated { results } => results,
            Self::Bare(items) => items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Row {
        id: String,
    }

    #[test]
    fn bare_array_normalizes() {
        let rows: ListEnvelope<Row> = serde_json::from_str(r#"[{"id":"1"},{"id":"2"}]"#).unwrap();
        let rows = rows.into_vec();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "1");
    }

    #[test]
    fn results_envelope_normalizes() {
        let rows: ListEnvelope<Row> =
            serde_json::from_str(r#"{"results":[{"id":"9"}]}"#).unwrap();
        assert_eq!(rows.into_vec(), vec![Row { id: "9".into() }]);
    }

    #[test]
    fn empty_shapes_normalize_to_empty_vec() {
        let bare: ListEnvelope<Row> = serde_json::from_str("[]").unwrap();
        assert!(bare.into_vec().is_empty());
        let enveloped: ListEnvelope<Row> = serde_json::from_str(r#"{"results":[]}"#).unwrap();
        assert!(enveloped.into_vec().is_empty());
    }
}
