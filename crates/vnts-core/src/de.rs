//! Wire-shape adapters applied at the deserialization boundary.
//!
//! The backend is loose about scalar shapes: primary keys arrive as numbers
//! or strings depending on the endpoint, and decimal fields are serialized as
//! strings by the backend's JSON layer. These helpers normalize both so the
//! typed models stay uniform.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDecimal {
    Number(f64),
    Text(String),
}

/// Deserialize an id that may arrive as a JSON number or string into `String`.
///
/// # Errors
///
/// Propagates the underlying deserializer error for any other shape.
pub fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

/// Deserialize an optional id with the same number-or-string tolerance.
///
/// # Errors
///
/// Propagates the underlying deserializer error for any other shape.
pub fn opt_id_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(deserializer)?.map(|raw| match raw {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    }))
}

/// Deserialize a list of ids with the number-or-string tolerance of
/// [`id_string`].
///
/// # Errors
///
/// Propagates the underlying deserializer error for any other shape.
pub fn id_string_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Vec::<RawId>::deserialize(deserializer)?
        .into_iter()
        .map(|raw| match raw {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        })
        .collect())
}

/// Deserialize a decimal that may arrive as a JSON number or numeric string.
///
/// # Errors
///
/// Fails when a string value does not parse as a number.
pub fn decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawDecimal::deserialize(deserializer)? {
        RawDecimal::Number(n) => Ok(n),
        RawDecimal::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid decimal string {s:?}"))),
    }
}

/// Optional variant of [`decimal`].
///
/// # Errors
///
/// Fails when a string value does not parse as a number.
pub fn opt_decimal<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawDecimal>::deserialize(deserializer)?
        .map(|raw| match raw {
            RawDecimal::Number(n) => Ok(n),
            RawDecimal::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| serde::de::Error::custom(format!("invalid decimal string {s:?}"))),
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Deserialize)]
    struct Record {
        #[serde(deserialize_with = "id_string")]
        id: String,
        #[serde(deserialize_with = "decimal")]
        price: f64,
        #[serde(default, deserialize_with = "opt_decimal")]
        rate: Option<f64>,
        #[serde(default, deserialize_with = "opt_id_string")]
        branch: Option<String>,
    }

    #[test]
    fn numeric_id_becomes_string() {
        let record: Record = serde_json::from_str(r#"{"id":42,"price":1.5}"#).unwrap();
        assert_eq!(record.id, "42");
    }

    #[test]
    fn string_shapes_pass_through() {
        let record: Record =
            serde_json::from_str(r#"{"id":"p-1","price":"19.90","rate":"0.05","branch":7}"#)
                .unwrap();
        assert_eq!(record.id, "p-1");
        assert!((record.price - 19.90).abs() < f64::EPSILON);
        assert_eq!(record.rate, Some(0.05));
        assert_eq!(record.branch.as_deref(), Some("7"));
    }

    #[test]
    fn garbage_decimal_string_is_rejected() {
        assert!(serde_json::from_str::<Record>(r#"{"id":"1","price":"cheap"}"#).is_err());
    }
}
