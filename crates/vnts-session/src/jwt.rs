//! Best-effort JWT expiry inspection.
//!
//! Expiry is authoritatively discovered by the backend (a 401 response);
//! this decode exists for `auth status` display and diagnostics only.

use base64::Engine as _;
use chrono::{DateTime, Utc};

use crate::error::SessionError;

/// Decode the `exp` claim from a JWT without verifying its signature.
///
/// # Errors
///
/// Returns [`SessionError::InvalidJwt`] if the token is not three
/// dot-separated parts, the payload is not base64/JSON, or the `exp` claim
/// is missing or out of range.
pub fn decode_expiry(jwt: &str) -> Result<DateTime<Utc>, SessionError> {
    let parts: Vec<&str> = jwt.split('.').collect();
    if parts.len() != 3 {
        return Err(SessionError::InvalidJwt("invalid JWT format".into()));
    }
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1])
        .map_err(|e| SessionError::InvalidJwt(format!("base64 decode failed: {e}")))?;
    let value: serde_json::Value = serde_json::from_slice(&payload)
        .map_err(|e| SessionError::InvalidJwt(format!("JSON parse failed: {e}")))?;
    let exp = value["exp"]
        .as_i64()
        .ok_or_else(|| SessionError::InvalidJwt("missing exp claim".into()))?;
    DateTime::from_timestamp(exp, 0)
        .ok_or_else(|| SessionError::InvalidJwt("invalid exp timestamp".into()))
}

/// Whether a stored token is already past its `exp` claim.
///
/// Returns `None` when the token cannot be decoded; the caller treats that
/// as unknown rather than expired.
#[must_use]
pub fn is_expired(jwt: &str) -> Option<bool> {
    decode_expiry(jwt).ok().map(|exp| exp <= Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_jwt_with_exp(exp: i64) -> String {
        let header = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256"}"#);
        let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .encode(format!(r#"{{"user_id":12,"exp":{exp}}}"#));
        let signature = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode("fake_sig");
        format!("{header}.{payload}.{signature}")
    }

    #[test]
    fn decode_expiry_valid_jwt() {
        let future_exp = Utc::now().timestamp() + 3600;
        let jwt = make_jwt_with_exp(future_exp);
        let dt = decode_expiry(&jwt).expect("decodes");
        assert_eq!(dt.timestamp(), future_exp);
        assert_eq!(is_expired(&jwt), Some(false));
    }

    #[test]
    fn decode_expiry_expired_jwt() {
        let past_exp = Utc::now().timestamp() - 3600;
        let jwt = make_jwt_with_exp(past_exp);
        let dt = decode_expiry(&jwt).expect("decodes");
        assert!(dt < Utc::now());
        assert_eq!(is_expired(&jwt), Some(true));
    }

    #[test]
    fn decode_expiry_invalid_format() {
        let result = decode_expiry("not-a-jwt");
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("invalid JWT format")
        );
        assert_eq!(is_expired("not-a-jwt"), None);
    }

    #[test]
    fn decode_expiry_missing_exp_claim() {
        let header = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256"}"#);
        let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(r#"{"user_id":12}"#);
        let signature = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode("fake_sig");
        let jwt = format!("{header}.{payload}.{signature}");

        let result = decode_expiry(&jwt);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("missing exp claim")
        );
    }

    #[test]
    fn decode_expiry_bad_base64() {
        let result = decode_expiry("header.!!!invalid!!!.signature");
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("base64 decode failed")
        );
    }
}
