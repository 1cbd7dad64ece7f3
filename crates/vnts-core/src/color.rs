//! Accent color parsing.
//!
//! Tenant branding carries a hex color triplet. Input is normalized (trim,
//! lowercase, `#` prefix, 3 to 6 digit expansion) and then validated; anything
//! that is not a hex triplet after normalization is rejected rather than
//! coerced.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("color value is empty")]
    Empty,
    #[error("not a 3- or 6-digit hex color: {input:?}")]
    Malformed { input: String },
}

/// A validated hex color, always stored in `#rrggbb` form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Normalize and validate a hex color.
    ///
    /// Accepts `fff`, `#fff`, `FFFFFF`, `  #abc123  `; rejects anything that
    /// is not exactly 3 or 6 hex digits after trimming and stripping a `#`.
    ///
    /// # Errors
    ///
    /// [`ColorError::Empty`] for blank input, [`ColorError::Malformed`] for
    /// anything that does not normalize to a hex triplet.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ColorError::Empty);
        }

        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed).to_lowercase();
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::Malformed {
                input: input.to_string(),
            });
        }

        let expanded = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits,
            _ => {
                return Err(ColorError::Malformed {
                    input: input.to_string(),
                });
            }
        };

        Ok(Self(format!("#{expanded}")))
    }

    /// The normalized `#rrggbb` form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode into RGB components for terminal truecolor rendering.
    #[must_use]
    pub fn rgb(&self) -> (u8, u8, u8) {
        let digits = &self.0[1..];
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).unwrap_or(0)
        };
        (channel(0..2), channel(2..4), channel(4..6))
    }
}

impl std::str::FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

/// Check a raw string without keeping the parsed value.
#[must_use]
pub fn is_valid_hex_color(input: &str) -> bool {
    HexColor::parse(input).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn accepts_short_form() {
        assert_eq!(HexColor::parse("fff").unwrap().as_str(), "#ffffff");
        assert_eq!(HexColor::parse("#fff").unwrap().as_str(), "#ffffff");
    }

    #[test]
    fn accepts_long_form_and_lowercases() {
        assert_eq!(HexColor::parse("FFFFFF").unwrap().as_str(), "#ffffff");
        assert_eq!(HexColor::parse("#A1B2C3").unwrap().as_str(), "#a1b2c3");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(HexColor::parse("  #abc123  ").unwrap().as_str(), "#abc123");
    }

    #[test]
    fn expands_three_digit_form() {
        assert_eq!(HexColor::parse("#1a2").unwrap().as_str(), "#11aa22");
    }

    #[test]
    fn rejects_invalid_input() {
        assert_eq!(HexColor::parse(""), Err(ColorError::Empty));
        assert_eq!(HexColor::parse("   "), Err(ColorError::Empty));
        assert!(matches!(
            HexColor::parse("redish"),
            Err(ColorError::Malformed { .. })
        ));
        assert!(matches!(
            HexColor::parse("#12"),
            Err(ColorError::Malformed { .. })
        ));
        assert!(matches!(
            HexColor::parse("#1234"),
            Err(ColorError::Malformed { .. })
        ));
    }

    #[test]
    fn validity_helper_matches_parse() {
        for accepted in ["fff", "#fff", "FFFFFF", "  #abc123  "] {
            assert!(is_valid_hex_color(accepted), "{accepted:?} should parse");
        }
        for rejected in ["redish", "#12", ""] {
            assert!(!is_valid_hex_color(rejected), "{rejected:?} should fail");
        }
    }

    #[test]
    fn rgb_components() {
        assert_eq!(HexColor::parse("#112233").unwrap().rgb(), (0x11, 0x22, 0x33));
        assert_eq!(HexColor::parse("fff").unwrap().rgb(), (255, 255, 255));
    }

    #[test]
    fn serde_validates_on_deserialize() {
        let color: HexColor = serde_json::from_str("\"#ABC\"").unwrap();
        assert_eq!(color.as_str(), "#aabbcc");
        assert!(serde_json::from_str::<HexColor>("\"nope\"").is_err());
    }
}
