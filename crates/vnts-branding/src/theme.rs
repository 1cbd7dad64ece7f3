//! Shared accent color for terminal output.
//!
//! The resolver writes the accent once per resolution; the renderer reads it
//! every time it paints a heading or table border. Both sides hold a clone of
//! the same [`Theme`] handle.

use std::sync::{Arc, PoisonError, RwLock};

use vnts_core::HexColor;

/// Fallback accent applied before any organization is resolved.
pub const DEFAULT_PRIMARY_COLOR: &str = "#1976d2";

const DEFAULT_ACCENT_RGB: (u8, u8, u8) = (0x19, 0x76, 0xd2);

/// Mutable accent shared between the branding resolver and the renderer.
///
/// Cloning is cheap and every clone observes the same accent.
#[derive(Debug, Clone)]
pub struct Theme {
    accent: Arc<RwLock<(u8, u8, u8)>>,
}

impl Theme {
    #[must_use]
    pub fn new() -> Self {
        Self {
            accent: Arc::new(RwLock::new(DEFAULT_ACCENT_RGB)),
        }
    }

    /// Replace the accent. Applying the same color twice is a no-op.
    pub fn apply(&self, color: &HexColor) {
        let mut accent = self
            .accent
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *accent = color.rgb();
    }

    /// Reset to the default accent.
    pub fn reset(&self) {
        let mut accent = self
            .accent
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *accent = DEFAULT_ACCENT_RGB;
    }

    #[must_use]
    pub fn accent_rgb(&self) -> (u8, u8, u8) {
        *self.accent.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Wrap `text` in a truecolor escape using the current accent.
    ///
    /// Callers decide whether color is enabled at all; this only does the
    /// wrapping.
    #[must_use]
    pub fn paint(&self, text: &str) -> String {
        let (r, g, b) = self.accent_rgb();
        format!("\x1b[38;2;{r};{g};{b}m{text}\x1b[0m")
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}
