//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Organization slug assumed when a command does not pass `--org`.
    #[serde(default)]
    pub default_org: String,

    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_org: String::new(),
            default_limit: default_limit(),
        }
    }
}

impl GeneralConfig {
    /// The configured default organization slug, if any.
    #[must_use]
    pub fn default_org(&self) -> Option<&str> {
        if self.default_org.is_empty() {
            None
        } else {
            Some(&self.default_org)
        }
    }
}
