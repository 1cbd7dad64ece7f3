use anyhow::Context;

use vnts_config::VntsConfig;

use crate::cli::GlobalFlags;

/// Load the merged configuration and apply per-invocation overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<VntsConfig> {
    let mut config = VntsConfig::load_with_dotenv().context("failed to load configuration")?;

    if let Some(base_url) = &flags.base_url {
        config.api.base_url = base_url.clone();
        config.validate().context("invalid --base-url")?;
    }

    Ok(config)
}
