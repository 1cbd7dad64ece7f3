//! `vnts config` runs before the application context exists, so the
//! handlers here never touch the API client or the stored session.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use serde::Serialize;

use vnts_branding::Theme;
use vnts_config::VntsConfig;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::ConfigCommands;
use crate::output::output;

/// Handle `vnts config <subcommand>`.
pub fn handle(action: &ConfigCommands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        ConfigCommands::Init { global, force } => init(*global, *force, flags),
        ConfigCommands::Show => show(flags),
    }
}

#[derive(Serialize)]
struct ConfigWritten {
    written: String,
}

fn init(global: bool, force: bool, flags: &GlobalFlags) -> anyhow::Result<()> {
    let path = if global {
        global_config_path().context("no user config directory on this platform")?
    } else {
        PathBuf::from(".vnts/config.toml")
    };
    write_starter_config(&path, force)?;

    output(
        &ConfigWritten {
            written: path.display().to_string(),
        },
        flags.format,
        &Theme::new(),
    )
}

fn write_starter_config(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        bail!(
            "config already exists at {} (pass --force to overwrite)",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config dir {}", parent.display()))?;
    }
    let rendered =
        toml::to_string_pretty(&VntsConfig::default()).context("serialize default config")?;
    fs::write(path, rendered).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

fn show(flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = bootstrap::load_config(flags)?;
    output(&config, flags.format, &Theme::new())
}

/// Same location `vnts-config` reads its user-global layer from.
fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("vnts").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn starter_config_round_trips() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("nested/config.toml");

        write_starter_config(&path, false).expect("write starter config");

        let raw = fs::read_to_string(&path).expect("read back");
        let parsed: VntsConfig = toml::from_str(&raw).expect("parse starter config");
        assert_eq!(parsed.api.base_url, VntsConfig::default().api.base_url);
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn existing_config_needs_force() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");

        write_starter_config(&path, false).expect("first write");
        let err = write_starter_config(&path, false).unwrap_err();
        assert!(err.to_string().contains("--force"), "{err}");
        write_starter_config(&path, true).expect("forced overwrite");
    }
}
