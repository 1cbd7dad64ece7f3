use clap::Subcommand;

/// Local configuration commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ConfigCommands {
    /// Write a starter config file with the defaults.
    Init {
        /// Write to the user config dir instead of `./.vnts`.
        #[arg(long)]
        global: bool,
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
    /// Show the effective merged configuration.
    Show,
}
