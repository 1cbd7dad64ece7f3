use clap::Subcommand;

/// Organization directory commands.
#[derive(Clone, Debug, Subcommand)]
pub enum OrgCommands {
    /// Resolve branding for an organization slug.
    Show { slug: String },
}
