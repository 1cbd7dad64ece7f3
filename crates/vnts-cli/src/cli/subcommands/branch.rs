use clap::Subcommand;

/// Branch commands.
#[derive(Clone, Debug, Subcommand)]
pub enum BranchCommands {
    /// List branches.
    List,
    /// Create a branch.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        address: Option<String>,
    },
    /// Update a branch.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        address: Option<String>,
    },
    /// Delete a branch.
    Delete { id: String },
    /// Choose the active branch for this seller session.
    Select { id: String },
}
