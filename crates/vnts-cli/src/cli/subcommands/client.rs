use clap::Subcommand;

/// Customer record commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ClientCommands {
    /// List clients.
    List,
    /// Create a client.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Update a client.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Delete a client.
    Delete { id: String },
}
