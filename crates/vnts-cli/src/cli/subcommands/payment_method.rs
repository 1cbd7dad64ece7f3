use clap::Subcommand;

/// Payment method commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PaymentMethodCommands {
    /// List payment methods.
    List,
    /// Create a payment method.
    Create {
        #[arg(long)]
        name: String,
    },
    /// Update a payment method.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        active: Option<bool>,
    },
    /// Delete a payment method.
    Delete { id: String },
}
