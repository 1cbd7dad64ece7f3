use clap::Subcommand;

/// Seller commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SellerCommands {
    /// List sellers.
    List,
    /// Create a seller with a numeric sign-in code.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        code: String,
        #[arg(long)]
        commission_rate: Option<f64>,
        /// Branch id the seller works at (repeatable).
        #[arg(long = "branch")]
        branches: Vec<String>,
    },
    /// Update a seller.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        code: Option<String>,
        #[arg(long)]
        commission_rate: Option<f64>,
        /// Replace the branch assignment (repeatable).
        #[arg(long = "branch")]
        branches: Vec<String>,
        #[arg(long)]
        active: Option<bool>,
    },
    /// Delete a seller.
    Delete { id: String },
}
