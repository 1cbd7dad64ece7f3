use clap::Subcommand;

/// Product commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProductCommands {
    /// List products, optionally for one branch.
    List {
        #[arg(long)]
        branch: Option<String>,
    },
    /// Create a product.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: f64,
        #[arg(long)]
        stock: Option<i64>,
        #[arg(long)]
        branch: Option<String>,
    },
    /// Update a product.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        price: Option<f64>,
        #[arg(long)]
        stock: Option<i64>,
        #[arg(long)]
        branch: Option<String>,
    },
    /// Delete a product.
    Delete { id: String },
}
