use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AuthCommands, BranchCommands, ClientCommands, ConfigCommands, OrgCommands,
    PaymentMethodCommands, ProductCommands, ReportCommands, SaleCommands, SellerCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Authentication and session.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Organization branding lookup.
    Org {
        #[command(subcommand)]
        action: OrgCommands,
    },
    /// Evaluate a path through branding resolution and the role gate.
    Open(OpenArgs),
    /// Branches.
    Branch {
        #[command(subcommand)]
        action: BranchCommands,
    },
    /// Products.
    Product {
        #[command(subcommand)]
        action: ProductCommands,
    },
    /// Sellers.
    Seller {
        #[command(subcommand)]
        action: SellerCommands,
    },
    /// Clients.
    Client {
        #[command(subcommand)]
        action: ClientCommands,
    },
    /// Payment methods.
    PaymentMethod {
        #[command(subcommand)]
        action: PaymentMethodCommands,
    },
    /// Sales (seller area).
    Sale {
        #[command(subcommand)]
        action: SaleCommands,
    },
    /// Admin reports.
    Report {
        #[command(subcommand)]
        action: ReportCommands,
    },
    /// Local configuration.
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Arguments for `vnts open`.
#[derive(Clone, Debug, Args)]
pub struct OpenArgs {
    /// Path to navigate, e.g. `/acme/admin/products` or `/seller`.
    pub path: String,
}
