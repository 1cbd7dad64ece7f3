use chrono::NaiveDate;
use clap::{Args, Subcommand};

/// Sale commands (seller area).
#[derive(Clone, Debug, Subcommand)]
pub enum SaleCommands {
    /// Record a sale.
    New(SaleNewArgs),
    /// List this seller's recorded sales.
    List(SaleListArgs),
    /// Sales totals for this seller.
    Summary(SaleListArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SaleNewArgs {
    /// Line item as `product_id:quantity` (repeatable).
    #[arg(long = "item", required = true)]
    pub items: Vec<String>,
    /// Client id to attach to the sale.
    #[arg(long)]
    pub client: Option<String>,
    /// Payment method id.
    #[arg(long = "payment-method")]
    pub payment_method: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SaleListArgs {
    /// Only sales on or after this date (YYYY-MM-DD).
    #[arg(long)]
    pub from: Option<NaiveDate>,
    /// Only sales on or before this date (YYYY-MM-DD).
    #[arg(long)]
    pub to: Option<NaiveDate>,
}
