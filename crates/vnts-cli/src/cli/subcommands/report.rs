use chrono::NaiveDate;
use clap::Subcommand;

/// Admin report commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ReportCommands {
    /// Per-seller sales aggregates.
    Sales {
        /// Restrict to one seller id.
        #[arg(long)]
        seller: Option<String>,
        /// Restrict to one branch id.
        #[arg(long)]
        branch: Option<String>,
        /// Only sales on or after this date (YYYY-MM-DD).
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Only sales on or before this date (YYYY-MM-DD).
        #[arg(long)]
        to: Option<NaiveDate>,
    },
}
