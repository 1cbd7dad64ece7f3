use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Sign in as an organization admin.
    Login(LoginArgs),
    /// Sign in as a seller with a numeric code.
    SellerLogin(SellerLoginArgs),
    /// Create an owner account and its organization.
    Register(RegisterArgs),
    /// Clear the stored session and credentials.
    Logout,
    /// Show the stored session and credential sources.
    Status,
    /// Re-fetch the identity from the backend.
    Whoami,
}

#[derive(Clone, Debug, Args)]
pub struct LoginArgs {
    /// Account email address.
    #[arg(long)]
    pub email: String,
    /// Account password.
    #[arg(long)]
    pub password: String,
}

#[derive(Clone, Debug, Args)]
pub struct SellerLoginArgs {
    /// Seller access code (4-8 digits).
    #[arg(long)]
    pub code: String,
    /// Organization slug (falls back to `general.default_org`).
    #[arg(long)]
    pub org: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct RegisterArgs {
    /// Email address for the new owner account.
    #[arg(long)]
    pub email: String,
    /// Password for the new owner account.
    #[arg(long)]
    pub password: String,
    /// Display name of the owner.
    #[arg(long = "name")]
    pub full_name: String,
    /// Name of the organization to create.
    #[arg(long = "organization")]
    pub organization_name: String,
}
