mod login;
mod logout;
mod register;
mod seller_login;
mod status;
mod whoami;

use serde::Serialize;

use vnts_core::{Identity, Role};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;
use crate::context::AppContext;

/// Handle `vnts auth <subcommand>`.
pub async fn handle(
    action: &AuthCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::handle(args, ctx, flags).await,
        AuthCommands::SellerLogin(args) => seller_login::handle(args, ctx, flags).await,
        AuthCommands::Register(args) => register::handle(args, ctx, flags).await,
        AuthCommands::Logout => logout::handle(ctx, flags),
        AuthCommands::Status => status::handle(ctx, flags),
        AuthCommands::Whoami => whoami::handle(ctx, flags).await,
    }
}

/// What the sign-in and whoami commands print.
#[derive(Serialize)]
pub(crate) struct SessionSnapshot {
    pub role: Role,
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
    pub organization_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_branch: Option<String>,
}

impl From<&Identity> for SessionSnapshot {
    fn from(identity: &Identity) -> Self {
        Self {
            role: identity.role,
            name: identity.name.clone(),
            email: identity.email.clone(),
            organization_id: identity.organization_id.clone(),
            active_branch: identity.active_branch_name.clone(),
        }
    }
}
