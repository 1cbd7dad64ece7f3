use anyhow::bail;
use serde::Serialize;

use vnts_core::models::{Client, ClientUpdate, NewClient};
use vnts_core::validate::{require_email, require_nonempty};
use vnts_routing::AdminPage;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ClientCommands;
use crate::commands::shared::gate::require_admin;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `vnts client <subcommand>`.
pub async fn handle(
    action: &ClientCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    require_admin(ctx.identity.as_ref(), AdminPage::Clients)?;
    match action {
        ClientCommands::List => list(ctx, flags).await,
        ClientCommands::Create { name, email, phone } => {
            create(name, email.as_deref(), phone.as_deref(), ctx, flags).await
        }
        ClientCommands::Update {
            id,
            name,
            email,
            phone,
        } => {
            update(
                id,
                name.as_deref(),
                email.as_deref(),
                phone.as_deref(),
                ctx,
                flags,
            )
            .await
        }
        ClientCommands::Delete { id } => delete(id, ctx, flags).await,
    }
}

#[derive(Serialize)]
struct ClientChanged {
    #[serde(skip_serializing_if = "Option::is_none")]
    created: Option<Client>,
    #[serde(skip_serializing_if = "Option::is_none")]
    updated: Option<Client>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deleted: Option<String>,
    clients: Vec<Client>,
}

async fn list(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let spinner = Progress::spinner("fetching clients");
    let clients = ctx.api.list_clients().await?;
    spinner.finish_clear();
    output(&clients, flags.format, &ctx.theme)
}

async fn create(
    name: &str,
    email: Option<&str>,
    phone: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    require_nonempty("name", name)?;
    if let Some(email) = email {
        require_email("email", email)?;
    }

    let spinner = Progress::spinner("creating client");
    let created = ctx
        .api
        .create_client(&NewClient {
            name: name.to_string(),
            email: email.map(str::to_string),
            phone: phone.map(str::to_string),
        })
        .await?;
    let clients = ctx.api.list_clients().await?;
    spinner.finish_clear();

    output(
        &ClientChanged {
            created: Some(created),
            updated: None,
            deleted: None,
            clients,
        },
        flags.format,
        &ctx.theme,
    )
}

async fn update(
    id: &str,
    name: Option<&str>,
    email: Option<&str>,
    phone: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if name.is_none() && email.is_none() && phone.is_none() {
        bail!("nothing to update; pass --name, --email or --phone");
    }
    if let Some(name) = name {
        require_nonempty("name", name)?;
    }
    if let Some(email) = email {
        require_email("email", email)?;
    }

    let spinner = Progress::spinner("updating client");
    let updated = ctx
        .api
        .update_client(
            id,
            &ClientUpdate {
                name: name.map(str::to_string),
                email: email.map(str::to_string),
                phone: phone.map(str::to_string),
            },
        )
        .await?;
    let clients = ctx.api.list_clients().await?;
    spinner.finish_clear();

    output(
        &ClientChanged {
            created: None,
            updated: Some(updated),
            deleted: None,
            clients,
        },
        flags.format,
        &ctx.theme,
    )
}

async fn delete(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let spinner = Progress::spinner("deleting client");
    ctx.api.delete_client(id).await?;
    let clients = ctx.api.list_clients().await?;
    spinner.finish_clear();

    output(
        &ClientChanged {
            created: None,
            updated: None,
            deleted: Some(id.to_string()),
            clients,
        },
        flags.format,
        &ctx.theme,
    )
}
