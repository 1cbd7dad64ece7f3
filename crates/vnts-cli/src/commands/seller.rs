use anyhow::bail;
use serde::Serialize;

use vnts_core::models::{NewSeller, Seller, SellerUpdate};
use vnts_core::validate::{require_non_negative, require_nonempty, require_numeric_code};
use vnts_routing::AdminPage;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SellerCommands;
use crate::commands::shared::gate::require_admin;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `vnts seller <subcommand>`.
pub async fn handle(
    action: &SellerCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    require_admin(ctx.identity.as_ref(), AdminPage::Sellers)?;
    match action {
        SellerCommands::List => list(ctx, flags).await,
        SellerCommands::Create {
            name,
            code,
            commission_rate,
            branches,
        } => create(name, code, *commission_rate, branches, ctx, flags).await,
        SellerCommands::Update {
            id,
            name,
            code,
            commission_rate,
            branches,
            active,
        } => {
            update(
                id,
                name.as_deref(),
                code.as_deref(),
                *commission_rate,
                branches,
                *active,
                ctx,
                flags,
            )
            .await
        }
        SellerCommands::Delete { id } => delete(id, ctx, flags).await,
    }
}

#[derive(Serialize)]
struct SellerChanged {
    #[serde(skip_serializing_if = "Option::is_none")]
    created: Option<Seller>,
    #[serde(skip_serializing_if = "Option::is_none")]
    updated: Option<Seller>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deleted: Option<String>,
    sellers: Vec<Seller>,
}

async fn list(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let spinner = Progress::spinner("fetching sellers");
    let sellers = ctx.api.list_sellers().await?;
    spinner.finish_clear();
    output(&sellers, flags.format, &ctx.theme)
}

async fn create(
    name: &str,
    code: &str,
    commission_rate: Option<f64>,
    branches: &[String],
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    require_nonempty("name", name)?;
    require_numeric_code("code", code)?;
    if let Some(rate) = commission_rate {
        require_non_negative("commission-rate", rate)?;
    }

    let spinner = Progress::spinner("creating seller");
    let created = ctx
        .api
        .create_seller(&NewSeller {
            name: name.to_string(),
            code: code.trim().to_string(),
            commission_rate,
            branches: branches.to_vec(),
        })
        .await?;
    let sellers = ctx.api.list_sellers().await?;
    spinner.finish_clear();

    output(
        &SellerChanged {
            created: Some(created),
            updated: None,
            deleted: None,
            sellers,
        },
        flags.format,
        &ctx.theme,
    )
}

async fn update(
    id: &str,
    name: Option<&str>,
    code: Option<&str>,
    commission_rate: Option<f64>,
    branches: &[String],
    active: Option<bool>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if name.is_none()
        && code.is_none()
        && commission_rate.is_none()
        && branches.is_empty()
        && active.is_none()
    {
        bail!("nothing to update; pass --name, --code, --commission-rate, --branch or --active");
    }
    if let Some(name) = name {
        require_nonempty("name", name)?;
    }
    if let Some(code) = code {
        require_numeric_code("code", code)?;
    }
    if let Some(rate) = commission_rate {
        require_non_negative("commission-rate", rate)?;
    }

    let spinner = Progress::spinner("updating seller");
    let updated = ctx
        .api
        .update_seller(
            id,
            &SellerUpdate {
                name: name.map(str::to_string),
                code: code.map(|c| c.trim().to_string()),
                commission_rate,
                branches: (!branches.is_empty()).then(|| branches.to_vec()),
                is_active: active,
            },
        )
        .await?;
    let sellers = ctx.api.list_sellers().await?;
    spinner.finish_clear();

    output(
        &SellerChanged {
            created: None,
            updated: Some(updated),
            deleted: None,
            sellers,
        },
        flags.format,
        &ctx.theme,
    )
}

async fn delete(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let spinner = Progress::spinner("deleting seller");
    ctx.api.delete_seller(id).await?;
    let sellers = ctx.api.list_sellers().await?;
    spinner.finish_clear();

    output(
        &SellerChanged {
            created: None,
            updated: None,
            deleted: Some(id.to_string()),
            sellers,
        },
        flags.format,
        &ctx.theme,
    )
}
