use anyhow::bail;
use serde::Serialize;

use vnts_core::models::{NewPaymentMethod, PaymentMethod, PaymentMethodUpdate};
use vnts_core::validate::require_nonempty;
use vnts_routing::AdminPage;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PaymentMethodCommands;
use crate::commands::shared::gate::require_admin;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `vnts payment-method <subcommand>`.
pub async fn handle(
    action: &PaymentMethodCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    require_admin(ctx.identity.as_ref(), AdminPage::PaymentMethods)?;
    match action {
        PaymentMethodCommands::List => list(ctx, flags).await,
        PaymentMethodCommands::Create { name } => create(name, ctx, flags).await,
        PaymentMethodCommands::Update { id, name, active } => {
            update(id, name.as_deref(), *active, ctx, flags).await
        }
        PaymentMethodCommands::Delete { id } => delete(id, ctx, flags).await,
    }
}

#[derive(Serialize)]
struct PaymentMethodChanged {
    #[serde(skip_serializing_if = "Option::is_none")]
    created: Option<PaymentMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    updated: Option<PaymentMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deleted: Option<String>,
    payment_methods: Vec<PaymentMethod>,
}

async fn list(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let spinner = Progress::spinner("fetching payment methods");
    let payment_methods = ctx.api.list_payment_methods().await?;
    spinner.finish_clear();
    output(&payment_methods, flags.format, &ctx.theme)
}

async fn create(name: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    require_nonempty("name", name)?;

    let spinner = Progress::spinner("creating payment method");
    let created = ctx
        .api
        .create_payment_method(&NewPaymentMethod {
            name: name.to_string(),
        })
        .await?;
    let payment_methods = ctx.api.list_payment_methods().await?;
    spinner.finish_clear();

    output(
        &PaymentMethodChanged {
            created: Some(created),
            updated: None,
            deleted: None,
            payment_methods,
        },
        flags.format,
        &ctx.theme,
    )
}

async fn update(
    id: &str,
    name: Option<&str>,
    active: Option<bool>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if name.is_none() && active.is_none() {
        bail!("nothing to update; pass --name or --active");
    }
    if let Some(name) = name {
        require_nonempty("name", name)?;
    }

    let spinner = Progress::spinner("updating payment method");
    let updated = ctx
        .api
        .update_payment_method(
            id,
            &PaymentMethodUpdate {
                name: name.map(str::to_string),
                is_active: active,
            },
        )
        .await?;
    let payment_methods = ctx.api.list_payment_methods().await?;
    spinner.finish_clear();

    output(
        &PaymentMethodChanged {
            created: None,
            updated: Some(updated),
            deleted: None,
            payment_methods,
        },
        flags.format,
        &ctx.theme,
    )
}

async fn delete(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let spinner = Progress::spinner("deleting payment method");
    ctx.api.delete_payment_method(id).await?;
    let payment_methods = ctx.api.list_payment_methods().await?;
    spinner.finish_clear();

    output(
        &PaymentMethodChanged {
            created: None,
            updated: None,
            deleted: Some(id.to_string()),
            payment_methods,
        },
        flags.format,
        &ctx.theme,
    )
}
