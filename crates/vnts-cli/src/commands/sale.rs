use anyhow::bail;
use serde::Serialize;

use vnts_api::SalesFilter;
use vnts_core::Identity;
use vnts_core::models::{NewSale, NewSaleItem, Sale};
use vnts_core::validate::{ValidationError, require_positive_quantity};
use vnts_routing::SellerPage;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{SaleCommands, SaleListArgs, SaleNewArgs};
use crate::commands::shared::gate::require_seller;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `vnts sale <subcommand>`.
pub async fn handle(
    action: &SaleCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SaleCommands::New(args) => new(args, ctx, flags).await,
        SaleCommands::List(args) => list(args, ctx, flags).await,
        SaleCommands::Summary(args) => summary(args, ctx, flags).await,
    }
}

/// One `--item product_id:quantity` argument.
fn parse_item(raw: &str) -> Result<NewSaleItem, ValidationError> {
    let Some((product, quantity)) = raw.split_once(':') else {
        return Err(ValidationError::new(
            "item",
            format!("'{raw}' is not product_id:quantity"),
        ));
    };
    let product = product.trim();
    if product.is_empty() {
        return Err(ValidationError::new(
            "item",
            format!("'{raw}' is missing a product id"),
        ));
    }
    let quantity: u32 = quantity.trim().parse().map_err(|_| {
        ValidationError::new("item", format!("'{raw}' has a non-numeric quantity"))
    })?;
    require_positive_quantity("item", quantity)?;
    Ok(NewSaleItem {
        product_id: product.to_string(),
        quantity,
    })
}

/// Sales are always scoped to the signed-in seller and their branch;
/// there is no flag to widen the view.
fn own_sales_filter(identity: Option<&Identity>, args: &SaleListArgs) -> SalesFilter {
    SalesFilter {
        seller_id: identity.map(|i| i.id.clone()),
        branch_id: identity.and_then(|i| i.active_branch_id.clone()),
        from: args.from,
        to: args.to,
    }
}

async fn new(args: &SaleNewArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    require_seller(ctx.identity.as_ref(), SellerPage::NewSale)?;

    let mut items = Vec::with_capacity(args.items.len());
    for raw in &args.items {
        items.push(parse_item(raw)?);
    }

    // Recording against a branch is mandatory once the organization has
    // any; a branchless organization may sell right away.
    let has_branch = ctx
        .identity
        .as_ref()
        .is_some_and(|i| i.active_branch_id.is_some());
    if !has_branch {
        let branches = ctx.api.list_branches().await?;
        if !branches.is_empty() {
            bail!("no active branch; run `vnts branch select <id>` first");
        }
    }

    let spinner = Progress::spinner("recording sale");
    let sale = ctx
        .api
        .create_sale(&NewSale {
            client_id: args.client.clone(),
            payment_method_id: args.payment_method.clone(),
            items,
        })
        .await?;
    spinner.finish_clear();

    #[derive(Serialize)]
    struct SaleRecorded {
        recorded: Sale,
    }
    output(&SaleRecorded { recorded: sale }, flags.format, &ctx.theme)
}

async fn list(args: &SaleListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    require_seller(ctx.identity.as_ref(), SellerPage::History)?;

    let filter = own_sales_filter(ctx.identity.as_ref(), args);
    let spinner = Progress::spinner("fetching sales");
    let sales = ctx.api.list_sales(&filter).await?;
    spinner.finish_clear();
    output(&sales, flags.format, &ctx.theme)
}

async fn summary(args: &SaleListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    require_seller(ctx.identity.as_ref(), SellerPage::Dashboard)?;

    let filter = own_sales_filter(ctx.identity.as_ref(), args);
    let spinner = Progress::spinner("fetching summary");
    let summary = ctx.api.sales_summary(&filter).await?;
    spinner.finish_clear();
    output(&summary, flags.format, &ctx.theme)
}
