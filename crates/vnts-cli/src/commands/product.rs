use anyhow::bail;
use serde::Serialize;

use vnts_core::models::{NewProduct, Product, ProductUpdate};
use vnts_core::validate::{ValidationError, require_non_negative, require_nonempty};
use vnts_core::{Identity, Role};
use vnts_routing::AdminPage;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProductCommands;
use crate::commands::shared::gate::{require_admin, require_product_access};
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `vnts product <subcommand>`.
pub async fn handle(
    action: &ProductCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProductCommands::List { branch } => list(branch.as_deref(), ctx, flags).await,
        ProductCommands::Create {
            name,
            price,
            stock,
            branch,
        } => create(name, *price, *stock, branch.as_deref(), ctx, flags).await,
        ProductCommands::Update {
            id,
            name,
            price,
            stock,
            branch,
        } => {
            update(
                id,
                name.as_deref(),
                *price,
                *stock,
                branch.as_deref(),
                ctx,
                flags,
            )
            .await
        }
        ProductCommands::Delete { id } => delete(id, ctx, flags).await,
    }
}

#[derive(Serialize)]
struct ProductChanged {
    #[serde(skip_serializing_if = "Option::is_none")]
    created: Option<Product>,
    #[serde(skip_serializing_if = "Option::is_none")]
    updated: Option<Product>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deleted: Option<String>,
    products: Vec<Product>,
}

fn check_stock(stock: Option<i64>) -> Result<(), ValidationError> {
    match stock {
        Some(stock) if stock < 0 => Err(ValidationError::new("stock", "must be zero or greater")),
        _ => Ok(()),
    }
}

/// Sellers read the catalog for their active branch only; admins may pass
/// `--branch` or see everything. A seller with no branch selected yet sees
/// the unscoped list, same as a branchless organization.
fn product_scope<'a>(
    identity: Option<&'a Identity>,
    branch: Option<&'a str>,
) -> anyhow::Result<Option<&'a str>> {
    match identity.map(|i| i.role) {
        Some(Role::Seller) => {
            if branch.is_some() {
                bail!("sellers list products for their active branch; drop --branch");
            }
            Ok(identity.and_then(|i| i.active_branch_id.as_deref()))
        }
        _ => Ok(branch),
    }
}

async fn list(branch: Option<&str>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    require_product_access(ctx.identity.as_ref())?;
    let scope = product_scope(ctx.identity.as_ref(), branch)?;

    let spinner = Progress::spinner("fetching products");
    let products = ctx.api.list_products(scope).await?;
    spinner.finish_clear();
    output(&products, flags.format, &ctx.theme)
}

async fn create(
    name: &str,
    price: f64,
    stock: Option<i64>,
    branch: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    require_admin(ctx.identity.as_ref(), AdminPage::Products)?;
    require_nonempty("name", name)?;
    require_non_negative("price", price)?;
    check_stock(stock)?;

    let spinner = Progress::spinner("creating product");
    let created = ctx
        .api
        .create_product(&NewProduct {
            name: name.to_string(),
            price,
            stock,
            branch_id: branch.map(str::to_string),
        })
        .await?;
    let products = ctx.api.list_products(None).await?;
    spinner.finish_clear();

    output(
        &ProductChanged {
            created: Some(created),
            updated: None,
            deleted: None,
            products,
        },
        flags.format,
        &ctx.theme,
    )
}

async fn update(
    id: &str,
    name: Option<&str>,
    price: Option<f64>,
    stock: Option<i64>,
    branch: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    require_admin(ctx.identity.as_ref(), AdminPage::Products)?;
    if name.is_none() && price.is_none() && stock.is_none() && branch.is_none() {
        bail!("nothing to update; pass --name, --price, --stock or --branch");
    }
    if let Some(name) = name {
        require_nonempty("name", name)?;
    }
    if let Some(price) = price {
        require_non_negative("price", price)?;
    }
    check_stock(stock)?;

    let spinner = Progress::spinner("updating product");
    let updated = ctx
        .api
        .update_product(
            id,
            &ProductUpdate {
                name: name.map(str::to_string),
                price,
                stock,
                branch_id: branch.map(str::to_string),
            },
        )
        .await?;
    let products = ctx.api.list_products(None).await?;
    spinner.finish_clear();

    output(
        &ProductChanged {
            created: None,
            updated: Some(updated),
            deleted: None,
            products,
        },
        flags.format,
        &ctx.theme,
    )
}

async fn delete(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    require_admin(ctx.identity.as_ref(), AdminPage::Products)?;

    let spinner = Progress::spinner("deleting product");
    ctx.api.delete_product(id).await?;
    let products = ctx.api.list_products(None).await?;
    spinner.finish_clear();

    output(
        &ProductChanged {
            created: None,
            updated: None,
            deleted: Some(id.to_string()),
            products,
        },
        flags.format,
        &ctx.theme,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_stock_is_rejected_before_any_request() {
        assert!(check_stock(None).is_ok());
        assert!(check_stock(Some(0)).is_ok());
        assert!(check_stock(Some(12)).is_ok());
        let err = check_stock(Some(-1)).unwrap_err();
        assert_eq!(err.field, "stock");
    }

    fn seller_with_branch(branch: Option<&str>) -> Identity {
        let identity = Identity {
            id: "4".into(),
            email: String::new(),
            role: Role::Seller,
            name: "Ana".into(),
            organization_id: "1".into(),
            active_branch_id: None,
            active_branch_name: None,
        };
        match branch {
            Some(id) => identity.with_branch(id, "Centro"),
            None => identity,
        }
    }

    #[test]
    fn seller_scope_follows_the_active_branch() {
        let seller = seller_with_branch(Some("2"));
        assert_eq!(product_scope(Some(&seller), None).unwrap(), Some("2"));

        let unselected = seller_with_branch(None);
        assert_eq!(product_scope(Some(&unselected), None).unwrap(), None);
    }

    #[test]
    fn seller_cannot_widen_the_scope() {
        let seller = seller_with_branch(Some("2"));
        let err = product_scope(Some(&seller), Some("9")).unwrap_err();
        assert!(err.to_string().contains("--branch"), "{err}");
    }

    #[test]
    fn admin_scope_is_the_flag() {
        let admin = Identity {
            id: "1".into(),
            email: "owner@acme.example".into(),
            role: Role::Admin,
            name: "Owner".into(),
            organization_id: "1".into(),
            active_branch_id: None,
            active_branch_name: None,
        };
        assert_eq!(product_scope(Some(&admin), Some("9")).unwrap(), Some("9"));
        assert_eq!(product_scope(Some(&admin), None).unwrap(), None);
    }
}
