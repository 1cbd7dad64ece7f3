use anyhow::bail;
use serde::Serialize;

use vnts_core::models::{Branch, BranchUpdate, NewBranch};
use vnts_core::validate::require_nonempty;
use vnts_routing::{AdminPage, SellerPage};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::BranchCommands;
use crate::commands::auth::SessionSnapshot;
use crate::commands::shared::gate::{require_admin, require_branch_access, require_seller};
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `vnts branch <subcommand>`.
pub async fn handle(
    action: &BranchCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        BranchCommands::List => list(ctx, flags).await,
        BranchCommands::Create { name, address } => {
            create(name, address.as_deref(), ctx, flags).await
        }
        BranchCommands::Update { id, name, address } => {
            update(id, name.as_deref(), address.as_deref(), ctx, flags).await
        }
        BranchCommands::Delete { id } => delete(id, ctx, flags).await,
        BranchCommands::Select { id } => select(id, ctx, flags).await,
    }
}

#[derive(Serialize)]
struct BranchChanged {
    #[serde(skip_serializing_if = "Option::is_none")]
    created: Option<Branch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    updated: Option<Branch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deleted: Option<String>,
    branches: Vec<Branch>,
}

async fn list(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    require_branch_access(ctx.identity.as_ref())?;
    let spinner = Progress::spinner("fetching branches");
    let branches = ctx.api.list_branches().await?;
    spinner.finish_clear();
    output(&branches, flags.format, &ctx.theme)
}

async fn create(
    name: &str,
    address: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    require_admin(ctx.identity.as_ref(), AdminPage::Branches)?;
    require_nonempty("name", name)?;

    let spinner = Progress::spinner("creating branch");
    let created = ctx
        .api
        .create_branch(&NewBranch {
            name: name.to_string(),
            address: address.map(str::to_string),
        })
        .await?;
    let branches = ctx.api.list_branches().await?;
    spinner.finish_clear();

    output(
        &BranchChanged {
            created: Some(created),
            updated: None,
            deleted: None,
            branches,
        },
        flags.format,
        &ctx.theme,
    )
}

async fn update(
    id: &str,
    name: Option<&str>,
    address: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    require_admin(ctx.identity.as_ref(), AdminPage::Branches)?;
    if name.is_none() && address.is_none() {
        bail!("nothing to update; pass --name or --address");
    }
    if let Some(name) = name {
        require_nonempty("name", name)?;
    }

    let spinner = Progress::spinner("updating branch");
    let updated = ctx
        .api
        .update_branch(
            id,
            &BranchUpdate {
                name: name.map(str::to_string),
                address: address.map(str::to_string),
            },
        )
        .await?;
    let branches = ctx.api.list_branches().await?;
    spinner.finish_clear();

    output(
        &BranchChanged {
            created: None,
            updated: Some(updated),
            deleted: None,
            branches,
        },
        flags.format,
        &ctx.theme,
    )
}

async fn delete(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    require_admin(ctx.identity.as_ref(), AdminPage::Branches)?;

    let spinner = Progress::spinner("deleting branch");
    ctx.api.delete_branch(id).await?;
    let branches = ctx.api.list_branches().await?;
    spinner.finish_clear();

    output(
        &BranchChanged {
            created: None,
            updated: None,
            deleted: Some(id.to_string()),
            branches,
        },
        flags.format,
        &ctx.theme,
    )
}

/// Pick the active branch for the seller session. The choice is persisted:
/// the rewritten identity goes through the session store before the running
/// context sees it.
async fn select(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    require_seller(ctx.identity.as_ref(), SellerPage::Dashboard)?;

    let spinner = Progress::spinner("selecting branch");
    let branches = ctx.api.list_branches().await?;
    spinner.finish_clear();

    let Some(branch) = branches.iter().find(|b| b.id == id) else {
        bail!("branch '{id}' not found");
    };

    // The gate above guarantees an identity.
    let Some(identity) = ctx.identity.clone() else {
        bail!("no active session");
    };
    let updated = identity.with_branch(&branch.id, &branch.name);
    ctx.api.session().write(&updated)?;
    let snapshot = SessionSnapshot::from(&updated);
    ctx.identity = Some(updated);

    output(&snapshot, flags.format, &ctx.theme)
}
