use vnts_core::Identity;

use crate::cli::GlobalFlags;
use crate::commands::auth::SessionSnapshot;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Re-fetch the identity from the backend and rewrite the whole session.
///
/// Admins come back from the identity snapshot endpoint; sellers from their
/// own seller record (only the display name can change there). The active
/// branch choice is local state and survives the rewrite.
pub async fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let spinner = Progress::spinner("refreshing identity");
    let result = fetch_updated(ctx).await;
    spinner.finish_clear();

    let updated = result?;
    ctx.api.session().write(&updated)?;
    ctx.identity = Some(updated.clone());
    output(&SessionSnapshot::from(&updated), flags.format, &ctx.theme)
}

async fn fetch_updated(ctx: &AppContext) -> anyhow::Result<Identity> {
    match &ctx.identity {
        Some(identity) if identity.is_seller() => {
            let seller = ctx.api.get_seller(&identity.id).await?;
            Ok(identity.clone().with_name(&seller.name))
        }
        Some(identity) => {
            let fresh = ctx.api.me().await?;
            Ok(Identity {
                active_branch_id: identity.active_branch_id.clone(),
                active_branch_name: identity.active_branch_name.clone(),
                ..fresh
            })
        }
        None => Ok(ctx.api.me().await?),
    }
}
