use anyhow::bail;

use vnts_branding::BrandingIssue;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::OrgCommands;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `vnts org <subcommand>`.
pub async fn handle(
    action: &OrgCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        OrgCommands::Show { slug } => show(slug, ctx, flags).await,
    }
}

async fn show(slug: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let spinner = Progress::spinner("resolving organization");
    let resolved = ctx.branding.resolve(&ctx.api, Some(slug)).await;
    spinner.finish_clear();

    match &resolved.issue {
        None => output(&resolved, flags.format, &ctx.theme),
        Some(BrandingIssue::OrganizationNotFound { slug }) => {
            bail!("organization '{slug}' not found")
        }
        Some(BrandingIssue::LookupFailed { message, .. }) => {
            bail!("organization lookup failed: {message}")
        }
    }
}
