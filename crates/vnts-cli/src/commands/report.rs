use chrono::NaiveDate;

use vnts_api::SalesFilter;
use vnts_routing::AdminPage;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ReportCommands;
use crate::commands::shared::gate::require_admin;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `vnts report <subcommand>`.
pub async fn handle(
    action: &ReportCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    require_admin(ctx.identity.as_ref(), AdminPage::Reports)?;
    match action {
        ReportCommands::Sales {
            seller,
            branch,
            from,
            to,
        } => sales(seller.as_deref(), branch.as_deref(), *from, *to, ctx, flags).await,
    }
}

async fn sales(
    seller: Option<&str>,
    branch: Option<&str>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let filter = SalesFilter {
        seller_id: seller.map(str::to_string),
        branch_id: branch.map(str::to_string),
        from,
        to,
    };
    let spinner = Progress::spinner("building report");
    let rows = ctx.api.sales_report(&filter).await?;
    spinner.finish_clear();
    output(&rows, flags.format, &ctx.theme)
}
