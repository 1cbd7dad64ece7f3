use vnts_core::validate::require_numeric_code;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SellerLoginArgs;
use crate::commands::auth::SessionSnapshot;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

pub async fn handle(
    args: &SellerLoginArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    require_numeric_code("code", &args.code)?;

    // --org wins over the configured default; both absent means the legacy
    // single-tenant flow.
    let org = args
        .org
        .as_deref()
        .or_else(|| ctx.config.general.default_org());

    let spinner = Progress::spinner("signing in");
    let result = ctx.api.seller_login(&args.code, org).await;
    spinner.finish_clear();

    let identity = result?;
    ctx.identity = Some(identity.clone());
    output(&SessionSnapshot::from(&identity), flags.format, &ctx.theme)
}
