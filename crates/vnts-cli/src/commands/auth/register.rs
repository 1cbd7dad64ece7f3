use vnts_core::validate::{require_email, require_nonempty};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::RegisterArgs;
use crate::commands::auth::SessionSnapshot;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

pub async fn handle(
    args: &RegisterArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    require_email("email", &args.email)?;
    require_nonempty("password", &args.password)?;
    require_nonempty("name", &args.full_name)?;
    require_nonempty("organization", &args.organization_name)?;

    let spinner = Progress::spinner("creating account");
    let result = ctx
        .api
        .register(
            &args.email,
            &args.password,
            &args.full_name,
            &args.organization_name,
        )
        .await;
    spinner.finish_clear();

    let identity = result?;
    ctx.identity = Some(identity.clone());
    output(&SessionSnapshot::from(&identity), flags.format, &ctx.theme)
}
