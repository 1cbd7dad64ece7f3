use vnts_core::validate::{require_email, require_nonempty};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::LoginArgs;
use crate::commands::auth::SessionSnapshot;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

pub async fn handle(
    args: &LoginArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    require_email("email", &args.email)?;
    require_nonempty("password", &args.password)?;

    let spinner = Progress::spinner("signing in");
    let result = ctx.api.login(&args.email, &args.password).await;
    spinner.finish_clear();

    let identity = result?;
    ctx.identity = Some(identity.clone());
    output(&SessionSnapshot::from(&identity), flags.format, &ctx.theme)
}
