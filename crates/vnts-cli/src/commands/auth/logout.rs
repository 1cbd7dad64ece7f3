use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct LogoutResponse {
    signed_out: bool,
}

pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.api.logout()?;
    ctx.identity = None;
    output(
        &LogoutResponse { signed_out: true },
        flags.format,
        &ctx.theme,
    )
}
