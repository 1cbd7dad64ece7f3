use serde::Serialize;

use vnts_core::Role;
use vnts_session::{TokenKind, jwt};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    role: Option<Role>,
    name: Option<String>,
    email: Option<String>,
    organization_id: Option<String>,
    active_branch: Option<String>,
    access_token_source: Option<String>,
    refresh_token_source: Option<String>,
    access_expires_at: Option<String>,
    note: Option<String>,
}

/// Purely local: reports the stored session and where each credential
/// lives, without a network round trip (`whoami` does that).
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let tokens = ctx.api.tokens();
    let access_token_source = tokens
        .detect_source(TokenKind::Access)
        .map(|s| s.to_string());
    let refresh_token_source = tokens
        .detect_source(TokenKind::Refresh)
        .map(|s| s.to_string());
    let access_expires_at = tokens
        .load(TokenKind::Access)
        .and_then(|token| jwt::decode_expiry(&token).ok())
        .map(|expiry| expiry.to_rfc3339());

    let status = match &ctx.identity {
        Some(identity) => AuthStatusResponse {
            authenticated: true,
            role: Some(identity.role),
            name: Some(identity.name.clone()),
            email: (!identity.email.is_empty()).then(|| identity.email.clone()),
            organization_id: Some(identity.organization_id.clone()),
            active_branch: identity.active_branch_name.clone(),
            access_token_source,
            refresh_token_source,
            access_expires_at,
            note: None,
        },
        None => AuthStatusResponse {
            authenticated: false,
            role: None,
            name: None,
            email: None,
            organization_id: None,
            active_branch: None,
            access_token_source,
            refresh_token_source,
            access_expires_at,
            note: Some("no stored session (run `vnts auth login`)".into()),
        },
    };

    output(&status, flags.format, &ctx.theme)
}
