use anyhow::Context;

use vnts_api::ApiClient;
use vnts_branding::{BrandingResolver, Theme};
use vnts_config::VntsConfig;
use vnts_core::Identity;
use vnts_session::{SessionStore, TokenKind, TokenStore};

/// Shared application resources initialized once at startup.
///
/// The identity is read from the session store exactly once here; handlers
/// that rewrite the session assign `identity` as well so later steps in the
/// same invocation see the new value.
pub struct AppContext {
    pub config: VntsConfig,
    pub api: ApiClient,
    pub theme: Theme,
    pub branding: BrandingResolver,
    pub identity: Option<Identity>,
}

impl AppContext {
    /// Initialize all shared resources.
    pub fn init(config: VntsConfig) -> anyhow::Result<Self> {
        let session = SessionStore::new().context("failed to resolve the profile directory")?;
        let tokens = TokenStore::new().context("failed to resolve the credential store")?;
        let identity = session
            .read()
            .context("failed to read the stored session")?;
        if let Some(identity) = &identity {
            if tokens.detect_source(TokenKind::Access).is_none()
                && tokens.detect_source(TokenKind::Refresh).is_none()
            {
                tracing::warn!(
                    user = %identity.name,
                    "stored session has no tokens; run `vnts auth login` to sign in again"
                );
            } else {
                tracing::debug!(user = %identity.name, role = ?identity.role, "restored session");
            }
        }

        let api = ApiClient::new(&config.api, session, tokens);
        let theme = Theme::new();
        let branding = BrandingResolver::new(theme.clone());

        Ok(Self {
            config,
            api,
            theme,
            branding,
            identity,
        })
    }
}
