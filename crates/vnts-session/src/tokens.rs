//! Tiered credential storage for the access and refresh tokens.
//!
//! Priority on load: OS keyring, then environment variable, then a file in
//! the profile directory. Stores prefer the keyring and fall back to the
//! file when the keyring is unavailable (headless Linux, CI).

use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::error::SessionError;
use crate::store::{ensure_private_dir, profile_dir};

const DEFAULT_KEYRING_SERVICE: &str = "vnts-cli";

/// Which credential a store operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Access => "access",
            Self::Refresh => "refresh",
        }
    }

    /// Environment variable consulted on load.
    #[must_use]
    const fn env_var(self) -> &'static str {
        match self {
            Self::Access => "VNTS_ACCESS_TOKEN",
            Self::Refresh => "VNTS_REFRESH_TOKEN",
        }
    }

    /// Keyring user name for this credential.
    #[must_use]
    const fn keyring_user(self) -> &'static str {
        match self {
            Self::Access => "access-token",
            Self::Refresh => "refresh-token",
        }
    }

    /// File name inside the profile directory.
    #[must_use]
    const fn file_name(self) -> &'static str {
        match self {
            Self::Access => "access_token",
            Self::Refresh => "refresh_token",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a loaded credential came from (for `auth status`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Keyring,
    Env,
    File,
}

impl fmt::Display for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Keyring => "keyring",
            Self::Env => "env",
            Self::File => "file",
        })
    }
}

/// Tiered token storage.
#[derive(Debug, Clone)]
pub struct TokenStore {
    service: String,
    root: PathBuf,
    keyring_enabled: bool,
}

impl TokenStore {
    /// Store backed by the OS keyring with profile-dir file fallback.
    ///
    /// The keyring service name defaults to `"vnts-cli"`; override via
    /// `VNTS_KEYRING_SERVICE` (e.g. `"vnts-cli-test"`) to avoid touching
    /// production credentials.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] when the profile directory cannot
    /// be resolved.
    pub fn new() -> Result<Self, SessionError> {
        let service = std::env::var("VNTS_KEYRING_SERVICE")
            .unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string());
        Ok(Self {
            service,
            root: profile_dir()?,
            keyring_enabled: true,
        })
    }

    /// Store that only uses files under `root`. Tests use this so they never
    /// touch a real keyring.
    #[must_use]
    pub fn file_only(root: impl Into<PathBuf>) -> Self {
        Self {
            service: DEFAULT_KEYRING_SERVICE.to_string(),
            root: root.into(),
            keyring_enabled: false,
        }
    }

    /// Persist a credential. Keyring first, file fallback.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::TokenStore`] if both tiers fail.
    pub fn store(&self, kind: TokenKind, value: &str) -> Result<(), SessionError> {
        if self.keyring_enabled {
            match keyring::Entry::new(&self.service, kind.keyring_user()) {
                Ok(entry) => match entry.set_password(value) {
                    Ok(()) => return Ok(()),
                    Err(error) => {
                        tracing::warn!(%error, token = %kind, "keyring store failed; falling back to file");
                    }
                },
                Err(error) => {
                    tracing::warn!(%error, token = %kind, "keyring unavailable; falling back to file");
                }
            }
        }
        self.store_file(kind, value)
    }

    /// Load a credential. Priority: keyring, env var, file.
    #[must_use]
    pub fn load(&self, kind: TokenKind) -> Option<String> {
        if self.keyring_enabled
            && let Ok(entry) = keyring::Entry::new(&self.service, kind.keyring_user())
            && let Ok(token) = entry.get_password()
            && !token.is_empty()
        {
            return Some(token);
        }

        if let Ok(token) = std::env::var(kind.env_var()) {
            if !token.is_empty() {
                return Some(token);
            }
        }

        self.load_file(kind)
    }

    /// Remove one credential from keyring and file.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::TokenStore`] if the credential file cannot be
    /// removed.
    pub fn delete(&self, kind: TokenKind) -> Result<(), SessionError> {
        if self.keyring_enabled {
            // May not exist; ignore keyring errors
            if let Ok(entry) = keyring::Entry::new(&self.service, kind.keyring_user()) {
                let _ = entry.delete_credential();
            }
        }

        let path = self.token_path(kind);
        if path.exists() {
            fs::remove_file(&path).map_err(|e| {
                SessionError::TokenStore(format!("failed to delete {}: {e}", path.display()))
            })?;
        }
        Ok(())
    }

    /// Remove both credentials.
    ///
    /// # Errors
    ///
    /// Returns the first [`SessionError::TokenStore`] encountered.
    pub fn clear(&self) -> Result<(), SessionError> {
        self.delete(TokenKind::Access)?;
        self.delete(TokenKind::Refresh)
    }

    /// Detect which tier would currently serve `kind` (for status display).
    #[must_use]
    pub fn detect_source(&self, kind: TokenKind) -> Option<TokenSource> {
        if self.keyring_enabled
            && let Ok(entry) = keyring::Entry::new(&self.service, kind.keyring_user())
            && entry.get_password().is_ok_and(|t| !t.is_empty())
        {
            return Some(TokenSource::Keyring);
        }
        if std::env::var(kind.env_var()).is_ok_and(|t| !t.is_empty()) {
            return Some(TokenSource::Env);
        }
        if self.load_file(kind).is_some() {
            return Some(TokenSource::File);
        }
        None
    }

    // --- Private file tier ---

    fn token_path(&self, kind: TokenKind) -> PathBuf {
        self.root.join(kind.file_name())
    }

    fn store_file(&self, kind: TokenKind, value: &str) -> Result<(), SessionError> {
        ensure_private_dir(&self.root)
            .map_err(|e| SessionError::TokenStore(e.to_string()))?;
        let path = self.token_path(kind);
        fs::write(&path, value)
            .map_err(|e| SessionError::TokenStore(format!("write {}: {e}", path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600))
                .map_err(|e| SessionError::TokenStore(format!("chmod {}: {e}", path.display())))?;
        }

        Ok(())
    }

    fn load_file(&self, kind: TokenKind) -> Option<String> {
        fs::read_to_string(self.token_path(kind))
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }
}
