//! Durable on-disk session storage.
//!
//! Holds at most one [`Identity`] across process runs, as a JSON file in the
//! profile directory (`~/.vnts/session.json` by default). Writers always
//! replace the whole value; there is no field-level patching.

use std::fs;
use std::path::{Path, PathBuf};

use vnts_core::Identity;

use crate::error::SessionError;

const SESSION_FILE_NAME: &str = "session.json";

/// Resolve the profile directory.
///
/// `VNTS_PROFILE_DIR` overrides the default `~/.vnts` (used by tests and
/// by users who keep several profiles side by side).
pub fn profile_dir() -> Result<PathBuf, SessionError> {
    if let Ok(dir) = std::env::var("VNTS_PROFILE_DIR") {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    dirs::home_dir()
        .map(|h| h.join(".vnts"))
        .ok_or_else(|| SessionError::Storage("home directory not found".into()))
}

/// File-backed store for the signed-in identity.
#[derive(Debug, Clone)]
pub struct SessionStore {
    root: PathBuf,
}

impl SessionStore {
    /// Store rooted at the resolved profile directory.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] when no home directory can be found
    /// and `VNTS_PROFILE_DIR` is unset.
    pub fn new() -> Result<Self, SessionError> {
        Ok(Self {
            root: profile_dir()?,
        })
    }

    /// Store rooted at an explicit directory. Tests use this with a tempdir.
    #[must_use]
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the session file.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.root.join(SESSION_FILE_NAME)
    }

    /// Read the stored identity, if any.
    ///
    /// A missing file means no session. A file that no longer parses is
    /// treated the same way (logged and ignored) so a corrupt session forces
    /// a re-login instead of wedging every command.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] only for I/O failures other than
    /// the file being absent.
    pub fn read(&self) -> Result<Option<Identity>, SessionError> {
        let path = self.path();
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(SessionError::Storage(format!(
                    "read {}: {e}",
                    path.display()
                )));
            }
        };
        match serde_json::from_str::<Identity>(&raw) {
            Ok(identity) => Ok(Some(identity)),
            Err(error) => {
                tracing::warn!(%error, path = %path.display(), "session file unreadable; ignoring");
                Ok(None)
            }
        }
    }

    /// Replace the stored identity with `identity`.
    ///
    /// Creates the profile directory (0700) on first use; the session file
    /// itself is 0600.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] on I/O failure and
    /// [`SessionError::Serialize`] if the identity cannot be encoded.
    pub fn write(&self, identity: &Identity) -> Result<(), SessionError> {
        ensure_private_dir(&self.root)?;
        let path = self.path();
        let json = serde_json::to_string_pretty(identity)?;
        fs::write(&path, json)
            .map_err(|e| SessionError::Storage(format!("write {}: {e}", path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600))
                .map_err(|e| SessionError::Storage(format!("chmod {}: {e}", path.display())))?;
        }

        Ok(())
    }

    /// Remove the stored identity. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] if an existing file cannot be removed.
    pub fn clear(&self) -> Result<(), SessionError> {
        let path = self.path();
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::Storage(format!(
                "delete {}: {e}",
                path.display()
            ))),
        }
    }
}

/// Create `dir` if needed and restrict it to the owner on Unix.
pub(crate) fn ensure_private_dir(dir: &Path) -> Result<(), SessionError> {
    fs::create_dir_all(dir)
        .map_err(|e| SessionError::Storage(format!("mkdir {}: {e}", dir.display())))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Err(e) = fs::set_permissions(dir, fs::Permissions::from_mode(0o700)) {
            tracing::warn!("failed to chmod 0700 {}: {e}", dir.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use vnts_core::Role;

    fn sample_identity() -> Identity {
        Identity {
            id: "42".into(),
            email: "owner@acme.example".into(),
            role: Role::Admin,
            name: "Owner".into(),
            organization_id: "7".into(),
            active_branch_id: None,
            active_branch_name: None,
        }
    }

    #[test]
    fn read_absent_returns_none() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = SessionStore::with_root(tmp.path());
        assert_eq!(store.read().expect("read"), None);
    }

    #[test]
    fn write_read_clear_round_trip() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = SessionStore::with_root(tmp.path());

        let identity = sample_identity();
        store.write(&identity).expect("write");
        assert_eq!(store.read().expect("read"), Some(identity));

        store.clear().expect("clear");
        assert_eq!(store.read().expect("read after clear"), None);
        // Idempotent
        store.clear().expect("second clear");
    }

    #[test]
    fn write_replaces_whole_value() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = SessionStore::with_root(tmp.path());

        let first = sample_identity();
        store.write(&first).expect("write");

        let second = first.clone().with_branch("3", "Centro");
        store.write(&second).expect("rewrite");

        let read = store.read().expect("read").expect("present");
        assert_eq!(read.active_branch_id.as_deref(), Some("3"));
        assert_eq!(read.active_branch_name.as_deref(), Some("Centro"));
    }

    #[test]
    fn corrupt_session_reads_as_absent() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = SessionStore::with_root(tmp.path());

        fs::create_dir_all(tmp.path()).expect("mkdir");
        fs::write(store.path(), "{not json").expect("write corrupt");
        assert_eq!(store.read().expect("read"), None);
    }

    #[cfg(unix)]
    #[test]
    fn session_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = SessionStore::with_root(tmp.path().join("profile"));
        store.write(&sample_identity()).expect("write");

        let mode = fs::metadata(store.path())
            .expect("metadata")
            .permissions()
            .mode()
            & 0o777;
        assert_eq!(mode, 0o600, "session file should be 0600");
    }
}
