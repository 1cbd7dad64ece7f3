use serde::{Deserialize, Serialize};

/// Role of the authenticated principal.
///
/// Immutable once a session is established: changing role means logging out
/// and back in as somebody else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Organization owner/manager with access to the admin area.
    Admin,
    /// Point-of-sale operator restricted to one or more branches.
    Seller,
}

impl Role {
    /// Human-readable role name, matching the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Seller => "seller",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated principal held client-side for the lifetime of a session.
///
/// At most one `Identity` exists per session. Every mutation is a whole-value
/// replacement through the session store: login writes it, logout clears it,
/// branch selection and name refresh rewrite it via [`Identity::with_branch`]
/// and [`Identity::with_name`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Opaque backend identifier.
    pub id: String,
    /// Login email. Empty for sellers, who authenticate by numeric code.
    #[serde(default)]
    pub email: String,
    pub role: Role,
    /// Display name. Refreshable independently of the rest of the identity.
    pub name: String,
    /// Tenant scope for all subsequent data access.
    pub organization_id: String,
    /// Branch chosen for this session. Sellers only, and only once the
    /// backend has assigned branches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_branch_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_branch_name: Option<String>,
}

impl Identity {
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }

    #[must_use]
    pub const fn is_seller(&self) -> bool {
        matches!(self.role, Role::Seller)
    }

    /// Whole-value rewrite with the given branch selected.
    #[must_use]
    pub fn with_branch(mut self, branch_id: &str, branch_name: &str) -> Self {
        self.active_branch_id = Some(branch_id.to_string());
        self.active_branch_name = Some(branch_name.to_string());
        self
    }

    /// Whole-value rewrite with a refreshed display name.
    #[must_use]
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn seller_identity() -> Identity {
        Identity {
            id: "7".into(),
            email: String::new(),
            role: Role::Seller,
            name: "Maria".into(),
            organization_id: "org-1".into(),
            active_branch_id: None,
            active_branch_name: None,
        }
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(serde_json::to_string(&Role::Seller).unwrap(), "\"seller\"");
    }

    #[test]
    fn identity_roundtrips_through_json() {
        let identity = seller_identity().with_branch("b-2", "Centro");
        let json = serde_json::to_string(&identity).unwrap();
        let back: Identity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, identity);
    }

    #[test]
    fn identity_without_branch_omits_branch_fields() {
        let json = serde_json::to_string(&seller_identity()).unwrap();
        assert!(!json.contains("active_branch_id"));
    }

    #[test]
    fn with_branch_sets_both_fields() {
        let identity = seller_identity().with_branch("b-1", "Norte");
        assert_eq!(identity.active_branch_id.as_deref(), Some("b-1"));
        assert_eq!(identity.active_branch_name.as_deref(), Some("Norte"));
    }

    #[test]
    fn with_name_only_touches_name() {
        let identity = seller_identity().with_branch("b-1", "Norte").with_name("Maria Lopez");
        assert_eq!(identity.name, "Maria Lopez");
        assert_eq!(identity.active_branch_id.as_deref(), Some("b-1"));
        assert_eq!(identity.organization_id, "org-1");
    }

    #[test]
    fn missing_email_deserializes_as_empty() {
        let identity: Identity = serde_json::from_str(
            r#"{"id":"7","role":"seller","name":"Maria","organization_id":"org-1"}"#,
        )
        .unwrap();
        assert!(identity.email.is_empty());
        assert!(identity.is_seller());
    }
}
