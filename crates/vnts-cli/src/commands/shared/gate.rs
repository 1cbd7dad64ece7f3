//! Role gating for commands.
//!
//! Commands that stand in for an admin or seller page run the same decision
//! the router applies to that page (legacy flavor, no slug). A denial turns
//! into a command error naming where the UI would have sent the user.

use anyhow::bail;

use vnts_core::{Identity, Role};
use vnts_routing::{
    AdminPage, RedirectReason, RouteDecision, RouteRequest, SellerPage, Target, decide,
};

/// Require the admin area to render `page` for the current identity.
pub fn require_admin(identity: Option<&Identity>, page: AdminPage) -> anyhow::Result<()> {
    let decision = decide(&RouteRequest::new(None, Target::Admin(page)), identity);
    deny_unless_render(&decision, "admin")
}

/// Require the seller area to render `page` for the current identity.
pub fn require_seller(identity: Option<&Identity>, page: SellerPage) -> anyhow::Result<()> {
    let decision = decide(&RouteRequest::new(None, Target::Seller(page)), identity);
    deny_unless_render(&decision, "seller")
}

/// Branch listing is shared: admins see it on the branches page, sellers
/// during branch selection. Everyone else is denied the way their closest
/// area would deny them.
pub fn require_branch_access(identity: Option<&Identity>) -> anyhow::Result<()> {
    match identity.map(|i| i.role) {
        Some(Role::Admin) => require_admin(identity, AdminPage::Branches),
        _ => require_seller(identity, SellerPage::Dashboard),
    }
}

/// Product listing is shared: admins manage the catalog, sellers read it
/// while composing a sale.
pub fn require_product_access(identity: Option<&Identity>) -> anyhow::Result<()> {
    match identity.map(|i| i.role) {
        Some(Role::Admin) => require_admin(identity, AdminPage::Products),
        _ => require_seller(identity, SellerPage::NewSale),
    }
}

fn deny_unless_render(decision: &RouteDecision, area: &str) -> anyhow::Result<()> {
    match decision {
        RouteDecision::Render(_) => Ok(()),
        RouteDecision::SellerLogin { slug } => {
            bail!("seller sign-in required for organization '{slug}' (run `vnts auth seller-login --org {slug}`)")
        }
        RouteDecision::Redirect { to, reason } => match reason {
            RedirectReason::NotAuthenticated => bail!(
                "not signed in; the {area} area would redirect to {to} (run `vnts auth login` or `vnts auth seller-login`)"
            ),
            RedirectReason::RoleMismatch => {
                bail!("your role cannot open the {area} area; you would be redirected to {to}")
            }
            RedirectReason::AlreadyAuthenticated | RedirectReason::UnknownPath => {
                bail!("the {area} area would redirect to {to}")
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> Identity {
        Identity {
            id: "1".into(),
            email: "owner@acme.example".into(),
            role: Role::Admin,
            name: "Owner".into(),
            organization_id: "7".into(),
            active_branch_id: None,
            active_branch_name: None,
        }
    }

    fn seller() -> Identity {
        Identity {
            id: "4".into(),
            email: String::new(),
            role: Role::Seller,
            name: "Ana".into(),
            organization_id: "7".into(),
            active_branch_id: None,
            active_branch_name: None,
        }
    }

    #[test]
    fn admin_passes_admin_gate() {
        assert!(require_admin(Some(&admin()), AdminPage::Products).is_ok());
    }

    #[test]
    fn seller_fails_admin_gate_with_role_message() {
        let err = require_admin(Some(&seller()), AdminPage::Products).unwrap_err();
        assert!(err.to_string().contains("role"), "got: {err}");
    }

    #[test]
    fn anonymous_fails_with_sign_in_hint() {
        let err = require_admin(None, AdminPage::Dashboard).unwrap_err();
        assert!(err.to_string().contains("vnts auth login"), "got: {err}");
    }

    #[test]
    fn seller_passes_seller_gate_and_branch_access() {
        assert!(require_seller(Some(&seller()), SellerPage::NewSale).is_ok());
        assert!(require_branch_access(Some(&seller())).is_ok());
        assert!(require_branch_access(Some(&admin())).is_ok());
        assert!(require_branch_access(None).is_err());
    }

    #[test]
    fn both_roles_pass_the_product_gate() {
        assert!(require_product_access(Some(&admin())).is_ok());
        assert!(require_product_access(Some(&seller())).is_ok());
        assert!(require_product_access(None).is_err());
    }

    #[test]
    fn admin_fails_seller_gate() {
        assert!(require_seller(Some(&admin()), SellerPage::History).is_err());
    }
}
