//! Every row of the role decision table, legacy and tenant flavors.

use rstest::rstest;

use vnts_core::{Identity, Role};
use vnts_routing::{RedirectReason, RouteDecision, decide_path};

fn identity_for(role: Option<Role>) -> Option<Identity> {
    role.map(|role| Identity {
        id: "1".into(),
        email: match role {
            Role::Admin => "owner@acme.example".into(),
            Role::Seller => String::new(),
        },
        role,
        name: "Test".into(),
        organization_id: "org-1".into(),
        active_branch_id: None,
        active_branch_name: None,
    })
}

// Entry pages while signed out, both areas for the matching role.
#[rstest]
#[case("/login", None)]
#[case("/register", None)]
#[case("/acme/login", None)]
#[case("/", None)]
#[case("/", Some(Role::Admin))]
#[case("/admin", Some(Role::Admin))]
#[case("/admin/products", Some(Role::Admin))]
#[case("/admin/payment-methods", Some(Role::Admin))]
#[case("/acme/admin", Some(Role::Admin))]
#[case("/acme/admin/reports", Some(Role::Admin))]
#[case("/seller", Some(Role::Seller))]
#[case("/seller/history", Some(Role::Seller))]
#[case("/acme/seller", Some(Role::Seller))]
#[case("/acme/seller/new-sale", Some(Role::Seller))]
fn permitted_requests_render(#[case] path: &str, #[case] role: Option<Role>) {
    let identity = identity_for(role);
    let decision = decide_path(path, identity.as_ref());
    assert!(decision.is_render(), "{path} should render, got {decision:?}");
}

// Signed-in users bounce off the entry pages to their role's home.
#[rstest]
#[case("/login", Role::Admin, "/admin")]
#[case("/register", Role::Admin, "/admin")]
#[case("/acme/login", Role::Admin, "/acme/admin")]
#[case("/login", Role::Seller, "/seller")]
#[case("/acme/login", Role::Seller, "/acme/seller")]
fn entry_bounces_authenticated_users_home(
    #[case] path: &str,
    #[case] role: Role,
    #[case] expected_to: &str,
) {
    let identity = identity_for(Some(role));
    let decision = decide_path(path, identity.as_ref());
    assert_eq!(
        decision,
        RouteDecision::Redirect {
            to: expected_to.to_string(),
            reason: RedirectReason::AlreadyAuthenticated,
        }
    );
}

// Denials across both areas, with their internal reasons.
#[rstest]
// Admin area, signed out: login redirect.
#[case("/admin", None, "/login", RedirectReason::NotAuthenticated)]
#[case("/acme/admin", None, "/login", RedirectReason::NotAuthenticated)]
// Admin area, seller: home on the legacy flavor, login on the tenant one.
#[case("/admin", Some(Role::Seller), "/seller", RedirectReason::RoleMismatch)]
#[case(
    "/acme/admin/products",
    Some(Role::Seller),
    "/login",
    RedirectReason::RoleMismatch
)]
// Seller area on the legacy flavor never shows the tenant login page.
#[case("/seller", None, "/login", RedirectReason::NotAuthenticated)]
#[case("/seller", Some(Role::Admin), "/login", RedirectReason::RoleMismatch)]
#[case("/acme/seller", Some(Role::Admin), "/login", RedirectReason::RoleMismatch)]
// Unrecognized paths bounce to the landing page for everyone.
#[case("/what/is/this", None, "/", RedirectReason::UnknownPath)]
#[case("/admin/bogus", Some(Role::Admin), "/", RedirectReason::UnknownPath)]
#[case("/acme/seller/bogus", Some(Role::Seller), "/", RedirectReason::UnknownPath)]
fn denied_requests_redirect(
    #[case] path: &str,
    #[case] role: Option<Role>,
    #[case] expected_to: &str,
    #[case] expected_reason: RedirectReason,
) {
    let identity = identity_for(role);
    let decision = decide_path(path, identity.as_ref());
    assert_eq!(
        decision,
        RouteDecision::Redirect {
            to: expected_to.to_string(),
            reason: expected_reason,
        },
        "path {path}"
    );
}

// The asymmetry: a signed-out visitor on a tenant seller path gets the
// organization's own login page instead of a redirect.
#[rstest]
#[case("/acme/seller", "acme")]
#[case("/acme/seller/new-sale", "acme")]
#[case("/north-shop/seller/history", "north-shop")]
fn tenant_seller_area_falls_back_to_org_login(#[case] path: &str, #[case] slug: &str) {
    let decision = decide_path(path, None);
    assert_eq!(
        decision,
        RouteDecision::SellerLogin {
            slug: slug.to_string()
        }
    );
}

/// The end-to-end shape: an admin signs in, reaches the tenant admin area,
/// and is turned away from the seller area toward the global login.
#[test]
fn signed_in_admin_walkthrough() {
    let admin = identity_for(Some(Role::Admin));

    assert!(decide_path("/org-1/admin", admin.as_ref()).is_render());
    assert_eq!(
        decide_path("/org-1/seller", admin.as_ref()),
        RouteDecision::Redirect {
            to: "/login".to_string(),
            reason: RedirectReason::RoleMismatch,
        }
    );
}

#[test]
fn decisions_serialize_for_structured_output() {
    let decision = decide_path("/acme/seller", None);
    let json = serde_json::to_value(&decision).expect("serializes");
    assert_eq!(json["seller_login"]["slug"], "acme");
}
