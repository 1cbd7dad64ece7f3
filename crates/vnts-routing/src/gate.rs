//! The role gate.
//!
//! One pure decision per navigated path, driven solely by the (presence,
//! role) of the current identity. Denials are silent for the user (a
//! redirect, or the tenant seller login page); the [`RedirectReason`]
//! exists so tests and logs can tell the cases apart.

use serde::Serialize;

use vnts_core::Identity;

use crate::path::{RouteRequest, Target, parse_path};

/// Why a request was denied its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RedirectReason {
    AlreadyAuthenticated,
    NotAuthenticated,
    RoleMismatch,
    UnknownPath,
}

/// Outcome of gating one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteDecision {
    /// Render the requested target.
    Render(RouteRequest),
    /// Show the organization's seller login page in place of the target.
    SellerLogin { slug: String },
    /// Navigate elsewhere.
    Redirect { to: String, reason: RedirectReason },
}

impl RouteDecision {
    /// Whether the requested target gets rendered.
    #[must_use]
    pub const fn is_render(&self) -> bool {
        matches!(self, Self::Render(_))
    }
}

/// Admin home for the request's flavor.
#[must_use]
pub fn admin_home(slug: Option<&str>) -> String {
    slug.map_or_else(|| "/admin".to_string(), |s| format!("/{s}/admin"))
}

/// Seller home for the request's flavor.
#[must_use]
pub fn seller_home(slug: Option<&str>) -> String {
    slug.map_or_else(|| "/seller".to_string(), |s| format!("/{s}/seller"))
}

/// Gate one parsed request against the current identity.
///
/// The decision table, in order: the landing page renders for everyone and
/// unrecognized paths bounce to it; entry pages render only while signed
/// out and otherwise bounce to the role's home; the admin area renders for
/// admins; the seller area renders for sellers, falls back to the tenant
/// seller login page for signed-out visitors on a tenant path, and
/// redirects to `/login` in every other denial.
#[must_use]
pub fn decide(request: &RouteRequest, identity: Option<&Identity>) -> RouteDecision {
    let slug = request.slug.as_deref();
    match request.target {
        Target::Landing => RouteDecision::Render(request.clone()),
        Target::Unknown => RouteDecision::Redirect {
            to: "/".to_string(),
            reason: RedirectReason::UnknownPath,
        },
        Target::Entry(_) => match identity {
            None => RouteDecision::Render(request.clone()),
            Some(id) if id.is_admin() => RouteDecision::Redirect {
                to: admin_home(slug),
                reason: RedirectReason::AlreadyAuthenticated,
            },
            Some(_) => RouteDecision::Redirect {
                to: seller_home(slug),
                reason: RedirectReason::AlreadyAuthenticated,
            },
        },
        Target::Admin(_) => match identity {
            Some(id) if id.is_admin() => RouteDecision::Render(request.clone()),
            // A signed-in seller on a legacy path is sent home; on a
            // tenant path the global login takes over.
            Some(_) if slug.is_none() => RouteDecision::Redirect {
                to: seller_home(None),
                reason: RedirectReason::RoleMismatch,
            },
            Some(_) => RouteDecision::Redirect {
                to: "/login".to_string(),
                reason: RedirectReason::RoleMismatch,
            },
            None => RouteDecision::Redirect {
                to: "/login".to_string(),
                reason: RedirectReason::NotAuthenticated,
            },
        },
        Target::Seller(_) => match identity {
            Some(id) if id.is_seller() => RouteDecision::Render(request.clone()),
            // Signed-out visitor on a tenant path gets the org's own
            // seller login page rather than a redirect.
            None => match &request.slug {
                Some(s) => RouteDecision::SellerLogin { slug: s.clone() },
                None => RouteDecision::Redirect {
                    to: "/login".to_string(),
                    reason: RedirectReason::NotAuthenticated,
                },
            },
            Some(_) => RouteDecision::Redirect {
                to: "/login".to_string(),
                reason: RedirectReason::RoleMismatch,
            },
        },
    }
}

/// Parse then gate in one step.
#[must_use]
pub fn decide_path(path: &str, identity: Option<&Identity>) -> RouteDecision {
    decide(&parse_path(path), identity)
}
