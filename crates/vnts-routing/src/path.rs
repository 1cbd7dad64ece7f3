//! Path grammar for the two URL flavors.
//!
//! Legacy paths have no tenant prefix (`/admin/products`, `/seller`,
//! `/login`). Tenant-scoped paths carry the organization slug first
//! (`/acme/admin/products`, `/acme/seller`, `/acme/login`). The first
//! segment is only read as a slug when it is not one of the reserved words.

use serde::Serialize;

/// Entry pages reachable while signed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Login,
    Register,
}

/// Pages of the admin area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdminPage {
    Dashboard,
    Products,
    Sellers,
    Branches,
    Clients,
    PaymentMethods,
    Reports,
}

impl AdminPage {
    fn from_segment(segment: &str) -> Option<Self> {
        Some(match segment {
            "products" => Self::Products,
            "sellers" => Self::Sellers,
            "branches" => Self::Branches,
            "clients" => Self::Clients,
            "payment-methods" => Self::PaymentMethods,
            "reports" => Self::Reports,
            _ => return None,
        })
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Products => "products",
            Self::Sellers => "sellers",
            Self::Branches => "branches",
            Self::Clients => "clients",
            Self::PaymentMethods => "payment-methods",
            Self::Reports => "reports",
        }
    }
}

/// Pages of the seller area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SellerPage {
    Dashboard,
    NewSale,
    History,
}

impl SellerPage {
    fn from_segment(segment: &str) -> Option<Self> {
        Some(match segment {
            "new-sale" => Self::NewSale,
            "history" => Self::History,
            _ => return None,
        })
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::NewSale => "new-sale",
            Self::History => "history",
        }
    }
}

/// What a parsed path points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Landing,
    Entry(EntryKind),
    Admin(AdminPage),
    Seller(SellerPage),
    Unknown,
}

/// A parsed navigation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteRequest {
    /// Organization slug for tenant-scoped paths.
    pub slug: Option<String>,
    pub target: Target,
}

impl RouteRequest {
    #[must_use]
    pub fn new(slug: Option<&str>, target: Target) -> Self {
        Self {
            slug: slug.map(str::to_string),
            target,
        }
    }
}

/// First segments that can never be an organization slug.
const RESERVED: [&str; 4] = ["admin", "seller", "login", "register"];

fn is_reserved(segment: &str) -> bool {
    RESERVED.contains(&segment)
}

fn admin_target(rest: &[&str]) -> Target {
    match rest {
        [] => Target::Admin(AdminPage::Dashboard),
        [segment] => AdminPage::from_segment(segment).map_or(Target::Unknown, Target::Admin),
        _ => Target::Unknown,
    }
}

fn seller_target(rest: &[&str]) -> Target {
    match rest {
        [] => Target::Seller(SellerPage::Dashboard),
        [segment] => SellerPage::from_segment(segment).map_or(Target::Unknown, Target::Seller),
        _ => Target::Unknown,
    }
}

/// Parse a navigated path. Never fails; anything outside the grammar comes
/// back as [`Target::Unknown`] (with the slug still captured when the first
/// segment looks like one, so branding can resolve regardless).
#[must_use]
pub fn parse_path(path: &str) -> RouteRequest {
    let path = path.split(['?', '#']).next().unwrap_or("");
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        [] => RouteRequest::new(None, Target::Landing),
        ["login"] => RouteRequest::new(None, Target::Entry(EntryKind::Login)),
        ["register"] => RouteRequest::new(None, Target::Entry(EntryKind::Register)),
        ["admin", rest @ ..] => RouteRequest::new(None, admin_target(rest)),
        ["seller", rest @ ..] => RouteRequest::new(None, seller_target(rest)),
        [slug, "login"] if !is_reserved(slug) => {
            RouteRequest::new(Some(slug), Target::Entry(EntryKind::Login))
        }
        [slug, "admin", rest @ ..] if !is_reserved(slug) => {
            RouteRequest::new(Some(slug), admin_target(rest))
        }
        [slug, "seller", rest @ ..] if !is_reserved(slug) => {
            RouteRequest::new(Some(slug), seller_target(rest))
        }
        [slug, ..] if !is_reserved(slug) => RouteRequest::new(Some(slug), Target::Unknown),
        _ => RouteRequest::new(None, Target::Unknown),
    }
}
