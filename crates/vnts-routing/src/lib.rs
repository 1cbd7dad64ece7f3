//! # vnts-routing
//!
//! Path grammar and the role gate for VNTS navigation.
//!
//! [`parse_path`] turns a navigated path (legacy or tenant-scoped flavor)
//! into a [`RouteRequest`]; [`decide`] applies the role decision table to
//! it, yielding render, redirect or the tenant seller login page. Both are
//! pure functions over the current [`vnts_core::Identity`], so every CLI
//! command can gate its area the same way the `open` command gates a full
//! path.

mod gate;
mod path;

pub use gate::{RedirectReason, RouteDecision, admin_home, decide, decide_path, seller_home};
pub use path::{AdminPage, EntryKind, RouteRequest, SellerPage, Target, parse_path};
