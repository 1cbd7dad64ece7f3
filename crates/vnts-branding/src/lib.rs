//! # vnts-branding
//!
//! Turns the organization slug from a URL into tenant display configuration
//! and keeps the terminal accent in sync with it.
//!
//! [`BrandingResolver::resolve`] is the entry point: no slug means the
//! default appearance with zero lookups, a slug means exactly one directory
//! lookup with fallbacks for unknown organizations and unreachable
//! directories. Results are applied newest-first so a slow lookup can never
//! repaint over a later navigation.

pub mod resolver;
pub mod theme;

pub use resolver::{
    Branding, BrandingIssue, BrandingResolver, OrganizationDirectory, ResolvedBranding,
};
pub use theme::{DEFAULT_PRIMARY_COLOR, Theme};
