//! Slug to tenant-branding resolution.
//!
//! Every navigation carries an optional organization slug. Resolution turns
//! that slug into a [`Branding`] value and pushes its accent into the shared
//! [`Theme`]. Lookups go through the [`OrganizationDirectory`] trait so tests
//! can script the directory without a server.
//!
//! Resolutions are numbered. A resolution only applies its result if no
//! newer resolution has applied first, so a slow lookup for a slug the user
//! already navigated away from can never clobber the current branding.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use serde::Serialize;
use vnts_api::{ApiClient, ApiError};
use vnts_core::HexColor;
use vnts_core::models::Organization;

use crate::theme::{DEFAULT_PRIMARY_COLOR, Theme};

/// Source of organization records, keyed by slug.
pub trait OrganizationDirectory {
    /// `Ok(None)` means the slug is unknown; `Err` means the directory could
    /// not answer.
    fn organization_by_slug(
        &self,
        slug: &str,
    ) -> impl Future<Output = Result<Option<Organization>, ApiError>> + Send;
}

impl OrganizationDirectory for ApiClient {
    async fn organization_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<Organization>, ApiError> {
        ApiClient::organization_by_slug(self, slug).await
    }
}

/// Display configuration for the active tenant (or the non-tenant default).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Branding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
    pub org_name: String,
    pub primary_color: HexColor,
}

impl Branding {
    /// The non-tenant appearance: no organization, default accent.
    #[must_use]
    pub fn default_branding() -> Self {
        Self {
            org_id: None,
            org_name: String::new(),
            primary_color: default_accent(),
        }
    }

    fn from_organization(org: Organization) -> Self {
        let primary_color = match org.primary_color {
            Some(raw) => match HexColor::parse(&raw) {
                Ok(color) => color,
                Err(error) => {
                    tracing::warn!(%error, raw, org = %org.slug, "invalid primary color, using default accent");
                    default_accent()
                }
            },
            None => default_accent(),
        };
        Self {
            org_id: Some(org.id),
            org_name: org.name,
            primary_color,
        }
    }
}

impl Default for Branding {
    fn default() -> Self {
        Self::default_branding()
    }
}

fn default_accent() -> HexColor {
    HexColor::parse(DEFAULT_PRIMARY_COLOR).expect("default accent is a valid hex color")
}

/// Why a resolution fell back to the default branding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BrandingIssue {
    /// The slug matched no organization. Callers must block tenant content
    /// behind an error screen instead of rendering with default branding.
    OrganizationNotFound { slug: String },
    /// The directory could not be reached or answered with an error. The
    /// organization may exist.
    LookupFailed { slug: String, message: String },
}

/// Outcome of one resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedBranding {
    pub branding: Branding,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<BrandingIssue>,
    /// False when a newer resolution applied first and this result was
    /// discarded.
    pub applied: bool,
}

#[derive(Debug)]
struct Applied {
    generation: u64,
    branding: Branding,
}

/// Resolves slugs to branding and keeps the newest result applied.
#[derive(Debug)]
pub struct BrandingResolver {
    theme: Theme,
    next_generation: AtomicU64,
    applied: Mutex<Applied>,
}

impl BrandingResolver {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            next_generation: AtomicU64::new(0),
            applied: Mutex::new(Applied {
                generation: 0,
                branding: Branding::default_branding(),
            }),
        }
    }

    /// The branding currently applied to the theme.
    #[must_use]
    pub fn current(&self) -> Branding {
        self.lock_applied().branding.clone()
    }

    /// Resolve `slug` and apply the result if it is still the newest request.
    ///
    /// No slug resolves to the default branding without touching the
    /// directory. A present slug issues exactly one lookup; unknown slugs and
    /// failed lookups both fall back to the default branding, distinguished
    /// by [`ResolvedBranding::issue`].
    pub async fn resolve<D: OrganizationDirectory>(
        &self,
        directory: &D,
        slug: Option<&str>,
    ) -> ResolvedBranding {
        let generation = self.next_generation.fetch_add(1, Ordering::SeqCst) + 1;

        let (branding, issue) = match slug {
            None => (Branding::default_branding(), None),
            Some(slug) => match directory.organization_by_slug(slug).await {
                Ok(Some(org)) => (Branding::from_organization(org), None),
                Ok(None) => (
                    Branding::default_branding(),
                    Some(BrandingIssue::OrganizationNotFound {
                        slug: slug.to_string(),
                    }),
                ),
                Err(error) => {
                    tracing::warn!(%error, slug, "organization lookup failed");
                    (
                        Branding::default_branding(),
                        Some(BrandingIssue::LookupFailed {
                            slug: slug.to_string(),
                            message: error.to_string(),
                        }),
                    )
                }
            },
        };

        let applied = self.apply_if_newest(generation, &branding);
        ResolvedBranding {
            branding,
            issue,
            applied,
        }
    }

    fn apply_if_newest(&self, generation: u64, branding: &Branding) -> bool {
        let mut applied = self.lock_applied();
        if generation < applied.generation {
            tracing::debug!(
                generation,
                newest = applied.generation,
                "discarding stale branding resolution"
            );
            return false;
        }
        applied.generation = generation;
        applied.branding = branding.clone();
        self.theme.apply(&branding.primary_color);
        true
    }

    fn lock_applied(&self) -> std::sync::MutexGuard<'_, Applied> {
        self.applied.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct StubDirectory {
        orgs: Vec<Organization>,
        delay: Option<Duration>,
        fail_with_status: Option<u16>,
        lookups: AtomicUsize,
    }

    impl StubDirectory {
        fn with_org(org: Organization) -> Self {
            Self {
                orgs: vec![org],
                ..Self::default()
            }
        }

        fn lookups(&self) -> usize {
            self.lookups.load(Ordering::SeqCst)
        }
    }

    impl OrganizationDirectory for StubDirectory {
        async fn organization_by_slug(
            &self,
            slug: &str,
        ) -> Result<Option<Organization>, ApiError> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            if let Some(status) = self.fail_with_status {
                return Err(ApiError::Api {
                    status,
                    message: "directory unavailable".to_string(),
                });
            }
            Ok(self.orgs.iter().find(|org| org.slug == slug).cloned())
        }
    }

    fn acme() -> Organization {
        Organization {
            id: "7".to_string(),
            name: "Acme Corp".to_string(),
            slug: "acme".to_string(),
            primary_color: Some("FF5722".to_string()),
        }
    }

    #[tokio::test]
    async fn no_slug_resolves_default_without_lookups() {
        let directory = StubDirectory::with_org(acme());
        let resolver = BrandingResolver::new(Theme::new());

        let resolved = resolver.resolve(&directory, None).await;

        assert_eq!(directory.lookups(), 0);
        assert_eq!(resolved.branding, Branding::default_branding());
        assert_eq!(resolved.issue, None);
        assert!(resolved.applied);
        assert_eq!(
            resolved.branding.primary_color.as_str(),
            DEFAULT_PRIMARY_COLOR
        );
    }

    #[tokio::test]
    async fn known_slug_populates_branding_and_theme() {
        let directory = StubDirectory::with_org(acme());
        let theme = Theme::new();
        let resolver = BrandingResolver::new(theme.clone());

        let resolved = resolver.resolve(&directory, Some("acme")).await;

        assert_eq!(directory.lookups(), 1);
        assert!(resolved.applied);
        assert_eq!(resolved.issue, None);
        assert_eq!(resolved.branding.org_id.as_deref(), Some("7"));
        assert_eq!(resolved.branding.org_name, "Acme Corp");
        assert_eq!(resolved.branding.primary_color.as_str(), "#ff5722");
        assert_eq!(theme.accent_rgb(), (0xff, 0x57, 0x22));
        assert_eq!(resolver.current(), resolved.branding);
    }

    #[tokio::test]
    async fn unknown_slug_falls_back_with_not_found() {
        let directory = StubDirectory::with_org(acme());
        let theme = Theme::new();
        theme.apply(&HexColor::parse("#000000").unwrap());
        let resolver = BrandingResolver::new(theme.clone());

        let resolved = resolver.resolve(&directory, Some("nope")).await;

        assert_eq!(
            resolved.issue,
            Some(BrandingIssue::OrganizationNotFound {
                slug: "nope".to_string()
            })
        );
        assert!(resolved.applied);
        assert_eq!(resolved.branding, Branding::default_branding());
        // The fallback still repaints so the screen is visually consistent.
        assert_eq!(theme.accent_rgb(), (0x19, 0x76, 0xd2));
    }

    #[tokio::test]
    async fn directory_failure_keeps_distinct_reason() {
        let directory = StubDirectory {
            fail_with_status: Some(502),
            ..StubDirectory::default()
        };
        let resolver = BrandingResolver::new(Theme::new());

        let resolved = resolver.resolve(&directory, Some("acme")).await;

        assert!(matches!(
            resolved.issue,
            Some(BrandingIssue::LookupFailed { ref slug, .. }) if slug == "acme"
        ));
        assert_eq!(resolved.branding, Branding::default_branding());
        assert!(resolved.applied);
    }

    #[tokio::test]
    async fn invalid_or_missing_color_defaults_but_keeps_org() {
        let mut bad_color = acme();
        bad_color.primary_color = Some("redish".to_string());
        let directory = StubDirectory::with_org(bad_color);
        let resolver = BrandingResolver::new(Theme::new());

        let resolved = resolver.resolve(&directory, Some("acme")).await;
        assert_eq!(resolved.issue, None);
        assert_eq!(resolved.branding.org_name, "Acme Corp");
        assert_eq!(
            resolved.branding.primary_color.as_str(),
            DEFAULT_PRIMARY_COLOR
        );

        let mut no_color = acme();
        no_color.primary_color = None;
        let directory = StubDirectory::with_org(no_color);
        let resolved = resolver.resolve(&directory, Some("acme")).await;
        assert_eq!(
            resolved.branding.primary_color.as_str(),
            DEFAULT_PRIMARY_COLOR
        );
    }

    #[tokio::test]
    async fn stale_resolution_never_overwrites_newer() {
        let mut slow_org = acme();
        slow_org.slug = "old-org".to_string();
        slow_org.name = "Old Org".to_string();
        let slow = StubDirectory {
            delay: Some(Duration::from_millis(50)),
            ..StubDirectory::with_org(slow_org)
        };

        let mut fast_org = acme();
        fast_org.slug = "new-org".to_string();
        fast_org.name = "New Org".to_string();
        fast_org.primary_color = Some("#00ff00".to_string());
        let fast = StubDirectory::with_org(fast_org);

        let theme = Theme::new();
        let resolver = BrandingResolver::new(theme.clone());

        // The first resolve parks on the slow directory; the second finishes
        // while it sleeps.
        let (stale, fresh) = tokio::join!(
            resolver.resolve(&slow, Some("old-org")),
            resolver.resolve(&fast, Some("new-org")),
        );

        assert!(fresh.applied);
        assert!(!stale.applied);
        assert_eq!(resolver.current().org_name, "New Org");
        assert_eq!(theme.accent_rgb(), (0x00, 0xff, 0x00));
        // The stale result itself still resolved, it just was not applied.
        assert_eq!(stale.branding.org_name, "Old Org");
    }

    #[tokio::test]
    async fn repeated_resolution_is_idempotent() {
        let directory = StubDirectory::with_org(acme());
        let theme = Theme::new();
        let resolver = BrandingResolver::new(theme.clone());

        let first = resolver.resolve(&directory, Some("acme")).await;
        let second = resolver.resolve(&directory, Some("acme")).await;

        assert!(first.applied && second.applied);
        assert_eq!(first.branding, second.branding);
        assert_eq!(theme.accent_rgb(), (0xff, 0x57, 0x22));
        assert_eq!(directory.lookups(), 2);
    }
}
