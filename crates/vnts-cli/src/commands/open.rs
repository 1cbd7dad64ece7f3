//! Path evaluation: what the single-page client would do for a URL.
//!
//! Resolution order matches the browser flow: branding first (so the screen
//! is themed before anything renders, and unknown organizations block), then
//! the role gate, then the target page's data when the gate renders it.

use anyhow::bail;
use serde::Serialize;
use serde_json::Value;

use vnts_api::SalesFilter;
use vnts_branding::{Branding, BrandingIssue, ResolvedBranding};
use vnts_core::Identity;
use vnts_routing::{AdminPage, RouteDecision, RouteRequest, SellerPage, Target, decide, parse_path};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::OpenArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Serialize)]
struct OpenResponse {
    path: String,
    branding: Branding,
    #[serde(skip_serializing_if = "Option::is_none")]
    branding_issue: Option<BrandingIssue>,
    decision: RouteDecision,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<Value>,
}

pub async fn handle(
    args: &OpenArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let request = parse_path(&args.path);

    let spinner = Progress::spinner("resolving route");
    let resolved: ResolvedBranding = ctx.branding.resolve(&ctx.api, request.slug.as_deref()).await;

    if let Some(BrandingIssue::OrganizationNotFound { slug }) = &resolved.issue {
        spinner.finish_err("organization not found");
        bail!("organization '{slug}' not found; nothing rendered");
    }
    // A failed lookup keeps the default branding and is reported in the
    // output; the route itself still resolves.

    let decision = decide(&request, ctx.identity.as_ref());
    let page = match &decision {
        RouteDecision::Render(request) => render_page(request, ctx).await?,
        _ => None,
    };
    spinner.finish_clear();

    output(
        &OpenResponse {
            path: args.path.clone(),
            branding: resolved.branding,
            branding_issue: resolved.issue,
            decision,
            page,
        },
        flags.format,
        &ctx.theme,
    )
}

/// Fetch the primary dataset of a rendered page.
///
/// Entry pages and the landing page are static. Seller pages are scoped to
/// the signed-in seller and their active branch; the sale form resolves the
/// branch before requesting products.
async fn render_page(request: &RouteRequest, ctx: &AppContext) -> anyhow::Result<Option<Value>> {
    let page = match request.target {
        Target::Landing | Target::Entry(_) | Target::Unknown => None,
        Target::Admin(AdminPage::Dashboard) => {
            let summary = ctx.api.sales_summary(&SalesFilter::default()).await?;
            Some(serde_json::to_value(summary)?)
        }
        Target::Admin(AdminPage::Products) => {
            Some(serde_json::to_value(ctx.api.list_products(None).await?)?)
        }
        Target::Admin(AdminPage::Sellers) => {
            Some(serde_json::to_value(ctx.api.list_sellers().await?)?)
        }
        Target::Admin(AdminPage::Branches) => {
            Some(serde_json::to_value(ctx.api.list_branches().await?)?)
        }
        Target::Admin(AdminPage::Clients) => {
            Some(serde_json::to_value(ctx.api.list_clients().await?)?)
        }
        Target::Admin(AdminPage::PaymentMethods) => {
            Some(serde_json::to_value(ctx.api.list_payment_methods().await?)?)
        }
        Target::Admin(AdminPage::Reports) => {
            Some(serde_json::to_value(ctx.api.sales_report(&SalesFilter::default()).await?)?)
        }
        Target::Seller(SellerPage::Dashboard) => {
            let filter = seller_filter(ctx.identity.as_ref());
            Some(serde_json::to_value(ctx.api.sales_summary(&filter).await?)?)
        }
        Target::Seller(SellerPage::History) => {
            let filter = seller_filter(ctx.identity.as_ref());
            Some(serde_json::to_value(ctx.api.list_sales(&filter).await?)?)
        }
        Target::Seller(SellerPage::NewSale) => {
            let branch = ctx
                .identity
                .as_ref()
                .and_then(|i| i.active_branch_id.clone());
            let products = ctx.api.list_products(branch.as_deref()).await?;
            let clients = ctx.api.list_clients().await?;
            let payment_methods = ctx.api.list_payment_methods().await?;
            Some(serde_json::json!({
                "products": products,
                "clients": clients,
                "payment_methods": payment_methods,
            }))
        }
    };
    Ok(page)
}

fn seller_filter(identity: Option<&Identity>) -> SalesFilter {
    identity.map_or_else(SalesFilter::default, |i| SalesFilter {
        seller_id: Some(i.id.clone()),
        branch_id: i.active_branch_id.clone(),
        ..SalesFilter::default()
    })
}

#[cfg(test)]
mod tests {
    use vnts_api::ApiError;
    use vnts_branding::{BrandingResolver, OrganizationDirectory, Theme};
    use vnts_core::models::Organization;
    use vnts_core::{Identity, Role};
    use vnts_routing::RedirectReason;

    use super::*;

    struct OneOrgDirectory(Organization);

    impl OrganizationDirectory for OneOrgDirectory {
        async fn organization_by_slug(
            &self,
            slug: &str,
        ) -> Result<Option<Organization>, ApiError> {
            Ok((self.0.slug == slug).then(|| self.0.clone()))
        }
    }

    fn admin() -> Identity {
        Identity {
            id: "1".into(),
            email: "owner@org-1.example".into(),
            role: Role::Admin,
            name: "Owner".into(),
            organization_id: "1".into(),
            active_branch_id: None,
            active_branch_name: None,
        }
    }

    // The signed-in admin walkthrough: the tenant admin area renders with
    // the organization's branding, the tenant seller area bounces to the
    // login while keeping that branding applied.
    #[tokio::test]
    async fn admin_sees_admin_area_but_not_seller_area() {
        let directory = OneOrgDirectory(Organization {
            id: "1".into(),
            name: "Org One".into(),
            slug: "org-1".into(),
            primary_color: Some("#ab47bc".into()),
        });
        let theme = Theme::new();
        let resolver = BrandingResolver::new(theme.clone());
        let identity = admin();

        let request = parse_path("/org-1/admin");
        let resolved = resolver.resolve(&directory, request.slug.as_deref()).await;
        assert_eq!(resolved.issue, None);
        let decision = decide(&request, Some(&identity));
        assert!(decision.is_render());
        assert_eq!(theme.accent_rgb(), (0xab, 0x47, 0xbc));

        let request = parse_path("/org-1/seller");
        let resolved = resolver.resolve(&directory, request.slug.as_deref()).await;
        assert_eq!(resolved.issue, None);
        let decision = decide(&request, Some(&identity));
        assert_eq!(
            decision,
            RouteDecision::Redirect {
                to: "/login".to_string(),
                reason: RedirectReason::RoleMismatch,
            }
        );
        // Denial does not un-theme the screen.
        assert_eq!(theme.accent_rgb(), (0xab, 0x47, 0xbc));
    }

    #[test]
    fn seller_filter_scopes_to_identity_and_branch() {
        let seller = Identity {
            id: "4".into(),
            email: String::new(),
            role: Role::Seller,
            name: "Ana".into(),
            organization_id: "1".into(),
            active_branch_id: Some("2".into()),
            active_branch_name: Some("Centro".into()),
        };
        let filter = seller_filter(Some(&seller));
        assert_eq!(filter.seller_id.as_deref(), Some("4"));
        assert_eq!(filter.branch_id.as_deref(), Some("2"));
        assert_eq!(seller_filter(None).seller_id, None);
    }
}
