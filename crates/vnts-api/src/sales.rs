//! Sale recording and reporting.
//!
//! Commissions and aggregates are computed by the backend; this module only
//! ships filters out and typed rows back.

use chrono::NaiveDate;

use vnts_core::ListEnvelope;
use vnts_core::models::{NewSale, Sale, SalesReportRow, SalesSummary};

use crate::client::ApiClient;
use crate::error::ApiError;

/// Server-side filters for sale listings and reports.
#[derive(Debug, Clone, Default)]
pub struct SalesFilter {
    pub seller_id: Option<String>,
    pub branch_id: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl SalesFilter {
    /// Render as a query string, empty when no filter is set.
    fn query_string(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if let Some(seller) = &self.seller_id {
            pairs.push(("seller", urlencoding::encode(seller).into_owned()));
        }
        if let Some(branch) = &self.branch_id {
            pairs.push(("branch", urlencoding::encode(branch).into_owned()));
        }
        if let Some(from) = &self.from {
            pairs.push(("from", from.format("%Y-%m-%d").to_string()));
        }
        if let Some(to) = &self.to {
            pairs.push(("to", to.format("%Y-%m-%d").to_string()));
        }
        if pairs.is_empty() {
            return String::new();
        }
        let joined = pairs
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        format!("?{joined}")
    }
}

impl ApiClient {
    /// Record a sale. The backend computes totals and commission.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, auth or backend failure; stock and
    /// item validation rejections arrive as [`ApiError::Api`].
    pub async fn create_sale(&self, sale: &NewSale) -> Result<Sale, ApiError> {
        self.post_json("/sales", sale).await
    }

    /// List sales matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, auth or backend failure.
    pub async fn list_sales(&self, filter: &SalesFilter) -> Result<Vec<Sale>, ApiError> {
        let path = format!("/sales{}", filter.query_string());
        let envelope: ListEnvelope<Sale> = self.get_json(&path).await?;
        Ok(envelope.into_vec())
    }

    /// Aggregate totals for the filtered period.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, auth or backend failure.
    pub async fn sales_summary(&self, filter: &SalesFilter) -> Result<SalesSummary, ApiError> {
        let path = format!("/sales/summary{}", filter.query_string());
        self.get_json(&path).await
    }

    /// Per-seller report rows for the admin reports page.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, auth or backend failure.
    pub async fn sales_report(&self, filter: &SalesFilter) -> Result<Vec<SalesReportRow>, ApiError> {
        let path = format!("/sales/report{}", filter.query_string());
        let envelope: ListEnvelope<SalesReportRow> = self.get_json(&path).await?;
        Ok(envelope.into_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_filter_renders_no_query() {
        assert_eq!(SalesFilter::default().query_string(), "");
    }

    #[test]
    fn full_filter_renders_all_pairs() {
        let filter = SalesFilter {
            seller_id: Some("4".into()),
            branch_id: Some("2".into()),
            from: NaiveDate::from_ymd_opt(2026, 8, 1),
            to: NaiveDate::from_ymd_opt(2026, 8, 31),
        };
        assert_eq!(
            filter.query_string(),
            "?seller=4&branch=2&from=2026-08-01&to=2026-08-31"
        );
    }

    #[test]
    fn partial_filter_skips_unset_pairs() {
        let filter = SalesFilter {
            branch_id: Some("2".into()),
            ..Default::default()
        };
        assert_eq!(filter.query_string(), "?branch=2");
    }
}
