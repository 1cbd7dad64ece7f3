//! Wire models for the backend resources.
//!
//! Field names mirror the backend's snake_case JSON. Ids and decimals go
//! through the [`crate::de`] adapters so the loose wire shapes (numeric ids,
//! stringly decimals) never leak past deserialization.

mod branch;
mod client;
mod organization;
mod payment_method;
mod product;
mod sale;
mod seller;

pub use branch::{Branch, BranchUpdate, NewBranch};
pub use client::{Client, ClientUpdate, NewClient};
pub use organization::Organization;
pub use payment_method::{NewPaymentMethod, PaymentMethod, PaymentMethodUpdate};
pub use product::{NewProduct, Product, ProductUpdate};
pub use sale::{NewSale, NewSaleItem, Sale, SaleItem, SalesReportRow, SalesSummary};
pub use seller::{NewSeller, Seller, SellerUpdate};

pub(crate) const fn default_true() -> bool {
    true
}
