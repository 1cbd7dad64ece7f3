mod auth;
mod branch;
mod client;
mod config;
mod org;
mod payment_method;
mod product;
mod report;
mod sale;
mod seller;

pub use auth::{AuthCommands, LoginArgs, RegisterArgs, SellerLoginArgs};
pub use branch::BranchCommands;
pub use client::ClientCommands;
pub use config::ConfigCommands;
pub use org::OrgCommands;
pub use payment_method::PaymentMethodCommands;
pub use product::ProductCommands;
pub use report::ReportCommands;
pub use sale::{SaleCommands, SaleListArgs, SaleNewArgs};
pub use seller::SellerCommands;
