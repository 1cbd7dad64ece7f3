pub mod auth;
pub mod branch;
pub mod client;
pub mod config_cmd;
pub mod dispatch;
pub mod open;
pub mod org;
pub mod payment_method;
pub mod product;
pub mod report;
pub mod sale;
pub mod seller;
pub mod shared;
