//! # vnts-api
//!
//! Typed HTTP client for the VNTS backend.
//!
//! [`ApiClient`] wraps `reqwest` with the credential stores from
//! `vnts-session` and applies the token lifecycle to every authenticated
//! request: bearer attach, one transparent refresh-and-retry on 401, and
//! session teardown when the refresh token is missing or rejected. Resource
//! modules add one `impl ApiClient` block each (auth, organizations,
//! branches, sellers, products, clients, payment methods, sales).

pub mod auth;
pub mod branches;
pub mod clients;
pub mod organizations;
pub mod payment_methods;
pub mod products;
pub mod sales;
pub mod sellers;

mod client;
mod error;
mod http;

pub use client::ApiClient;
pub use error::ApiError;
pub use sales::SalesFilter;
