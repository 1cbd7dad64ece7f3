//! # vnts-core
//!
//! Core types shared across the VNTS client crates:
//! - The authenticated [`identity::Identity`] and its [`identity::Role`]
//! - Wire models for every backend resource (`models`)
//! - List-response normalization (`envelope`) for backends that return either
//!   a bare array or a `{"results": [...]}` page
//! - Accent color parsing and validation (`color`)
//! - Request-payload validation helpers (`validate`)

pub mod color;
pub mod de;
pub mod envelope;
pub mod identity;
pub mod models;
pub mod validate;

pub use color::HexColor;
pub use envelope::ListEnvelope;
pub use identity::{Identity, Role};
