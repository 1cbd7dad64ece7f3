//! # vnts-session
//!
//! Client-side session state for the VNTS CLI.
//!
//! Provides the durable session store (`~/.vnts/session.json`), tiered
//! access/refresh credential storage (OS keyring with env and file
//! fallbacks), and best-effort JWT expiry inspection for status display.

pub mod error;
pub mod jwt;
pub mod store;
pub mod tokens;

pub use error::SessionError;
pub use store::SessionStore;
pub use tokens::{TokenKind, TokenSource, TokenStore};
