//! Client for the Acquia Cloud REST API
//!
//! Covers what the recipe needs from the remote directory: client-credentials
//! authentication, account lookup, application and environment listing, and
//! SSH key upload.

pub mod client;
pub mod error;
mod models;

pub use client::{AUTH_URL, AcquiaApi, BASE_URL, DEFAULT_KEY_LABEL};
pub use error::{Error, Result};
pub use models::Token;
