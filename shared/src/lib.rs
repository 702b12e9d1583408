//! Shared types for the Mesa restaurant platform
//!
//! Domain models and wire types used by the server and any API client.
//! All wire-facing types serialize camelCase to match the public API
//! contract.

pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
