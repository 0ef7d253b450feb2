//! hw-core: stable vocabulary for the hot-water explorer.
//!
//! Contains:
//! - attributes (categorical attribute enums, coded strings + display labels)
//! - location (capitals, jurisdictions, postcode mapping)
//! - error (shared error types)

pub mod attributes;
pub mod error;
pub mod location;

// Re-exports: nice ergonomics for downstream crates
pub use attributes::*;
pub use error::{CoreError, CoreResult};
pub use location::*;
