//! uc-core: stable foundation for the unit converter.
//!
//! Contains:
//! - ids (compact IDs for graph vertices, edges and components)
//! - decimal (precision contexts and half-up rounding helpers)

pub mod decimal;
pub mod ids;

// Re-exports: nice ergonomics for downstream crates
pub use ids::*;
