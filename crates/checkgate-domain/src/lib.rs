//! Checkgate Domain Layer
//!
//! Core types and trait seams for country-scoped check admission. This crate
//! has no external dependencies; configuration parsing and the admission
//! policy itself live in other crates.
//!
//! ## Key Concepts
//!
//! - **CountryCode**: An opaque country identifier, compared by exact equality
//! - **ConfigurationLookup**: Key-based list lookups with caller-supplied defaults,
//!   scoped to a single named check
//! - **AdmissionPolicy**: The per-country admission query a check exposes
//! - **Keys**: The configuration keys the admission policy reads
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Trait definitions for all configuration access
//! - Concrete configuration sources live in `checkgate-config`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod country;
pub mod keys;
pub mod traits;

// Re-exports for convenience
pub use country::CountryCode;
pub use traits::{AdmissionPolicy, ConfigurationLookup};
