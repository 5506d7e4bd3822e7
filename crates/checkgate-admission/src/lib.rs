//! Checkgate Admission
//!
//! Decides whether a check runs against data belonging to a given country.
//!
//! Each check's configuration may carry three keys:
//! - `countries.whitelist`: when non-empty, only these countries are admitted
//! - `countries`: legacy name for the whitelist, read only when `countries.whitelist` is absent
//! - `countries.blacklist`: when no whitelist is in effect, these countries are rejected
//!
//! A non-empty whitelist fully overrides the blacklist. An empty whitelist is
//! the same as no whitelist. With neither list configured every country is
//! admitted. Codes are compared by exact string equality.
//!
//! # Examples
//!
//! ```
//! use checkgate_admission::{AdmissionDecision, CountryFilter};
//! use checkgate_config::Configuration;
//!
//! let config = Configuration::from_json(
//!     r#"{"BaseTestCheck": {
//!         "countries.whitelist": ["IRN"],
//!         "countries.blacklist": ["IRN", "AIA"]
//!     }}"#,
//! )?;
//!
//! // Resolve once per check, then query per country
//! let filter = CountryFilter::from_lookup(&config.for_check("BaseTestCheck"));
//! assert!(filter.is_admitted("IRN"));
//! assert!(!filter.is_admitted("DOM"));
//! assert_eq!(filter.decide("AIA"), AdmissionDecision::NotWhitelisted);
//! # Ok::<(), checkgate_config::ConfigError>(())
//! ```

#![warn(missing_docs)]

mod decision;
mod filter;

pub use checkgate_domain::AdmissionPolicy;
pub use decision::AdmissionDecision;
pub use filter::{is_admitted, CountryFilter};
