//! Checkgate Configuration
//!
//! Inline configuration documents for checks, keyed by check name.
//!
//! A document is parsed once from JSON or TOML text that is already in memory
//! and then scoped per check with [`Configuration::for_check`]. The scoped
//! view implements [`checkgate_domain::ConfigurationLookup`], so it can be
//! handed straight to the admission policy.
//!
//! # Examples
//!
//! ```
//! use checkgate_config::Configuration;
//! use checkgate_domain::ConfigurationLookup;
//!
//! let config = Configuration::from_json(
//!     r#"{"BaseTestCheck": {"countries.whitelist": ["AIA", "DOM"]}}"#,
//! )?;
//!
//! let check = config.for_check("BaseTestCheck");
//! assert_eq!(check.lookup("countries.whitelist", Vec::new()), vec!["AIA", "DOM"]);
//! assert!(check.lookup("countries.blacklist", Vec::new()).is_empty());
//! # Ok::<(), checkgate_config::ConfigError>(())
//! ```
//!
//! # Key resolution
//!
//! Keys are dotted paths. Within each object the literal key is tried first
//! (`"countries.whitelist"`), then nested objects (`{"countries": {"whitelist": ..}}`).
//! The same document in TOML:
//!
//! ```toml
//! [BaseTestCheck]
//! "countries.whitelist" = ["AIA", "DOM"]
//! countries.blacklist = ["IRN"]
//! ```

#![warn(missing_docs)]

mod configuration;
mod error;

pub use configuration::{CheckConfiguration, Configuration};
pub use error::ConfigError;
