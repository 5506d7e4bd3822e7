//! Trait definitions for configuration access
//!
//! These traits define the boundary between the admission policy and
//! whatever parsed the configuration. Implementations live in other crates.

use std::collections::HashMap;

/// Key-based list lookups over one check's configuration
///
/// Implemented by the infrastructure layer (checkgate-config)
///
/// Implementations own the distinction between a missing key and an
/// explicitly empty list: `default` is returned only when `key` is absent,
/// otherwise the configured list comes back verbatim, even when empty.
pub trait ConfigurationLookup {
    /// Resolve `key` to a list of strings, or `default` when absent
    fn lookup(&self, key: &str, default: Vec<String>) -> Vec<String>;
}

impl<T: ConfigurationLookup + ?Sized> ConfigurationLookup for &T {
    fn lookup(&self, key: &str, default: Vec<String>) -> Vec<String> {
        (**self).lookup(key, default)
    }
}

/// Flat map of already-resolved keys, e.g. `"countries.whitelist" -> [..]`
impl ConfigurationLookup for HashMap<String, Vec<String>> {
    fn lookup(&self, key: &str, default: Vec<String>) -> Vec<String> {
        self.get(key).cloned().unwrap_or(default)
    }
}

/// Per-country admission query for one check
///
/// Invoked by the surrounding rule engine once per (check, country) pair
/// before the check's validation logic runs against that country's data.
/// Implementations must be pure: the same country always gets the same answer.
///
/// Implemented by the application layer (checkgate-admission)
pub trait AdmissionPolicy {
    /// Whether the check should run for `country`
    fn is_admitted(&self, country: &str) -> bool;
}
