//! Configuration keys read by the country admission policy
//!
//! Keys are dotted paths relative to a single check's configuration subtree.

/// Inclusion list. When non-empty, only these countries are admitted.
pub const COUNTRIES_WHITELIST: &str = "countries.whitelist";

/// Legacy name for [`COUNTRIES_WHITELIST`], read only when that key is absent.
pub const COUNTRIES_LEGACY: &str = "countries";

/// Exclusion list, applied only when no whitelist is in effect.
pub const COUNTRIES_BLACKLIST: &str = "countries.blacklist";
