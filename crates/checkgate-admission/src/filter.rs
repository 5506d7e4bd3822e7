//! Country whitelist/blacklist resolution

use crate::AdmissionDecision;
use checkgate_domain::keys::{COUNTRIES_BLACKLIST, COUNTRIES_LEGACY, COUNTRIES_WHITELIST};
use checkgate_domain::{AdmissionPolicy, ConfigurationLookup, CountryCode};
use std::collections::HashSet;
use tracing::{debug, trace};

/// Whitelist from `countries.whitelist`, else legacy `countries`, else empty
fn resolve_whitelist<L: ConfigurationLookup + ?Sized>(config: &L) -> Vec<String> {
    config.lookup(COUNTRIES_WHITELIST, config.lookup(COUNTRIES_LEGACY, Vec::new()))
}

/// Decide admission for a single country straight from a check's configuration
///
/// The blacklist is only read when the whitelist is empty. Prefer
/// [`CountryFilter`] when the same check is queried for many countries.
///
/// # Examples
///
/// ```
/// use checkgate_admission::is_admitted;
/// use std::collections::HashMap;
///
/// let mut config = HashMap::new();
/// config.insert("countries.blacklist".to_string(), vec!["AIA".to_string(), "DOM".to_string()]);
///
/// assert!(is_admitted(&config, "IRN"));
/// assert!(!is_admitted(&config, "AIA"));
/// ```
pub fn is_admitted<L: ConfigurationLookup + ?Sized>(config: &L, country: &str) -> bool {
    let whitelist = resolve_whitelist(config);
    if !whitelist.is_empty() {
        return whitelist.iter().any(|code| code == country);
    }

    !config
        .lookup(COUNTRIES_BLACKLIST, Vec::new())
        .iter()
        .any(|code| code == country)
}

/// Resolved country lists for one check
///
/// Built once per check instantiation and immutable afterwards, so it can be
/// shared freely across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryFilter {
    whitelist: HashSet<CountryCode>,
    blacklist: HashSet<CountryCode>,
}

impl CountryFilter {
    /// A filter that admits every country
    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// Build a filter from explicit lists
    pub fn new<W, B>(whitelist: W, blacklist: B) -> Self
    where
        W: IntoIterator,
        W::Item: Into<CountryCode>,
        B: IntoIterator,
        B::Item: Into<CountryCode>,
    {
        Self {
            whitelist: whitelist.into_iter().map(Into::into).collect(),
            blacklist: blacklist.into_iter().map(Into::into).collect(),
        }
    }

    /// Resolve both lists from a check's configuration
    pub fn from_lookup<L: ConfigurationLookup + ?Sized>(config: &L) -> Self {
        let filter = Self::new(
            resolve_whitelist(config),
            config.lookup(COUNTRIES_BLACKLIST, Vec::new()),
        );

        debug!(
            whitelist = filter.whitelist.len(),
            blacklist = filter.blacklist.len(),
            "Resolved country filter"
        );

        filter
    }

    /// Countries the whitelist admits; empty when no whitelist is in effect
    pub fn whitelist(&self) -> &HashSet<CountryCode> {
        &self.whitelist
    }

    /// Countries the blacklist rejects; ignored while a whitelist is in effect
    pub fn blacklist(&self) -> &HashSet<CountryCode> {
        &self.blacklist
    }

    /// Whether every country is admitted
    pub fn is_unrestricted(&self) -> bool {
        self.whitelist.is_empty() && self.blacklist.is_empty()
    }

    /// Decide admission for `country`, reporting which rule applied
    pub fn decide(&self, country: &str) -> AdmissionDecision {
        let decision = if !self.whitelist.is_empty() {
            if self.whitelist.contains(country) {
                AdmissionDecision::Whitelisted
            } else {
                AdmissionDecision::NotWhitelisted
            }
        } else if self.blacklist.contains(country) {
            AdmissionDecision::Blacklisted
        } else {
            AdmissionDecision::NotBlacklisted
        };

        trace!(country, %decision, "Country admission");
        decision
    }

    /// Whether the check should run for `country`
    pub fn is_admitted(&self, country: &str) -> bool {
        self.decide(country).is_admitted()
    }
}

impl AdmissionPolicy for CountryFilter {
    fn is_admitted(&self, country: &str) -> bool {
        CountryFilter::is_admitted(self, country)
    }
}
