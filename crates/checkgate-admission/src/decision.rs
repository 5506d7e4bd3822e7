//! Admission outcomes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of an admission query, with the rule that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdmissionDecision {
    /// Listed in the whitelist
    Whitelisted,

    /// A whitelist is in effect and does not list the country
    NotWhitelisted,

    /// No whitelist in effect and the blacklist lists the country
    Blacklisted,

    /// No whitelist in effect and the blacklist (possibly empty) does not list the country
    NotBlacklisted,
}

impl AdmissionDecision {
    /// Whether the check should run
    pub fn is_admitted(&self) -> bool {
        matches!(self, AdmissionDecision::Whitelisted | AdmissionDecision::NotBlacklisted)
    }

    /// Short name, as used in serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            AdmissionDecision::Whitelisted => "whitelisted",
            AdmissionDecision::NotWhitelisted => "not_whitelisted",
            AdmissionDecision::Blacklisted => "blacklisted",
            AdmissionDecision::NotBlacklisted => "not_blacklisted",
        }
    }
}

impl fmt::Display for AdmissionDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
