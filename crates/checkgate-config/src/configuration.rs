//! Inline configuration document and per-check views

use crate::ConfigError;
use checkgate_domain::ConfigurationLookup;
use serde_json::{Map, Value};
use tracing::warn;

/// A parsed configuration document
///
/// The root is an object whose keys are check names; each check owns the
/// subtree beneath its name. Read-only after parsing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Configuration {
    root: Map<String, Value>,
}

impl Configuration {
    /// A configuration with no checks configured
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a configuration from inline JSON text
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    /// Parse a configuration from inline TOML text
    ///
    /// TOML tables are read into the same document model as JSON, so dotted
    /// keys written either quoted or as nested tables resolve identically.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let value: Value = toml::from_str(text)?;
        Self::from_value(value)
    }

    /// Wrap an already-parsed document
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(ConfigError::NotAnObject(kind_of(&other).to_string())),
        }
    }

    /// Names of all checks present in the document
    pub fn check_names(&self) -> impl Iterator<Item = &str> {
        self.root.keys().map(String::as_str)
    }

    /// Scope lookups to one check
    ///
    /// An unknown check, or a check whose entry is not an object, yields a
    /// view in which every key is absent.
    pub fn for_check<'a>(&'a self, name: &'a str) -> CheckConfiguration<'a> {
        let section = match self.root.get(name) {
            Some(Value::Object(section)) => Some(section),
            Some(other) => {
                warn!(
                    check = name,
                    found = kind_of(other),
                    "Check configuration is not an object, ignoring it"
                );
                None
            }
            None => None,
        };

        CheckConfiguration { name, section }
    }
}

/// Lookups over the configuration subtree of a single check
#[derive(Debug, Clone, Copy)]
pub struct CheckConfiguration<'a> {
    name: &'a str,
    section: Option<&'a Map<String, Value>>,
}

impl<'a> CheckConfiguration<'a> {
    /// Name of the check this view is scoped to
    pub fn check_name(&self) -> &'a str {
        self.name
    }

    /// Raw value configured at a dotted key, if any
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.section.and_then(|section| resolve(section, key))
    }

    /// Strictly read a list of strings
    ///
    /// Returns `Ok(None)` when the key is absent and `Ok(Some(list))` when it
    /// is configured, including as an empty list. An object at `key` only
    /// groups deeper dotted keys (`countries` over `countries.blacklist`), so
    /// it counts as absent too.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TypeMismatch`] if the value is not an array of strings.
    pub fn get_list(&self, key: &str) -> Result<Option<Vec<String>>, ConfigError> {
        let value = match self.get(key) {
            None | Some(Value::Object(_)) => return Ok(None),
            Some(value) => value,
        };

        let mismatch = |found: &Value| ConfigError::TypeMismatch {
            check: self.name.to_string(),
            key: key.to_string(),
            expected: "list of strings",
            found: kind_of(found).to_string(),
        };

        let items = value.as_array().ok_or_else(|| mismatch(value))?;
        items
            .iter()
            .map(|item| item.as_str().map(str::to_string).ok_or_else(|| mismatch(item)))
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }
}

impl ConfigurationLookup for CheckConfiguration<'_> {
    fn lookup(&self, key: &str, default: Vec<String>) -> Vec<String> {
        match self.get_list(key) {
            Ok(Some(list)) => list,
            Ok(None) => default,
            Err(e) => {
                warn!("{}, using default", e);
                default
            }
        }
    }
}

/// Resolve a dotted key inside an object
///
/// The literal key wins; otherwise the key is split at each dot, left to
/// right, and the remainder is resolved inside the nested object.
fn resolve<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    if let Some(value) = object.get(key) {
        return Some(value);
    }

    for (idx, _) in key.match_indices('.') {
        let (head, tail) = (&key[..idx], &key[idx + 1..]);
        if let Some(Value::Object(child)) = object.get(head) {
            if let Some(value) = resolve(child, tail) {
                return Some(value);
            }
        }
    }

    None
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
