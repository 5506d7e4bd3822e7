//! Country code module

use std::borrow::Borrow;
use std::fmt;

/// Identifier of the country a piece of data belongs to
///
/// By convention these are ISO 3166-1 alpha-3 codes (`AIA`, `DOM`, `IRN`),
/// but no format check or case folding is applied: any string is a valid
/// code and two codes are equal only if their text is identical.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CountryCode(String);

impl CountryCode {
    /// Create a country code from any string
    ///
    /// # Examples
    ///
    /// ```
    /// use checkgate_domain::CountryCode;
    ///
    /// let code = CountryCode::new("DOM");
    /// assert_eq!(code.as_str(), "DOM");
    /// ```
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CountryCode {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for CountryCode {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

// Lets sets of codes be queried with a plain `&str`.
impl Borrow<str> for CountryCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}
