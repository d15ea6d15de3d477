use std::fmt;

/// Beverage poured when the caller doesn't name one.
pub const DEFAULT_BEVERAGE: &str = "tea";

/// Label identifying what a mug holds.
///
/// Labels compare exactly, so `"Coffee"` and `"coffee"` are different
/// beverages and refuse to mix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Beverage(String);

impl Beverage {
    /// Creates a beverage with the given label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns the beverage label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Beverage {
    fn default() -> Self {
        Self::new(DEFAULT_BEVERAGE)
    }
}

impl From<&str> for Beverage {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Beverage {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl AsRef<str> for Beverage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Beverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
