use super::Capacity;

/// Construction parameters for a [`Mug`](super::Mug).
///
/// The defaults describe a plain, clean 350 ml mug.
#[derive(Debug, Clone, PartialEq)]
pub struct MugConfig {
    /// The most the mug can hold.
    pub capacity: Capacity,

    /// Cosmetic label such as a colour or picture. Has no effect on behavior.
    pub decoration: String,

    /// Whether the mug starts out clean.
    pub clean: bool,
}

impl Default for MugConfig {
    fn default() -> Self {
        Self {
            capacity: Capacity::default(),
            decoration: String::new(),
            clean: true,
        }
    }
}

impl MugConfig {
    /// Returns a clean, undecorated configuration with the given capacity.
    #[must_use]
    pub fn with_capacity(capacity: Capacity) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Returns this configuration with the given decoration.
    #[must_use]
    pub fn decorated(self, decoration: impl Into<String>) -> Self {
        Self {
            decoration: decoration.into(),
            ..self
        }
    }
}
