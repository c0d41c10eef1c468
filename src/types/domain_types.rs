// src/types/domain_types.rs
//! Domain-specific newtypes for type safety.

use std::fmt;

/// The final output of the compose stage — canonical text ready for the
/// renderer (or for delivery to a file, the clipboard, or stdout).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalText(String);

#[allow(dead_code)] // Accessors used by library consumers
impl CanonicalText {
    pub fn new(content: String) -> Self {
        Self(content)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CanonicalText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CanonicalText {
    fn from(content: String) -> Self {
        Self(content)
    }
}
