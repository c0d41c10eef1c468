// src/types/ids.rs
//! Typed identifiers for the note domain.
//!
//! Blocks carry opaque, caller-assigned IDs unique within a page; pages and
//! topics come from the storage backend as UUIDs. Newtypes keep the three
//! from being mixed up at compile time.

use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of one content block, unique within its page.
///
/// The editor assigns these; they are opaque strings, not UUIDs, so the
/// only invariant is non-emptiness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

#[allow(dead_code)] // Constructors used by library consumers and tests
impl BlockId {
    /// Create a block ID with validation.
    pub fn parse(input: impl Into<String>) -> Result<Self, ValidationError> {
        let input = input.into();
        if input.trim().is_empty() {
            return Err(ValidationError::InvalidBlockId(
                "block ID cannot be empty".to_string(),
            ));
        }
        Ok(Self(input))
    }

    /// Mints a fresh ID, used when wrapping bare text into a synthetic
    /// block that never existed in storage.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a page row in the storage backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(Uuid);

#[allow(dead_code)]
impl PageId {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        Uuid::parse_str(input)
            .map(Self)
            .map_err(|e| ValidationError::InvalidPageId {
                input: input.to_string(),
                reason: e.to_string(),
            })
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a topic row in the storage backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicId(Uuid);

#[allow(dead_code)]
impl TopicId {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        Uuid::parse_str(input)
            .map(Self)
            .map_err(|e| ValidationError::InvalidTopicId {
                input: input.to_string(),
                reason: e.to_string(),
            })
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
