//! # Store Errors
//!
//! Error types for the document store.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Document store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Operation targeted a collection that was never registered
    #[error("unknown collection: {0}")]
    UnknownCollection(String),

    /// A write violated the collection's unique index
    #[error("duplicate value '{value}' for unique field '{field}'")]
    DuplicateKey { field: String, value: String },

    /// The store lock was poisoned by a panicking writer
    #[error("store lock poisoned")]
    LockPoisoned,
}

impl StoreError {
    pub fn duplicate_key(field: impl Into<String>, value: impl Into<String>) -> Self {
        StoreError::DuplicateKey {
            field: field.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_display() {
        let err = StoreError::duplicate_key("imageName", "hero-1");
        assert_eq!(
            err.to_string(),
            "duplicate value 'hero-1' for unique field 'imageName'"
        );
    }

    #[test]
    fn test_unknown_collection_display() {
        let err = StoreError::UnknownCollection("ghosts".to_string());
        assert!(err.to_string().contains("ghosts"));
    }
}
