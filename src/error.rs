//! Error types for BarBuddy operations.
//!
//! This module provides the error hierarchy using `thiserror` for all
//! recipe-store, catalog, and CLI operations.

use thiserror::Error;

/// Result type alias for BarBuddy operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for BarBuddy operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Store-related errors (database operations).
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Catalog-related errors (seed and import files).
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),
}

/// Store-specific errors for database operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying database engine error (I/O, malformed SQL, locked file).
    #[error("database error: {0}")]
    Database(String),

    /// Operation attempted before `init` completed.
    #[error("recipe store not initialized. Run: barbuddy init")]
    NotInitialized,

    /// Primary-key collision on insert.
    #[error("a recipe with id {id} already exists")]
    Duplicate {
        /// Recipe id that collided.
        id: i64,
    },

    /// Serialization/deserialization error at the persistence boundary.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Catalog-specific errors for seed and import files.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Failed to read the catalog file.
    #[error("failed to read catalog file: {path}: {reason}")]
    ReadFailed {
        /// Path to the catalog file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Catalog file is not a valid JSON recipe array.
    #[error("invalid catalog file: {0}")]
    Parse(String),
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Command execution failed.
    #[error("command execution failed: {0}")]
    ExecutionFailed(String),

    /// Recipe not found by id.
    #[error("recipe not found: {id}")]
    RecipeNotFound {
        /// Recipe id that was not found.
        id: i64,
    },

    /// User cancelled operation.
    #[error("operation cancelled by user")]
    Cancelled,
}

// Implement From traits for library errors

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Self::Store(StoreError::Database(err.to_string()))
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let err = StoreError::NotInitialized;
        assert_eq!(
            err.to_string(),
            "recipe store not initialized. Run: barbuddy init"
        );

        let err = StoreError::Duplicate { id: 42 };
        assert_eq!(err.to_string(), "a recipe with id 42 already exists");
    }

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::ReadFailed {
            path: "/tmp/recipes.json".to_string(),
            reason: "permission denied".to_string(),
        };
        assert!(err.to_string().contains("/tmp/recipes.json"));
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn test_command_error_display() {
        let err = CommandError::RecipeNotFound { id: 7 };
        assert_eq!(err.to_string(), "recipe not found: 7");

        let err = CommandError::Cancelled;
        assert!(err.to_string().contains("cancelled"));
    }

    #[test]
    fn test_error_from_store() {
        let store_err = StoreError::NotInitialized;
        let err: Error = store_err.into();
        assert!(matches!(err, Error::Store(_)));
    }

    #[test]
    fn test_error_from_catalog() {
        let cat_err = CatalogError::Parse("unexpected token".to_string());
        let err: Error = cat_err.into();
        assert!(matches!(err, Error::Catalog(_)));
    }

    #[test]
    fn test_from_rusqlite_error_to_store_error() {
        let rusqlite_err = rusqlite::Error::InvalidQuery;
        let err: StoreError = rusqlite_err.into();
        assert!(matches!(err, StoreError::Database(_)));
    }

    #[test]
    fn test_from_serde_json_error_to_store_error() {
        let json_err: serde_json::Error = serde_json::from_str::<i32>("invalid").unwrap_err();
        let err: StoreError = json_err.into();
        assert!(matches!(err, StoreError::Serialization(_)));
    }
}
