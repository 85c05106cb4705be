//! Persistence layer for BarBuddy.
//!
//! Provides the SQLite-backed recipe store. The store owns a single
//! connection for the lifetime of the process and translates structured
//! [`Recipe`](crate::core::Recipe) values into parameterized SQL.

pub mod schema;
pub mod sqlite;

pub use schema::{CURRENT_SCHEMA_VERSION, SCHEMA_SQL};
pub use sqlite::{RecipeStore, StoreStats};

/// Default database file name.
pub const DEFAULT_DB_NAME: &str = "recipes.db";

/// Default database path relative to the working directory.
pub const DEFAULT_DB_PATH: &str = ".barbuddy/recipes.db";
