//! # BarBuddy
//!
//! A local cocktail recipe manager.
//!
//! BarBuddy stores user-authored cocktail recipes in an embedded
//! `SQLite` database, seeds a bundled starter catalog on first run, and
//! imports user-supplied catalog files. The crate exposes the recipe
//! store and catalog loader as a library, with a small CLI on top.
//!
//! ## Features
//!
//! - **Recipe Store**: single-connection `SQLite` persistence with
//!   insert, update, select-all, and delete
//! - **Catalog Loader**: best-effort seeding and import with per-entry
//!   success/failure reporting
//! - **Structured models**: ingredients and instruction steps are native
//!   sequences, serialized only at the persistence boundary

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![warn(unsafe_code)]

pub mod catalog;
pub mod cli;
pub mod core;
pub mod error;
pub mod store;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core domain types
pub use core::{Ingredient, Recipe};

// Re-export store types
pub use store::{DEFAULT_DB_PATH, RecipeStore, StoreStats};

// Re-export catalog types
pub use catalog::{CatalogEntry, CatalogReport, import_file, seed};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
