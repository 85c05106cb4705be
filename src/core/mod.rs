//! Core domain types for BarBuddy.
//!
//! Contains the [`Recipe`] model and its nested structures. Recipes are
//! structured values in memory; serialization to the stored string forms
//! happens only at the persistence boundary.

pub mod recipe;

pub use recipe::{Ingredient, Recipe, timestamp_id};
