//! Recipe catalog loading.
//!
//! One-shot, best-effort seeding of the bundled recipe catalog into the
//! store, plus a caller-driven import path for user-supplied JSON files
//! of the same shape. Per-entry failures are logged and counted, never
//! aborting the loop: re-running the seed after first success simply
//! fails every insert on the primary key and leaves existing data
//! untouched.

use crate::core::{Ingredient, Recipe, timestamp_id};
use crate::error::{CatalogError, Error, Result, StoreError};
use crate::store::RecipeStore;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The bundled read-only seed catalog shipped with the application.
const BUNDLED_CATALOG: &str = include_str!("seed_recipes.json");

/// One entry of a catalog file.
///
/// Every field is optional at parse time; required fields (`title`,
/// `image`, `ingredients`, `instructions`) are validated per entry so a
/// malformed entry skips without failing the whole file.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    /// Recipe id; a timestamp-derived one is assigned when absent.
    #[serde(default)]
    pub id: Option<i64>,
    /// Display name (required).
    #[serde(default)]
    pub title: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Image URI (required).
    #[serde(default)]
    pub image: Option<String>,
    /// Ingredient list (required).
    #[serde(default)]
    pub ingredients: Option<Vec<Ingredient>>,
    /// Preparation steps (required); an array or a newline-joined string.
    #[serde(default)]
    pub instructions: Option<Steps>,
    /// Serving glass.
    #[serde(default)]
    pub glass: Option<String>,
    /// Garnish.
    #[serde(default)]
    pub garnish: Option<String>,
    /// Category.
    #[serde(default)]
    pub category: Option<String>,
    /// Base spirit.
    #[serde(default)]
    pub alcohol: Option<String>,
}

/// Instruction steps as they appear in catalog files.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Steps {
    /// An ordered array of steps.
    List(Vec<String>),
    /// A single newline-joined string.
    Joined(String),
}

impl Steps {
    /// Normalizes to an ordered step list.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::List(steps) => steps,
            Self::Joined(s) if s.is_empty() => Vec::new(),
            Self::Joined(s) => s.split('\n').map(String::from).collect(),
        }
    }
}

impl CatalogEntry {
    /// Converts the entry into a [`Recipe`], or names the first missing
    /// required field.
    fn into_recipe(self, fallback_id: i64) -> std::result::Result<Recipe, &'static str> {
        let title = self.title.ok_or("title")?;
        let image = self.image.ok_or("image")?;
        let ingredients = self.ingredients.ok_or("ingredients")?;
        let instructions = self.instructions.ok_or("instructions")?.into_vec();

        Ok(Recipe {
            id: self.id.unwrap_or(fallback_id),
            title,
            description: self.description,
            image,
            ingredients,
            instructions,
            glass: self.glass,
            garnish: self.garnish,
            category: self.category,
            alcohol: self.alcohol,
        })
    }
}

/// Per-entry tally of a seed or import run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogReport {
    /// Entries inserted into the store.
    pub inserted: usize,
    /// Entries skipped for missing required fields.
    pub skipped: usize,
    /// Entries whose insert failed (e.g. duplicate id on re-run).
    pub failed: usize,
}

/// Parses a catalog JSON array.
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] if the text is not a JSON array of
/// catalog entries.
pub fn parse_catalog(json: &str) -> Result<Vec<CatalogEntry>> {
    let entries: Vec<CatalogEntry> = serde_json::from_str(json).map_err(CatalogError::from)?;
    Ok(entries)
}

/// Returns the bundled seed catalog entries.
///
/// # Errors
///
/// Returns an error if the bundled asset is malformed (a packaging
/// defect, not a runtime condition).
pub fn bundled_entries() -> Result<Vec<CatalogEntry>> {
    parse_catalog(BUNDLED_CATALOG)
}

/// Seeds the bundled catalog into the store, best-effort per entry.
///
/// Safe to run on every startup: after the first success each insert
/// fails on the primary key, is logged, and counts as `failed`.
///
/// # Errors
///
/// Returns an error only if the bundled catalog cannot be parsed or the
/// store is not initialized; individual insert failures are tallied.
pub fn seed(store: &RecipeStore) -> Result<CatalogReport> {
    let report = insert_entries(store, bundled_entries()?)?;
    tracing::info!(
        inserted = report.inserted,
        failed = report.failed,
        "seed catalog loaded"
    );
    Ok(report)
}

/// Imports a user-supplied catalog file, best-effort per entry.
///
/// Entries missing a required field (`title`, `image`, `ingredients`,
/// `instructions`) are skipped and logged; the rest are inserted
/// independently. Entries without an `id` receive a timestamp-derived
/// one, offset per entry so a single batch cannot collide with itself.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or the store
/// is not initialized.
pub fn import_file<P: AsRef<Path>>(store: &RecipeStore, path: P) -> Result<CatalogReport> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|e| CatalogError::ReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let report = insert_entries(store, parse_catalog(&json)?)?;
    tracing::info!(
        path = %path.display(),
        inserted = report.inserted,
        skipped = report.skipped,
        failed = report.failed,
        "catalog import finished"
    );
    Ok(report)
}

/// Inserts catalog entries independently, tallying the outcomes.
///
/// # Errors
///
/// Returns an error only when the store itself is unusable (not
/// initialized); per-entry failures never abort the loop.
#[allow(clippy::cast_possible_wrap)]
pub fn insert_entries(
    store: &RecipeStore,
    entries: Vec<CatalogEntry>,
) -> Result<CatalogReport> {
    let mut report = CatalogReport::default();
    let base_id = timestamp_id();

    for (index, entry) in entries.into_iter().enumerate() {
        let recipe = match entry.into_recipe(base_id + index as i64) {
            Ok(recipe) => recipe,
            Err(field) => {
                tracing::warn!(entry = index, field, "catalog entry missing required field");
                report.skipped += 1;
                continue;
            }
        };

        match store.insert(&recipe) {
            Ok(()) => report.inserted += 1,
            Err(Error::Store(StoreError::NotInitialized)) => {
                return Err(StoreError::NotInitialized.into());
            }
            Err(e) => {
                tracing::warn!(id = recipe.id, title = %recipe.title, error = %e, "catalog insert failed");
                report.failed += 1;
            }
        }
    }

    Ok(report)
}
