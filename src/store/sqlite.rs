//! `SQLite` recipe store.
//!
//! Sole owner of the database connection. Translates structured
//! [`Recipe`] values into parameterized SQL and back; nested structures
//! cross the persistence boundary as strings (ingredients as JSON,
//! instructions newline-joined).

use crate::core::{Ingredient, Recipe};
use crate::error::{Result, StoreError};
use crate::store::schema::{
    CHECK_SCHEMA_SQL, CURRENT_SCHEMA_VERSION, GET_VERSION_SQL, SCHEMA_SQL, SET_VERSION_SQL,
};
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// SQLite-backed recipe store.
///
/// Owns a single connection shared across the application's lifetime.
/// [`init`](Self::init) must complete before any data operation; every
/// other operation fails with [`StoreError::NotInitialized`] until then.
///
/// # Examples
///
/// ```no_run
/// use barbuddy::store::RecipeStore;
///
/// let mut store = RecipeStore::open("recipes.db").unwrap();
/// store.init().unwrap();
/// ```
#[derive(Debug)]
pub struct RecipeStore {
    /// `SQLite` connection.
    conn: Connection,
    /// Path to the database file (None for in-memory).
    path: Option<PathBuf>,
    /// Set once `init` has completed on this instance.
    ready: bool,
}

impl RecipeStore {
    /// Opens or creates a `SQLite` database at the given path.
    ///
    /// Parent directories are created if missing. The store is not ready
    /// for data operations until [`init`](Self::init) completes.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Database(e.to_string()))?;
        }

        let conn = Connection::open(&path).map_err(StoreError::from)?;

        // WAL mode for better concurrent access (returns a row, use query_row)
        let _: String = conn
            .query_row("PRAGMA journal_mode = WAL;", [], |row| row.get(0))
            .map_err(StoreError::from)?;

        tracing::debug!(path = %path.display(), "opened recipe database");

        Ok(Self {
            conn,
            path: Some(path),
            ready: false,
        })
    }

    /// Creates an in-memory `SQLite` database.
    ///
    /// Useful for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be created.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(StoreError::from)?;
        Ok(Self {
            conn,
            path: None,
            ready: false,
        })
    }

    /// Returns the database path (None for in-memory).
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Ensures the `recipes` table exists and marks the store ready.
    ///
    /// Idempotent: the DDL is `CREATE TABLE IF NOT EXISTS` and repeated
    /// calls reuse the already-open connection.
    ///
    /// # Errors
    ///
    /// Returns an error if schema creation fails.
    pub fn init(&mut self) -> Result<()> {
        self.conn
            .execute_batch(SCHEMA_SQL)
            .map_err(StoreError::from)?;

        if self.schema_version()?.is_none() {
            self.set_schema_version(CURRENT_SCHEMA_VERSION)?;
        }

        self.ready = true;
        tracing::debug!("recipe store initialized");
        Ok(())
    }

    /// Checks whether the schema exists in the database file.
    ///
    /// # Errors
    ///
    /// Returns an error if the check cannot be performed.
    pub fn is_initialized(&self) -> Result<bool> {
        let count: i64 = self
            .conn
            .query_row(CHECK_SCHEMA_SQL, [], |row| row.get(0))
            .map_err(StoreError::from)?;
        Ok(count > 0)
    }

    /// Inserts one recipe.
    ///
    /// No field beyond the primary key is validated; empty optionals are
    /// stored as NULL.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Duplicate`] if a row with the same `id`
    /// already exists, [`StoreError::NotInitialized`] before `init`, and
    /// [`StoreError::Database`] on any other engine failure.
    pub fn insert(&self, recipe: &Recipe) -> Result<()> {
        self.ensure_ready()?;

        let ingredients = serde_json::to_string(&recipe.ingredients).map_err(StoreError::from)?;
        let instructions = recipe.instructions.join("\n");

        self.conn
            .execute(
                r"
            INSERT INTO recipes (
                id, title, description, image, ingredients, instructions,
                glass, garnish, category, alcohol
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        ",
                params![
                    recipe.id,
                    recipe.title,
                    recipe.description,
                    recipe.image,
                    ingredients,
                    instructions,
                    recipe.glass,
                    recipe.garnish,
                    recipe.category,
                    recipe.alcohol,
                ],
            )
            .map_err(|e| map_insert_error(recipe.id, e))?;

        Ok(())
    }

    /// Rewrites `title`, `image`, `ingredients`, and `instructions` of
    /// the row matching the recipe's `id`.
    ///
    /// No-op success when the `id` does not exist; callers must not
    /// assume a not-found error is raised, and no row is created.
    ///
    /// # Errors
    ///
    /// Returns an error on serialization or engine failure, or before
    /// `init`.
    pub fn update(&self, recipe: &Recipe) -> Result<()> {
        self.ensure_ready()?;

        let ingredients = serde_json::to_string(&recipe.ingredients).map_err(StoreError::from)?;
        let instructions = recipe.instructions.join("\n");

        self.conn
            .execute(
                r"
            UPDATE recipes SET title = ?, image = ?, ingredients = ?, instructions = ?
            WHERE id = ?
        ",
                params![
                    recipe.title,
                    recipe.image,
                    ingredients,
                    instructions,
                    recipe.id
                ],
            )
            .map_err(StoreError::from)?;

        Ok(())
    }

    /// Returns every stored recipe in natural (rowid) order.
    ///
    /// No pagination, filtering, or sorting; ordering and search belong
    /// to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialization`] if a stored `ingredients`
    /// string is not valid JSON, or an engine error on query failure.
    pub fn select_all(&self) -> Result<Vec<Recipe>> {
        self.ensure_ready()?;

        let mut stmt = self
            .conn
            .prepare(
                r"
            SELECT id, title, description, image, ingredients, instructions,
                   glass, garnish, category, alcohol
            FROM recipes
        ",
            )
            .map_err(StoreError::from)?;

        let rows = stmt
            .query_map([], |row| {
                Ok(RecipeRow {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    description: row.get(2)?,
                    image: row.get(3)?,
                    ingredients: row.get(4)?,
                    instructions: row.get(5)?,
                    glass: row.get(6)?,
                    garnish: row.get(7)?,
                    category: row.get(8)?,
                    alcohol: row.get(9)?,
                })
            })
            .map_err(StoreError::from)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(StoreError::from)?;

        rows.into_iter().map(RecipeRow::into_recipe).collect()
    }

    /// Removes the row matching `id`; no-op success when absent.
    ///
    /// # Errors
    ///
    /// Returns an error on engine failure or before `init`.
    pub fn delete(&self, id: i64) -> Result<()> {
        self.ensure_ready()?;
        self.conn
            .execute("DELETE FROM recipes WHERE id = ?", params![id])
            .map_err(StoreError::from)?;
        Ok(())
    }

    /// Returns the number of stored recipes.
    ///
    /// # Errors
    ///
    /// Returns an error on engine failure or before `init`.
    #[allow(clippy::cast_sign_loss)]
    pub fn recipe_count(&self) -> Result<usize> {
        self.ensure_ready()?;
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM recipes", [], |row| row.get(0))
            .map_err(StoreError::from)?;
        Ok(count as usize)
    }

    /// Gathers store statistics for the status command.
    ///
    /// # Errors
    ///
    /// Returns an error on engine failure or before `init`.
    pub fn stats(&self) -> Result<StoreStats> {
        let recipe_count = self.recipe_count()?;
        let schema_version = self.schema_version()?.unwrap_or(0);
        let db_size = self
            .path
            .as_ref()
            .and_then(|p| std::fs::metadata(p).ok().map(|m| m.len()));

        Ok(StoreStats {
            recipe_count,
            schema_version,
            db_size,
        })
    }

    /// Gets the current schema version.
    fn schema_version(&self) -> Result<Option<u32>> {
        let version: Option<String> = self
            .conn
            .query_row(GET_VERSION_SQL, [], |row| row.get(0))
            .optional()
            .map_err(StoreError::from)?;

        Ok(version.and_then(|v| v.parse().ok()))
    }

    /// Sets the schema version.
    fn set_schema_version(&self, version: u32) -> Result<()> {
        self.conn
            .execute(SET_VERSION_SQL, params![version.to_string()])
            .map_err(StoreError::from)?;
        Ok(())
    }

    fn ensure_ready(&self) -> Result<()> {
        if self.ready {
            Ok(())
        } else {
            Err(StoreError::NotInitialized.into())
        }
    }
}

/// Maps a primary-key conflict to [`StoreError::Duplicate`]; everything
/// else surfaces as the raw engine error.
fn map_insert_error(id: i64, err: rusqlite::Error) -> StoreError {
    match &err {
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            StoreError::Duplicate { id }
        }
        _ => StoreError::Database(err.to_string()),
    }
}

/// Raw column values of one `recipes` row, before boundary decoding.
struct RecipeRow {
    id: i64,
    title: String,
    description: Option<String>,
    image: String,
    ingredients: String,
    instructions: String,
    glass: Option<String>,
    garnish: Option<String>,
    category: Option<String>,
    alcohol: Option<String>,
}

impl RecipeRow {
    /// Decodes the stored string forms back into structured values.
    fn into_recipe(self) -> Result<Recipe> {
        let ingredients: Vec<Ingredient> =
            serde_json::from_str(&self.ingredients).map_err(StoreError::from)?;

        let instructions = if self.instructions.is_empty() {
            Vec::new()
        } else {
            self.instructions.split('\n').map(String::from).collect()
        };

        Ok(Recipe {
            id: self.id,
            title: self.title,
            description: self.description,
            image: self.image,
            ingredients,
            instructions,
            glass: self.glass,
            garnish: self.garnish,
            category: self.category,
            alcohol: self.alcohol,
        })
    }
}

/// Store statistics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StoreStats {
    /// Number of stored recipes.
    pub recipe_count: usize,
    /// Schema version.
    pub schema_version: u32,
    /// Database file size in bytes (if file-backed).
    pub db_size: Option<u64>,
}
