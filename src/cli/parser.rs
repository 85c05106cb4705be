//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// BarBuddy: a local cocktail recipe manager.
///
/// Browses, creates, edits, and shares cocktail recipes stored in a
/// local `SQLite` database.
#[derive(Parser, Debug)]
#[command(name = "barbuddy")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the recipe database file.
    ///
    /// Defaults to `.barbuddy/recipes.db` in the current directory.
    #[arg(short, long, env = "BARBUDDY_DB_PATH")]
    pub db_path: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the recipe database and seed the bundled catalog.
    Init {
        /// Force re-initialization (destroys existing data).
        #[arg(short, long)]
        force: bool,

        /// Skip seeding the bundled catalog.
        #[arg(long)]
        skip_seed: bool,
    },

    /// Show database status.
    Status,

    /// List all recipes.
    #[command(name = "list", alias = "ls")]
    List {
        /// Case-insensitive title filter.
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Show one recipe in full.
    Show {
        /// Recipe id.
        id: i64,
    },

    /// Add a new recipe.
    Add {
        /// Recipe title.
        title: String,

        /// Image URI (picked file path or URL).
        #[arg(short, long, default_value = "")]
        image: String,

        /// Description.
        #[arg(long)]
        description: Option<String>,

        /// Ingredient as `name:quantity:unit` (repeatable).
        #[arg(short = 'I', long = "ingredient")]
        ingredients: Vec<String>,

        /// Instruction step, in order (repeatable).
        #[arg(short = 's', long = "step")]
        steps: Vec<String>,

        /// Serving glass.
        #[arg(long)]
        glass: Option<String>,

        /// Garnish.
        #[arg(long)]
        garnish: Option<String>,

        /// Category.
        #[arg(long)]
        category: Option<String>,

        /// Base spirit.
        #[arg(long)]
        alcohol: Option<String>,

        /// Explicit id (defaults to a timestamp-derived one).
        #[arg(long)]
        id: Option<i64>,
    },

    /// Update an existing recipe's title, image, ingredients, or steps.
    Update {
        /// Recipe id.
        id: i64,

        /// New title.
        #[arg(short, long)]
        title: Option<String>,

        /// New image URI.
        #[arg(short, long)]
        image: Option<String>,

        /// Replacement ingredient list as `name:quantity:unit`
        /// (repeatable; replaces the whole list).
        #[arg(short = 'I', long = "ingredient")]
        ingredients: Vec<String>,

        /// Replacement instruction steps (repeatable; replaces the
        /// whole list).
        #[arg(short = 's', long = "step")]
        steps: Vec<String>,
    },

    /// Delete a recipe.
    #[command(name = "delete", alias = "rm")]
    Delete {
        /// Recipe id.
        id: i64,

        /// Skip confirmation prompt.
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Seed the bundled catalog (best-effort, safe to re-run).
    Seed,

    /// Import recipes from a JSON catalog file.
    Import {
        /// Path to the catalog file.
        file: PathBuf,
    },

    /// Export one recipe (or all) as JSON, for sharing.
    Export {
        /// Recipe id (all recipes if omitted).
        id: Option<i64>,

        /// Output file path (stdout if not specified).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    /// Returns the database path, using the default if not specified.
    #[must_use]
    pub fn get_db_path(&self) -> PathBuf {
        self.db_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(crate::store::DEFAULT_DB_PATH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_db_path() {
        let cli = Cli {
            db_path: None,
            verbose: false,
            format: "text".to_string(),
            command: Commands::Status,
        };
        assert_eq!(
            cli.get_db_path(),
            PathBuf::from(crate::store::DEFAULT_DB_PATH)
        );
    }

    #[test]
    fn test_custom_db_path() {
        let cli = Cli {
            db_path: Some(PathBuf::from("/custom/recipes.db")),
            verbose: false,
            format: "text".to_string(),
            command: Commands::Status,
        };
        assert_eq!(cli.get_db_path(), PathBuf::from("/custom/recipes.db"));
    }
}
