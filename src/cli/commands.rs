//! CLI command implementations.
//!
//! Contains the business logic for each CLI command.

use crate::catalog;
use crate::cli::output::{
    OutputFormat, format_recipe, format_recipe_list, format_report, format_status,
};
use crate::cli::parser::{Cli, Commands};
use crate::core::{Ingredient, Recipe, timestamp_id};
use crate::error::{CommandError, Result, StoreError};
use crate::store::RecipeStore;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Executes the CLI command.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);
    let db_path = cli.get_db_path();

    match &cli.command {
        Commands::Init { force, skip_seed } => cmd_init(&db_path, *force, *skip_seed, format),
        Commands::Status => cmd_status(&db_path, format),
        Commands::List { filter } => cmd_list(&db_path, filter.as_deref(), format),
        Commands::Show { id } => cmd_show(&db_path, *id, format),
        Commands::Add {
            title,
            image,
            description,
            ingredients,
            steps,
            glass,
            garnish,
            category,
            alcohol,
            id,
        } => {
            let recipe = build_recipe(
                id.unwrap_or_else(timestamp_id),
                title,
                image,
                description.clone(),
                ingredients,
                steps,
                glass.clone(),
                garnish.clone(),
                category.clone(),
                alcohol.clone(),
            )?;
            cmd_add(&db_path, &recipe)
        }
        Commands::Update {
            id,
            title,
            image,
            ingredients,
            steps,
        } => cmd_update(
            &db_path,
            *id,
            title.as_deref(),
            image.as_deref(),
            ingredients,
            steps,
        ),
        Commands::Delete { id, yes } => cmd_delete(&db_path, *id, *yes),
        Commands::Seed => cmd_seed(&db_path, format),
        Commands::Import { file } => cmd_import(&db_path, file, format),
        Commands::Export { id, output } => cmd_export(&db_path, *id, output.as_deref()),
    }
}

/// Opens the store and ensures the schema exists.
fn open_store(db_path: &Path) -> Result<RecipeStore> {
    let mut store = RecipeStore::open(db_path)?;

    if !store.is_initialized()? {
        return Err(StoreError::NotInitialized.into());
    }

    store.init()?;
    Ok(store)
}

/// Parses a `name:quantity:unit` ingredient argument.
fn parse_ingredient(arg: &str) -> Result<Ingredient> {
    let mut parts = arg.splitn(3, ':');
    let name = parts.next().unwrap_or("").trim();
    let quantity = parts.next().map(str::trim);
    let unit = parts.next().map_or("", str::trim);

    let Some(quantity) = quantity else {
        return Err(invalid_ingredient(arg));
    };
    if name.is_empty() || quantity.is_empty() {
        return Err(invalid_ingredient(arg));
    }

    Ok(Ingredient::new(name, quantity, unit))
}

fn invalid_ingredient(arg: &str) -> crate::error::Error {
    CommandError::InvalidArgument(format!(
        "ingredient must be name:quantity[:unit], got: {arg}"
    ))
    .into()
}

#[allow(clippy::too_many_arguments)]
fn build_recipe(
    id: i64,
    title: &str,
    image: &str,
    description: Option<String>,
    ingredients: &[String],
    steps: &[String],
    glass: Option<String>,
    garnish: Option<String>,
    category: Option<String>,
    alcohol: Option<String>,
) -> Result<Recipe> {
    let ingredients = ingredients
        .iter()
        .map(|arg| parse_ingredient(arg))
        .collect::<Result<Vec<_>>>()?;

    let mut recipe = Recipe::new(id, title, image)
        .with_ingredients(ingredients)
        .with_instructions(steps.to_vec());
    recipe.description = description;
    recipe.glass = glass;
    recipe.garnish = garnish;
    recipe.category = category;
    recipe.alcohol = alcohol;
    Ok(recipe)
}

/// Finds one recipe by id in the store's full listing.
///
/// The store exposes no point lookup; ordering and search belong to the
/// caller.
fn find_recipe(store: &RecipeStore, id: i64) -> Result<Recipe> {
    store
        .select_all()?
        .into_iter()
        .find(|r| r.id == id)
        .ok_or_else(|| CommandError::RecipeNotFound { id }.into())
}

/// Prompts for a yes/no confirmation on stdin.
fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout()
        .flush()
        .map_err(|e| CommandError::ExecutionFailed(e.to_string()))?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| CommandError::ExecutionFailed(e.to_string()))?;

    Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}

// ==================== Command Implementations ====================

fn cmd_init(db_path: &Path, force: bool, skip_seed: bool, format: OutputFormat) -> Result<String> {
    if db_path.exists() && !force {
        return Err(CommandError::ExecutionFailed(
            "Database already exists. Use --force to reinitialize.".to_string(),
        )
        .into());
    }

    if force && db_path.exists() {
        std::fs::remove_file(db_path).map_err(|e| {
            CommandError::ExecutionFailed(format!("Failed to remove existing database: {e}"))
        })?;
    }

    let mut store = RecipeStore::open(db_path)?;
    store.init()?;

    let mut output = format!("Initialized recipe database at: {}\n", db_path.display());
    if !skip_seed {
        let report = catalog::seed(&store)?;
        output.push_str(&format_report(&report, format));
    }

    Ok(output)
}

fn cmd_status(db_path: &Path, format: OutputFormat) -> Result<String> {
    let store = open_store(db_path)?;
    let stats = store.stats()?;
    Ok(format_status(&stats, format))
}

fn cmd_list(db_path: &Path, filter: Option<&str>, format: OutputFormat) -> Result<String> {
    let store = open_store(db_path)?;
    let mut recipes = store.select_all()?;

    if let Some(query) = filter {
        recipes.retain(|r| r.title_matches(query));
    }

    Ok(format_recipe_list(&recipes, format))
}

fn cmd_show(db_path: &Path, id: i64, format: OutputFormat) -> Result<String> {
    let store = open_store(db_path)?;
    let recipe = find_recipe(&store, id)?;
    Ok(format_recipe(&recipe, format))
}

fn cmd_add(db_path: &Path, recipe: &Recipe) -> Result<String> {
    let store = open_store(db_path)?;
    store.insert(recipe)?;
    Ok(format!("Added recipe {}: {}\n", recipe.id, recipe.title))
}

fn cmd_update(
    db_path: &Path,
    id: i64,
    title: Option<&str>,
    image: Option<&str>,
    ingredients: &[String],
    steps: &[String],
) -> Result<String> {
    let store = open_store(db_path)?;
    let mut recipe = find_recipe(&store, id)?;

    if let Some(title) = title {
        recipe.title = title.to_string();
    }
    if let Some(image) = image {
        recipe.image = image.to_string();
    }
    if !ingredients.is_empty() {
        recipe.ingredients = ingredients
            .iter()
            .map(|arg| parse_ingredient(arg))
            .collect::<Result<Vec<_>>>()?;
    }
    if !steps.is_empty() {
        recipe.instructions = steps.to_vec();
    }

    store.update(&recipe)?;
    Ok(format!("Updated recipe {}: {}\n", recipe.id, recipe.title))
}

fn cmd_delete(db_path: &Path, id: i64, yes: bool) -> Result<String> {
    let store = open_store(db_path)?;

    if !yes && !confirm(&format!("Delete recipe {id}?"))? {
        return Err(CommandError::Cancelled.into());
    }

    store.delete(id)?;
    Ok(format!("Deleted recipe {id}\n"))
}

fn cmd_seed(db_path: &Path, format: OutputFormat) -> Result<String> {
    let store = open_store(db_path)?;
    let report = catalog::seed(&store)?;
    Ok(format_report(&report, format))
}

fn cmd_import(db_path: &Path, file: &Path, format: OutputFormat) -> Result<String> {
    let store = open_store(db_path)?;
    let report = catalog::import_file(&store, file)?;
    Ok(format_report(&report, format))
}

fn cmd_export(db_path: &Path, id: Option<i64>, output: Option<&Path>) -> Result<String> {
    let store = open_store(db_path)?;

    let json = match id {
        Some(id) => {
            let recipe = find_recipe(&store, id)?;
            serde_json::to_string_pretty(&recipe)
        }
        None => serde_json::to_string_pretty(&store.select_all()?),
    }
    .map_err(|e| CommandError::ExecutionFailed(format!("serialization failed: {e}")))?;

    match output {
        Some(path) => {
            std::fs::write(path, &json).map_err(|e| {
                CommandError::ExecutionFailed(format!(
                    "failed to write {}: {e}",
                    path.display()
                ))
            })?;
            Ok(format!("Exported to {}\n", path.display()))
        }
        None => Ok(json),
    }
}
