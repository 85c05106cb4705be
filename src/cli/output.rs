//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::catalog::CatalogReport;
use crate::core::Recipe;
use crate::error::Error;
use crate::store::StoreStats;
use serde::Serialize;
use std::fmt::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Formats a status response.
#[must_use]
pub fn format_status(stats: &StoreStats, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_status_text(stats),
        OutputFormat::Json => format_json(stats),
    }
}

fn format_status_text(stats: &StoreStats) -> String {
    let mut output = String::new();
    output.push_str("BarBuddy Status\n");
    output.push_str("===============\n\n");
    let _ = writeln!(output, "  Recipes:  {}", stats.recipe_count);
    let _ = writeln!(output, "  Schema:   v{}", stats.schema_version);
    if let Some(size) = stats.db_size {
        let _ = writeln!(output, "  DB size:  {size} bytes");
    }
    output
}

/// Formats a recipe list.
#[must_use]
pub fn format_recipe_list(recipes: &[Recipe], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_recipe_list_text(recipes),
        OutputFormat::Json => format_json(&recipes),
    }
}

fn format_recipe_list_text(recipes: &[Recipe]) -> String {
    if recipes.is_empty() {
        return "No recipes found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("Recipes:\n");
    let _ = writeln!(
        output,
        "{:<16} {:<24} {:<12} {:<6} Steps",
        "ID", "Title", "Category", "Ingr"
    );
    output.push_str(&"-".repeat(70));
    output.push('\n');

    for recipe in recipes {
        let category = recipe.category.as_deref().unwrap_or("-");
        let _ = writeln!(
            output,
            "{:<16} {:<24} {:<12} {:<6} {}",
            recipe.id,
            truncate(&recipe.title, 24),
            truncate(category, 12),
            recipe.ingredients.len(),
            recipe.instructions.len()
        );
    }

    output
}

/// Formats a single recipe in full.
#[must_use]
pub fn format_recipe(recipe: &Recipe, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_recipe_text(recipe),
        OutputFormat::Json => format_json(recipe),
    }
}

fn format_recipe_text(recipe: &Recipe) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{} (id {})", recipe.title, recipe.id);
    if let Some(ref description) = recipe.description {
        let _ = writeln!(output, "{description}");
    }
    let _ = writeln!(output, "Image: {}", recipe.image);
    for (label, value) in [
        ("Glass", &recipe.glass),
        ("Garnish", &recipe.garnish),
        ("Category", &recipe.category),
        ("Alcohol", &recipe.alcohol),
    ] {
        if let Some(v) = value {
            let _ = writeln!(output, "{label}: {v}");
        }
    }

    output.push_str("\nIngredients:\n");
    for ingredient in &recipe.ingredients {
        let _ = writeln!(output, "  - {ingredient}");
    }

    output.push_str("\nInstructions:\n");
    for (i, step) in recipe.instructions.iter().enumerate() {
        let _ = writeln!(output, "  {}. {step}", i + 1);
    }

    output
}

/// Formats a seed/import report.
#[must_use]
pub fn format_report(report: &CatalogReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!(
            "Inserted {} recipe(s), skipped {}, failed {}.\n",
            report.inserted, report.skipped, report.failed
        ),
        OutputFormat::Json => format_json(report),
    }
}

/// Formats an error per output format.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorOutput {
                error: String,
            }
            format_json(&ErrorOutput {
                error: error.to_string(),
            })
        }
    }
}

/// Serializes a value as pretty JSON, falling back to an error object.
fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("{{\"error\": \"serialization failed: {e}\"}}"))
}

/// Truncates a string to a maximum display width.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}\u{2026}")
    }
}
