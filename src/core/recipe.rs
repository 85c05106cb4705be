//! Recipe model for BarBuddy.
//!
//! A recipe is a flat record with two nested structures: an ingredient
//! list and an ordered list of instruction steps. Both are native
//! sequences here and are serialized (JSON / newline-joined) only when
//! written to the database.

use serde::{Deserialize, Deserializer, Serialize};

/// A single ingredient line of a recipe.
///
/// # Examples
///
/// ```
/// use barbuddy::core::Ingredient;
///
/// let rum = Ingredient::new("rum", "2", "oz");
/// assert_eq!(rum.to_string(), "rum 2 oz");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name (e.g. "white rum").
    pub name: String,

    /// Amount, kept as text so fractional and ranged quantities survive.
    #[serde(deserialize_with = "quantity_from_number_or_string")]
    pub quantity: String,

    /// Measurement unit (e.g. "oz", "dash").
    pub unit: String,
}

impl Ingredient {
    /// Creates a new ingredient.
    #[must_use]
    pub fn new(name: &str, quantity: &str, unit: &str) -> Self {
        Self {
            name: name.to_string(),
            quantity: quantity.to_string(),
            unit: unit.to_string(),
        }
    }
}

impl std::fmt::Display for Ingredient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.name, self.quantity, self.unit)
    }
}

/// Accepts a quantity as either a JSON number or a string.
///
/// Catalog files written by hand (and the original seed data) mix both.
#[allow(clippy::cast_possible_truncation)]
fn quantity_from_number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Quantity {
        Number(f64),
        Text(String),
    }

    Ok(match Quantity::deserialize(deserializer)? {
        Quantity::Number(n) => {
            // Render whole numbers without a trailing ".0"
            if n.fract() == 0.0 && n.abs() < 1e15 {
                format!("{}", n as i64)
            } else {
                n.to_string()
            }
        }
        Quantity::Text(s) => s,
    })
}

/// A cocktail recipe.
///
/// `id` is the primary key in the store. User-created recipes default to
/// a timestamp-derived id (milliseconds since the Unix epoch); catalog
/// entries carry their own.
///
/// # Examples
///
/// ```
/// use barbuddy::core::{Ingredient, Recipe};
///
/// let recipe = Recipe::new(1, "Mojito", "file://mojito.png")
///     .with_ingredients(vec![Ingredient::new("rum", "2", "oz")])
///     .with_instructions(vec!["Mix".to_string(), "Serve".to_string()]);
/// assert_eq!(recipe.instructions.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique identifier (primary key in the store).
    pub id: i64,

    /// Display name.
    pub title: String,

    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,

    /// Image URI: a locally picked file path or a remote URL from the
    /// seed catalog.
    pub image: String,

    /// Ingredient list.
    pub ingredients: Vec<Ingredient>,

    /// Ordered preparation steps.
    pub instructions: Vec<String>,

    /// Serving glass (e.g. "highball").
    #[serde(default)]
    pub glass: Option<String>,

    /// Garnish (e.g. "lime wedge").
    #[serde(default)]
    pub garnish: Option<String>,

    /// Category (e.g. "classic", "tiki").
    #[serde(default)]
    pub category: Option<String>,

    /// Base spirit (e.g. "rum").
    #[serde(default)]
    pub alcohol: Option<String>,
}

impl Recipe {
    /// Creates a new recipe with empty ingredient and instruction lists.
    #[must_use]
    pub fn new(id: i64, title: &str, image: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: None,
            image: image.to_string(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
            glass: None,
            garnish: None,
            category: None,
            alcohol: None,
        }
    }

    /// Sets the ingredient list.
    #[must_use]
    pub fn with_ingredients(mut self, ingredients: Vec<Ingredient>) -> Self {
        self.ingredients = ingredients;
        self
    }

    /// Sets the instruction steps.
    #[must_use]
    pub fn with_instructions(mut self, instructions: Vec<String>) -> Self {
        self.instructions = instructions;
        self
    }

    /// Case-insensitive title substring match, as the list screens filter.
    #[must_use]
    pub fn title_matches(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Returns a timestamp-derived recipe id: milliseconds since the Unix
/// epoch.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn timestamp_id() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
