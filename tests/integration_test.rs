//! Integration tests for BarBuddy.

#![allow(clippy::expect_used)]

use barbuddy::catalog::{insert_entries, parse_catalog};
use barbuddy::core::{Ingredient, Recipe};
use barbuddy::store::RecipeStore;
use tempfile::TempDir;

/// Helper to create a file-backed test store.
fn create_test_store() -> (RecipeStore, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("recipes.db");
    let mut store = RecipeStore::open(&db_path).expect("Failed to create store");
    store.init().expect("Failed to init store");
    (store, temp_dir)
}

fn mojito() -> Recipe {
    Recipe::new(1, "Mojito", "file://a.png")
        .with_ingredients(vec![Ingredient::new("rum", "2", "oz")])
        .with_instructions(vec!["Mix".to_string(), "Serve".to_string()])
}

#[test]
fn test_store_init_and_status() {
    let (store, _temp) = create_test_store();

    assert!(store.is_initialized().expect("is_initialized failed"));

    let stats = store.stats().expect("stats failed");
    assert_eq!(stats.recipe_count, 0);
    assert!(stats.db_size.is_some());
}

#[test]
fn test_reopen_preserves_data() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("recipes.db");

    {
        let mut store = RecipeStore::open(&db_path).expect("Failed to create store");
        store.init().expect("Failed to init store");
        store.insert(&mojito()).expect("insert failed");
    }

    let mut store = RecipeStore::open(&db_path).expect("Failed to reopen store");
    assert!(store.is_initialized().expect("is_initialized failed"));
    store.init().expect("re-init failed");

    let all = store.select_all().expect("select_all failed");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], mojito());
}

/// The full lifecycle scenario: insert, read back, update, delete.
#[test]
fn test_recipe_lifecycle() {
    let (store, _temp) = create_test_store();

    // Insert
    store.insert(&mojito()).expect("insert failed");

    // Exactly one record equal to the inserted values
    let all = store.select_all().expect("select_all failed");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], mojito());

    // Update the title; id unchanged
    let mut updated = mojito();
    updated.title = "Mojito Deluxe".to_string();
    store.update(&updated).expect("update failed");

    let all = store.select_all().expect("select_all failed");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, 1);
    assert_eq!(all[0].title, "Mojito Deluxe");

    // Delete; empty sequence
    store.delete(1).expect("delete failed");
    assert!(store.select_all().expect("select_all failed").is_empty());
}

#[test]
fn test_duplicate_insert_keeps_first_row() {
    let (store, _temp) = create_test_store();

    store.insert(&mojito()).expect("first insert failed");

    let mut second = mojito();
    second.title = "Impostor".to_string();
    assert!(store.insert(&second).is_err());

    let all = store.select_all().expect("select_all failed");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, "Mojito");
}

#[test]
fn test_update_and_delete_missing_are_noops() {
    let (store, _temp) = create_test_store();
    store.insert(&mojito()).expect("insert failed");

    store
        .update(&Recipe::new(999, "Ghost", "img"))
        .expect("update of missing id should succeed");
    store.delete(999).expect("delete of missing id should succeed");

    assert_eq!(store.recipe_count().expect("count failed"), 1);
}

#[test]
fn test_select_all_preserves_insertion_order() {
    let (store, _temp) = create_test_store();

    for (id, title) in [(3, "Negroni"), (1, "Mojito"), (2, "Daiquiri")] {
        store
            .insert(&Recipe::new(id, title, "img"))
            .expect("insert failed");
    }

    let titles: Vec<_> = store
        .select_all()
        .expect("select_all failed")
        .into_iter()
        .map(|r| r.title)
        .collect();
    assert_eq!(titles, vec!["Negroni", "Mojito", "Daiquiri"]);
}

#[test]
fn test_two_entry_catalog_seeded_twice() {
    let (store, _temp) = create_test_store();

    let catalog_json = r#"[
        {"id": 10, "title": "Mojito", "image": "img",
         "ingredients": [{"name": "rum", "quantity": 2, "unit": "oz"}],
         "instructions": ["Mix", "Serve"]},
        {"id": 11, "title": "Daiquiri", "image": "img",
         "ingredients": [{"name": "rum", "quantity": 2, "unit": "oz"}],
         "instructions": "Shake\nStrain"}
    ]"#;

    let entries = parse_catalog(catalog_json).expect("parse failed");
    let first = insert_entries(&store, entries).expect("first pass failed");
    assert_eq!(first.inserted, 2);
    assert_eq!(first.failed, 0);

    // Second pass: two constraint failures, zero new rows
    let entries = parse_catalog(catalog_json).expect("parse failed");
    let second = insert_entries(&store, entries).expect("second pass failed");
    assert_eq!(second.inserted, 0);
    assert_eq!(second.failed, 2);

    assert_eq!(store.recipe_count().expect("count failed"), 2);
}

#[test]
fn test_catalog_string_instructions_normalize() {
    let (store, _temp) = create_test_store();

    let entries = parse_catalog(
        r#"[{"id": 1, "title": "Daiquiri", "image": "img",
             "ingredients": [], "instructions": "Shake\nStrain"}]"#,
    )
    .expect("parse failed");
    insert_entries(&store, entries).expect("insert failed");

    let all = store.select_all().expect("select_all failed");
    assert_eq!(all[0].instructions, vec!["Shake", "Strain"]);
}

#[test]
fn test_import_file_skips_and_reports() {
    let (store, temp) = create_test_store();

    let file = temp.path().join("import.json");
    std::fs::write(
        &file,
        r#"[
            {"title": "Complete", "image": "img",
             "ingredients": [], "instructions": []},
            {"title": "Missing ingredients", "image": "img",
             "instructions": []},
            {"image": "img", "ingredients": [], "instructions": []}
        ]"#,
    )
    .expect("write failed");

    let report = barbuddy::import_file(&store, &file).expect("import failed");
    assert_eq!(report.inserted, 1);
    assert_eq!(report.skipped, 2);
    assert_eq!(report.failed, 0);

    let all = store.select_all().expect("select_all failed");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, "Complete");
    assert!(all[0].id > 0);
}

#[test]
fn test_import_file_missing_path() {
    let (store, temp) = create_test_store();
    let missing = temp.path().join("nope.json");
    assert!(barbuddy::import_file(&store, &missing).is_err());
}

#[test]
fn test_bundled_seed_round_trips_through_store() {
    let (store, _temp) = create_test_store();

    let report = barbuddy::seed(&store).expect("seed failed");
    assert!(report.inserted >= 2);
    assert_eq!(report.skipped, 0);

    let all = store.select_all().expect("select_all failed");
    assert_eq!(all.len(), report.inserted);

    let mojito = all
        .iter()
        .find(|r| r.title == "Mojito")
        .expect("bundled catalog should contain a Mojito");
    assert!(!mojito.ingredients.is_empty());
    assert!(!mojito.instructions.is_empty());
    assert!(mojito.image.starts_with("https://"));
}
