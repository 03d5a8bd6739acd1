// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for recipe-cli
// ABOUTME: Renders recipe cards, edit buffers, category groups, and inline error messages

use recipe_archive::{
    collection::CollectionView,
    constants::messages,
    errors::AppError,
    models::{Recipe, RecipeDraft, RecipeField},
    store::RecipeStore,
};
use std::fmt::Write as _;

/// Render one card; an edit buffer replaces the stored values when given
pub fn render_card(number: usize, recipe: &Recipe, editing: Option<&RecipeDraft>) -> String {
    let mut out = String::new();

    if let Some(draft) = editing {
        let _ = writeln!(out, "[{number}] (editing) id {}", recipe.id);
        for field in RecipeField::ALL {
            let _ = writeln!(out, "    {}: {}", field.placeholder(), draft.get(field));
        }
        let _ = write!(out, "    save | cancel");
        return out;
    }

    let _ = writeln!(out, "[{number}] {}", recipe.title);
    let _ = writeln!(out, "    Ingredients: {}", recipe.ingredients_text());
    let _ = writeln!(out, "    Instructions:");
    for line in recipe.instructions.lines() {
        let _ = writeln!(out, "      {line}");
    }
    let _ = write!(out, "    Category: {}", recipe.category);
    out
}

/// Render every card in display order, or the empty-collection notice
///
/// A message from a failed load is shown above the cards it left in place.
pub fn render_collection(
    store: &RecipeStore,
    collection: &CollectionView,
    load_message: Option<&str>,
) -> String {
    let mut out = String::new();
    if let Some(message) = load_message {
        let _ = writeln!(out, "{message}");
    }
    if store.is_empty() {
        let _ = writeln!(out, "{}", messages::EMPTY_COLLECTION);
        return out;
    }

    for (index, recipe) in store.iter().enumerate() {
        let card = render_card(index + 1, recipe, collection.edit_buffer(&recipe.id));
        let _ = writeln!(out, "{card}\n");
    }
    if let Some(message) = collection.message() {
        let _ = writeln!(out, "{message}");
    }
    out
}

/// Render cards under one heading per category, categories in first-seen order
pub fn render_grouped(store: &RecipeStore) -> String {
    if store.is_empty() {
        return format!("{}\n", messages::EMPTY_COLLECTION);
    }

    let mut out = String::new();
    for category in store.categories() {
        let _ = writeln!(out, "== {category} ==");
        for recipe in store.in_category(category) {
            let number = store.position(&recipe.id).map_or(0, |i| i + 1);
            let _ = writeln!(out, "{}\n", render_card(number, recipe, None));
        }
    }
    out
}

/// Render the creation form's message slot after a rejected submission
///
/// Validation failures also name the missing fields.
pub fn render_form_feedback(form_message: Option<&str>, error: &AppError) -> String {
    let mut out = String::new();
    if let Some(message) = form_message {
        let _ = writeln!(out, "{message}");
    }
    if let Some(validation) = error.validation_error() {
        let _ = writeln!(out, "{validation}");
    }
    out
}

/// Print the inline message for a failed operation
///
/// Validation failures also name the missing fields.
pub fn display_error(error: &AppError) {
    println!("{}", error.user_message());
    if let Some(validation) = error.validation_error() {
        println!("{validation}");
    }
}
