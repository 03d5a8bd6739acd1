// ABOUTME: Recipe record, identifier, and request payload types
// ABOUTME: Handles the backend's `_id` field naming and ingredient text conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::ingredients::{DISPLAY_SEPARATOR, INPUT_SEPARATOR};

/// Opaque recipe identifier assigned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(String);

impl RecipeId {
    /// Wrap a backend identifier
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RecipeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for RecipeId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<RecipeId> for String {
    fn from(id: RecipeId) -> Self {
        id.0
    }
}

/// A recipe as stored by the backend
///
/// The backend names the identifier `_id`; `id` is accepted on input as well.
/// Any additional fields in a response (timestamps, version counters) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Server-assigned identifier
    #[serde(rename = "_id", alias = "id")]
    pub id: RecipeId,
    /// Display name
    pub title: String,
    /// Ordered ingredient list
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Free-text procedure, may contain newlines
    #[serde(default)]
    pub instructions: String,
    /// Free-text tag used for display and grouping
    #[serde(default)]
    pub category: String,
}

impl Recipe {
    /// Build a recipe from a confirmed payload and its assigned id
    #[must_use]
    pub fn from_payload(id: RecipeId, payload: RecipePayload) -> Self {
        Self {
            id,
            title: payload.title,
            ingredients: payload.ingredients,
            instructions: payload.instructions,
            category: payload.category,
        }
    }

    /// Ingredients rejoined into editable text
    #[must_use]
    pub fn ingredients_text(&self) -> String {
        join_ingredients(&self.ingredients)
    }

    /// Whether the recipe carries the given category tag (case-insensitive)
    #[must_use]
    pub fn in_category(&self, category: &str) -> bool {
        self.category.eq_ignore_ascii_case(category)
    }
}

/// Request body for create and update calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipePayload {
    /// Display name
    pub title: String,
    /// Ordered ingredient list
    pub ingredients: Vec<String>,
    /// Free-text procedure
    pub instructions: String,
    /// Free-text tag
    pub category: String,
}

/// Split comma-separated ingredient text into trimmed tokens
///
/// Empty tokens are kept: `"salt,,pepper"` yields `["salt", "", "pepper"]`.
#[must_use]
pub fn split_ingredients(text: &str) -> Vec<String> {
    text.split(INPUT_SEPARATOR)
        .map(|token| token.trim().to_owned())
        .collect()
}

/// Join ingredients back into editable text
#[must_use]
pub fn join_ingredients(ingredients: &[String]) -> String {
    ingredients.join(DISPLAY_SEPARATOR)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_split_trims_each_token() {
        assert_eq!(
            split_ingredients("salt, water , pepper"),
            vec!["salt", "water", "pepper"]
        );
    }

    #[test]
    fn test_split_keeps_empty_tokens() {
        assert_eq!(split_ingredients("salt,, pepper,"), vec!["salt", "", "pepper", ""]);
        assert_eq!(split_ingredients("   "), vec![""]);
    }

    #[test]
    fn test_recipe_accepts_underscore_id() {
        let recipe: Recipe = serde_json::from_str(
            r#"{"_id":"65f1","title":"Soup","ingredients":["salt"],"instructions":"boil","category":"dinner","__v":0}"#,
        )
        .unwrap();

        assert_eq!(recipe.id.as_str(), "65f1");
        assert_eq!(recipe.ingredients_text(), "salt");
    }

    #[test]
    fn test_recipe_accepts_plain_id_and_serializes_underscore() {
        let recipe: Recipe =
            serde_json::from_str(r#"{"id":"7","title":"Tea","ingredients":[],"instructions":"steep","category":"drink"}"#)
                .unwrap();
        let value = serde_json::to_value(&recipe).unwrap();

        assert_eq!(value["_id"], "7");
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_in_category_ignores_case() {
        let recipe = Recipe::from_payload(
            RecipeId::new("1"),
            RecipePayload {
                title: "Soup".to_owned(),
                ingredients: vec!["salt".to_owned()],
                instructions: "boil".to_owned(),
                category: "Dinner".to_owned(),
            },
        );

        assert!(recipe.in_category("dinner"));
        assert!(!recipe.in_category("lunch"));
    }
}
