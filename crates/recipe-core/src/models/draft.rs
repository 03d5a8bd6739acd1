// ABOUTME: Raw four-field recipe input shared by the creation form and edit buffers
// ABOUTME: Validates non-emptiness and converts ingredient text into a request payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::recipe::{split_ingredients, Recipe, RecipePayload};
use crate::errors::ValidationError;

/// One of the four user-editable recipe fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeField {
    /// Display name
    Title,
    /// Comma-separated ingredient text
    Ingredients,
    /// Procedure text
    Instructions,
    /// Category tag
    Category,
}

impl RecipeField {
    /// All fields in form order
    pub const ALL: [Self; 4] = [
        Self::Title,
        Self::Ingredients,
        Self::Instructions,
        Self::Category,
    ];

    /// Prompt shown when asking the user for this field
    #[must_use]
    pub const fn placeholder(&self) -> &'static str {
        match self {
            Self::Title => "Recipe Name",
            Self::Ingredients => "Ingredients (comma separated)",
            Self::Instructions => "Cooking Procedure",
            Self::Category => "Category",
        }
    }
}

impl fmt::Display for RecipeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => write!(f, "title"),
            Self::Ingredients => write!(f, "ingredients"),
            Self::Instructions => write!(f, "instructions"),
            Self::Category => write!(f, "category"),
        }
    }
}

impl FromStr for RecipeField {
    type Err = String;

    /// Accepts the field names plus the form input names `name`,
    /// `components`, `procedure`, and `tag`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" | "name" => Ok(Self::Title),
            "ingredients" | "components" => Ok(Self::Ingredients),
            "instructions" | "procedure" => Ok(Self::Instructions),
            "category" | "tag" => Ok(Self::Category),
            other => Err(format!(
                "unknown field '{other}' (expected title, ingredients, instructions or category)"
            )),
        }
    }
}

/// The four raw text fields of a recipe as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDraft {
    /// Display name
    pub title: String,
    /// Comma-separated ingredients
    pub ingredients_text: String,
    /// Procedure text
    pub instructions: String,
    /// Category tag
    pub category: String,
}

impl RecipeDraft {
    /// Seed a draft from an existing recipe, rejoining ingredients with ", "
    #[must_use]
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            title: recipe.title.clone(),
            ingredients_text: recipe.ingredients_text(),
            instructions: recipe.instructions.clone(),
            category: recipe.category.clone(),
        }
    }

    /// Read one field
    #[must_use]
    pub fn get(&self, field: RecipeField) -> &str {
        match field {
            RecipeField::Title => &self.title,
            RecipeField::Ingredients => &self.ingredients_text,
            RecipeField::Instructions => &self.instructions,
            RecipeField::Category => &self.category,
        }
    }

    /// Overwrite one field
    pub fn set(&mut self, field: RecipeField, value: impl Into<String>) {
        let value = value.into();
        match field {
            RecipeField::Title => self.title = value,
            RecipeField::Ingredients => self.ingredients_text = value,
            RecipeField::Instructions => self.instructions = value,
            RecipeField::Category => self.category = value,
        }
    }

    /// Reset all four fields to empty
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Fields whose raw value is empty
    ///
    /// Whitespace-only values count as filled in.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<RecipeField> {
        RecipeField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    /// Validate the draft and build the request payload
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every empty field
    pub fn validate(&self) -> Result<RecipePayload, ValidationError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ValidationError::new(missing));
        }

        Ok(RecipePayload {
            title: self.title.clone(),
            ingredients: split_ingredients(&self.ingredients_text),
            instructions: self.instructions.clone(),
            category: self.category.clone(),
        })
    }
}
