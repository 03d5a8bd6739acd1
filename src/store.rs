// ABOUTME: Ordered in-memory recipe sequence mutated through a single reducer
// ABOUTME: Id-keyed actions keep completions independent of the order they arrive in
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Store
//!
//! The store is the client's copy of the collection, in display order.
//! Every mutation is a [`StoreAction`] passed to [`RecipeStore::apply`].

use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::models::{Recipe, RecipeId};

/// A single mutation of the recipe sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreAction {
    /// Replace the whole sequence with a freshly loaded one
    Loaded(Vec<Recipe>),
    /// Add a server-confirmed record at the end
    Appended(Recipe),
    /// Replace the record with the same id
    Updated(Recipe),
    /// Drop the record with this id
    Removed(RecipeId),
    /// Move the element at `from` so it ends up at `to`
    Reordered {
        /// Current index of the moved element
        from: usize,
        /// Index the element lands on
        to: usize,
    },
}

/// Ordered sequence of recipes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    /// Empty store
    #[must_use]
    pub const fn new() -> Self {
        Self {
            recipes: Vec::new(),
        }
    }

    /// Apply one action
    ///
    /// # Errors
    ///
    /// - `ResourceNotFound` when `Updated` or `Removed` names an id the store does not hold
    /// - `IndexOutOfRange` when `Reordered` addresses a position outside the sequence
    ///
    /// A failed action leaves the sequence unchanged.
    pub fn apply(&mut self, action: StoreAction) -> AppResult<()> {
        match action {
            StoreAction::Loaded(recipes) => {
                debug!("Store loaded with {} recipes", recipes.len());
                self.replace(recipes);
            }
            StoreAction::Appended(recipe) => self.append(recipe),
            StoreAction::Updated(recipe) => {
                let index = self
                    .position(&recipe.id)
                    .ok_or_else(|| AppError::not_found(recipe.id.as_str()))?;
                self.recipes[index] = recipe;
            }
            StoreAction::Removed(id) => {
                let index = self
                    .position(&id)
                    .ok_or_else(|| AppError::not_found(id.as_str()))?;
                self.recipes.remove(index);
            }
            StoreAction::Reordered { from, to } => self.reorder(from, to)?,
        }
        Ok(())
    }

    /// Swap in a whole new sequence
    pub fn replace(&mut self, recipes: Vec<Recipe>) {
        self.recipes = recipes;
    }

    fn append(&mut self, recipe: Recipe) {
        if let Some(index) = self.position(&recipe.id) {
            debug!(recipe.id = %recipe.id, "Appended id already present, replacing in place");
            self.recipes[index] = recipe;
            return;
        }
        self.recipes.push(recipe);
    }

    fn reorder(&mut self, from: usize, to: usize) -> AppResult<()> {
        if from == to {
            return Ok(());
        }
        let len = self.recipes.len();
        if from >= len {
            return Err(AppError::index_out_of_range(from, len));
        }
        if to >= len {
            return Err(AppError::index_out_of_range(to, len));
        }
        let moved = self.recipes.remove(from);
        self.recipes.insert(to, moved);
        Ok(())
    }

    /// All recipes in display order
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Recipe with the given id
    #[must_use]
    pub fn get(&self, id: &RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| &recipe.id == id)
    }

    /// Display index of the recipe with the given id
    #[must_use]
    pub fn position(&self, id: &RecipeId) -> Option<usize> {
        self.recipes.iter().position(|recipe| &recipe.id == id)
    }

    /// Number of recipes held
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the store holds no recipes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Iterate in display order
    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    /// Distinct categories in first-seen order, compared case-insensitively
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for recipe in &self.recipes {
            if !seen
                .iter()
                .any(|category| category.eq_ignore_ascii_case(&recipe.category))
            {
                seen.push(&recipe.category);
            }
        }
        seen
    }

    /// Recipes tagged with the given category, in display order
    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Recipe> + 'a {
        self.recipes
            .iter()
            .filter(move |recipe| recipe.in_category(category))
    }
}

impl<'a> IntoIterator for &'a RecipeStore {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
