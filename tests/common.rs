// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, sample recipes, and an in-memory recipe backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `recipe_archive`

use async_trait::async_trait;
use recipe_archive::{
    client::RecipeApi,
    errors::{ApiError, ApiOperation},
    models::{Recipe, RecipeId, RecipePayload},
};
use std::collections::HashSet;
use std::sync::{Mutex, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Recipe with placeholder ingredients and instructions
pub fn recipe(id: &str, title: &str, category: &str) -> Recipe {
    Recipe {
        id: RecipeId::new(id),
        title: title.to_owned(),
        ingredients: vec!["salt".to_owned(), "water".to_owned()],
        instructions: format!("make {title}"),
        category: category.to_owned(),
    }
}

/// Three recipes A, B, C with ids "a", "b", "c"
pub fn abc() -> Vec<Recipe> {
    vec![
        recipe("a", "A", "dinner"),
        recipe("b", "B", "lunch"),
        recipe("c", "C", "Dinner"),
    ]
}

/// Titles in store order
pub fn titles<'a>(recipes: impl IntoIterator<Item = &'a Recipe>) -> Vec<String> {
    recipes.into_iter().map(|r| r.title.clone()).collect()
}

#[derive(Default)]
struct FakeState {
    recipes: Vec<Recipe>,
    next_id: u32,
    failing: HashSet<ApiOperation>,
    calls: Vec<ApiOperation>,
}

/// In-memory backend that records every call and can be told to fail
#[derive(Default)]
pub struct FakeRecipeApi {
    state: Mutex<FakeState>,
}

impl FakeRecipeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that already holds `recipes`
    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        let api = Self::new();
        api.state.lock().unwrap().recipes = recipes;
        api
    }

    /// Make every following call of `operation` answer HTTP 500
    pub fn fail(&self, operation: ApiOperation) {
        self.state.lock().unwrap().failing.insert(operation);
    }

    /// Let `operation` succeed again
    pub fn recover(&self, operation: ApiOperation) {
        self.state.lock().unwrap().failing.remove(&operation);
    }

    /// Every call made so far, in order
    pub fn calls(&self) -> Vec<ApiOperation> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Number of calls of one operation
    pub fn call_count(&self, operation: ApiOperation) -> usize {
        self.calls().into_iter().filter(|op| *op == operation).count()
    }

    /// Recipes the backend currently holds
    pub fn server_recipes(&self) -> Vec<Recipe> {
        self.state.lock().unwrap().recipes.clone()
    }

    fn begin(&self, operation: ApiOperation) -> Result<std::sync::MutexGuard<'_, FakeState>, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(operation);
        if state.failing.contains(&operation) {
            return Err(ApiError::Status {
                operation,
                status_code: 500,
                body: "internal server error".to_owned(),
            });
        }
        Ok(state)
    }
}

fn not_found(operation: ApiOperation) -> ApiError {
    ApiError::Status {
        operation,
        status_code: 404,
        body: "Recipe not found".to_owned(),
    }
}

#[async_trait]
impl RecipeApi for FakeRecipeApi {
    async fn list(&self) -> Result<Vec<Recipe>, ApiError> {
        let state = self.begin(ApiOperation::List)?;
        Ok(state.recipes.clone())
    }

    async fn create(&self, payload: &RecipePayload) -> Result<Recipe, ApiError> {
        let mut state = self.begin(ApiOperation::Create)?;
        state.next_id += 1;
        let id = RecipeId::new(format!("srv-{}", state.next_id));
        let recipe = Recipe::from_payload(id, payload.clone());
        state.recipes.push(recipe.clone());
        Ok(recipe)
    }

    async fn update(&self, id: &RecipeId, payload: &RecipePayload) -> Result<Recipe, ApiError> {
        let mut state = self.begin(ApiOperation::Update)?;
        let stored = state
            .recipes
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| not_found(ApiOperation::Update))?;
        *stored = Recipe::from_payload(id.clone(), payload.clone());
        Ok(stored.clone())
    }

    async fn delete(&self, id: &RecipeId) -> Result<(), ApiError> {
        let mut state = self.begin(ApiOperation::Delete)?;
        let before = state.recipes.len();
        state.recipes.retain(|r| &r.id != id);
        if state.recipes.len() == before {
            return Err(not_found(ApiOperation::Delete));
        }
        Ok(())
    }
}
