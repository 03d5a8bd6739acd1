// ABOUTME: REST API client seam for the recipe backend
// ABOUTME: Defines the RecipeApi trait and exposes the reqwest implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe backend client
//!
//! Components never talk HTTP directly; they call a [`RecipeApi`]. The
//! production implementation is [`HttpRecipeApi`], tests substitute an
//! in-memory fake.

mod http;

pub use http::HttpRecipeApi;

use async_trait::async_trait;

use crate::errors::ApiError;
use crate::models::{Recipe, RecipeId, RecipePayload};

/// The four remote operations on the recipe collection
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// Fetch the full collection
    async fn list(&self) -> Result<Vec<Recipe>, ApiError>;

    /// Create a recipe and return the stored record with its assigned id
    async fn create(&self, payload: &RecipePayload) -> Result<Recipe, ApiError>;

    /// Replace every field of an existing recipe and return the stored record
    async fn update(&self, id: &RecipeId, payload: &RecipePayload) -> Result<Recipe, ApiError>;

    /// Delete a recipe; any response body is ignored
    async fn delete(&self, id: &RecipeId) -> Result<(), ApiError>;
}
