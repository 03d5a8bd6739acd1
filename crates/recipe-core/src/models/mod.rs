// ABOUTME: Core data models for the recipe archive client
// ABOUTME: Re-exports Recipe, RecipeId, RecipePayload, RecipeDraft and RecipeField
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `Recipe`: a record as stored by the backend, with its server-assigned id
//! - `RecipePayload`: the body of create and update requests (no id)
//! - `RecipeDraft`: the four raw text fields of the creation form or an edit buffer
//! - `RecipeField`: names one of those four fields

mod draft;
mod recipe;

pub use draft::{RecipeDraft, RecipeField};
pub use recipe::{join_ingredients, split_ingredients, Recipe, RecipeId, RecipePayload};
