// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for recipe-cli
// ABOUTME: Provides access to one-shot recipe commands and the interactive shell

use recipe_archive::{app::RecipeArchive, client::HttpRecipeApi};

pub mod recipes;
pub mod shell;

/// Session type every command operates on
pub type Archive = RecipeArchive<HttpRecipeApi>;
