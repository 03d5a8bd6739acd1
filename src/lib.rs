// ABOUTME: Main library entry point for the recipe archive client
// ABOUTME: Wires the recipe store, creation form, collection view, and REST client together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Archive
//!
//! Client for a personal recipe collection kept on a remote REST backend.
//! Recipes are created, listed, edited and deleted through the backend, while
//! the display order is owned by the client and changed with local moves.
//!
//! ## Architecture
//!
//! - **Store**: the ordered in-memory sequence, mutated through one reducer
//! - **Form**: the four-field creation form with validation and submission
//! - **Collection**: per-card view/edit state, deletion, and reordering
//! - **Client**: the `RecipeApi` seam and its `reqwest` implementation
//! - **App**: `RecipeArchive`, which owns all of the above for one session
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use recipe_archive::app::RecipeArchive;
//! use recipe_archive::client::HttpRecipeApi;
//! use recipe_archive::config::environment::ClientConfig;
//! use recipe_archive::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ClientConfig::from_env()?;
//!     let mut archive = RecipeArchive::new(HttpRecipeApi::new(&config)?);
//!
//!     archive.load().await?;
//!     println!("{} recipes loaded", archive.store().len());
//!     Ok(())
//! }
//! ```

// Re-export recipe-core modules so callers can keep `recipe_archive::errors::*` etc.
pub use recipe_core::constants;
pub use recipe_core::errors;
pub use recipe_core::models;

/// Session-level application state tying every component together
pub mod app;

/// Per-card view/edit state, deletion, and reordering
pub mod collection;

/// REST API client seam and its HTTP implementation
pub mod client;

/// Environment-driven configuration
pub mod config;

/// Recipe creation form
pub mod form;

/// Structured logging setup
pub mod logging;

/// Ordered in-memory recipe sequence
pub mod store;
