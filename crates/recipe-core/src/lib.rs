// ABOUTME: Core types and constants for the recipe archive client
// ABOUTME: Foundation crate with the recipe model, error taxonomy, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Core
//!
//! Foundation crate providing shared types and constants for the recipe
//! archive client. It has no I/O of its own, so the store, form and
//! collection logic in the main crate can be tested without a network.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the transport-level `ApiError`
//! - **constants**: API paths, environment variable names, timeouts, user messages
//! - **models**: `Recipe`, `RecipeId`, `RecipeDraft`, `RecipePayload`, `RecipeField`

/// Unified error handling with standard error codes and user-facing messages
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Recipe data model, drafts, and validation
pub mod models;
