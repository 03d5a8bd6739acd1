// ABOUTME: Constants module with domain-separated organization
// ABOUTME: REST paths, environment keys, timeouts, and inline messages for the recipe client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than one flat list.

/// Backend REST API layout
pub mod api {
    /// Default backend base URL
    pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
    /// Path segments of the recipe collection resource, relative to the base URL
    pub const RECIPES_PATH_SEGMENTS: [&str; 2] = ["api", "recipes"];
    /// Header carrying the per-request correlation id
    pub const REQUEST_ID_HEADER: &str = "x-request-id";
    /// Default user agent sent with every request
    pub const DEFAULT_USER_AGENT: &str = concat!("recipe-archive/", env!("CARGO_PKG_VERSION"));
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Backend base URL
    pub const API_BASE_URL: &str = "RECIPE_API_BASE_URL";
    /// Request timeout in seconds
    pub const API_TIMEOUT_SECS: &str = "RECIPE_API_TIMEOUT_SECS";
    /// Connect timeout in seconds
    pub const API_CONNECT_TIMEOUT_SECS: &str = "RECIPE_API_CONNECT_TIMEOUT_SECS";
    /// User agent override
    pub const API_USER_AGENT: &str = "RECIPE_API_USER_AGENT";
}

/// HTTP timeouts
pub mod timeouts {
    /// Default HTTP client request timeout in seconds
    pub const HTTP_CLIENT_TIMEOUT_SECS: u64 = 30;
    /// Default HTTP client connect timeout in seconds
    pub const HTTP_CLIENT_CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// Service names for structured logging
pub mod service_names {
    /// Recipe archive CLI
    pub const RECIPE_CLI: &str = "recipe-cli";
}

/// Short inline messages shown next to the form or the card list
pub mod messages {
    /// Creation form or edit buffer has an empty field
    pub const FILL_ALL_FIELDS: &str = "Please fill out all fields.";
    /// Initial or repeated list fetch failed
    pub const LOAD_FAILED: &str = "Error loading recipes.";
    /// Create request failed
    pub const SUBMIT_FAILED: &str = "Error submitting recipe.";
    /// Update request failed
    pub const UPDATE_FAILED: &str = "Error updating recipe.";
    /// Delete request failed
    pub const DELETE_FAILED: &str = "Error deleting recipe.";
    /// Delete confirmation prompt
    pub const CONFIRM_DELETE: &str = "Delete this recipe?";
    /// Rendered when the collection is empty
    pub const EMPTY_COLLECTION: &str = "No recipes available.";
}

/// Field separators used when converting between text input and ingredient lists
pub mod ingredients {
    /// Separator the user types between ingredients
    pub const INPUT_SEPARATOR: char = ',';
    /// Separator used when rejoining ingredients for editing and display
    pub const DISPLAY_SEPARATOR: &str = ", ";
}
