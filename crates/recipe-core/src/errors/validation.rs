// ABOUTME: Validation error raised when a recipe draft has empty fields
// ABOUTME: Lists every missing field so the caller can highlight them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use crate::models::RecipeField;

/// One or more required fields of a recipe draft are empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    missing: Vec<RecipeField>,
}

impl ValidationError {
    /// Create a validation error for the given empty fields
    #[must_use]
    pub const fn new(missing: Vec<RecipeField>) -> Self {
        Self { missing }
    }

    /// Fields that were empty, in form order
    #[must_use]
    pub fn missing(&self) -> &[RecipeField] {
        &self.missing
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Missing required fields: ")?;
        for (index, field) in self.missing.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{field}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
