// ABOUTME: Unified error handling system with error codes and user-facing messages
// ABOUTME: Every failure of a recipe operation becomes an AppError carrying an ErrorCode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Failures are caught at the call site of each operation and converted into
//! an [`AppError`]. The error's [`ErrorCode`] decides the short inline message
//! shown to the user, while the full message and the chained source go to the
//! diagnostic log.

mod api;
mod validation;

pub use api::{ApiError, ApiOperation};
pub use validation::ValidationError;

use serde::{Deserialize, Serialize};
use std::error::Error;

use crate::constants::messages;

/// Standard error codes used throughout the application
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// One or more required recipe fields are empty
    ValidationFailed,
    /// Fetching the recipe list failed
    LoadFailed,
    /// Creating a recipe failed
    SubmissionFailed,
    /// Updating a recipe failed
    UpdateFailed,
    /// Deleting a recipe failed
    DeleteFailed,
    /// No recipe with the requested id is held locally
    ResourceNotFound,
    /// Another card is already being edited
    EditInProgress,
    /// The card is not in editing state
    NotEditing,
    /// A position is outside the current sequence
    IndexOutOfRange,
    /// Configuration could not be parsed or validated
    ConfigInvalid,
    /// Unexpected internal failure
    InternalError,
}

impl ErrorCode {
    /// Get a developer-facing description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::ValidationFailed => "Recipe validation failed",
            Self::LoadFailed => "Failed to load recipes",
            Self::SubmissionFailed => "Failed to create recipe",
            Self::UpdateFailed => "Failed to update recipe",
            Self::DeleteFailed => "Failed to delete recipe",
            Self::ResourceNotFound => "Recipe not found",
            Self::EditInProgress => "Another recipe is being edited",
            Self::NotEditing => "Recipe is not being edited",
            Self::IndexOutOfRange => "Position out of range",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "Internal error",
        }
    }

    /// Get the short message shown inline to the user
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::ValidationFailed => messages::FILL_ALL_FIELDS,
            Self::LoadFailed => messages::LOAD_FAILED,
            Self::SubmissionFailed => messages::SUBMIT_FAILED,
            Self::UpdateFailed => messages::UPDATE_FAILED,
            Self::DeleteFailed => messages::DELETE_FAILED,
            Self::ResourceNotFound => "Recipe not found.",
            Self::EditInProgress => "Save or cancel the recipe you are editing first.",
            Self::NotEditing => "This recipe is not being edited.",
            Self::IndexOutOfRange => "No recipe at that position.",
            Self::ConfigInvalid => "Configuration is invalid.",
            Self::InternalError => "An internal error occurred.",
        }
    }

    /// Whether the error came from a request to the backend
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::LoadFailed | Self::SubmissionFailed | Self::UpdateFailed | Self::DeleteFailed
        )
    }
}

/// Unified error type for the application
#[derive(Debug, thiserror::Error)]
#[error("{}: {}", .code.description(), .message)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Id of the recipe the failed operation addressed, if any
    pub resource_id: Option<String>,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            resource_id: None,
            source: None,
        }
    }

    /// Attach the id of the recipe the operation addressed
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = Some(resource_id.into());
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Short message for the inline error slot
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        self.code.user_message()
    }

    /// Transport error behind a failed remote operation
    #[must_use]
    pub fn api_error(&self) -> Option<&ApiError> {
        self.source
            .as_deref()
            .and_then(|source| source.downcast_ref::<ApiError>())
    }

    /// Validation details behind a rejected form
    #[must_use]
    pub fn validation_error(&self) -> Option<&ValidationError> {
        self.source
            .as_deref()
            .and_then(|source| source.downcast_ref::<ValidationError>())
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience functions for creating common errors
impl AppError {
    /// Required fields are missing
    #[must_use]
    pub fn validation(error: ValidationError) -> Self {
        Self::new(ErrorCode::ValidationFailed, error.to_string()).with_source(error)
    }

    /// List request failed
    #[must_use]
    pub fn load(error: ApiError) -> Self {
        Self::new(ErrorCode::LoadFailed, error.to_string()).with_source(error)
    }

    /// Create request failed
    #[must_use]
    pub fn submission(error: ApiError) -> Self {
        Self::new(ErrorCode::SubmissionFailed, error.to_string()).with_source(error)
    }

    /// Update request failed
    #[must_use]
    pub fn update(id: impl Into<String>, error: ApiError) -> Self {
        Self::new(ErrorCode::UpdateFailed, error.to_string())
            .with_resource_id(id)
            .with_source(error)
    }

    /// Delete request failed
    #[must_use]
    pub fn delete(id: impl Into<String>, error: ApiError) -> Self {
        Self::new(ErrorCode::DeleteFailed, error.to_string())
            .with_resource_id(id)
            .with_source(error)
    }

    /// Recipe not held locally
    #[must_use]
    pub fn not_found(id: impl Into<String>) -> Self {
        let id = id.into();
        Self::new(ErrorCode::ResourceNotFound, format!("no recipe with id {id}"))
            .with_resource_id(id)
    }

    /// Another card already holds the edit slot
    #[must_use]
    pub fn edit_in_progress(editing_id: impl Into<String>) -> Self {
        let editing_id = editing_id.into();
        Self::new(
            ErrorCode::EditInProgress,
            format!("recipe {editing_id} is being edited"),
        )
        .with_resource_id(editing_id)
    }

    /// Card is not in editing state
    #[must_use]
    pub fn not_editing(id: impl Into<String>) -> Self {
        let id = id.into();
        Self::new(ErrorCode::NotEditing, format!("recipe {id} is not being edited"))
            .with_resource_id(id)
    }

    /// Position outside the sequence
    #[must_use]
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::new(
            ErrorCode::IndexOutOfRange,
            format!("position {index} is outside a collection of {len}"),
        )
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::internal(format!("{error:#}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecipeField;

    #[test]
    fn test_user_messages_match_inline_copy() {
        assert_eq!(
            ErrorCode::ValidationFailed.user_message(),
            "Please fill out all fields."
        );
        assert_eq!(
            ErrorCode::SubmissionFailed.user_message(),
            "Error submitting recipe."
        );
        assert_eq!(ErrorCode::UpdateFailed.user_message(), "Error updating recipe.");
        assert_eq!(ErrorCode::DeleteFailed.user_message(), "Error deleting recipe.");
    }

    #[test]
    fn test_remote_codes() {
        assert!(ErrorCode::LoadFailed.is_remote());
        assert!(ErrorCode::DeleteFailed.is_remote());
        assert!(!ErrorCode::ValidationFailed.is_remote());
        assert!(!ErrorCode::IndexOutOfRange.is_remote());
    }

    #[test]
    fn test_delete_error_keeps_api_source() {
        let api = ApiError::Status {
            operation: ApiOperation::Delete,
            status_code: 500,
            body: "boom".to_owned(),
        };
        let error = AppError::delete("abc", api);

        assert_eq!(error.code, ErrorCode::DeleteFailed);
        assert_eq!(error.resource_id.as_deref(), Some("abc"));
        assert_eq!(error.api_error().and_then(ApiError::status_code), Some(500));
        assert!(error.validation_error().is_none());
    }

    #[test]
    fn test_validation_error_display() {
        let error = AppError::validation(ValidationError::new(vec![
            RecipeField::Title,
            RecipeField::Category,
        ]));

        assert_eq!(error.code, ErrorCode::ValidationFailed);
        assert!(error.to_string().contains("title, category"));
        assert_eq!(
            error.validation_error().map(ValidationError::missing),
            Some(&[RecipeField::Title, RecipeField::Category][..])
        );
    }
}
