// ABOUTME: Four-field recipe creation form with validation and submission
// ABOUTME: Appends the server-confirmed record to the store and keeps input on failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::{error, info, warn};

use crate::client::RecipeApi;
use crate::errors::{AppError, AppResult};
use crate::models::{Recipe, RecipeDraft, RecipeField};
use crate::store::{RecipeStore, StoreAction};

/// Creation form state: the typed fields and the inline message slot
#[derive(Debug, Clone, Default)]
pub struct CreationForm {
    draft: RecipeDraft,
    message: Option<String>,
}

impl CreationForm {
    /// Empty form
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current field values
    #[must_use]
    pub const fn draft(&self) -> &RecipeDraft {
        &self.draft
    }

    /// Current value of one field
    #[must_use]
    pub fn field(&self, field: RecipeField) -> &str {
        self.draft.get(field)
    }

    /// Overwrite one field
    pub fn set_field(&mut self, field: RecipeField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Inline message from the last submission attempt
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Validate and send the form
    ///
    /// Exactly one create request is issued for valid input. On success the
    /// server's record is appended to `store` and the form is cleared.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if any field is empty; no request is sent
    /// - `SubmissionFailed` if the create request fails; the fields are kept
    pub async fn submit<A>(&mut self, api: &A, store: &mut RecipeStore) -> AppResult<Recipe>
    where
        A: RecipeApi + ?Sized,
    {
        let payload = match self.draft.validate() {
            Ok(payload) => payload,
            Err(validation) => {
                warn!("Recipe form rejected: {validation}");
                let err = AppError::validation(validation);
                self.message = Some(err.user_message().to_owned());
                return Err(err);
            }
        };

        match api.create(&payload).await {
            Ok(recipe) => {
                info!(recipe.id = %recipe.id, title = %recipe.title, "Recipe created");
                store.apply(StoreAction::Appended(recipe.clone()))?;
                self.draft.clear();
                self.message = None;
                Ok(recipe)
            }
            Err(api_error) => {
                let err = AppError::submission(api_error);
                error!("Error submitting recipe: {err}");
                self.message = Some(err.user_message().to_owned());
                Err(err)
            }
        }
    }
}
