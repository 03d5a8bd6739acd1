// ABOUTME: Collection view with per-card view/edit state, confirmed deletion, and local reorder
// ABOUTME: Server-backed edits and deletes mutate the store only after the backend confirms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Collection View
//!
//! Each card is either [`CardState::Viewing`] or [`CardState::Editing`] with
//! its own edit buffer. Cards start out viewing and go back to viewing when
//! their editor is saved or cancelled. At most one card is editing at a time:
//! opening a second editor is refused until the first is saved or cancelled.

use async_trait::async_trait;
use std::collections::HashMap;
use tracing::{debug, error, info, warn};

use crate::client::RecipeApi;
use crate::constants::messages;
use crate::errors::{AppError, AppResult};
use crate::models::{Recipe, RecipeDraft, RecipeField, RecipeId};
use crate::store::{RecipeStore, StoreAction};

/// Display state of one recipe card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardState {
    /// Read-only card
    Viewing,
    /// Card showing an editor seeded from the recipe
    Editing(RecipeDraft),
}

static VIEWING: CardState = CardState::Viewing;

/// Asks the user to confirm a destructive action
#[async_trait]
pub trait Confirm: Send {
    /// Whether the user accepted the prompt
    async fn confirm(&mut self, prompt: &str) -> bool;
}

/// Accepts every prompt (`--yes`)
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

#[async_trait]
impl Confirm for AssumeYes {
    async fn confirm(&mut self, prompt: &str) -> bool {
        debug!("Auto-confirming: {prompt}");
        true
    }
}

/// Declines every prompt
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeNo;

#[async_trait]
impl Confirm for AssumeNo {
    async fn confirm(&mut self, prompt: &str) -> bool {
        debug!("Auto-declining: {prompt}");
        false
    }
}

/// Per-card state and the inline message slot of the recipe list
#[derive(Debug, Clone, Default)]
pub struct CollectionView {
    cards: HashMap<RecipeId, CardState>,
    message: Option<String>,
}

impl CollectionView {
    /// View with every card in viewing state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inline message from the last edit or delete attempt
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// State of a card; cards never opened for editing are viewing
    #[must_use]
    pub fn card_state(&self, id: &RecipeId) -> &CardState {
        self.cards.get(id).unwrap_or(&VIEWING)
    }

    /// Whether the card is open for editing
    #[must_use]
    pub fn is_editing(&self, id: &RecipeId) -> bool {
        self.edit_buffer(id).is_some()
    }

    /// Edit buffer of a card, if it is editing
    #[must_use]
    pub fn edit_buffer(&self, id: &RecipeId) -> Option<&RecipeDraft> {
        match self.cards.get(id) {
            Some(CardState::Editing(draft)) => Some(draft),
            _ => None,
        }
    }

    /// Id of the card currently being edited
    #[must_use]
    pub fn editing_id(&self) -> Option<&RecipeId> {
        self.cards.iter().find_map(|(id, state)| match state {
            CardState::Editing(_) => Some(id),
            CardState::Viewing => None,
        })
    }

    /// Open the editor on a card, seeding the buffer from the stored recipe
    ///
    /// Re-opening the card that is already editing keeps its buffer.
    ///
    /// # Errors
    ///
    /// - `ResourceNotFound` if the store holds no recipe with this id
    /// - `EditInProgress` if a different card is editing
    pub fn begin_edit(&mut self, store: &RecipeStore, id: &RecipeId) -> AppResult<()> {
        let recipe = store
            .get(id)
            .ok_or_else(|| AppError::not_found(id.as_str()))?;

        if let Some(editing) = self.editing_id() {
            if editing == id {
                return Ok(());
            }
            return Err(AppError::edit_in_progress(editing.as_str()));
        }

        debug!(recipe.id = %id, "Editing recipe");
        self.cards
            .insert(id.clone(), CardState::Editing(RecipeDraft::from_recipe(recipe)));
        Ok(())
    }

    /// Change one field of the edit buffer
    ///
    /// # Errors
    ///
    /// Returns `NotEditing` if the card has no open editor
    pub fn change_field(
        &mut self,
        id: &RecipeId,
        field: RecipeField,
        value: impl Into<String>,
    ) -> AppResult<()> {
        match self.cards.get_mut(id) {
            Some(CardState::Editing(draft)) => {
                draft.set(field, value);
                Ok(())
            }
            _ => Err(AppError::not_editing(id.as_str())),
        }
    }

    /// Send the edit buffer as a full-record update
    ///
    /// On success the stored recipe is replaced by the server's record and the
    /// card returns to viewing. On any failure the card stays editing with its
    /// buffer intact.
    ///
    /// # Errors
    ///
    /// - `NotEditing` if the card has no open editor
    /// - `ValidationFailed` if a buffer field is empty; no request is sent
    /// - `UpdateFailed` if the update request fails
    pub async fn save_edit<A>(
        &mut self,
        api: &A,
        store: &mut RecipeStore,
        id: &RecipeId,
    ) -> AppResult<Recipe>
    where
        A: RecipeApi + ?Sized,
    {
        let draft = self
            .edit_buffer(id)
            .ok_or_else(|| AppError::not_editing(id.as_str()))?;

        let payload = match draft.validate() {
            Ok(payload) => payload,
            Err(validation) => {
                warn!(recipe.id = %id, "Recipe edit rejected: {validation}");
                let err = AppError::validation(validation).with_resource_id(id.as_str());
                self.message = Some(err.user_message().to_owned());
                return Err(err);
            }
        };

        match api.update(id, &payload).await {
            Ok(server_record) => {
                let recipe = Recipe {
                    id: id.clone(),
                    ..server_record
                };
                store.apply(StoreAction::Updated(recipe.clone()))?;
                self.cards.insert(id.clone(), CardState::Viewing);
                self.message = None;
                info!(recipe.id = %id, "Recipe updated");
                Ok(recipe)
            }
            Err(api_error) => {
                let err = AppError::update(id.as_str(), api_error);
                error!("Error updating recipe: {err}");
                self.message = Some(err.user_message().to_owned());
                Err(err)
            }
        }
    }

    /// Discard the edit buffer without contacting the backend
    ///
    /// Returns whether an editor was open.
    pub fn cancel_edit(&mut self, id: &RecipeId) -> bool {
        if !self.is_editing(id) {
            return false;
        }
        self.cards.insert(id.clone(), CardState::Viewing);
        debug!(recipe.id = %id, "Edit cancelled");
        true
    }

    /// Delete a recipe after the user confirms
    ///
    /// Returns `false` when the user declines; no request is sent in that case.
    ///
    /// # Errors
    ///
    /// - `ResourceNotFound` if the store holds no recipe with this id
    /// - `DeleteFailed` if the delete request fails; the store is unchanged
    pub async fn remove<A, C>(
        &mut self,
        api: &A,
        store: &mut RecipeStore,
        id: &RecipeId,
        confirm: &mut C,
    ) -> AppResult<bool>
    where
        A: RecipeApi + ?Sized,
        C: Confirm + ?Sized,
    {
        if store.get(id).is_none() {
            return Err(AppError::not_found(id.as_str()));
        }

        if !confirm.confirm(messages::CONFIRM_DELETE).await {
            debug!(recipe.id = %id, "Delete declined");
            return Ok(false);
        }

        match api.delete(id).await {
            Ok(()) => {
                store.apply(StoreAction::Removed(id.clone()))?;
                self.cards.remove(id);
                self.message = None;
                info!(recipe.id = %id, "Recipe deleted");
                Ok(true)
            }
            Err(api_error) => {
                let err = AppError::delete(id.as_str(), api_error);
                error!("Error deleting recipe: {err}");
                self.message = Some(err.user_message().to_owned());
                Err(err)
            }
        }
    }

    /// Move a card from `source` to `destination` in the local display order
    ///
    /// A drop without a resolvable source and a drop onto the same index are
    /// both no-ops. The new order is never sent to the backend.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if either index is outside the sequence
    pub fn reorder(
        &mut self,
        store: &mut RecipeStore,
        source: Option<usize>,
        destination: usize,
    ) -> AppResult<()> {
        let Some(source) = source else {
            debug!("Reorder without a source index ignored");
            return Ok(());
        };
        store.apply(StoreAction::Reordered {
            from: source,
            to: destination,
        })
    }

    /// Drop card state for recipes the store no longer holds
    pub fn retain_known(&mut self, store: &RecipeStore) {
        self.cards.retain(|id, _| store.get(id).is_some());
    }
}
