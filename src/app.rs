// ABOUTME: Session-level application state owning the client, store, form, and collection view
// ABOUTME: Loads the collection once at start and routes every mutation through owned state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::{error, info};

use crate::client::RecipeApi;
use crate::collection::{CollectionView, Confirm};
use crate::errors::{AppError, AppResult};
use crate::form::CreationForm;
use crate::models::{Recipe, RecipeField, RecipeId};
use crate::store::RecipeStore;

/// One user session against a recipe backend
///
/// Holds the only copy of the store; every component borrows it mutably for
/// the duration of one operation.
#[derive(Debug)]
pub struct RecipeArchive<A> {
    api: A,
    store: RecipeStore,
    form: CreationForm,
    collection: CollectionView,
    load_message: Option<String>,
}

impl<A: RecipeApi> RecipeArchive<A> {
    /// New session with an empty store
    #[must_use]
    pub fn new(api: A) -> Self {
        Self {
            api,
            store: RecipeStore::new(),
            form: CreationForm::new(),
            collection: CollectionView::new(),
            load_message: None,
        }
    }

    /// Backend client
    #[must_use]
    pub const fn api(&self) -> &A {
        &self.api
    }

    /// Current recipe sequence
    #[must_use]
    pub const fn store(&self) -> &RecipeStore {
        &self.store
    }

    /// Creation form state
    #[must_use]
    pub const fn form(&self) -> &CreationForm {
        &self.form
    }

    /// Collection view state
    #[must_use]
    pub const fn collection(&self) -> &CollectionView {
        &self.collection
    }

    /// Message recorded by the last failed load
    #[must_use]
    pub fn load_message(&self) -> Option<&str> {
        self.load_message.as_deref()
    }

    /// Fetch the full collection and replace the local sequence
    ///
    /// On failure the current sequence is kept and a load message is recorded.
    /// Any custom display order is lost on a successful load.
    ///
    /// # Errors
    ///
    /// Returns `LoadFailed` if the list request fails
    pub async fn load(&mut self) -> AppResult<usize> {
        let recipes = match self.api.list().await {
            Ok(recipes) => recipes,
            Err(api_error) => {
                let err = AppError::load(api_error);
                error!("Error loading recipes: {err}");
                self.load_message = Some(err.user_message().to_owned());
                return Err(err);
            }
        };

        let count = recipes.len();
        self.store.replace(recipes);
        self.collection.retain_known(&self.store);
        self.load_message = None;
        info!("Loaded {count} recipes");
        Ok(count)
    }

    /// Set one creation form field
    pub fn set_form_field(&mut self, field: RecipeField, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    /// Submit the creation form
    ///
    /// # Errors
    ///
    /// See [`CreationForm::submit`]
    pub async fn submit(&mut self) -> AppResult<Recipe> {
        self.form.submit(&self.api, &mut self.store).await
    }

    /// Open the editor on a card
    ///
    /// # Errors
    ///
    /// See [`CollectionView::begin_edit`]
    pub fn begin_edit(&mut self, id: &RecipeId) -> AppResult<()> {
        self.collection.begin_edit(&self.store, id)
    }

    /// Change one field of an open editor
    ///
    /// # Errors
    ///
    /// See [`CollectionView::change_field`]
    pub fn change_field(
        &mut self,
        id: &RecipeId,
        field: RecipeField,
        value: impl Into<String>,
    ) -> AppResult<()> {
        self.collection.change_field(id, field, value)
    }

    /// Save an open editor
    ///
    /// # Errors
    ///
    /// See [`CollectionView::save_edit`]
    pub async fn save_edit(&mut self, id: &RecipeId) -> AppResult<Recipe> {
        self.collection
            .save_edit(&self.api, &mut self.store, id)
            .await
    }

    /// Close an open editor without saving
    pub fn cancel_edit(&mut self, id: &RecipeId) -> bool {
        self.collection.cancel_edit(id)
    }

    /// Delete a recipe after confirmation
    ///
    /// # Errors
    ///
    /// See [`CollectionView::remove`]
    pub async fn remove<C>(&mut self, id: &RecipeId, confirm: &mut C) -> AppResult<bool>
    where
        C: Confirm + ?Sized,
    {
        self.collection
            .remove(&self.api, &mut self.store, id, confirm)
            .await
    }

    /// Move a card in the local display order
    ///
    /// # Errors
    ///
    /// See [`CollectionView::reorder`]
    pub fn reorder(&mut self, source: Option<usize>, destination: usize) -> AppResult<()> {
        self.collection.reorder(&mut self.store, source, destination)
    }

    /// Resolve a 1-based card number or a recipe id to a stored id
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if neither interpretation matches a stored recipe
    pub fn resolve(&self, reference: &str) -> AppResult<RecipeId> {
        let by_id = RecipeId::new(reference);
        if self.store.get(&by_id).is_some() {
            return Ok(by_id);
        }

        reference
            .parse::<usize>()
            .ok()
            .and_then(|number| number.checked_sub(1))
            .and_then(|index| self.store.recipes().get(index))
            .map(|recipe| recipe.id.clone())
            .ok_or_else(|| AppError::not_found(reference))
    }
}
