// ABOUTME: End-to-end tests for a recipe archive session over an in-memory backend
// ABOUTME: Covers initial load, load failures, reload order reset, and card resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{abc, init_test_logging, titles, FakeRecipeApi};
use recipe_archive::app::RecipeArchive;
use recipe_archive::client::RecipeApi;
use recipe_archive::collection::AssumeYes;
use recipe_archive::errors::{ApiOperation, ErrorCode};
use recipe_archive::models::{RecipeField, RecipeId};

async fn loaded_archive() -> RecipeArchive<FakeRecipeApi> {
    init_test_logging();
    let mut archive = RecipeArchive::new(FakeRecipeApi::with_recipes(abc()));
    assert_eq!(archive.load().await.unwrap(), 3);
    archive
}

#[tokio::test]
async fn test_load_fills_store() {
    let archive = loaded_archive().await;

    assert_eq!(titles(archive.store()), vec!["A", "B", "C"]);
    assert_eq!(archive.load_message(), None);
}

#[tokio::test]
async fn test_failed_initial_load_leaves_store_empty_with_message() {
    init_test_logging();
    let api = FakeRecipeApi::with_recipes(abc());
    api.fail(ApiOperation::List);
    let mut archive = RecipeArchive::new(api);

    let err = archive.load().await.unwrap_err();

    assert_eq!(err.code, ErrorCode::LoadFailed);
    assert!(archive.store().is_empty());
    assert_eq!(archive.load_message(), Some("Error loading recipes."));
}

#[tokio::test]
async fn test_failed_reload_keeps_current_sequence() {
    let mut archive = loaded_archive().await;
    archive.api().fail(ApiOperation::List);

    archive.load().await.unwrap_err();

    assert_eq!(titles(archive.store()), vec!["A", "B", "C"]);
    assert!(archive.load_message().is_some());

    archive.api().recover(ApiOperation::List);
    archive.load().await.unwrap();
    assert_eq!(archive.load_message(), None);
}

#[tokio::test]
async fn test_reload_discards_local_order() {
    let mut archive = loaded_archive().await;
    archive.reorder(Some(0), 2).unwrap();
    assert_eq!(titles(archive.store()), vec!["B", "C", "A"]);

    archive.load().await.unwrap();

    assert_eq!(titles(archive.store()), vec!["A", "B", "C"]);
}

#[tokio::test]
async fn test_created_recipe_survives_reload() {
    let mut archive = loaded_archive().await;
    archive.set_form_field(RecipeField::Title, "Soup");
    archive.set_form_field(RecipeField::Ingredients, "salt, water , pepper");
    archive.set_form_field(RecipeField::Instructions, "boil");
    archive.set_form_field(RecipeField::Category, "dinner");

    let created = archive.submit().await.unwrap();
    archive.load().await.unwrap();

    assert_eq!(titles(archive.store()), vec!["A", "B", "C", "Soup"]);
    assert_eq!(
        archive.store().get(&created.id).unwrap().ingredients,
        vec!["salt", "water", "pepper"]
    );
}

#[tokio::test]
async fn test_full_edit_then_delete_flow() {
    let mut archive = loaded_archive().await;
    let b = RecipeId::new("b");

    archive.begin_edit(&b).unwrap();
    archive
        .change_field(&b, RecipeField::Category, "supper")
        .unwrap();
    archive.save_edit(&b).await.unwrap();
    assert_eq!(archive.store().get(&b).unwrap().category, "supper");

    assert!(archive.remove(&b, &mut AssumeYes).await.unwrap());
    assert_eq!(titles(archive.store()), vec!["A", "C"]);
    assert_eq!(archive.api().server_recipes().len(), 2);
}

#[tokio::test]
async fn test_reload_drops_state_of_vanished_cards() {
    let mut archive = loaded_archive().await;
    let a = RecipeId::new("a");
    archive.begin_edit(&a).unwrap();

    // Someone else deleted "a" on the server
    archive.api().delete(&a).await.unwrap();
    archive.load().await.unwrap();

    assert!(archive.collection().editing_id().is_none());
    archive.begin_edit(&RecipeId::new("b")).unwrap();
}

#[tokio::test]
async fn test_resolve_accepts_number_or_id() {
    let archive = loaded_archive().await;

    assert_eq!(archive.resolve("2").unwrap(), RecipeId::new("b"));
    assert_eq!(archive.resolve("c").unwrap(), RecipeId::new("c"));
    assert_eq!(
        archive.resolve("0").unwrap_err().code,
        ErrorCode::ResourceNotFound
    );
    assert_eq!(
        archive.resolve("9").unwrap_err().code,
        ErrorCode::ResourceNotFound
    );
}
