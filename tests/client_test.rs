// ABOUTME: HTTP-level tests for the reqwest recipe API client against a mock backend
// ABOUTME: Verifies paths, methods, bodies, request ids, and error mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::init_test_logging;
use recipe_archive::client::{HttpRecipeApi, RecipeApi};
use recipe_archive::config::ClientConfig;
use recipe_archive::errors::{ApiError, ApiOperation};
use recipe_archive::models::{RecipeId, RecipePayload};
use serde_json::json;
use std::time::Duration;
use url::Url;
use wiremock::matchers::{body_json, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpRecipeApi {
    init_test_logging();
    let config = ClientConfig::new(Url::parse(&server.uri()).unwrap());
    HttpRecipeApi::new(&config).unwrap()
}

fn soup_payload() -> RecipePayload {
    RecipePayload {
        title: "Soup".to_owned(),
        ingredients: vec!["salt".to_owned(), "water".to_owned(), "pepper".to_owned()],
        instructions: "boil".to_owned(),
        category: "dinner".to_owned(),
    }
}

// ============================================================================
// Successful calls
// ============================================================================

#[tokio::test]
async fn test_list_decodes_backend_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/recipes"))
        .and(header_exists("x-request-id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "_id": "65f1",
                "title": "Soup",
                "ingredients": ["salt", "water"],
                "instructions": "boil",
                "category": "dinner",
                "createdAt": "2024-03-13T10:00:00Z",
                "__v": 0
            },
            {
                "_id": "65f2",
                "title": "Tea",
                "ingredients": [],
                "instructions": "steep",
                "category": "drink"
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let recipes = client_for(&server).list().await.unwrap();

    assert_eq!(recipes.len(), 2);
    assert_eq!(recipes[0].id, RecipeId::new("65f1"));
    assert_eq!(recipes[0].ingredients, vec!["salt", "water"]);
    assert_eq!(recipes[1].title, "Tea");
}

#[tokio::test]
async fn test_create_posts_payload_and_returns_assigned_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/recipes"))
        .and(body_json(json!({
            "title": "Soup",
            "ingredients": ["salt", "water", "pepper"],
            "instructions": "boil",
            "category": "dinner"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "_id": "new-1",
            "title": "Soup",
            "ingredients": ["salt", "water", "pepper"],
            "instructions": "boil",
            "category": "dinner"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = client_for(&server).create(&soup_payload()).await.unwrap();

    assert_eq!(created.id.as_str(), "new-1");
    assert_eq!(created.ingredients.len(), 3);
}

#[tokio::test]
async fn test_update_puts_to_recipe_path() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/recipes/65f1"))
        .and(body_json(json!({
            "title": "Soup",
            "ingredients": ["salt", "water", "pepper"],
            "instructions": "boil",
            "category": "dinner"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "65f1",
            "title": "Soup",
            "ingredients": ["salt", "water", "pepper"],
            "instructions": "boil",
            "category": "dinner"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let updated = client_for(&server)
        .update(&RecipeId::new("65f1"), &soup_payload())
        .await
        .unwrap();

    assert_eq!(updated.category, "dinner");
}

#[tokio::test]
async fn test_delete_ignores_response_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/recipes/65f1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Recipe deleted"))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .delete(&RecipeId::new("65f1"))
        .await
        .unwrap();
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_non_success_status_maps_to_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/recipes/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Recipe not found"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .delete(&RecipeId::new("missing"))
        .await
        .unwrap_err();

    match err {
        ApiError::Status {
            operation,
            status_code,
            body,
        } => {
            assert_eq!(operation, ApiOperation::Delete);
            assert_eq!(status_code, 404);
            assert_eq!(body, "Recipe not found");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_maps_to_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/recipes"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).list().await.unwrap_err();

    assert!(matches!(
        err,
        ApiError::Decode {
            operation: ApiOperation::List,
            ..
        }
    ));
}

#[tokio::test]
async fn test_unreachable_backend_maps_to_network_error() {
    init_test_logging();
    let config = ClientConfig::new(Url::parse("http://127.0.0.1:1").unwrap());
    let api = HttpRecipeApi::new(&config).unwrap();

    let err = api.list().await.unwrap_err();

    assert!(err.is_network());
    assert_eq!(err.operation(), Some(ApiOperation::List));
}

#[tokio::test]
async fn test_slow_backend_times_out_as_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/recipes"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    init_test_logging();
    let mut config = ClientConfig::new(Url::parse(&server.uri()).unwrap());
    config.timeout_secs = 1;
    let api = HttpRecipeApi::new(&config).unwrap();

    let err = api.list().await.unwrap_err();
    assert!(err.is_network());
}
