// ABOUTME: reqwest-backed implementation of the recipe REST API
// ABOUTME: Builds resource URLs, tags requests with ids, and maps failures into ApiError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Instant;
use tracing::{debug, warn};
use url::Url;
use uuid::Uuid;

use super::RecipeApi;
use crate::config::ClientConfig;
use crate::constants::api::{RECIPES_PATH_SEGMENTS, REQUEST_ID_HEADER};
use crate::errors::{ApiError, ApiOperation, AppError, AppResult};
use crate::logging::RequestLogger;
use crate::models::{Recipe, RecipeId, RecipePayload};

/// HTTP client for `/api/recipes` on the configured backend
#[derive(Debug, Clone)]
pub struct HttpRecipeApi {
    client: Client,
    base_url: Url,
}

impl HttpRecipeApi {
    /// Build a client with the configured timeouts and user agent
    ///
    /// # Errors
    ///
    /// Returns an internal error if the underlying HTTP client cannot be constructed
    pub fn new(config: &ClientConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| AppError::internal("Failed to build HTTP client").with_source(e))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Base URL requests are resolved against
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of the collection, or of one recipe when `id` is given
    ///
    /// The id is pushed as a single percent-encoded path segment.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidUrl` if the base URL cannot carry a path
    pub fn resource_url(&self, id: Option<&RecipeId>) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| ApiError::InvalidUrl {
                base_url: self.base_url.to_string(),
            })?;
            segments.pop_if_empty().extend(RECIPES_PATH_SEGMENTS);
            if let Some(id) = id {
                segments.push(id.as_str());
            }
        }
        Ok(url)
    }

    /// Send a request, returning the body text of a successful response
    async fn execute(
        &self,
        operation: ApiOperation,
        url: &Url,
        request: RequestBuilder,
    ) -> Result<String, ApiError> {
        let request_id = Uuid::new_v4().to_string();
        let method = operation.method();
        RequestLogger::log_request(method, url.as_str(), &request_id);

        let started = Instant::now();
        let response = request
            .header(REQUEST_ID_HEADER, &request_id)
            .send()
            .await
            .map_err(|e| {
                warn!(
                    request.id = %request_id,
                    "{operation} failed before a response arrived: {e}"
                );
                ApiError::Network {
                    operation,
                    message: e.to_string(),
                }
            })?;

        let status = response.status();
        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        RequestLogger::log_response(
            method,
            url.as_str(),
            &request_id,
            status.as_u16(),
            duration_ms,
        );

        let body = response.text().await.map_err(|e| ApiError::Network {
            operation,
            message: format!("failed to read response body: {e}"),
        })?;

        if !status.is_success() {
            return Err(ApiError::Status {
                operation,
                status_code: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }

    fn decode<T: DeserializeOwned>(operation: ApiOperation, body: &str) -> Result<T, ApiError> {
        serde_json::from_str(body).map_err(|source| {
            debug!("Undecodable {operation} body: {body}");
            ApiError::Decode { operation, source }
        })
    }
}

#[async_trait]
impl RecipeApi for HttpRecipeApi {
    async fn list(&self) -> Result<Vec<Recipe>, ApiError> {
        let operation = ApiOperation::List;
        let url = self.resource_url(None)?;
        let body = self
            .execute(operation, &url, self.client.get(url.clone()))
            .await?;
        Self::decode(operation, &body)
    }

    async fn create(&self, payload: &RecipePayload) -> Result<Recipe, ApiError> {
        let operation = ApiOperation::Create;
        let url = self.resource_url(None)?;
        let body = self
            .execute(operation, &url, self.client.post(url.clone()).json(payload))
            .await?;
        Self::decode(operation, &body)
    }

    async fn update(&self, id: &RecipeId, payload: &RecipePayload) -> Result<Recipe, ApiError> {
        let operation = ApiOperation::Update;
        let url = self.resource_url(Some(id))?;
        let body = self
            .execute(operation, &url, self.client.put(url.clone()).json(payload))
            .await?;
        Self::decode(operation, &body)
    }

    async fn delete(&self, id: &RecipeId) -> Result<(), ApiError> {
        let url = self.resource_url(Some(id))?;
        self.execute(ApiOperation::Delete, &url, self.client.delete(url.clone()))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn api_for(base: &str) -> HttpRecipeApi {
        let config = ClientConfig::new(Url::parse(base).unwrap());
        HttpRecipeApi::new(&config).unwrap()
    }

    #[test]
    fn test_collection_url() {
        let api = api_for("http://localhost:5000");
        assert_eq!(
            api.resource_url(None).unwrap().as_str(),
            "http://localhost:5000/api/recipes"
        );
    }

    #[test]
    fn test_base_path_is_kept() {
        let api = api_for("https://example.com/kitchen/");
        assert_eq!(
            api.resource_url(Some(&RecipeId::new("65f1"))).unwrap().as_str(),
            "https://example.com/kitchen/api/recipes/65f1"
        );
    }

    #[test]
    fn test_id_is_one_encoded_segment() {
        let api = api_for("http://localhost:5000");
        let url = api.resource_url(Some(&RecipeId::new("a/b c"))).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/recipes/a%2Fb%20c");
    }
}
