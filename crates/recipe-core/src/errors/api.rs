// ABOUTME: Transport-level error types for calls to the recipe REST API
// ABOUTME: Separates network failures, non-success statuses, and undecodable bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

/// The four REST operations the client performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiOperation {
    /// `GET /api/recipes`
    List,
    /// `POST /api/recipes`
    Create,
    /// `PUT /api/recipes/:id`
    Update,
    /// `DELETE /api/recipes/:id`
    Delete,
}

impl ApiOperation {
    /// HTTP method name used for this operation
    #[must_use]
    pub const fn method(&self) -> &'static str {
        match self {
            Self::List => "GET",
            Self::Create => "POST",
            Self::Update => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for ApiOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => write!(f, "list recipes"),
            Self::Create => write!(f, "create recipe"),
            Self::Update => write!(f, "update recipe"),
            Self::Delete => write!(f, "delete recipe"),
        }
    }
}

/// Errors raised while talking to the recipe backend
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, timeout, ...)
    #[error("Network error during {operation}: {message}")]
    Network {
        /// Operation that was attempted
        operation: ApiOperation,
        /// Transport error description
        message: String,
    },

    /// The backend answered with a non-success status
    #[error("{operation} returned HTTP {status_code}: {body}")]
    Status {
        /// Operation that was attempted
        operation: ApiOperation,
        /// HTTP status code
        status_code: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// The response body could not be decoded as the expected JSON
    #[error("Failed to decode {operation} response")]
    Decode {
        /// Operation that was attempted
        operation: ApiOperation,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The request URL could not be built from the configured base URL
    #[error("Cannot build request URL from base {base_url}")]
    InvalidUrl {
        /// Configured base URL
        base_url: String,
    },
}

impl ApiError {
    /// Operation the error belongs to, when known
    #[must_use]
    pub const fn operation(&self) -> Option<ApiOperation> {
        match self {
            Self::Network { operation, .. }
            | Self::Status { operation, .. }
            | Self::Decode { operation, .. } => Some(*operation),
            Self::InvalidUrl { .. } => None,
        }
    }

    /// HTTP status code for non-success responses
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Whether the request failed before any response arrived
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}
