// ABOUTME: Environment configuration for the recipe backend client
// ABOUTME: Parses base URL, timeouts, user agent, and log level from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! One base URL serves every recipe operation. Numeric settings that fail to
//! parse fall back to their defaults with a warning; an unusable base URL is
//! a hard error because every request would fail.

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::time::Duration;
use tracing::{info, warn};
use url::Url;

use crate::constants::{api, env_config, timeouts};
use crate::errors::{AppError, AppResult};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback to `Info`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        Self::from_str_or(s, Self::default())
    }

    /// Parse from string, returning `fallback` for unknown names
    #[must_use]
    pub fn from_str_or(s: &str, fallback: Self) -> Self {
        match s.trim().to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "info" => Self::Info,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => fallback,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Settings for the HTTP client that talks to the recipe backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL shared by list, create, update and delete
    pub base_url: Url,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
    /// User agent sent with every request
    pub user_agent: String,
}

impl ClientConfig {
    /// Configuration for the given base URL with default timeouts and user agent
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout_secs: timeouts::HTTP_CLIENT_TIMEOUT_SECS,
            connect_timeout_secs: timeouts::HTTP_CLIENT_CONNECT_TIMEOUT_SECS,
            user_agent: api::DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Load client configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `RECIPE_API_BASE_URL` is not a usable http(s) URL
    pub fn from_env() -> AppResult<Self> {
        let base_url = match env::var(env_config::API_BASE_URL) {
            Ok(raw) => parse_base_url(&raw)?,
            Err(_) => {
                info!(
                    "{} not set, using default: {}",
                    env_config::API_BASE_URL,
                    api::DEFAULT_BASE_URL
                );
                parse_base_url(api::DEFAULT_BASE_URL)?
            }
        };

        let config = Self {
            base_url,
            timeout_secs: env_u64_or(
                env_config::API_TIMEOUT_SECS,
                timeouts::HTTP_CLIENT_TIMEOUT_SECS,
            ),
            connect_timeout_secs: env_u64_or(
                env_config::API_CONNECT_TIMEOUT_SECS,
                timeouts::HTTP_CLIENT_CONNECT_TIMEOUT_SECS,
            ),
            user_agent: env::var(env_config::API_USER_AGENT)
                .unwrap_or_else(|_| api::DEFAULT_USER_AGENT.to_owned()),
        };

        info!(
            base_url = %config.base_url,
            timeout_secs = config.timeout_secs,
            connect_timeout_secs = config.connect_timeout_secs,
            "Recipe API client configured"
        );

        Ok(config)
    }

    /// Replace the base URL, typically from a command-line override
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the URL is not a usable http(s) URL
    pub fn with_base_url(mut self, raw: &str) -> AppResult<Self> {
        self.base_url = parse_base_url(raw)?;
        Ok(self)
    }

    /// Request timeout as a `Duration`
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Connect timeout as a `Duration`
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

/// Parse and check a backend base URL
///
/// # Errors
///
/// Returns a configuration error if the value does not parse, is not http(s),
/// or cannot carry path segments
pub fn parse_base_url(raw: &str) -> AppResult<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| {
        AppError::config(format!("Invalid recipe API base URL '{raw}'")).with_source(e)
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::config(format!(
            "Recipe API base URL must use http or https, got '{}'",
            url.scheme()
        )));
    }

    if url.cannot_be_a_base() {
        return Err(AppError::config(format!(
            "Recipe API base URL '{raw}' cannot carry a path"
        )));
    }

    Ok(url)
}

fn env_u64_or(key: &str, default: u64) -> u64 {
    env::var(key).map_or(default, |raw| {
        raw.trim().parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value '{raw}': {e}, using default: {default}");
            default
        })
    })
}
