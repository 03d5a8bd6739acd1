// ABOUTME: Configuration management module for the recipe archive client
// ABOUTME: Exposes environment-driven client settings and log level parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! Configuration is environment-first: every setting has a default, can be
//! overridden through an environment variable, and the CLI can override the
//! backend base URL on top of that.

/// Environment and backend client configuration
pub mod environment;

pub use environment::{ClientConfig, LogLevel};
