// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports helper modules for recipe-cli
// ABOUTME: Provides access to card rendering and terminal prompt utilities

pub mod display;
pub mod prompt;
