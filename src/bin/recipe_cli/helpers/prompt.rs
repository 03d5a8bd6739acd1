// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Terminal line input for recipe-cli
// ABOUTME: Reads shell commands and answers delete confirmations from one stdin reader

use async_trait::async_trait;
use recipe_archive::collection::Confirm;
use std::io::{self, Write};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::warn;

/// Line reader over stdin shared by the shell and confirmation prompts
pub struct Prompter {
    lines: Lines<BufReader<Stdin>>,
}

impl Prompter {
    pub fn stdin() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// Print `prompt` and read one line; `None` at end of input
    pub async fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        print!("{prompt}");
        io::stdout().flush()?;
        self.lines.next_line().await
    }
}

#[async_trait]
impl Confirm for Prompter {
    async fn confirm(&mut self, prompt: &str) -> bool {
        match self.read_line(&format!("{prompt} [y/N] ")).await {
            Ok(Some(answer)) => is_yes(&answer),
            Ok(None) => false,
            Err(e) => {
                warn!("Failed to read confirmation: {e}");
                false
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
