// ABOUTME: Recipe CLI - command-line client for a remote recipe collection
// ABOUTME: Lists, adds, edits, deletes, and interactively reorders recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Show every recipe, or only one category
//! recipe-cli list
//! recipe-cli list --category dinner
//! recipe-cli list --grouped
//!
//! # Create a recipe
//! recipe-cli add --title Soup --ingredients "salt, water, pepper" \
//!     --instructions boil --category dinner
//!
//! # Change fields of the second card (or address it by id)
//! recipe-cli edit 2 --category lunch
//!
//! # Delete without the confirmation prompt
//! recipe-cli delete 65f1c0ffee --yes
//!
//! # Interactive session with local reordering
//! recipe-cli --base-url http://localhost:5000 shell
//! ```

mod commands;
mod helpers;

use clap::{ArgAction, Parser, Subcommand};
use recipe_archive::{
    app::RecipeArchive,
    client::HttpRecipeApi,
    config::ClientConfig,
    errors::AppResult,
    logging::LoggingConfig,
};
use std::process::ExitCode;
use tracing::debug;

use commands::recipes::EditArgs;
use helpers::display::display_error;

#[derive(Parser)]
#[command(
    name = "recipe-cli",
    about = "Recipe collection client",
    long_about = "Create, list, edit, delete, and reorder recipes stored on a remote recipe API."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Backend base URL, taking precedence over the environment
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Show the recipe collection
    List {
        /// Only show recipes in this category
        #[arg(long)]
        category: Option<String>,

        /// Group cards under category headings
        #[arg(long)]
        grouped: bool,
    },

    /// Create a recipe
    Add {
        /// Recipe name
        #[arg(long)]
        title: String,

        /// Ingredients, comma separated
        #[arg(long)]
        ingredients: String,

        /// Cooking procedure
        #[arg(long)]
        instructions: String,

        /// Category tag
        #[arg(long)]
        category: String,
    },

    /// Change fields of an existing recipe
    Edit {
        /// Card number (1-based) or recipe id
        recipe: String,

        /// New recipe name
        #[arg(long)]
        title: Option<String>,

        /// New ingredients, comma separated
        #[arg(long)]
        ingredients: Option<String>,

        /// New cooking procedure
        #[arg(long)]
        instructions: Option<String>,

        /// New category tag
        #[arg(long)]
        category: Option<String>,
    },

    /// Delete a recipe
    Delete {
        /// Card number (1-based) or recipe id
        recipe: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Interactive session: edit in place and reorder cards locally
    Shell,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = LoggingConfig::from_env().with_verbosity(cli.verbose).init() {
        eprintln!("Logging disabled: {e}");
    }

    if let Err(e) = run(cli).await {
        display_error(&e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

async fn run(cli: Cli) -> AppResult<()> {
    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = cli.base_url.as_deref() {
        config = config.with_base_url(base_url)?;
    }
    debug!("Using recipe API at {}", config.base_url);

    let mut archive = RecipeArchive::new(HttpRecipeApi::new(&config)?);

    match cli.command {
        Command::List { category, grouped } => {
            commands::recipes::list(&mut archive, category.as_deref(), grouped).await
        }
        Command::Add {
            title,
            ingredients,
            instructions,
            category,
        } => {
            commands::recipes::add(&mut archive, title, ingredients, instructions, category).await
        }
        Command::Edit {
            recipe,
            title,
            ingredients,
            instructions,
            category,
        } => {
            let changes = EditArgs {
                title,
                ingredients,
                instructions,
                category,
            };
            commands::recipes::edit(&mut archive, &recipe, changes).await
        }
        Command::Delete { recipe, yes } => {
            commands::recipes::delete(&mut archive, &recipe, yes).await
        }
        Command::Shell => commands::shell::run(&mut archive).await,
    }
}
