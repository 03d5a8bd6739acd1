// ABOUTME: Interactive shell for recipe-cli
// ABOUTME: Parses line commands and drives the form, card editor, deletion, and local reorder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_archive::{
    errors::{AppError, AppResult, ErrorCode},
    models::{RecipeField, RecipeId},
};
use tracing::debug;

use super::Archive;
use crate::helpers::display::{
    display_error, render_card, render_collection, render_form_feedback,
};
use crate::helpers::prompt::Prompter;

const HELP: &str = "\
Commands:
  list                      show all recipes
  add                       fill in the creation form field by field and submit
  form <field> <value>      set one creation form field
  submit                    submit the creation form
  edit <n|id>               open the editor on a card
  set <field> <value>       change a field of the open editor
  save                      save the open editor
  cancel                    close the open editor without saving
  delete <n|id>             delete a recipe (asks first)
  move <from> <to>          move a card to another position (not saved to the server)
  reload                    fetch the collection again (resets the order)
  help                      show this help
  quit                      leave the shell
Fields: title, ingredients, instructions, category";

/// One parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Empty,
    List,
    Add,
    Form { field: RecipeField, value: String },
    Submit,
    Edit(String),
    Set { field: RecipeField, value: String },
    Save,
    Cancel,
    Delete(String),
    Move { source: Option<usize>, destination: usize },
    Reload,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse one input line; positions in `move` are 1-based
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

        match verb.to_lowercase().as_str() {
            "" => Ok(Self::Empty),
            "list" | "ls" => Ok(Self::List),
            "add" => Ok(Self::Add),
            "form" => {
                let (field, value) = parse_field_value(rest)?;
                Ok(Self::Form { field, value })
            }
            "submit" => Ok(Self::Submit),
            "edit" => Ok(Self::Edit(required(rest, "edit <n|id>")?)),
            "set" => {
                let (field, value) = parse_field_value(rest)?;
                Ok(Self::Set { field, value })
            }
            "save" => Ok(Self::Save),
            "cancel" => Ok(Self::Cancel),
            "delete" | "rm" => Ok(Self::Delete(required(rest, "delete <n|id>")?)),
            "move" | "mv" => parse_move(rest),
            "reload" => Ok(Self::Reload),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(format!("Unknown command '{other}'. Type 'help' for commands.")),
        }
    }
}

fn required(rest: &str, usage: &str) -> Result<String, String> {
    if rest.is_empty() {
        Err(format!("Usage: {usage}"))
    } else {
        Ok(rest.to_owned())
    }
}

fn parse_field_value(rest: &str) -> Result<(RecipeField, String), String> {
    let (field, value) = rest
        .split_once(char::is_whitespace)
        .map_or((rest, ""), |(field, value)| (field, value.trim()));
    if field.is_empty() {
        return Err("Usage: <field> <value>".to_owned());
    }
    Ok((field.parse()?, value.to_owned()))
}

fn parse_move(rest: &str) -> Result<ShellCommand, String> {
    let usage = || "Usage: move <from> <to>".to_owned();
    let mut parts = rest.split_whitespace();
    let (Some(from), Some(to), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(usage());
    };

    let from: usize = from.parse().map_err(|_| usage())?;
    let to: usize = to.parse().map_err(|_| usage())?;
    let destination = to
        .checked_sub(1)
        .ok_or_else(|| "Positions start at 1".to_owned())?;

    Ok(ShellCommand::Move {
        source: from.checked_sub(1),
        destination,
    })
}

/// Run the shell until `quit` or end of input
pub async fn run(archive: &mut Archive) -> AppResult<()> {
    let mut prompter = Prompter::stdin();

    if let Err(e) = archive.load().await {
        debug!("Initial load failed: {e}");
    }
    print_collection(archive);
    println!("Type 'help' for commands.");

    loop {
        let line = prompter
            .read_line("recipes> ")
            .await
            .map_err(|e| AppError::internal("Failed to read input").with_source(e))?;
        let Some(line) = line else {
            break;
        };

        let command = match ShellCommand::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };
        debug!("Shell command: {command:?}");

        match execute(archive, &mut prompter, command).await {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => display_error(&e),
        }
    }

    Ok(())
}

/// Execute one command; returns `false` when the shell should exit
async fn execute(
    archive: &mut Archive,
    prompter: &mut Prompter,
    command: ShellCommand,
) -> AppResult<bool> {
    match command {
        ShellCommand::Empty => return Ok(true),
        ShellCommand::Quit => return Ok(false),
        ShellCommand::Help => {
            println!("{HELP}");
            return Ok(true);
        }
        ShellCommand::List => {}
        ShellCommand::Reload => {
            if let Err(e) = archive.load().await {
                debug!("Reload failed: {e}");
            }
        }
        ShellCommand::Add => {
            for field in RecipeField::ALL {
                let prompt = format!("{}: ", field.placeholder());
                let value = prompter
                    .read_line(&prompt)
                    .await
                    .map_err(|e| AppError::internal("Failed to read input").with_source(e))?;
                let Some(value) = value else {
                    return Ok(false);
                };
                archive.set_form_field(field, value);
            }
            if !submit(archive).await {
                return Ok(true);
            }
        }
        ShellCommand::Form { field, value } => {
            archive.set_form_field(field, value);
            return Ok(true);
        }
        ShellCommand::Submit => {
            if !submit(archive).await {
                return Ok(true);
            }
        }
        ShellCommand::Edit(reference) => {
            let id = archive.resolve(&reference)?;
            archive.begin_edit(&id)?;
            print_editor(archive, &id);
            return Ok(true);
        }
        ShellCommand::Set { field, value } => {
            let id = editing_id(archive)?;
            archive.change_field(&id, field, value)?;
            print_editor(archive, &id);
            return Ok(true);
        }
        ShellCommand::Save => {
            let id = editing_id(archive)?;
            archive.save_edit(&id).await?;
            println!("Recipe updated.");
        }
        ShellCommand::Cancel => {
            let id = editing_id(archive)?;
            archive.cancel_edit(&id);
        }
        ShellCommand::Delete(reference) => {
            let id = archive.resolve(&reference)?;
            if !archive.remove(&id, prompter).await? {
                println!("Delete cancelled.");
                return Ok(true);
            }
        }
        ShellCommand::Move {
            source,
            destination,
        } => {
            archive.reorder(source, destination)?;
        }
    }

    print_collection(archive);
    Ok(true)
}

/// Submit the creation form; a rejection is shown from the form's message slot
async fn submit(archive: &mut Archive) -> bool {
    match archive.submit().await {
        Ok(recipe) => {
            println!("Recipe added: {}", recipe.title);
            true
        }
        Err(e) => {
            debug!("Submission rejected: {e}");
            print!("{}", render_form_feedback(archive.form().message(), &e));
            false
        }
    }
}

fn print_collection(archive: &Archive) {
    print!(
        "{}",
        render_collection(archive.store(), archive.collection(), archive.load_message())
    );
}

fn editing_id(archive: &Archive) -> AppResult<RecipeId> {
    archive
        .collection()
        .editing_id()
        .cloned()
        .ok_or_else(|| AppError::new(ErrorCode::NotEditing, "no recipe is being edited"))
}

fn print_editor(archive: &Archive, id: &RecipeId) {
    if let (Some(index), Some(recipe)) = (archive.store().position(id), archive.store().get(id)) {
        println!(
            "{}",
            render_card(index + 1, recipe, archive.collection().edit_buffer(id))
        );
    }
}
