// ABOUTME: One-shot recipe commands for recipe-cli
// ABOUTME: Handles list, add, edit, and delete against the configured backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_archive::{
    collection::AssumeYes,
    errors::AppResult,
    models::RecipeField,
};
use tracing::info;

use super::Archive;
use crate::helpers::display::{render_card, render_collection, render_grouped};
use crate::helpers::prompt::Prompter;

/// Field changes requested by `edit`; `None` keeps the current value
pub struct EditArgs {
    pub title: Option<String>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
    pub category: Option<String>,
}

impl EditArgs {
    fn into_changes(self) -> Vec<(RecipeField, String)> {
        [
            (RecipeField::Title, self.title),
            (RecipeField::Ingredients, self.ingredients),
            (RecipeField::Instructions, self.instructions),
            (RecipeField::Category, self.category),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|value| (field, value)))
        .collect()
    }
}

/// Load and print the collection
pub async fn list(archive: &mut Archive, category: Option<&str>, grouped: bool) -> AppResult<()> {
    archive.load().await?;

    match category {
        Some(category) => {
            let matching: Vec<_> = archive.store().in_category(category).collect();
            info!("{} recipes in category {category}", matching.len());
            if matching.is_empty() {
                println!("No recipes in category \"{category}\".");
            }
            for recipe in matching {
                let number = archive.store().position(&recipe.id).map_or(0, |i| i + 1);
                println!("{}", render_card(number, recipe, None));
            }
        }
        None if grouped => print!("{}", render_grouped(archive.store())),
        None => print!(
            "{}",
            render_collection(archive.store(), archive.collection(), archive.load_message())
        ),
    }

    Ok(())
}

/// Submit one recipe through the creation form
pub async fn add(
    archive: &mut Archive,
    title: String,
    ingredients: String,
    instructions: String,
    category: String,
) -> AppResult<()> {
    archive.set_form_field(RecipeField::Title, title);
    archive.set_form_field(RecipeField::Ingredients, ingredients);
    archive.set_form_field(RecipeField::Instructions, instructions);
    archive.set_form_field(RecipeField::Category, category);

    let recipe = archive.submit().await?;
    println!("Recipe added:");
    println!("{}", render_card(archive.store().len(), &recipe, None));
    Ok(())
}

/// Edit one recipe, keeping fields that were not given
pub async fn edit(archive: &mut Archive, reference: &str, changes: EditArgs) -> AppResult<()> {
    archive.load().await?;
    let id = archive.resolve(reference)?;

    archive.begin_edit(&id)?;
    for (field, value) in changes.into_changes() {
        archive.change_field(&id, field, value)?;
    }

    let recipe = archive.save_edit(&id).await?;
    let number = archive.store().position(&id).map_or(0, |i| i + 1);
    println!("Recipe updated:");
    println!("{}", render_card(number, &recipe, None));
    Ok(())
}

/// Delete one recipe, asking first unless `yes` is set
pub async fn delete(archive: &mut Archive, reference: &str, yes: bool) -> AppResult<()> {
    archive.load().await?;
    let id = archive.resolve(reference)?;

    let deleted = if yes {
        archive.remove(&id, &mut AssumeYes).await?
    } else {
        archive.remove(&id, &mut Prompter::stdin()).await?
    };

    if deleted {
        println!("Recipe deleted.");
    } else {
        println!("Delete cancelled.");
    }
    Ok(())
}
