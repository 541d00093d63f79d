//! Recipe commands: list, show, add, edit, delete, info.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{
    images::ImageStore,
    model::{Headline, Recipe, RecipeDraft},
    repository::RecipeRepository,
    storage::KeyValueStore,
};

use super::{
    Locations,
    format::{describe_image, format_recipe, format_summary},
    report,
};

pub(super) struct AddArgs {
    pub title: String,
    pub description: String,
    pub headline: Headline,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub image: Option<PathBuf>,
}

pub(super) struct EditArgs {
    pub title: Option<String>,
    pub description: Option<String>,
    pub headline: Option<Headline>,
    pub ingredients: Vec<String>,
    pub clear_ingredients: bool,
    pub steps: Vec<String>,
    pub image: Option<PathBuf>,
}

pub(super) fn cmd_list<S: KeyValueStore>(repo: &RecipeRepository<S>, search: Option<&str>) {
    let query = search.unwrap_or_default();
    let recipes = repo.search(query);

    if recipes.is_empty() {
        if query.is_empty() {
            println!("No recipes");
        } else {
            println!("No recipes matching '{query}'");
        }
        return;
    }

    for recipe in recipes {
        println!("{}", format_summary(recipe));
    }
}

pub(super) fn cmd_show(recipe: &Recipe, images: &ImageStore) {
    let image = describe_image(&recipe.image_name, &images.resolve(&recipe.image_name));
    print!("{}", format_recipe(recipe, &image));
}

pub(super) fn cmd_add<S: KeyValueStore>(
    repo: &mut RecipeRepository<S>,
    images: &ImageStore,
    args: AddArgs,
) -> Result<(), String> {
    let mut recipe = RecipeDraft {
        title: args.title,
        description: args.description,
        headline: args.headline.to_string(),
        ingredients: args.ingredients,
        instructions: args.steps,
        image_name: None,
    }
    .build()
    .map_err(|e| e.to_string())?;

    if let Some(name) = args.image.as_deref().and_then(|p| import_image(images, p)) {
        recipe.image_name = name;
    }

    let id = recipe.id;
    report(repo.add(recipe))?;
    println!("{id}");
    Ok(())
}

pub(super) fn cmd_edit<S: KeyValueStore>(
    repo: &mut RecipeRepository<S>,
    images: &ImageStore,
    existing: &Recipe,
    args: EditArgs,
) -> Result<(), String> {
    let mut draft = RecipeDraft::from_recipe(existing);
    if let Some(title) = args.title {
        draft.title = title;
    }
    if let Some(description) = args.description {
        draft.description = description;
    }
    if let Some(headline) = args.headline {
        draft.headline = headline.to_string();
    }
    if args.clear_ingredients || !args.ingredients.is_empty() {
        draft.ingredients = args.ingredients;
    }
    if !args.steps.is_empty() {
        draft.instructions = args.steps;
    }

    let mut recipe = draft.apply_to(existing).map_err(|e| e.to_string())?;

    // A failed import keeps the previous image.
    if let Some(name) = args.image.as_deref().and_then(|p| import_image(images, p)) {
        recipe.image_name = name;
    }

    report(repo.update(recipe))?;
    eprintln!("Updated {} {}", existing.short_id(), existing.title);
    Ok(())
}

pub(super) fn cmd_delete<S: KeyValueStore>(
    repo: &mut RecipeRepository<S>,
    recipe: &Recipe,
) -> Result<(), String> {
    report(repo.delete(recipe))?;
    eprintln!("Deleted {} {}", recipe.short_id(), recipe.title);
    Ok(())
}

pub(super) fn cmd_info<S: KeyValueStore>(
    repo: &RecipeRepository<S>,
    images: &ImageStore,
    locations: &Locations,
) -> Result<(), String> {
    let last_saved = repo
        .last_saved()
        .map_err(|e| format!("failed to read store: {e}"))?;

    println!("Database:  {}", locations.database.display());
    println!("Assets:    {}", locations.assets.display());
    println!("Images:    {}", images.dir().display());
    println!("Recipes:   {}", repo.list().len());
    match last_saved {
        Some(at) => println!("Saved at:  {at}"),
        None => println!("Saved at:  never"),
    }
    Ok(())
}

/// Reads and imports an image file. Any failure is a warning and yields no image.
fn import_image(images: &ImageStore, path: &Path) -> Option<String> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Warning: failed to read {}: {e}; no image attached", path.display());
            return None;
        }
    };
    match images.save(&bytes) {
        Ok(name) => {
            debug!(path = %path.display(), name = %name, "imported image");
            Some(name)
        }
        Err(e) => {
            eprintln!("Warning: {}: {e}; no image attached", path.display());
            None
        }
    }
}
