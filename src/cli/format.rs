//! Output formatting for CLI display.

use crate::images::ImageLookup;
use crate::model::Recipe;

/// One line per recipe: short id, category, title.
pub(super) fn format_summary(recipe: &Recipe) -> String {
    format!(
        "{}  [{}]  {}",
        recipe.short_id(),
        recipe.headline,
        recipe.title
    )
}

/// Full recipe with numbered steps.
pub(super) fn format_recipe(recipe: &Recipe, image: &str) -> String {
    let mut sections = vec![format!(
        "{}  [{}]\nid: {}",
        recipe.title, recipe.headline, recipe.id
    )];
    if !recipe.description.is_empty() {
        sections.push(recipe.description.clone());
    }

    let ingredients = if recipe.ingredients.is_empty() {
        "  (none)".to_string()
    } else {
        recipe
            .ingredients
            .iter()
            .map(|i| format!("  - {i}"))
            .collect::<Vec<_>>()
            .join("\n")
    };
    sections.push(format!("Ingredients:\n{ingredients}"));

    let steps: Vec<String> = recipe
        .instructions
        .iter()
        .enumerate()
        .map(|(i, step)| format!("  {}. {step}", i + 1))
        .collect();
    sections.push(format!("Instructions:\n{}", steps.join("\n")));

    sections.push(format!("Image: {image}"));
    format!("{}\n", sections.join("\n\n"))
}

/// Where a recipe's image comes from, for display.
pub(super) fn describe_image(name: &str, lookup: &ImageLookup) -> String {
    match lookup {
        ImageLookup::Bundled(_) => format!("{name} (bundled)"),
        ImageLookup::Saved(_) => format!("{name} (saved)"),
        ImageLookup::NotFound if name.is_empty() => "none".to_string(),
        ImageLookup::NotFound => format!("{name} (missing)"),
    }
}
