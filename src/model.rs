//! Core data model for the recipe catalog.
//!
//! A [`Recipe`] is a plain value record. [`RecipeDraft`] is what the add and
//! edit forms produce before it becomes a recipe.

mod draft;
mod recipe;
mod seed;

pub use draft::RecipeDraft;
pub use recipe::{Headline, Recipe};
pub use seed::seed_recipes;
