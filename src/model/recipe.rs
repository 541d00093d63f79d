//! Recipe types: the unit of content in the catalog.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One dish: what it is, what goes in it, and how to make it.
///
/// Serialized with camelCase field names so the stored blob reads
/// `id, description, title, headline, ingredients, instructions, imageName`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: Uuid,
    pub description: String,
    pub title: String,

    /// Meal category. Free text; see [`Headline`] for the conventional values.
    pub headline: String,

    pub ingredients: Vec<String>,

    /// Steps in execution order. Never sorted.
    pub instructions: Vec<String>,

    /// Empty, a bundled asset name, or a generated filename in the image directory.
    pub image_name: String,
}

impl Recipe {
    /// Creates a recipe with a freshly generated id.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        headline: impl Into<String>,
        ingredients: Vec<String>,
        instructions: Vec<String>,
        image_name: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            title: title.into(),
            headline: headline.into(),
            ingredients,
            instructions,
            image_name: image_name.into(),
        }
    }

    /// Returns the recipe with empty and whitespace-only ingredient and
    /// instruction entries removed. Order of the remaining entries is kept.
    #[must_use]
    pub fn without_blank_entries(mut self) -> Self {
        self.ingredients.retain(|s| !is_blank(s));
        self.instructions.retain(|s| !is_blank(s));
        self
    }

    /// The first eight characters of the id, for display and prefix lookup.
    pub fn short_id(&self) -> String {
        self.id.to_string()[..8].to_string()
    }
}

pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Conventional meal categories offered when creating a recipe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Headline {
    Breakfast,
    #[default]
    Lunch,
    Dinner,
}

impl Headline {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
        }
    }
}

impl fmt::Display for Headline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
