//! Form input for creating and editing recipes.

use super::recipe::{Recipe, is_blank};

/// Reasons a draft cannot become a recipe.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("a recipe needs a title")]
    EmptyTitle,

    #[error("a recipe needs at least one instruction step")]
    NoInstructions,
}

/// What a user typed into the add or edit form.
///
/// `image_name` is the name returned by the image store after a successful
/// import, or `None` when no image was attached (or the import failed).
#[derive(Debug, Clone, Default)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub headline: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub image_name: Option<String>,
}

impl RecipeDraft {
    /// Builds a new recipe with a fresh id.
    pub fn build(self) -> Result<Recipe, DraftError> {
        self.validate()?;
        Ok(Recipe::new(
            self.title,
            self.description,
            self.headline,
            self.ingredients,
            self.instructions,
            self.image_name.unwrap_or_default(),
        )
        .without_blank_entries())
    }

    /// Applies the draft to an existing recipe, keeping its id.
    ///
    /// Without a new image name the existing image is kept.
    pub fn apply_to(self, existing: &Recipe) -> Result<Recipe, DraftError> {
        self.validate()?;
        let image_name = self
            .image_name
            .unwrap_or_else(|| existing.image_name.clone());
        Ok(Recipe {
            id: existing.id,
            description: self.description,
            title: self.title,
            headline: self.headline,
            ingredients: self.ingredients,
            instructions: self.instructions,
            image_name,
        }
        .without_blank_entries())
    }

    /// Starts an edit from an existing recipe's values.
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            headline: recipe.headline.clone(),
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone(),
            image_name: None,
        }
    }

    fn validate(&self) -> Result<(), DraftError> {
        if is_blank(&self.title) {
            return Err(DraftError::EmptyTitle);
        }
        if self.instructions.iter().all(|s| is_blank(s)) {
            return Err(DraftError::NoInstructions);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tea_draft() -> RecipeDraft {
        RecipeDraft {
            title: "Tea".into(),
            description: "A cup of tea.".into(),
            headline: "Breakfast".into(),
            ingredients: vec!["Water".into(), String::new()],
            instructions: vec!["Boil water".into(), String::new(), "Steep".into()],
            image_name: None,
        }
    }

    #[test]
    fn build_filters_blank_entries() {
        let recipe = tea_draft().build().unwrap();

        assert_eq!(recipe.title, "Tea");
        assert_eq!(recipe.ingredients, ["Water"]);
        assert_eq!(recipe.instructions, ["Boil water", "Steep"]);
        assert_eq!(recipe.image_name, "");
    }

    #[test]
    fn build_rejects_blank_title() {
        let mut draft = tea_draft();
        draft.title = "  ".into();

        assert_eq!(draft.build().unwrap_err(), DraftError::EmptyTitle);
    }

    #[test]
    fn build_rejects_missing_steps() {
        let mut draft = tea_draft();
        draft.instructions = vec![String::new(), " ".into()];

        assert_eq!(draft.build().unwrap_err(), DraftError::NoInstructions);
    }

    #[test]
    fn apply_keeps_id_and_image_when_none_supplied() {
        let mut original = tea_draft().build().unwrap();
        original.image_name = "pizza".into();

        let mut draft = RecipeDraft::from_recipe(&original);
        draft.title = "Green Tea".into();
        let edited = draft.apply_to(&original).unwrap();

        assert_eq!(edited.id, original.id);
        assert_eq!(edited.title, "Green Tea");
        assert_eq!(edited.image_name, "pizza");
    }

    #[test]
    fn apply_replaces_image_when_supplied() {
        let original = tea_draft().build().unwrap();

        let mut draft = RecipeDraft::from_recipe(&original);
        draft.image_name = Some("ABC.png".into());
        let edited = draft.apply_to(&original).unwrap();

        assert_eq!(edited.image_name, "ABC.png");
    }
}
