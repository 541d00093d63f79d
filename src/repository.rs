//! The recipe repository: single source of truth for the catalog.
//!
//! The whole collection lives in memory and is written back to the store
//! as one JSON array under [`RECIPES_KEY`] after every mutation. There is
//! no incremental write; every change re-serializes everything.

mod events;

use std::collections::HashSet;

use jiff::Timestamp;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::model::{Recipe, seed_recipes};
use crate::storage::{KeyValueStore, StorageError};

pub use events::{LogObserver, RecipeEvent, RecipeObserver};

/// The key the serialized collection is stored under.
pub const RECIPES_KEY: &str = "recipes";

/// Writing the collection back to the store failed.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("failed to encode recipes: {0}")]
    Encode(serde_json::Error),

    #[error("failed to write recipes: {0}")]
    Store(StorageError),
}

/// Errors returned by repository mutations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("a recipe with id {0} already exists")]
    DuplicateId(Uuid),

    /// The in-memory change was applied but not saved.
    #[error("changes may not survive a restart: {0}")]
    Persist(#[from] PersistError),
}

/// Owns the recipe collection and keeps the store in sync with it.
pub struct RecipeRepository<S: KeyValueStore> {
    store: S,
    recipes: Vec<Recipe>,
    observers: Vec<Box<dyn RecipeObserver>>,
}

impl<S: KeyValueStore> RecipeRepository<S> {
    /// Loads the collection from `store`.
    ///
    /// A missing or undecodable blob is replaced by the seed recipes, which
    /// are written back immediately. Only a failure to read the store is an
    /// error.
    pub fn load(store: S) -> Result<Self, StorageError> {
        let recipes = match store.get(RECIPES_KEY)? {
            Some(blob) => match serde_json::from_slice::<Vec<Recipe>>(&blob) {
                Ok(recipes) => {
                    debug!(count = recipes.len(), "loaded recipes");
                    Some(normalize(recipes))
                }
                Err(e) => {
                    warn!(error = %e, "stored recipes are corrupt; restoring defaults");
                    None
                }
            },
            None => {
                info!("no stored recipes; starting from defaults");
                None
            }
        };

        let seeded = recipes.is_none();
        let repo = Self {
            store,
            recipes: recipes.unwrap_or_else(seed_recipes),
            observers: Vec::new(),
        };

        if seeded && let Err(e) = repo.persist() {
            warn!(error = %e, "failed to save default recipes");
        }

        Ok(repo)
    }

    /// Registers an observer for every subsequent mutation.
    pub fn subscribe(&mut self, observer: Box<dyn RecipeObserver>) {
        self.observers.push(observer);
    }

    /// The current collection, in stored order.
    pub fn list(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Looks up a recipe by id.
    pub fn get(&self, id: Uuid) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Recipes whose title or ingredients contain `query`, ignoring case.
    ///
    /// An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Recipe> {
        if query.is_empty() {
            return self.recipes.iter().collect();
        }
        let needle = query.to_lowercase();
        self.recipes
            .iter()
            .filter(|r| {
                r.title.to_lowercase().contains(&needle)
                    || r.ingredients.join(", ").to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// When the collection was last written to the store.
    pub fn last_saved(&self) -> Result<Option<Timestamp>, StorageError> {
        self.store.updated_at(RECIPES_KEY)
    }

    /// Appends a recipe and saves.
    ///
    /// If saving fails the recipe stays in the collection and
    /// [`RepositoryError::Persist`] is returned.
    pub fn add(&mut self, recipe: Recipe) -> Result<(), RepositoryError> {
        if self.get(recipe.id).is_some() {
            return Err(RepositoryError::DuplicateId(recipe.id));
        }
        let id = recipe.id;
        self.recipes.push(recipe.without_blank_entries());
        self.commit(|persisted| RecipeEvent::Added { id, persisted })
    }

    /// Replaces the recipe with the same id, keeping its position, and saves.
    ///
    /// Does nothing when no recipe has that id.
    pub fn update(&mut self, recipe: Recipe) -> Result<(), RepositoryError> {
        let id = recipe.id;
        let Some(slot) = self.recipes.iter_mut().find(|r| r.id == id) else {
            debug!(%id, "update of unknown recipe ignored");
            return Ok(());
        };
        *slot = recipe.without_blank_entries();
        self.commit(|persisted| RecipeEvent::Updated { id, persisted })
    }

    /// Removes every recipe with the given recipe's id and saves.
    ///
    /// Does nothing when no recipe has that id.
    pub fn delete(&mut self, recipe: &Recipe) -> Result<(), RepositoryError> {
        let id = recipe.id;
        let before = self.recipes.len();
        self.recipes.retain(|r| r.id != id);
        if self.recipes.len() == before {
            debug!(%id, "delete of unknown recipe ignored");
            return Ok(());
        }
        self.commit(|persisted| RecipeEvent::Deleted { id, persisted })
    }

    /// Saves the collection, then tells observers what changed.
    fn commit(&self, event: impl FnOnce(bool) -> RecipeEvent) -> Result<(), RepositoryError> {
        let result = self.persist();
        if let Err(e) = &result {
            warn!(error = %e, "failed to save recipes");
        }
        let event = event(result.is_ok());
        for observer in &self.observers {
            observer.collection_changed(&event, &self.recipes);
        }
        result.map_err(RepositoryError::from)
    }

    /// Overwrites the stored blob with the whole collection.
    pub(crate) fn persist(&self) -> Result<(), PersistError> {
        let blob = serde_json::to_vec(&self.recipes).map_err(PersistError::Encode)?;
        self.store
            .put(RECIPES_KEY, &blob)
            .map_err(PersistError::Store)
    }
}

/// Drops blank entries and every record whose id was already seen.
///
/// The first record with a given id wins.
fn normalize(recipes: Vec<Recipe>) -> Vec<Recipe> {
    let mut seen = HashSet::new();
    recipes
        .into_iter()
        .filter(|r| {
            let first = seen.insert(r.id);
            if !first {
                warn!(id = %r.id, title = %r.title, "dropping stored recipe with duplicate id");
            }
            first
        })
        .map(Recipe::without_blank_entries)
        .collect()
}
