//! Change notification for the recipe collection.

use tracing::info;
use uuid::Uuid;

use crate::model::Recipe;

/// A mutation that has been applied to the in-memory collection.
///
/// `persisted` is false when the write to the store failed; the change is
/// visible now but may not survive a restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeEvent {
    Added { id: Uuid, persisted: bool },
    Updated { id: Uuid, persisted: bool },
    Deleted { id: Uuid, persisted: bool },
}

impl RecipeEvent {
    pub fn id(&self) -> Uuid {
        match self {
            Self::Added { id, .. } | Self::Updated { id, .. } | Self::Deleted { id, .. } => *id,
        }
    }

    pub fn persisted(&self) -> bool {
        match self {
            Self::Added { persisted, .. }
            | Self::Updated { persisted, .. }
            | Self::Deleted { persisted, .. } => *persisted,
        }
    }

    fn verb(&self) -> &'static str {
        match self {
            Self::Added { .. } => "added",
            Self::Updated { .. } => "updated",
            Self::Deleted { .. } => "deleted",
        }
    }
}

/// Something that re-reads the collection after it changes.
///
/// Observers are called once per effective mutation, after the mutation is
/// complete, with the full post-mutation collection.
pub trait RecipeObserver {
    fn collection_changed(&self, event: &RecipeEvent, recipes: &[Recipe]);
}

/// Observer that records every change in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl RecipeObserver for LogObserver {
    fn collection_changed(&self, event: &RecipeEvent, recipes: &[Recipe]) {
        info!(
            id = %event.id(),
            persisted = event.persisted(),
            total = recipes.len(),
            "recipe {}",
            event.verb()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_cover_every_variant() {
        let id = Uuid::new_v4();
        let events = [
            RecipeEvent::Added { id, persisted: true },
            RecipeEvent::Updated { id, persisted: false },
            RecipeEvent::Deleted { id, persisted: true },
        ];

        for event in &events {
            assert_eq!(event.id(), id);
        }
        assert_eq!(
            events.iter().map(RecipeEvent::persisted).collect::<Vec<_>>(),
            [true, false, true]
        );
    }

    #[test]
    fn log_observer_does_not_panic() {
        LogObserver.collection_changed(
            &RecipeEvent::Deleted {
                id: Uuid::new_v4(),
                persisted: true,
            },
            &[],
        );
    }
}
