//! CLI interface for Recipebook.
//!
//! Each subcommand is non-interactive: arguments in, plain text out.
//! Recipes are addressed by full UUID or an unambiguous id prefix.

mod format;
mod images;
mod recipe;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use uuid::Uuid;

use crate::images::ImageStore;
use crate::model::{Headline, Recipe};
use crate::repository::{RecipeRepository, RepositoryError};
use crate::storage::KeyValueStore;

use images::ImageCommand;

/// Recipebook — your recipes, on the command line.
#[derive(Debug, Parser)]
#[command(name = "recipebook", after_long_help = EXAMPLES_HELP)]
pub struct Cli {
    /// Config file (default: `~/.recipebook/config.toml`).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

const EXAMPLES_HELP: &str = r#"Examples:
  recipebook list --search basil
  recipebook add --title "Tea" --headline breakfast --step "Boil water" --step "Steep"
  recipebook edit a3b --step "Boil water" --step "Steep for 4 minutes"
  recipebook add --title "Toast" --step "Toast the bread" --image ~/toast.jpg
  recipebook image export pizza --out pizza.png"#;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List recipes, optionally filtered by title or ingredient.
    List {
        /// Case-insensitive text to look for in titles and ingredients.
        #[arg(long)]
        search: Option<String>,
    },

    /// Show one recipe in full.
    Show {
        /// Recipe ID: full UUID or unambiguous prefix.
        id: String,
    },

    /// Add a recipe. Prints the new recipe's ID.
    Add {
        #[arg(long)]
        title: String,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long, value_enum, default_value_t = HeadlineArg::Lunch)]
        headline: HeadlineArg,

        /// An ingredient. Repeat for each one.
        #[arg(long = "ingredient")]
        ingredients: Vec<String>,

        /// An instruction step. Repeat in order.
        #[arg(long = "step")]
        steps: Vec<String>,

        /// Image file to attach (any common format; stored as PNG).
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Edit a recipe. Only the given fields change.
    ///
    /// `--ingredient` and `--step` replace the whole list when given.
    /// `--clear-ingredients` empties the ingredient list.
    Edit {
        /// Recipe ID: full UUID or unambiguous prefix.
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long, value_enum)]
        headline: Option<HeadlineArg>,

        #[arg(long = "ingredient", conflicts_with = "clear_ingredients")]
        ingredients: Vec<String>,

        /// Remove every ingredient.
        #[arg(long)]
        clear_ingredients: bool,

        #[arg(long = "step")]
        steps: Vec<String>,

        /// Replacement image. If it can't be imported the old image is kept.
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Delete a recipe.
    Delete {
        /// Recipe ID: full UUID or unambiguous prefix.
        id: String,
    },

    /// Import or export images.
    Image {
        #[command(subcommand)]
        command: ImageCommand,
    },

    /// Show where data lives and when it was last saved.
    Info,
}

/// CLI-facing meal category, mapped to the domain `Headline`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HeadlineArg {
    Breakfast,
    Lunch,
    Dinner,
}

impl HeadlineArg {
    fn to_domain(self) -> Headline {
        match self {
            Self::Breakfast => Headline::Breakfast,
            Self::Lunch => Headline::Lunch,
            Self::Dinner => Headline::Dinner,
        }
    }
}

/// Paths shown by `recipebook info`.
pub struct Locations {
    pub database: PathBuf,
    pub assets: PathBuf,
}

/// Run a parsed command, returning an error message on failure.
pub fn run<S: KeyValueStore>(
    command: Command,
    repo: &mut RecipeRepository<S>,
    images: &ImageStore,
    locations: &Locations,
) -> Result<(), String> {
    match command {
        Command::List { search } => {
            recipe::cmd_list(repo, search.as_deref());
            Ok(())
        }
        Command::Show { id } => {
            let recipe = resolve_recipe(repo, &id)?;
            recipe::cmd_show(&recipe, images);
            Ok(())
        }
        Command::Add {
            title,
            description,
            headline,
            ingredients,
            steps,
            image,
        } => recipe::cmd_add(
            repo,
            images,
            recipe::AddArgs {
                title,
                description,
                headline: headline.to_domain(),
                ingredients,
                steps,
                image,
            },
        ),
        Command::Edit {
            id,
            title,
            description,
            headline,
            ingredients,
            clear_ingredients,
            steps,
            image,
        } => {
            let existing = resolve_recipe(repo, &id)?;
            recipe::cmd_edit(
                repo,
                images,
                &existing,
                recipe::EditArgs {
                    title,
                    description,
                    headline: headline.map(HeadlineArg::to_domain),
                    ingredients,
                    clear_ingredients,
                    steps,
                    image,
                },
            )
        }
        Command::Delete { id } => {
            let recipe = resolve_recipe(repo, &id)?;
            recipe::cmd_delete(repo, &recipe)
        }
        Command::Image { command } => images::run(command, images),
        Command::Info => recipe::cmd_info(repo, images, locations),
    }
}

/// Turn a repository result into CLI output.
///
/// A failed save is a warning, not an error: the change was applied and
/// the user is told it may not survive.
fn report(result: Result<(), RepositoryError>) -> Result<(), String> {
    match result {
        Ok(()) => Ok(()),
        Err(e @ RepositoryError::Persist(_)) => {
            eprintln!("Warning: {e}");
            Ok(())
        }
        Err(e) => Err(e.to_string()),
    }
}

/// Resolve a recipe reference (full UUID or unambiguous prefix) to a recipe.
fn resolve_recipe<S: KeyValueStore>(
    repo: &RecipeRepository<S>,
    reference: &str,
) -> Result<Recipe, String> {
    // Try full UUID first.
    if let Ok(id) = reference.parse::<Uuid>() {
        return repo
            .get(id)
            .cloned()
            .ok_or_else(|| format!("no recipe with id {id}"));
    }

    let reference = reference.to_lowercase();
    let matches: Vec<&Recipe> = repo
        .list()
        .iter()
        .filter(|r| r.id.to_string().starts_with(&reference))
        .collect();

    match matches.as_slice() {
        [] => Err(format!("no recipe matching '{reference}'")),
        [only] => Ok((*only).clone()),
        many => {
            let ids: Vec<String> = many.iter().map(|r| r.short_id()).collect();
            Err(format!(
                "'{reference}' is ambiguous: matches {} recipes: {}",
                many.len(),
                ids.join(", ")
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::repository::PersistError;
    use crate::storage::{MemoryStore, StorageError};

    #[test]
    fn resolves_full_id_and_prefix() {
        let store = MemoryStore::new();
        let repo = RecipeRepository::load(&store).unwrap();
        let target = repo.list()[2].clone();

        let by_full = resolve_recipe(&repo, &target.id.to_string()).unwrap();
        assert_eq!(by_full.id, target.id);

        let upper_prefix = target.id.to_string()[..8].to_uppercase();
        let by_prefix = resolve_recipe(&repo, &upper_prefix).unwrap();
        assert_eq!(by_prefix.id, target.id);
    }

    #[test]
    fn empty_prefix_is_ambiguous() {
        let store = MemoryStore::new();
        let repo = RecipeRepository::load(&store).unwrap();

        let err = resolve_recipe(&repo, "").unwrap_err();
        assert!(err.contains("ambiguous"));
    }

    #[test]
    fn unknown_reference_fails() {
        let store = MemoryStore::new();
        let repo = RecipeRepository::load(&store).unwrap();

        assert!(resolve_recipe(&repo, &Uuid::new_v4().to_string()).is_err());
        assert!(resolve_recipe(&repo, "zzzz").is_err());
    }

    #[test]
    fn persist_failure_is_only_a_warning() {
        let persist = RepositoryError::Persist(PersistError::Store(StorageError::Corrupt(
            "gone".into(),
        )));
        assert!(report(Err(persist)).is_ok());

        let duplicate = RepositoryError::DuplicateId(Uuid::new_v4());
        assert!(report(Err(duplicate)).is_err());
    }

    #[test]
    fn parses_add_command() {
        let cli = Cli::try_parse_from([
            "recipebook",
            "add",
            "--title",
            "Tea",
            "--headline",
            "breakfast",
            "--step",
            "Boil water",
            "--step",
            "Steep",
        ])
        .unwrap();

        let Command::Add {
            title,
            headline,
            steps,
            ..
        } = cli.command
        else {
            panic!("expected add");
        };
        assert_eq!(title, "Tea");
        assert_eq!(headline, HeadlineArg::Breakfast);
        assert_eq!(steps, ["Boil water", "Steep"]);
    }

    #[test]
    fn clear_ingredients_conflicts_with_ingredient() {
        let cleared = Cli::try_parse_from(["recipebook", "edit", "abc", "--clear-ingredients"]).unwrap();
        let Command::Edit {
            clear_ingredients,
            ingredients,
            ..
        } = cleared.command
        else {
            panic!("expected edit");
        };
        assert!(clear_ingredients);
        assert!(ingredients.is_empty());

        assert!(
            Cli::try_parse_from([
                "recipebook",
                "edit",
                "abc",
                "--clear-ingredients",
                "--ingredient",
                "Salt",
            ])
            .is_err()
        );
    }
}
