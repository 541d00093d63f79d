//! Recipebook configuration.
//!
//! Loaded from `~/.recipebook/config.toml` (or `--config`). Every key is
//! optional; a missing default config file means all defaults.
//!
//! ```toml
//! data-dir = "/home/me/.recipebook"
//! assets-dir = "/usr/share/recipebook/assets"
//! images-dir = "/home/me/Pictures/recipes"
//! log = "recipebook=debug"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Recipebook configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Config {
    /// Where the database lives. Defaults to `~/.recipebook`.
    pub data_dir: Option<PathBuf>,

    /// Read-only bundled images. Defaults to `<data-dir>/assets`.
    pub assets_dir: Option<PathBuf>,

    /// Imported images. Defaults to `<data-dir>/images`.
    pub images_dir: Option<PathBuf>,

    /// Log filter directive, e.g. `info` or `recipebook=debug`.
    /// `RUST_LOG` takes precedence.
    pub log: Option<String>,
}

impl Config {
    /// Load config from `explicit`, or from the default path.
    ///
    /// A missing explicit file is an error; a missing default file is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self, String> {
        let (path, required) = match explicit {
            Some(p) => (p.to_path_buf(), true),
            None => match Self::path() {
                Some(p) => (p, false),
                None => return Ok(Self::default()),
            },
        };

        let contents = match fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound && !required => {
                return Ok(Self::default());
            }
            Err(e) => return Err(format!("failed to read {}: {e}", path.display())),
        };

        toml::from_str(&contents).map_err(|e| format!("invalid config at {}: {e}", path.display()))
    }

    /// The default config file path: `~/.recipebook/config.toml`.
    pub fn path() -> Option<PathBuf> {
        default_home().map(|h| h.join("config.toml"))
    }

    pub fn data_dir(&self) -> Result<PathBuf, String> {
        self.data_dir
            .clone()
            .or_else(default_home)
            .ok_or_else(|| "could not determine home directory; set data-dir".to_string())
    }

    /// The `SQLite` file holding the recipe collection.
    pub fn database_path(&self) -> Result<PathBuf, String> {
        Ok(self.data_dir()?.join("recipebook.sqlite"))
    }

    pub fn assets_dir(&self) -> Result<PathBuf, String> {
        match &self.assets_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(self.data_dir()?.join("assets")),
        }
    }

    pub fn images_dir(&self) -> Result<PathBuf, String> {
        match &self.images_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(self.data_dir()?.join("images")),
        }
    }
}

fn default_home() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".recipebook"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn parses_kebab_case_keys() {
        let config: Config = toml::from_str(
            r#"
            data-dir = "/data"
            images-dir = "/pics"
            log = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.data_dir, Some(PathBuf::from("/data")));
        assert_eq!(config.images_dir().unwrap(), PathBuf::from("/pics"));
        assert_eq!(config.assets_dir().unwrap(), PathBuf::from("/data/assets"));
        assert_eq!(
            config.database_path().unwrap(),
            PathBuf::from("/data/recipebook.sqlite")
        );
        assert_eq!(config.log.as_deref(), Some("debug"));
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<Config>("colour = \"blue\"").is_err());
    }

    #[test]
    fn explicit_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let err = Config::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.contains("failed to read"));
    }

    #[test]
    fn explicit_file_is_loaded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "data-dir = \"/srv/recipes\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.data_dir().unwrap(), PathBuf::from("/srv/recipes"));
    }

    #[test]
    fn invalid_file_is_reported_with_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "data-dir = [").unwrap();

        let err = Config::load(Some(&path)).unwrap_err();
        assert!(err.starts_with("invalid config at"));
    }
}
