//! Read-only image assets shipped with the catalog.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Extensions tried when a bundled asset is referenced by bare name.
const BUNDLE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// A read-only set of named images.
pub trait AssetBundle {
    /// Returns the bytes of the asset called `name`, if the bundle has one.
    fn read(&self, name: &str) -> io::Result<Option<Vec<u8>>>;
}

/// Assets stored as files in a directory.
///
/// `pizza` resolves to `pizza` itself, then `pizza.png`, `pizza.jpg`,
/// `pizza.jpeg`. A missing directory is an empty bundle.
#[derive(Debug, Clone)]
pub struct DirectoryBundle {
    root: PathBuf,
}

impl DirectoryBundle {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetBundle for DirectoryBundle {
    fn read(&self, name: &str) -> io::Result<Option<Vec<u8>>> {
        if let Some(bytes) = read_file(&self.root.join(name))? {
            return Ok(Some(bytes));
        }
        for ext in BUNDLE_EXTENSIONS {
            if let Some(bytes) = read_file(&self.root.join(format!("{name}.{ext}")))? {
                return Ok(Some(bytes));
            }
        }
        Ok(None)
    }
}

/// Reads a regular file, treating absence as `None`.
pub(super) fn read_file(path: &Path) -> io::Result<Option<Vec<u8>>> {
    if !path.is_file() {
        return Ok(None);
    }
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
pub use memory::MemoryBundle;
