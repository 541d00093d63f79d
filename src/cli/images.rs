//! Image commands: import, export.

use std::{fs, path::PathBuf};

use clap::Subcommand;

use crate::images::{ImageLookup, ImageStore};

#[derive(Debug, Subcommand)]
pub enum ImageCommand {
    /// Import an image file. Prints the stored image name.
    Import {
        /// Image file in any common format. Stored as PNG.
        path: PathBuf,
    },

    /// Write an image's bytes to a file.
    Export {
        /// Bundled asset name or stored image name.
        name: String,

        /// Destination file.
        #[arg(long)]
        out: PathBuf,
    },
}

pub(super) fn run(command: ImageCommand, images: &ImageStore) -> Result<(), String> {
    match command {
        ImageCommand::Import { path } => {
            let bytes =
                fs::read(&path).map_err(|e| format!("failed to read {}: {e}", path.display()))?;
            let name = images
                .save(&bytes)
                .map_err(|e| format!("failed to import {}: {e}", path.display()))?;
            println!("{name}");
            Ok(())
        }
        ImageCommand::Export { name, out } => {
            let (bytes, source) = match images.resolve(&name) {
                ImageLookup::Bundled(bytes) => (bytes, "bundle"),
                ImageLookup::Saved(bytes) => (bytes, "image directory"),
                ImageLookup::NotFound => return Err(format!("no image named '{name}'")),
            };
            fs::write(&out, &bytes)
                .map_err(|e| format!("failed to write {}: {e}", out.display()))?;
            eprintln!("Exported {name} from {source} → {}", out.display());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    use crate::images::MemoryBundle;

    #[test]
    fn export_bundled_asset() {
        let dir = TempDir::new().unwrap();
        let images = ImageStore::new(
            MemoryBundle::default().with("pizza", b"bundled"),
            dir.path().join("images"),
        );
        let out = dir.path().join("pizza.png");

        run(
            ImageCommand::Export {
                name: "pizza".into(),
                out: out.clone(),
            },
            &images,
        )
        .unwrap();

        assert_eq!(fs::read(out).unwrap(), b"bundled");
    }

    #[test]
    fn export_unknown_fails() {
        let dir = TempDir::new().unwrap();
        let images = ImageStore::new(MemoryBundle::default(), dir.path().join("images"));

        let err = run(
            ImageCommand::Export {
                name: "nothing".into(),
                out: dir.path().join("out.png"),
            },
            &images,
        )
        .unwrap_err();
        assert!(err.contains("no image named"));
    }

    #[test]
    fn import_garbage_fails() {
        let dir = TempDir::new().unwrap();
        let images = ImageStore::new(MemoryBundle::default(), dir.path().join("images"));
        let path = dir.path().join("junk.png");
        fs::write(&path, b"junk").unwrap();

        let err = run(ImageCommand::Import { path }, &images).unwrap_err();
        assert!(err.starts_with("failed to import"));
    }
}
