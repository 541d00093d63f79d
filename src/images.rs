//! Image store: resolves image names to bytes and imports new images.
//!
//! Names live in two namespaces, checked in order:
//!
//! ```text
//! <assets>/   read-only bundle (e.g. `pizza` → `pizza.png`)
//! <images>/   user imports, `<UUID>.png`
//! ```
//!
//! Imports are always re-encoded as PNG, so the writable directory holds a
//! single format regardless of what was supplied.

mod bundle;

use std::{
    ffi::OsStr,
    fs,
    io::{self, Cursor},
    path::{Component, Path, PathBuf},
};

use image::ImageFormat;
use tracing::{debug, info, warn};
use uuid::Uuid;

pub use bundle::{AssetBundle, DirectoryBundle};
#[cfg(test)]
pub use bundle::MemoryBundle;

/// Errors from importing an image.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("not a readable image: {0}")]
    Decode(image::ImageError),

    #[error("failed to encode image: {0}")]
    Encode(image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Where an image name resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageLookup {
    /// Found in the read-only bundle.
    Bundled(Vec<u8>),

    /// Found in the writable image directory.
    Saved(Vec<u8>),

    /// No image by that name. Callers show a placeholder.
    NotFound,
}

/// Resolves and saves recipe images.
///
/// Constructed once at startup and passed by reference.
pub struct ImageStore {
    bundle: Box<dyn AssetBundle>,
    dir: PathBuf,
}

impl ImageStore {
    /// Creates a store over `bundle` that saves imports into `dir`.
    ///
    /// `dir` is created on the first save.
    pub fn new(bundle: impl AssetBundle + 'static, dir: impl Into<PathBuf>) -> Self {
        Self {
            bundle: Box::new(bundle),
            dir: dir.into(),
        }
    }

    /// The writable image directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolves `name`: bundle first, then the image directory.
    ///
    /// Empty names and anything that isn't a plain file name resolve to
    /// [`ImageLookup::NotFound`].
    pub fn resolve(&self, name: &str) -> ImageLookup {
        if !is_plain_name(name) {
            if !name.is_empty() {
                debug!(name, "rejected image name");
            }
            return ImageLookup::NotFound;
        }

        match self.bundle.read(name) {
            Ok(Some(bytes)) => return ImageLookup::Bundled(bytes),
            Ok(None) => {}
            Err(e) => warn!(name, error = %e, "failed to read bundled image"),
        }

        match bundle::read_file(&self.dir.join(name)) {
            Ok(Some(bytes)) => ImageLookup::Saved(bytes),
            Ok(None) => ImageLookup::NotFound,
            Err(e) => {
                warn!(name, error = %e, "failed to read saved image");
                ImageLookup::NotFound
            }
        }
    }

    /// Decodes `bytes`, re-encodes them as PNG under a fresh name, and
    /// returns that name.
    pub fn save(&self, bytes: &[u8]) -> Result<String, ImageError> {
        let decoded = image::load_from_memory(bytes).map_err(ImageError::Decode)?;

        let mut png = Cursor::new(Vec::new());
        decoded
            .write_to(&mut png, ImageFormat::Png)
            .map_err(ImageError::Encode)?;

        fs::create_dir_all(&self.dir)?;
        let filename = format!("{}.png", Uuid::new_v4().to_string().to_uppercase());
        write_atomic(&self.dir.join(&filename), &png.into_inner())?;

        info!(
            filename = %filename,
            width = decoded.width(),
            height = decoded.height(),
            "saved image"
        );
        Ok(filename)
    }
}

/// Writes to `<path>.tmp`, then renames it over `path`.
///
/// The partial file is removed if the write fails.
fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    if let Err(e) = fs::write(&tmp, bytes).and_then(|()| fs::rename(&tmp, path)) {
        if let Err(cleanup) = fs::remove_file(&tmp) {
            debug!(path = %tmp.display(), error = %cleanup, "failed to remove partial image");
        }
        return Err(e);
    }
    Ok(())
}

/// True for a single, normal path component: no separators, `.` or `..`.
fn is_plain_name(name: &str) -> bool {
    if name.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(c)), None) if c == OsStr::new(name)
    )
}
