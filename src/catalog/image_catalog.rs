//! # Image Catalog
//!
//! The fixed list of servable source files, built once at startup.
//!
//! [`ImageCatalog::initialize`] walks a root directory recursively and keeps
//! every regular file admitted by an [`ExtensionPolicy`]. The result is
//! immutable: requests share it behind an `Arc` and only ever read it, so no
//! locking is involved apart from whatever the injected [`RandomSource`] does.
//!
//! # Example
//! ```rust,no_run
//! use std::sync::Arc;
//! use randpic_web::catalog::{
//!     extension::ExtensionPolicy, image_catalog::ImageCatalog, random::SeededRandom,
//! };
//!
//! let catalog = ImageCatalog::initialize(
//!     "./images",
//!     &ExtensionPolicy::default(),
//!     Arc::new(SeededRandom::from_time()),
//! )
//! .expect("catalog");
//! println!("serving {} images, e.g. {:?}", catalog.len(), catalog.pick_random());
//! ```

use std::{
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
};

use tracing::{debug, info};
use walkdir::WalkDir;

use super::{extension::ExtensionPolicy, random::RandomSource};
use crate::error::pipeline::PipelineError;

/// Immutable, non-empty list of eligible image paths.
#[derive(Clone)]
pub struct ImageCatalog {
    entries: Vec<PathBuf>,
    random: Arc<dyn RandomSource>,
}

impl fmt::Debug for ImageCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageCatalog")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

impl ImageCatalog {
    /// Walks `root` and collects every file `policy` admits.
    ///
    /// Entries are kept in file-name order within each directory.
    ///
    /// # Errors
    /// - [`PipelineError::CatalogInitFailure`] if any part of the walk fails
    ///   (including a missing root).
    /// - [`PipelineError::CatalogEmpty`] if nothing matched.
    pub fn initialize<P: AsRef<Path>>(
        root: P,
        policy: &ExtensionPolicy,
        random: Arc<dyn RandomSource>,
    ) -> Result<Self, PipelineError> {
        let root = root.as_ref();
        let mut entries = Vec::new();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|source| PipelineError::CatalogInitFailure {
                root: root.to_path_buf(),
                source,
            })?;
            // Symlinks count when they resolve to a regular file.
            let is_file = entry.file_type().is_file()
                || (entry.path_is_symlink() && entry.path().is_file());
            if is_file && policy.matches(entry.path()) {
                entries.push(entry.into_path());
            }
        }

        if entries.is_empty() {
            return Err(PipelineError::CatalogEmpty {
                root: root.to_path_buf(),
            });
        }

        info!("catalog loaded {} images from {}", entries.len(), root.display());
        Ok(Self { entries, random })
    }

    /// Builds a catalog from an explicit list.
    ///
    /// # Errors
    /// [`PipelineError::CatalogEmpty`] if `entries` is empty.
    pub fn from_entries(
        entries: Vec<PathBuf>,
        random: Arc<dyn RandomSource>,
    ) -> Result<Self, PipelineError> {
        if entries.is_empty() {
            return Err(PipelineError::CatalogEmpty {
                root: PathBuf::new(),
            });
        }
        Ok(Self { entries, random })
    }

    /// Picks one entry uniformly at random, with replacement.
    pub fn pick_random(&self) -> &Path {
        let i = self.random.pick_index(self.entries.len());
        let path = &self.entries[i];
        debug!("picked {}", path.display());
        path
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; construction rejects empty catalogs.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
