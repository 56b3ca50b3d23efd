// SPDX-License-Identifier: MPL-2.0
//! Table of dropped files, addressed by `dicomfile:<index>` ids.

use crate::application::port::FileRegistry;
use crate::domain::ImageId;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Scheme of ids minted for locally registered files.
pub const SCHEME: &str = "dicomfile";

/// Append-only file table shared between the drop handler and the loader.
///
/// Entries are never removed, so an id stays valid for the whole session.
#[derive(Debug, Default)]
pub struct FileManager {
    files: Mutex<Vec<PathBuf>>,
}

impl FileManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `path` and returns its id.
    pub fn add(&self, path: impl Into<PathBuf>) -> ImageId {
        let mut files = self.files.lock().unwrap_or_else(|e| e.into_inner());
        files.push(path.into());
        ImageId::new(SCHEME, files.len() - 1)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<PathBuf> {
        let files = self.files.lock().unwrap_or_else(|e| e.into_inner());
        files.get(index).cloned()
    }

    /// Resolves a `dicomfile:` id back to its path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidImageId`] for other schemes or non-numeric keys
    /// and [`Error::UnknownImageId`] for indices never handed out.
    pub fn resolve(&self, id: &ImageId) -> Result<PathBuf> {
        if id.scheme() != SCHEME {
            return Err(Error::InvalidImageId(id.to_string()));
        }
        let index: usize = id
            .key()
            .parse()
            .map_err(|_| Error::InvalidImageId(id.to_string()))?;
        self.get(index)
            .ok_or_else(|| Error::UnknownImageId(id.to_string()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FileRegistry for FileManager {
    fn add(&self, path: &Path) -> Result<ImageId> {
        Ok(FileManager::add(self, path))
    }
}
