// SPDX-License-Identifier: MPL-2.0
//! Image loading port definitions.

use crate::domain::{DecodedImage, ImageId};
use crate::error::Result;
use std::path::Path;

/// Port for registering local files so they can be loaded by id later.
pub trait FileRegistry: Send + Sync {
    /// Registers `path` and returns the id a loader resolves it with.
    ///
    /// # Errors
    ///
    /// Implementations may refuse paths they cannot serve.
    fn add(&self, path: &Path) -> Result<ImageId>;
}

/// Port for loaders selected by the scheme of an [`ImageId`].
///
/// Loading is synchronous; the rendering engine moves it off the UI thread.
pub trait ImageLoader: Send + Sync {
    /// Scheme prefix this loader serves (the part of the id before `:`).
    fn scheme(&self) -> &'static str;

    /// Loads and decodes the image behind `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is unknown or decoding fails.
    fn load(&self, id: &ImageId) -> Result<DecodedImage>;
}
