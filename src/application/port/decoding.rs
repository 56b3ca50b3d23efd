// SPDX-License-Identifier: MPL-2.0
//! DICOM parsing port definition.

use crate::domain::{DecodedImage, ImageId};
use crate::error::Result;
use std::path::Path;

/// Port for decoding the first frame of a DICOM file.
///
/// This is the capability the file loader needs linked in at bootstrap.
pub trait DicomParser: Send + Sync {
    /// Reads `path` and decodes it into an image tagged with `image_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not DICOM, uses an
    /// unsupported transfer syntax, or has inconsistent pixel attributes.
    fn parse(&self, path: &Path, image_id: ImageId) -> Result<DecodedImage>;
}
