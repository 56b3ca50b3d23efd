// SPDX-License-Identifier: MPL-2.0
//! Image loader for files registered in the [`FileManager`].

use super::file_manager::{FileManager, SCHEME};
use crate::application::port::{DicomParser, ImageLoader};
use crate::domain::{DecodedImage, ImageId};
use crate::error::{Error, Result};
use std::fmt;
use std::sync::Arc;

/// External capabilities the loader needs, set once at bootstrap.
#[derive(Default, Clone)]
pub struct Externals {
    pub parser: Option<Arc<dyn DicomParser>>,
    pub files: Option<Arc<FileManager>>,
}

/// Loads `dicomfile:` ids by reading the registered file and decoding it.
#[derive(Default, Clone)]
pub struct DicomFileLoader {
    pub external: Externals,
}

impl fmt::Debug for DicomFileLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DicomFileLoader")
            .field("parser_linked", &self.external.parser.is_some())
            .field("files_linked", &self.external.files.is_some())
            .finish()
    }
}

impl ImageLoader for DicomFileLoader {
    fn scheme(&self) -> &'static str {
        SCHEME
    }

    fn load(&self, id: &ImageId) -> Result<DecodedImage> {
        let (Some(parser), Some(files)) = (&self.external.parser, &self.external.files) else {
            return Err(Error::LoaderNotLinked(SCHEME.to_string()));
        };
        let path = files.resolve(id)?;
        parser.parse(&path, id.clone())
    }
}
