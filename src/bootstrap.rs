// SPDX-License-Identifier: MPL-2.0
//! Start-up wiring of the image loading stack.
//!
//! [`init`] is the only way the application obtains an [`Engine`], so the
//! `dicomfile` loader is always linked before the first drop can be handled.

use crate::dicom::DicomRsParser;
use crate::loader::{DicomFileLoader, Externals, FileManager};
use crate::render::Engine;
use std::sync::Arc;

/// Links the DICOM parser and the file table into the file loader and
/// registers it with a new engine.
#[must_use]
pub fn init(files: Arc<FileManager>, cache_capacity: usize) -> Engine {
    let mut engine = Engine::new(cache_capacity);
    link(&mut engine, files);
    engine
}

/// Registers a freshly linked file loader on `engine`.
pub fn link(engine: &mut Engine, files: Arc<FileManager>) {
    let loader = DicomFileLoader {
        external: Externals {
            parser: Some(Arc::new(DicomRsParser)),
            files: Some(files),
        },
    };
    let scheme = crate::loader::SCHEME;
    if engine.register_image_loader(Arc::new(loader)).is_some() {
        log::debug!("replaced image loader for scheme {scheme}");
    }
    log::debug!("image loader registered for scheme {scheme}");
}
