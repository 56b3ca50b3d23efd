// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`decoding`]: Turning a DICOM file into a [`DecodedImage`](crate::domain::DecodedImage)
//! - [`loading`]: File registration and scheme-specific image loaders
//! - [`rendering`]: Surfaces, image resolution, viewport derivation and drawing
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no dicom-rs types)
//! - Loaders and parsers are `Send + Sync`; they run on tokio's blocking pool
//! - Image resolution returns a boxed future so iced can await it in a `Task`

pub mod decoding;
pub mod loading;
pub mod rendering;

pub use decoding::DicomParser;
pub use loading::{FileRegistry, ImageLoader};
pub use rendering::{ImageFuture, RenderingEngine};
