// SPDX-License-Identifier: MPL-2.0
//! Rendering: enabled surfaces, image resolution, viewports and drawing.
//!
//! - [`engine`]: the [`Engine`] implementing the rendering port
//! - [`cache`]: LRU cache of decoded images
//! - [`viewport`]: default viewport derivation
//! - [`lut`]: linear VOI lookup
//! - [`raster`]: decoded image to RGBA frame

pub mod cache;
pub mod engine;
pub mod lut;
pub mod raster;
pub mod viewport;

pub use engine::{DrawnImage, Engine, Surface};
