// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with no presentation dependencies.
//!
//! # Modules
//!
//! - [`image`]: Image identifiers and decoded pixel data
//!   ([`ImageId`](image::ImageId), [`DecodedImage`](image::DecodedImage),
//!   [`RawImage`](image::RawImage))
//! - [`viewport`]: Drawing surfaces and display configuration
//!   ([`SurfaceId`](viewport::SurfaceId), [`Viewport`](viewport::Viewport))

pub mod image;
pub mod viewport;

pub use image::{DecodedImage, ImageId, PixelSamples, Photometric, RawImage, WindowLevel};
pub use viewport::{SurfaceId, SurfaceSize, Translation, Viewport};
