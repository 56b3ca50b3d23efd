// SPDX-License-Identifier: MPL-2.0
//! Turns a decoded image into an RGBA frame using a viewport's VOI settings.

use super::lut::VoiLut;
use crate::domain::{DecodedImage, PixelSamples, RawImage, Viewport};
use image_rs::{DynamicImage, GrayImage, RgbImage};

/// Rasterizes the image at its native resolution.
///
/// Display scaling is left to the widget; rotation and flips are baked in.
#[must_use]
pub fn rasterize(image: &DecodedImage, viewport: &Viewport) -> RawImage {
    let lut = VoiLut::new(viewport.voi, viewport.invert);

    let dynamic = match &image.samples {
        PixelSamples::Gray(values) => {
            let levels: Vec<u8> = values.iter().map(|&v| lut.apply(v)).collect();
            GrayImage::from_raw(image.columns, image.rows, levels)
                .map(DynamicImage::ImageLuma8)
        }
        PixelSamples::Rgb(samples) => {
            let samples = if viewport.invert {
                samples.iter().map(|&s| 255 - s).collect()
            } else {
                samples.clone()
            };
            RgbImage::from_raw(image.columns, image.rows, samples).map(DynamicImage::ImageRgb8)
        }
    }
    // The decoder guarantees the sample count matches the dimensions.
    .unwrap_or_else(|| DynamicImage::new_luma8(image.columns, image.rows));

    let oriented = orient(dynamic, viewport);
    let rgba = oriented.to_rgba8();
    let (width, height) = rgba.dimensions();
    RawImage::from_rgba(width, height, rgba.into_raw())
}

fn orient(mut img: DynamicImage, viewport: &Viewport) -> DynamicImage {
    img = match viewport.rotation % 360 {
        90 => img.rotate90(),
        180 => img.rotate180(),
        270 => img.rotate270(),
        _ => img,
    };
    if viewport.h_flip {
        img = img.fliph();
    }
    if viewport.v_flip {
        img = img.flipv();
    }
    img
}
