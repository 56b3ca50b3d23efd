// SPDX-License-Identifier: MPL-2.0
//! Default viewport derivation.

use crate::domain::{DecodedImage, SurfaceSize, Translation, Viewport};

/// Scale used when the surface has no usable size yet.
const FALLBACK_SCALE: f32 = 1.0;

/// Builds the viewport that fits `image` inside `surface`, centered, with
/// the image's own window and inversion.
#[must_use]
pub fn default_viewport(surface: SurfaceSize, image: &DecodedImage) -> Viewport {
    let pixel_aspect = image.pixel_aspect() as f32;

    Viewport {
        scale: fit_scale(surface, image.columns, image.rows, pixel_aspect),
        translation: Translation::default(),
        voi: image.window,
        invert: image.invert(),
        pixel_replication: false,
        rotation: 0,
        h_flip: false,
        v_flip: false,
        pixel_aspect,
    }
}

/// Largest scale at which the image (with non-square pixels stretched
/// vertically) still fits the surface.
fn fit_scale(surface: SurfaceSize, columns: u32, rows: u32, pixel_aspect: f32) -> f32 {
    if surface.is_empty() || columns == 0 || rows == 0 {
        return FALLBACK_SCALE;
    }
    let horizontal = surface.width / columns as f32;
    let vertical = surface.height / (rows as f32 * pixel_aspect);
    horizontal.min(vertical)
}
