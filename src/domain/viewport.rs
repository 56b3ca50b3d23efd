// SPDX-License-Identifier: MPL-2.0
//! Drawing surfaces and the viewport used to draw an image into one.

use super::image::WindowLevel;
use std::fmt;

/// Identifies a region of the window that can be promoted to a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(&'static str);

impl SurfaceId {
    /// The single drop target of the main window.
    pub const VIEWPORT: SurfaceId = SurfaceId("viewport");
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Logical size of a surface, in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Pan offset in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Translation {
    pub x: f32,
    pub y: f32,
}

/// Camera and display configuration used to draw one image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Surface pixels per image column.
    pub scale: f32,
    pub translation: Translation,
    pub voi: WindowLevel,
    pub invert: bool,
    /// Nearest-neighbour magnification instead of smoothing.
    pub pixel_replication: bool,
    /// Clockwise rotation in degrees (0, 90, 180 or 270).
    pub rotation: u16,
    pub h_flip: bool,
    pub v_flip: bool,
    /// Height/width ratio of one image pixel on screen.
    pub pixel_aspect: f32,
}

impl Viewport {
    /// Displayed size of an image of `columns` x `rows` pixels.
    #[must_use]
    pub fn display_size(&self, columns: u32, rows: u32) -> (f32, f32) {
        let width = columns as f32 * self.scale;
        let height = rows as f32 * self.scale * self.pixel_aspect;
        if self.rotation % 180 == 90 {
            (height, width)
        } else {
            (width, height)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(scale: f32, rotation: u16, pixel_aspect: f32) -> Viewport {
        Viewport {
            scale,
            translation: Translation::default(),
            voi: WindowLevel::new(40.0, 400.0),
            invert: false,
            pixel_replication: false,
            rotation,
            h_flip: false,
            v_flip: false,
            pixel_aspect,
        }
    }

    #[test]
    fn display_size_applies_scale_and_aspect() {
        let (w, h) = viewport(2.0, 0, 0.5).display_size(100, 50);
        assert_eq!((w, h), (200.0, 50.0));
    }

    #[test]
    fn display_size_swaps_axes_for_quarter_turns() {
        let (w, h) = viewport(1.0, 90, 1.0).display_size(300, 100);
        assert_eq!((w, h), (100.0, 300.0));
    }

    #[test]
    fn empty_surface_detection() {
        assert!(SurfaceSize::new(0.0, 10.0).is_empty());
        assert!(!SurfaceSize::new(10.0, 10.0).is_empty());
    }
}
