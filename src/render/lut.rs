// SPDX-License-Identifier: MPL-2.0
//! Linear VOI lookup for mapping modality values to display intensities.

use crate::domain::WindowLevel;

/// Precomputed linear window transform.
///
/// Follows the DICOM linear VOI function: values at or below
/// `c - 0.5 - (w - 1) / 2` map to 0, values above `c - 0.5 + (w - 1) / 2`
/// map to 255.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoiLut {
    lower: f64,
    width: f64,
    invert: bool,
}

impl VoiLut {
    #[must_use]
    pub fn new(window: WindowLevel, invert: bool) -> Self {
        let width = (window.width - 1.0).max(f64::EPSILON);
        Self {
            lower: window.center - 0.5 - width / 2.0,
            width,
            invert,
        }
    }

    /// Maps one modality value to an 8-bit intensity.
    #[must_use]
    pub fn apply(&self, value: f32) -> u8 {
        let normalized = ((f64::from(value) - self.lower) / self.width).clamp(0.0, 1.0);
        let level = (normalized * 255.0).round() as u8;
        if self.invert {
            255 - level
        } else {
            level
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_edges_map_to_black_and_white() {
        let lut = VoiLut::new(WindowLevel::new(40.0, 400.0), false);
        assert_eq!(lut.apply(-1000.0), 0);
        assert_eq!(lut.apply(-160.0), 0);
        assert_eq!(lut.apply(239.0), 255);
        assert_eq!(lut.apply(3000.0), 255);
    }

    #[test]
    fn center_maps_to_mid_gray() {
        let lut = VoiLut::new(WindowLevel::new(128.0, 256.0), false);
        let mid = lut.apply(127.5);
        assert!((127..=128).contains(&mid), "got {mid}");
    }

    #[test]
    fn inversion_flips_output() {
        let lut = VoiLut::new(WindowLevel::new(40.0, 400.0), true);
        assert_eq!(lut.apply(-1000.0), 255);
        assert_eq!(lut.apply(3000.0), 0);
    }

    #[test]
    fn unit_width_window_is_a_threshold() {
        let lut = VoiLut::new(WindowLevel::new(100.0, 1.0), false);
        assert_eq!(lut.apply(99.0), 0);
        assert_eq!(lut.apply(100.0), 255);
    }
}
