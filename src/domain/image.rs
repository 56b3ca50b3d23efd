// SPDX-License-Identifier: MPL-2.0
//! Image identifiers and decoded image data.
//!
//! These types represent pure data without any presentation dependencies.
//! The presentation layer converts [`RawImage`] frames into framework-specific
//! handles (e.g. `iced::widget::image::Handle`).

use crate::error::{Error, Result};
use std::fmt;
use std::sync::Arc;

/// Opaque image identifier of the form `<scheme>:<key>`.
///
/// The scheme selects the image loader, the key is meaningful only to that
/// loader (for dropped files it is the slot in the file table).
///
/// # Example
///
/// ```
/// use dicom_drop::domain::image::ImageId;
///
/// let id = ImageId::parse("dicomfile:3").unwrap();
/// assert_eq!(id.scheme(), "dicomfile");
/// assert_eq!(id.key(), "3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageId {
    raw: String,
    scheme_len: usize,
}

impl ImageId {
    /// Builds an id from a scheme and a loader-specific key.
    #[must_use]
    pub fn new(scheme: &str, key: impl fmt::Display) -> Self {
        Self {
            raw: format!("{scheme}:{key}"),
            scheme_len: scheme.len(),
        }
    }

    /// Parses an id, rejecting strings without a non-empty scheme.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidImageId`] when there is no `:` separator or the
    /// scheme before it is empty.
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.find(':') {
            Some(0) | None => Err(Error::InvalidImageId(raw.to_string())),
            Some(index) => Ok(Self {
                raw: raw.to_string(),
                scheme_len: index,
            }),
        }
    }

    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.raw[..self.scheme_len]
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.raw[self.scheme_len + 1..]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Photometric interpretations the decoder understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Photometric {
    /// Grayscale, minimum value displayed as white.
    Monochrome1,
    /// Grayscale, minimum value displayed as black.
    Monochrome2,
    /// Interleaved RGB samples.
    Rgb,
}

impl Photometric {
    /// Maps the DICOM PhotometricInterpretation code string.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim_end_matches(['\0', ' ']) {
            "MONOCHROME1" => Some(Self::Monochrome1),
            "MONOCHROME2" => Some(Self::Monochrome2),
            "RGB" => Some(Self::Rgb),
            _ => None,
        }
    }

    #[must_use]
    pub fn samples_per_pixel(self) -> usize {
        match self {
            Self::Monochrome1 | Self::Monochrome2 => 1,
            Self::Rgb => 3,
        }
    }
}

/// Window center/width pair (a linear VOI transform).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowLevel {
    pub center: f64,
    pub width: f64,
}

impl WindowLevel {
    #[must_use]
    pub fn new(center: f64, width: f64) -> Self {
        Self { center, width }
    }

    /// Window covering a full value range, never narrower than one unit.
    #[must_use]
    pub fn from_range(min: f64, max: f64) -> Self {
        Self {
            center: (max + min) / 2.0,
            width: (max - min).max(1.0),
        }
    }
}

/// Physical distance between pixel centers, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelSpacing {
    pub row: f64,
    pub column: f64,
}

/// Pixel samples of the first frame.
#[derive(Debug, Clone, PartialEq)]
pub enum PixelSamples {
    /// One modality value per pixel (rescale already applied).
    Gray(Vec<f32>),
    /// Three interleaved 8-bit samples per pixel.
    Rgb(Vec<u8>),
}

impl PixelSamples {
    #[must_use]
    pub fn pixel_count(&self) -> usize {
        match self {
            PixelSamples::Gray(values) => values.len(),
            PixelSamples::Rgb(samples) => samples.len() / 3,
        }
    }
}

/// Descriptive attributes shown next to the image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageDescription {
    pub modality: Option<String>,
    pub patient_name: Option<String>,
    pub study_description: Option<String>,
}

/// An image decoded by a loader, ready for viewport derivation and drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    pub image_id: ImageId,
    pub rows: u32,
    pub columns: u32,
    pub photometric: Photometric,
    pub samples: PixelSamples,
    /// Smallest modality value in the frame.
    pub min_value: f32,
    /// Largest modality value in the frame.
    pub max_value: f32,
    /// Default window, from the file or derived from the value range.
    pub window: WindowLevel,
    pub spacing: Option<PixelSpacing>,
    pub transfer_syntax: String,
    pub description: ImageDescription,
}

impl DecodedImage {
    /// Whether the default display should invert intensities.
    #[must_use]
    pub fn invert(&self) -> bool {
        self.photometric == Photometric::Monochrome1
    }

    #[must_use]
    pub fn is_color(&self) -> bool {
        self.photometric == Photometric::Rgb
    }

    /// Height/width ratio of one pixel, 1.0 when spacing is unknown.
    #[must_use]
    pub fn pixel_aspect(&self) -> f64 {
        match self.spacing {
            Some(spacing) if spacing.row > 0.0 && spacing.column > 0.0 => {
                spacing.row / spacing.column
            }
            _ => 1.0,
        }
    }
}

/// RGBA frame produced by drawing a decoded image.
#[derive(Debug, Clone)]
pub struct RawImage {
    width: u32,
    height: u32,
    rgba_bytes: Arc<Vec<u8>>,
}

impl RawImage {
    /// Creates a frame from dimensions and owned RGBA bytes.
    ///
    /// # Panics
    ///
    /// Panics if the pixel data length doesn't match `width * height * 4`.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, rgba_bytes: Vec<u8>) -> Self {
        let expected_len = (width as usize) * (height as usize) * 4;
        assert_eq!(
            rgba_bytes.len(),
            expected_len,
            "RGBA data length mismatch: expected {expected_len}, got {}",
            rgba_bytes.len()
        );

        Self {
            width,
            height,
            rgba_bytes: Arc::new(rgba_bytes),
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }
}

impl PartialEq for RawImage {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.rgba_bytes == other.rgba_bytes
    }
}

impl Eq for RawImage {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_id_splits_scheme_and_key() {
        let id = ImageId::new("dicomfile", 12);
        assert_eq!(id.as_str(), "dicomfile:12");
        assert_eq!(id.scheme(), "dicomfile");
        assert_eq!(id.key(), "12");
    }

    #[test]
    fn image_id_parse_keeps_colons_in_key() {
        let id = ImageId::parse("wadouri:http://host/study?x=1").expect("valid id");
        assert_eq!(id.scheme(), "wadouri");
        assert_eq!(id.key(), "http://host/study?x=1");
    }

    #[test]
    fn image_id_parse_rejects_missing_scheme() {
        assert!(matches!(
            ImageId::parse("no-separator"),
            Err(Error::InvalidImageId(_))
        ));
        assert!(matches!(ImageId::parse(":7"), Err(Error::InvalidImageId(_))));
    }

    #[test]
    fn photometric_codes_ignore_padding() {
        assert_eq!(
            Photometric::from_code("MONOCHROME2 "),
            Some(Photometric::Monochrome2)
        );
        assert_eq!(Photometric::from_code("RGB"), Some(Photometric::Rgb));
        assert_eq!(Photometric::from_code("YBR_FULL_422"), None);
    }

    #[test]
    fn window_from_range_never_collapses() {
        let window = WindowLevel::from_range(100.0, 100.0);
        assert_eq!(window.center, 100.0);
        assert_eq!(window.width, 1.0);

        let window = WindowLevel::from_range(-1000.0, 3000.0);
        assert_eq!(window.center, 1000.0);
        assert_eq!(window.width, 4000.0);
    }

    #[test]
    #[should_panic(expected = "RGBA data length mismatch")]
    fn raw_image_rejects_wrong_length() {
        let _ = RawImage::from_rgba(2, 2, vec![0; 15]);
    }
}
