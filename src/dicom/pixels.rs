// SPDX-License-Identifier: MPL-2.0
//! Native pixel data decoding: stored samples to modality values.

use crate::domain::image::{PixelSamples, Photometric, WindowLevel};
use crate::error::{Error, Result};
use std::borrow::Cow;

/// Pixel module attributes that drive decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelLayout {
    pub rows: u32,
    pub columns: u32,
    pub photometric: Photometric,
    pub bits_allocated: u16,
    pub bits_stored: u16,
    /// `true` when PixelRepresentation is 1 (two's complement).
    pub signed: bool,
    /// `true` when PlanarConfiguration is 1 (RRR..GGG..BBB..).
    pub planar: bool,
}

impl PixelLayout {
    fn pixel_count(&self) -> usize {
        self.rows as usize * self.columns as usize
    }

    fn sample_count(&self) -> usize {
        self.pixel_count() * self.photometric.samples_per_pixel()
    }
}

/// Modality LUT as a linear rescale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rescale {
    pub slope: f64,
    pub intercept: f64,
}

impl Default for Rescale {
    fn default() -> Self {
        Self {
            slope: 1.0,
            intercept: 0.0,
        }
    }
}

impl Rescale {
    #[must_use]
    pub fn apply(&self, stored: i32) -> f32 {
        (f64::from(stored) * self.slope + self.intercept) as f32
    }
}

/// Pixel data as held by the parsed element.
///
/// OB values arrive as bytes, OW values as 16-bit words, depending on the
/// VR the file (or the dictionary, for implicit VR) assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredSamples {
    Bytes(Vec<u8>),
    Words(Vec<u16>),
}

impl StoredSamples {
    fn bytes(&self) -> Cow<'_, [u8]> {
        match self {
            StoredSamples::Bytes(bytes) => Cow::Borrowed(bytes),
            StoredSamples::Words(words) => {
                Cow::Owned(words.iter().flat_map(|w| w.to_le_bytes()).collect())
            }
        }
    }

    fn words(&self) -> Cow<'_, [u16]> {
        match self {
            StoredSamples::Words(words) => Cow::Borrowed(words),
            StoredSamples::Bytes(bytes) => Cow::Owned(
                bytes
                    .chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                    .collect(),
            ),
        }
    }
}

/// Decodes the first frame into modality values or RGB samples.
///
/// # Errors
///
/// Returns [`Error::Decode`] for unsupported bit depths, color images that are
/// not 8-bit, or pixel data shorter than the declared dimensions.
pub fn decode_first_frame(
    stored: &StoredSamples,
    layout: &PixelLayout,
    rescale: Rescale,
) -> Result<PixelSamples> {
    if layout.rows == 0 || layout.columns == 0 {
        return Err(Error::Decode(format!(
            "invalid dimensions {}x{}",
            layout.columns, layout.rows
        )));
    }

    match layout.photometric {
        Photometric::Rgb => decode_rgb(stored, layout).map(PixelSamples::Rgb),
        Photometric::Monochrome1 | Photometric::Monochrome2 => {
            decode_gray(stored, layout, rescale).map(PixelSamples::Gray)
        }
    }
}

fn decode_gray(stored: &StoredSamples, layout: &PixelLayout, rescale: Rescale) -> Result<Vec<f32>> {
    let count = layout.pixel_count();
    let bits_stored = layout.bits_stored.clamp(1, layout.bits_allocated.max(1));

    match layout.bits_allocated {
        8 => {
            let bytes = stored.bytes();
            ensure_len(bytes.len(), count)?;
            Ok(bytes[..count]
                .iter()
                .map(|&b| rescale.apply(stored_value(u32::from(b), bits_stored, layout.signed)))
                .collect())
        }
        16 => {
            let words = stored.words();
            ensure_len(words.len(), count)?;
            Ok(words[..count]
                .iter()
                .map(|&w| rescale.apply(stored_value(u32::from(w), bits_stored, layout.signed)))
                .collect())
        }
        other => Err(Error::Decode(format!("unsupported BitsAllocated {other}"))),
    }
}

fn decode_rgb(stored: &StoredSamples, layout: &PixelLayout) -> Result<Vec<u8>> {
    if layout.bits_allocated != 8 {
        return Err(Error::Decode(format!(
            "RGB with BitsAllocated {} is not supported",
            layout.bits_allocated
        )));
    }
    let count = layout.pixel_count();
    let bytes = stored.bytes();
    ensure_len(bytes.len(), layout.sample_count())?;

    if !layout.planar {
        return Ok(bytes[..count * 3].to_vec());
    }

    let (red, rest) = bytes[..count * 3].split_at(count);
    let (green, blue) = rest.split_at(count);
    Ok(red
        .iter()
        .zip(green)
        .zip(blue)
        .flat_map(|((&r, &g), &b)| [r, g, b])
        .collect())
}

fn ensure_len(available: usize, needed: usize) -> Result<()> {
    if available < needed {
        Err(Error::Decode(format!(
            "pixel data holds {available} samples, expected {needed}"
        )))
    } else {
        Ok(())
    }
}

/// Masks a raw sample to BitsStored and sign-extends it when signed.
fn stored_value(raw: u32, bits_stored: u16, signed: bool) -> i32 {
    let bits = u32::from(bits_stored.min(16));
    let masked = raw & ((1u32 << bits) - 1);
    if signed && masked & (1 << (bits - 1)) != 0 {
        masked as i32 - (1i32 << bits)
    } else {
        masked as i32
    }
}

/// Smallest and largest value of a frame; `(0, 0)` for an empty slice.
#[must_use]
pub fn value_range(samples: &PixelSamples) -> (f32, f32) {
    let fold = |(min, max): (f32, f32), v: f32| (min.min(v), max.max(v));
    let range = match samples {
        PixelSamples::Gray(values) => values
            .iter()
            .copied()
            .fold((f32::INFINITY, f32::NEG_INFINITY), fold),
        PixelSamples::Rgb(bytes) => bytes
            .iter()
            .map(|&b| f32::from(b))
            .fold((f32::INFINITY, f32::NEG_INFINITY), fold),
    };
    if range.0 > range.1 {
        (0.0, 0.0)
    } else {
        range
    }
}

/// Default window: the first stored center/width pair, else the value range.
///
/// Color images always get the full 8-bit range.
#[must_use]
pub fn default_window(
    photometric: Photometric,
    centers: &[f64],
    widths: &[f64],
    range: (f32, f32),
) -> WindowLevel {
    if photometric == Photometric::Rgb {
        return WindowLevel::new(127.5, 255.0);
    }
    match (centers.first(), widths.first()) {
        (Some(&center), Some(&width)) if width > 0.0 => WindowLevel::new(center, width),
        _ => WindowLevel::from_range(f64::from(range.0), f64::from(range.1)),
    }
}
