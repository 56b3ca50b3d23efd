// SPDX-License-Identifier: MPL-2.0
//! DICOM file decoding built on dicom-rs.
//!
//! [`DicomRsParser`] reads a Part 10 file with `dicom-object`, checks that the
//! pixel data is stored natively, and decodes the first frame into a
//! [`DecodedImage`] with its default window.

pub mod pixels;
pub mod transfer_syntax;

use crate::application::port::DicomParser;
use crate::domain::image::{DecodedImage, ImageDescription, ImageId, Photometric, PixelSpacing};
use crate::error::{Error, Result};
use dicom_core::value::{PrimitiveValue, Value};
use dicom_dictionary_std::tags;
use dicom_object::{DefaultDicomObject, InMemDicomObject};
use pixels::{PixelLayout, Rescale, StoredSamples};
use std::path::Path;

/// Parser backed by `dicom-object`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DicomRsParser;

impl DicomParser for DicomRsParser {
    fn parse(&self, path: &Path, image_id: ImageId) -> Result<DecodedImage> {
        let obj = dicom_object::open_file(path).map_err(|e| Error::Dicom(e.to_string()))?;
        decode_object(&obj, image_id)
    }
}

/// Decodes an already opened file object.
///
/// # Errors
///
/// See [`DicomParser::parse`].
pub fn decode_object(obj: &DefaultDicomObject, image_id: ImageId) -> Result<DecodedImage> {
    let transfer_syntax = transfer_syntax::normalize(obj.meta().transfer_syntax()).to_string();
    transfer_syntax::ensure_native(&transfer_syntax)?;

    let photometric_code = required_str(obj, tags::PHOTOMETRIC_INTERPRETATION)?;
    let photometric = Photometric::from_code(&photometric_code).ok_or_else(|| {
        Error::Decode(format!(
            "unsupported photometric interpretation {}",
            photometric_code.trim()
        ))
    })?;

    let bits_allocated = required_u16(obj, tags::BITS_ALLOCATED)?;
    let layout = PixelLayout {
        rows: u32::from(required_u16(obj, tags::ROWS)?),
        columns: u32::from(required_u16(obj, tags::COLUMNS)?),
        photometric,
        bits_allocated,
        bits_stored: optional_u16(obj, tags::BITS_STORED).unwrap_or(bits_allocated),
        signed: optional_u16(obj, tags::PIXEL_REPRESENTATION) == Some(1),
        planar: optional_u16(obj, tags::PLANAR_CONFIGURATION) == Some(1),
    };

    let rescale = Rescale {
        slope: optional_floats(obj, tags::RESCALE_SLOPE)
            .first()
            .copied()
            .unwrap_or(1.0),
        intercept: optional_floats(obj, tags::RESCALE_INTERCEPT)
            .first()
            .copied()
            .unwrap_or(0.0),
    };

    let stored = stored_samples(obj)?;
    let samples = pixels::decode_first_frame(&stored, &layout, rescale)?;
    let (min_value, max_value) = pixels::value_range(&samples);
    let window = pixels::default_window(
        photometric,
        &optional_floats(obj, tags::WINDOW_CENTER),
        &optional_floats(obj, tags::WINDOW_WIDTH),
        (min_value, max_value),
    );

    let spacing = match optional_floats(obj, tags::PIXEL_SPACING).as_slice() {
        [row, column, ..] => Some(PixelSpacing {
            row: *row,
            column: *column,
        }),
        _ => None,
    };

    Ok(DecodedImage {
        image_id,
        rows: layout.rows,
        columns: layout.columns,
        photometric,
        samples,
        min_value,
        max_value,
        window,
        spacing,
        transfer_syntax,
        description: ImageDescription {
            modality: optional_str(obj, tags::MODALITY),
            patient_name: optional_str(obj, tags::PATIENT_NAME),
            study_description: optional_str(obj, tags::STUDY_DESCRIPTION),
        },
    })
}

fn stored_samples(obj: &InMemDicomObject) -> Result<StoredSamples> {
    let element = obj
        .element(tags::PIXEL_DATA)
        .map_err(|_| Error::Decode("missing pixel data".into()))?;

    match element.value() {
        Value::Primitive(PrimitiveValue::U8(bytes)) => Ok(StoredSamples::Bytes(bytes.to_vec())),
        Value::Primitive(PrimitiveValue::U16(words)) => Ok(StoredSamples::Words(words.to_vec())),
        Value::Primitive(PrimitiveValue::I16(words)) => Ok(StoredSamples::Words(
            words.iter().map(|&w| w as u16).collect(),
        )),
        _ => Err(Error::Decode("pixel data is not stored natively".into())),
    }
}

fn required_u16(obj: &InMemDicomObject, tag: dicom_core::Tag) -> Result<u16> {
    optional_u16(obj, tag).ok_or_else(|| Error::Decode(format!("missing or invalid {tag}")))
}

fn optional_u16(obj: &InMemDicomObject, tag: dicom_core::Tag) -> Option<u16> {
    obj.element_opt(tag)
        .ok()
        .flatten()
        .and_then(|element| element.to_int::<u16>().ok())
}

fn required_str(obj: &InMemDicomObject, tag: dicom_core::Tag) -> Result<String> {
    optional_str(obj, tag).ok_or_else(|| Error::Decode(format!("missing {tag}")))
}

fn optional_str(obj: &InMemDicomObject, tag: dicom_core::Tag) -> Option<String> {
    obj.element_opt(tag)
        .ok()
        .flatten()
        .and_then(|element| element.to_str().ok())
        .map(|value| value.trim_end_matches(['\0', ' ']).to_string())
        .filter(|value| !value.is_empty())
}

fn optional_floats(obj: &InMemDicomObject, tag: dicom_core::Tag) -> Vec<f64> {
    obj.element_opt(tag)
        .ok()
        .flatten()
        .and_then(|element| element.to_multi_float64().ok())
        .unwrap_or_default()
}
