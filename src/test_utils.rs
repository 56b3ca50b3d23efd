// SPDX-License-Identifier: MPL-2.0
//! Test helpers for writing small DICOM files to disk.
//!
//! Used by the unit tests, the integration tests and the benchmarks, so it is
//! compiled into the library but hidden from the docs.

use crate::dicom::transfer_syntax;
use dicom_core::value::PrimitiveValue;
use dicom_core::{DataElement, Tag, VR};
use dicom_dictionary_std::tags;
use dicom_object::meta::FileMetaTableBuilder;
use dicom_object::{DefaultDicomObject, InMemDicomObject};
use std::path::Path;

/// Secondary Capture Image Storage.
const SOP_CLASS_UID: &str = "1.2.840.10008.5.1.4.1.1.7";

/// Builder for a single-frame DICOM file.
#[derive(Debug, Clone)]
pub struct DicomFixture {
    rows: u16,
    columns: u16,
    photometric: &'static str,
    transfer_syntax: &'static str,
    pixels: Pixels,
    extra: Vec<(Tag, VR, PrimitiveValue)>,
}

#[derive(Debug, Clone)]
enum Pixels {
    Gray16(Vec<u16>),
    Rgb8(Vec<u8>),
}

impl DicomFixture {
    /// Unsigned 16-bit MONOCHROME2 image.
    #[must_use]
    pub fn gray16(rows: u16, columns: u16, pixels: Vec<u16>) -> Self {
        Self {
            rows,
            columns,
            photometric: "MONOCHROME2",
            transfer_syntax: transfer_syntax::EXPLICIT_VR_LITTLE_ENDIAN,
            pixels: Pixels::Gray16(pixels),
            extra: Vec::new(),
        }
    }

    /// Interleaved 8-bit RGB image.
    #[must_use]
    pub fn rgb8(rows: u16, columns: u16, samples: Vec<u8>) -> Self {
        Self {
            photometric: "RGB",
            pixels: Pixels::Rgb8(samples),
            ..Self::gray16(rows, columns, Vec::new())
        }
    }

    #[must_use]
    pub fn photometric(mut self, photometric: &'static str) -> Self {
        self.photometric = photometric;
        self
    }

    #[must_use]
    pub fn transfer_syntax(mut self, uid: &'static str) -> Self {
        self.transfer_syntax = uid;
        self
    }

    #[must_use]
    pub fn window(self, center: f64, width: f64) -> Self {
        self.decimal(tags::WINDOW_CENTER, center)
            .decimal(tags::WINDOW_WIDTH, width)
    }

    #[must_use]
    pub fn rescale(self, slope: f64, intercept: f64) -> Self {
        self.decimal(tags::RESCALE_SLOPE, slope)
            .decimal(tags::RESCALE_INTERCEPT, intercept)
    }

    #[must_use]
    pub fn pixel_spacing(mut self, row: f64, column: f64) -> Self {
        self.extra.push((
            tags::PIXEL_SPACING,
            VR::DS,
            PrimitiveValue::Strs([row.to_string(), column.to_string()].into_iter().collect()),
        ));
        self
    }

    #[must_use]
    pub fn modality(mut self, modality: &str) -> Self {
        self.extra
            .push((tags::MODALITY, VR::CS, PrimitiveValue::from(modality)));
        self
    }

    fn decimal(mut self, tag: Tag, value: f64) -> Self {
        self.extra
            .push((tag, VR::DS, PrimitiveValue::from(value.to_string())));
        self
    }

    /// Writes the file, panicking on failure (test-only helper).
    pub fn write(&self, path: &Path) {
        self.build()
            .write_to_file(path)
            .expect("fixture file should be writable");
    }

    /// Builds the file object in memory.
    #[must_use]
    pub fn build(&self) -> DefaultDicomObject {
        let (samples_per_pixel, bits, pixel_data) = match &self.pixels {
            Pixels::Gray16(words) => (
                1_u16,
                16_u16,
                DataElement::new(
                    tags::PIXEL_DATA,
                    VR::OW,
                    PrimitiveValue::U16(words.iter().copied().collect()),
                ),
            ),
            Pixels::Rgb8(bytes) => (
                3_u16,
                8_u16,
                DataElement::new(
                    tags::PIXEL_DATA,
                    VR::OB,
                    PrimitiveValue::U8(bytes.iter().copied().collect()),
                ),
            ),
        };

        let mut obj = InMemDicomObject::from_element_iter([
            DataElement::new(tags::SOP_CLASS_UID, VR::UI, PrimitiveValue::from(SOP_CLASS_UID)),
            DataElement::new(tags::SOP_INSTANCE_UID, VR::UI, PrimitiveValue::from("2.25.1")),
            DataElement::new(tags::ROWS, VR::US, PrimitiveValue::from(self.rows)),
            DataElement::new(tags::COLUMNS, VR::US, PrimitiveValue::from(self.columns)),
            DataElement::new(
                tags::SAMPLES_PER_PIXEL,
                VR::US,
                PrimitiveValue::from(samples_per_pixel),
            ),
            DataElement::new(
                tags::PHOTOMETRIC_INTERPRETATION,
                VR::CS,
                PrimitiveValue::from(self.photometric),
            ),
            DataElement::new(tags::BITS_ALLOCATED, VR::US, PrimitiveValue::from(bits)),
            DataElement::new(tags::BITS_STORED, VR::US, PrimitiveValue::from(bits)),
            DataElement::new(tags::HIGH_BIT, VR::US, PrimitiveValue::from(bits - 1)),
            DataElement::new(tags::PIXEL_REPRESENTATION, VR::US, PrimitiveValue::from(0_u16)),
            pixel_data,
        ]);
        for (tag, vr, value) in &self.extra {
            obj.put(DataElement::new(*tag, *vr, value.clone()));
        }

        obj.with_meta(
            FileMetaTableBuilder::new()
                .transfer_syntax(self.transfer_syntax)
                .media_storage_sop_class_uid(SOP_CLASS_UID)
                .media_storage_sop_instance_uid("2.25.1"),
        )
        .expect("fixture meta table should build")
    }
}
