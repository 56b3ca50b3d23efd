// SPDX-License-Identifier: MPL-2.0
//! Local file image loading.
//!
//! Dropped files are registered in a [`FileManager`] which mints
//! `dicomfile:<index>` ids; [`DicomFileLoader`] resolves those ids back to
//! paths and hands them to the linked DICOM parser.

pub mod dicom_file;
pub mod file_manager;

pub use dicom_file::{DicomFileLoader, Externals};
pub use file_manager::{FileManager, SCHEME};
