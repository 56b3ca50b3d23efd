// SPDX-License-Identifier: MPL-2.0
//! `dicom_drop` is a drag-and-drop DICOM viewer built with the Iced GUI framework.
//!
//! Dropping a file on the viewport registers it with the [`loader`] file table,
//! decodes it with [`dicom`] and draws it through the [`render`] engine with a
//! default window/level and a fit-to-surface viewport. The sequence itself lives
//! in [`drop_handler`]; [`bootstrap`] wires the pieces together at start-up.

pub mod app;
pub mod application;
pub mod bootstrap;
pub mod config;
pub mod dicom;
pub mod domain;
pub mod drop_handler;
pub mod error;
pub mod i18n;
pub mod loader;
pub mod render;
pub mod ui;

#[cfg(any(test, feature = "test-utils"))]
#[doc(hidden)]
pub mod test_utils;
