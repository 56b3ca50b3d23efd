// SPDX-License-Identifier: MPL-2.0
//! Error types shared by the loader, decoder, rendering engine and config layer.

use thiserror::Error;

/// Every failure the drop pipeline can run into, plus configuration issues.
///
/// Variants carry rendered messages rather than source errors so the type
/// stays `Clone` and can travel inside iced messages.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(String),

    /// The file could not be parsed as a DICOM object.
    #[error("DICOM parse error: {0}")]
    Dicom(String),

    /// Pixel data is encoded with a transfer syntax we cannot decode.
    #[error("unsupported transfer syntax: {0}")]
    UnsupportedTransferSyntax(String),

    /// Attributes or pixel data are missing or inconsistent.
    #[error("pixel data decode error: {0}")]
    Decode(String),

    #[error("invalid image id: {0}")]
    InvalidImageId(String),

    #[error("no file registered for image id {0}")]
    UnknownImageId(String),

    /// No image loader is registered for the scheme of an image id.
    #[error("no image loader registered for scheme '{0}'")]
    NoImageLoader(String),

    /// The loader was used before bootstrap linked its externals.
    #[error("image loader '{0}' is not linked to a DICOM parser")]
    LoaderNotLinked(String),

    #[error("surface '{0}' is not enabled")]
    SurfaceNotEnabled(String),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}
