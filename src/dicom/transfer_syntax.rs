// SPDX-License-Identifier: MPL-2.0
//! Transfer syntaxes whose pixel data is stored uncompressed.

use crate::error::{Error, Result};

pub const IMPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2";
pub const EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1";
pub const EXPLICIT_VR_BIG_ENDIAN: &str = "1.2.840.10008.1.2.2";

const NATIVE: [&str; 3] = [
    IMPLICIT_VR_LITTLE_ENDIAN,
    EXPLICIT_VR_LITTLE_ENDIAN,
    EXPLICIT_VR_BIG_ENDIAN,
];

/// UIDs are padded to even length with a NUL byte on disk.
#[must_use]
pub fn normalize(uid: &str) -> &str {
    uid.trim_end_matches(['\0', ' '])
}

/// Fails unless `uid` names a native (uncompressed) transfer syntax.
///
/// # Errors
///
/// Returns [`Error::UnsupportedTransferSyntax`] for encapsulated syntaxes
/// (JPEG, JPEG 2000, RLE, ...) and anything unknown.
pub fn ensure_native(uid: &str) -> Result<()> {
    let uid = normalize(uid);
    if NATIVE.contains(&uid) {
        Ok(())
    } else {
        Err(Error::UnsupportedTransferSyntax(uid.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_syntaxes_are_accepted_with_padding() {
        assert!(ensure_native("1.2.840.10008.1.2\0").is_ok());
        assert!(ensure_native(EXPLICIT_VR_LITTLE_ENDIAN).is_ok());
        assert!(ensure_native(EXPLICIT_VR_BIG_ENDIAN).is_ok());
    }

    #[test]
    fn encapsulated_syntaxes_are_rejected() {
        // JPEG baseline
        let err = ensure_native("1.2.840.10008.1.2.4.50").unwrap_err();
        assert_eq!(
            err,
            Error::UnsupportedTransferSyntax("1.2.840.10008.1.2.4.50".into())
        );
        // RLE lossless
        assert!(ensure_native("1.2.840.10008.1.2.5").is_err());
    }
}
