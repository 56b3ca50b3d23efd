// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Window**: Initial and minimum window size
//! - **Image cache**: Number of decoded images kept in memory
//! - **Drop handling**: Coalescing of multi-file drops

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 800.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 650.0;
pub const MIN_WINDOW_WIDTH: f32 = 400.0;
pub const MIN_WINDOW_HEIGHT: f32 = 300.0;

// ==========================================================================
// Image Cache Defaults
// ==========================================================================

/// Decoded images kept by the rendering engine.
pub const DEFAULT_IMAGE_CACHE_CAPACITY: usize = 16;

pub const MIN_IMAGE_CACHE_CAPACITY: usize = 1;

/// Upper bound; a 512x512 CT slice decodes to 1 MiB of f32 samples.
pub const MAX_IMAGE_CACHE_CAPACITY: usize = 256;

// ==========================================================================
// Drop Handling Defaults
// ==========================================================================

/// Window in which further drops are treated as part of the same gesture.
pub const DEFAULT_DROP_COALESCE_MS: u64 = 250;

pub const MAX_DROP_COALESCE_MS: u64 = 5_000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_bounds_contain_default() {
        assert!(MIN_IMAGE_CACHE_CAPACITY <= DEFAULT_IMAGE_CACHE_CAPACITY);
        assert!(DEFAULT_IMAGE_CACHE_CAPACITY <= MAX_IMAGE_CACHE_CAPACITY);
    }

    #[test]
    fn default_window_respects_minimum() {
        assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
        assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);
    }
}
