// SPDX-License-Identifier: MPL-2.0
//! Rendering port definition.

use crate::domain::{DecodedImage, ImageId, SurfaceId, Viewport};
use crate::error::Result;
use futures_util::future::BoxFuture;
use std::sync::Arc;

/// Future resolving to a decoded image, shared with the engine's cache.
pub type ImageFuture = BoxFuture<'static, Result<Arc<DecodedImage>>>;

/// Port for the engine that owns surfaces and draws images into them.
///
/// Mirrors the four calls the drop handler sequences: enable a surface,
/// resolve an image, derive a viewport, draw.
pub trait RenderingEngine {
    /// Promotes `surface` to a drawing surface. Calling it again is a no-op.
    fn enable(&mut self, surface: SurfaceId);

    /// Resolves the image for `id`. The returned future owns everything it
    /// needs, so the engine can keep being used while it is pending.
    fn load_image(&self, id: &ImageId) -> ImageFuture;

    /// Computes the default viewport for showing `image` on `surface`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SurfaceNotEnabled`](crate::error::Error::SurfaceNotEnabled)
    /// if `surface` was never enabled.
    fn default_viewport(&self, surface: SurfaceId, image: &DecodedImage) -> Result<Viewport>;

    /// Draws `image` into `surface`, replacing whatever was drawn before.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SurfaceNotEnabled`](crate::error::Error::SurfaceNotEnabled)
    /// if `surface` was never enabled.
    fn display_image(
        &mut self,
        surface: SurfaceId,
        image: Arc<DecodedImage>,
        viewport: Viewport,
    ) -> Result<()>;
}
