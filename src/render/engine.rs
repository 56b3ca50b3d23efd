// SPDX-License-Identifier: MPL-2.0
//! The rendering engine: surfaces, image loaders, cache and drawing.

use super::cache::ImageCache;
use super::{raster, viewport};
use crate::application::port::{ImageFuture, ImageLoader, RenderingEngine};
use crate::domain::{DecodedImage, ImageId, RawImage, SurfaceId, SurfaceSize, Viewport};
use crate::error::{Error, Result};
use futures_util::FutureExt;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// What was last drawn into a surface.
#[derive(Debug, Clone)]
pub struct DrawnImage {
    pub image: Arc<DecodedImage>,
    pub viewport: Viewport,
    pub frame: RawImage,
}

impl DrawnImage {
    /// Size of the frame on screen.
    #[must_use]
    pub fn display_size(&self) -> (f32, f32) {
        self.viewport
            .display_size(self.image.columns, self.image.rows)
    }
}

/// A region known to the engine; only enabled ones can be drawn into.
#[derive(Debug, Clone)]
pub struct Surface {
    pub size: SurfaceSize,
    enabled: bool,
    drawn: Option<DrawnImage>,
}

impl Surface {
    fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            enabled: false,
            drawn: None,
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn drawn(&self) -> Option<&DrawnImage> {
        self.drawn.as_ref()
    }
}

/// Engine owning every surface and the loader registry.
///
/// Built by [`crate::bootstrap::init`], which links the file loader in.
pub struct Engine {
    loaders: HashMap<&'static str, Arc<dyn ImageLoader>>,
    cache: Arc<ImageCache>,
    surfaces: HashMap<SurfaceId, Surface>,
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut schemes: Vec<_> = self.loaders.keys().collect();
        schemes.sort_unstable();
        f.debug_struct("Engine")
            .field("schemes", &schemes)
            .field("cache", &self.cache)
            .field("surfaces", &self.surfaces.len())
            .finish()
    }
}

impl Engine {
    /// Creates an engine with no loaders registered.
    #[must_use]
    pub fn new(cache_capacity: usize) -> Self {
        Self {
            loaders: HashMap::new(),
            cache: Arc::new(ImageCache::new(cache_capacity)),
            surfaces: HashMap::new(),
        }
    }

    /// Registers `loader` for its scheme, returning the loader it replaces.
    pub fn register_image_loader(
        &mut self,
        loader: Arc<dyn ImageLoader>,
    ) -> Option<Arc<dyn ImageLoader>> {
        self.loaders.insert(loader.scheme(), loader)
    }

    #[must_use]
    pub fn has_loader(&self, scheme: &str) -> bool {
        self.loaders.contains_key(scheme)
    }

    /// Records the on-screen size of a surface, enabled or not.
    pub fn resize_surface(&mut self, surface: SurfaceId, size: SurfaceSize) {
        self.surfaces
            .entry(surface)
            .and_modify(|entry| entry.size = size)
            .or_insert_with(|| Surface::new(size));
    }

    #[must_use]
    pub fn surface(&self, surface: SurfaceId) -> Option<&Surface> {
        self.surfaces.get(&surface)
    }

    /// The image currently drawn into `surface`, if any.
    #[must_use]
    pub fn drawn(&self, surface: SurfaceId) -> Option<&DrawnImage> {
        self.surfaces.get(&surface).and_then(Surface::drawn)
    }

    #[must_use]
    pub fn cache(&self) -> &ImageCache {
        &self.cache
    }

    fn enabled_surface(&self, surface: SurfaceId) -> Result<&Surface> {
        self.surfaces
            .get(&surface)
            .filter(|entry| entry.enabled)
            .ok_or_else(|| Error::SurfaceNotEnabled(surface.to_string()))
    }
}

impl RenderingEngine for Engine {
    fn enable(&mut self, surface: SurfaceId) {
        self.surfaces
            .entry(surface)
            .or_insert_with(|| Surface::new(SurfaceSize::new(0.0, 0.0)))
            .enabled = true;
    }

    fn load_image(&self, id: &ImageId) -> ImageFuture {
        let id = id.clone();
        let cache = Arc::clone(&self.cache);
        let loader = self.loaders.get(id.scheme()).cloned();

        async move {
            if let Some(hit) = cache.get(&id) {
                return Ok(hit);
            }
            let loader = loader.ok_or_else(|| Error::NoImageLoader(id.scheme().to_string()))?;

            let load_id = id.clone();
            let image = tokio::task::spawn_blocking(move || loader.load(&load_id))
                .await
                .map_err(|e| Error::Io(format!("image load task failed: {e}")))??;

            let image = Arc::new(image);
            cache.put(id, Arc::clone(&image));
            Ok(image)
        }
        .boxed()
    }

    fn default_viewport(&self, surface: SurfaceId, image: &DecodedImage) -> Result<Viewport> {
        let entry = self.enabled_surface(surface)?;
        Ok(viewport::default_viewport(entry.size, image))
    }

    fn display_image(
        &mut self,
        surface: SurfaceId,
        image: Arc<DecodedImage>,
        viewport: Viewport,
    ) -> Result<()> {
        self.enabled_surface(surface)?;
        let frame = raster::rasterize(&image, &viewport);
        if let Some(entry) = self.surfaces.get_mut(&surface) {
            entry.drawn = Some(DrawnImage {
                image,
                viewport,
                frame,
            });
        }
        Ok(())
    }
}
