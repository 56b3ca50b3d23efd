// SPDX-License-Identifier: MPL-2.0
//! LRU cache of decoded images, shared between the engine and load tasks.

use crate::config::DEFAULT_IMAGE_CACHE_CAPACITY;
use crate::domain::{DecodedImage, ImageId};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};

pub struct ImageCache {
    entries: Mutex<LruCache<ImageId, Arc<DecodedImage>>>,
}

impl ImageCache {
    /// Creates a cache holding at most `capacity` images (0 means default).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity)
            .or_else(|| NonZeroUsize::new(DEFAULT_IMAGE_CACHE_CAPACITY))
            .unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn get(&self, id: &ImageId) -> Option<Arc<DecodedImage>> {
        self.lock().get(id).cloned()
    }

    pub fn put(&self, id: ImageId, image: Arc<DecodedImage>) {
        self.lock().put(id, image);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, LruCache<ImageId, Arc<DecodedImage>>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("len", &self.len())
            .finish()
    }
}
