// SPDX-License-Identifier: MPL-2.0
//! LRU cache of decoded images keyed by their locator.
//!
//! Navigating back to an image the carousel has already shown skips both the
//! network round-trip and the decode.

use crate::config::{DEFAULT_CACHED_IMAGES, MAX_CACHED_IMAGES, MIN_CACHED_IMAGES};
use crate::media::ImageData;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Cache hit/miss counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
}

/// Bounded cache of decoded images.
pub struct ImageCache {
    cache: LruCache<String, ImageData>,
    stats: CacheStats,
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("len", &self.cache.len())
            .field("capacity", &self.cache.cap())
            .field("stats", &self.stats)
            .finish()
    }
}

impl ImageCache {
    /// Creates a cache holding up to `capacity` images, clamped to the supported range.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.clamp(MIN_CACHED_IMAGES, MAX_CACHED_IMAGES))
            .unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
            stats: CacheStats::default(),
        }
    }

    /// Returns a cached image and marks it most recently used.
    ///
    /// `ImageData` clones are cheap: the pixel buffer lives behind the handle.
    pub fn get(&mut self, url: &str) -> Option<ImageData> {
        if let Some(image) = self.cache.get(url) {
            self.stats.hits += 1;
            Some(image.clone())
        } else {
            self.stats.misses += 1;
            None
        }
    }

    /// Inserts or replaces an image, evicting the least recently used one when full.
    pub fn insert(&mut self, url: String, image: ImageData) {
        self.cache.put(url, image);
        self.stats.insertions += 1;
    }

    #[must_use]
    pub fn contains(&self, url: &str) -> bool {
        self.cache.contains(url)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cache.cap().get()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHED_IMAGES)
    }
}
