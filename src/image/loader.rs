//! Fetching image bytes through the response cache.

use super::cache::ResponseCache;
use super::slot::ImageRequest;
use crate::model::ImageError;
use std::sync::Arc;
use tracing::{debug, trace};

/// Produces raw image bytes for a URI (network, disk, bundle...).
pub trait ImageSource: Send + Sync {
    /// Fetch the bytes behind `uri`.
    fn fetch(&self, uri: &str) -> Result<Vec<u8>, ImageError>;
}

/// An [`ImageSource`] fronted by a shared [`ResponseCache`].
#[derive(Debug)]
pub struct CachedImageLoader<S> {
    source: S,
    cache: Arc<ResponseCache>,
}

impl<S: ImageSource> CachedImageLoader<S> {
    /// Wrap `source` with `cache`. The cache may be shared between loaders.
    pub fn new(source: S, cache: Arc<ResponseCache>) -> Self {
        Self { source, cache }
    }

    /// The response cache in use.
    pub fn cache(&self) -> &Arc<ResponseCache> {
        &self.cache
    }

    /// Bytes for `uri`, from the cache when present, otherwise fetched and
    /// stored.
    ///
    /// # Errors
    ///
    /// Propagates the source's `ImageError`; failures are not cached.
    pub fn load(&self, uri: &str) -> Result<Arc<[u8]>, ImageError> {
        if let Some(bytes) = self.cache.get(uri) {
            trace!(uri, "Image response cache hit");
            return Ok(bytes);
        }

        let bytes: Arc<[u8]> = self.source.fetch(uri)?.into();
        debug!(uri, size = bytes.len(), "Fetched image");
        self.cache.put(uri, Arc::clone(&bytes));
        Ok(bytes)
    }

    /// Load the image for a cell's request.
    ///
    /// The token is checked before starting and again after the bytes are
    /// available. A fetched response is still cached when the request was
    /// cancelled in between; only delivery to the cell is skipped.
    ///
    /// # Errors
    ///
    /// Returns `ImageError::Cancelled` if the request is no longer live.
    pub fn load_for(&self, request: &ImageRequest) -> Result<Arc<[u8]>, ImageError> {
        if !request.is_live() {
            return Err(ImageError::Cancelled);
        }
        let bytes = self.load(request.uri())?;
        if !request.is_live() {
            return Err(ImageError::Cancelled);
        }
        Ok(bytes)
    }
}
