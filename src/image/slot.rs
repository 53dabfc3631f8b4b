//! A recyclable cell's image.
//!
//! Loads finish in any order, possibly after the cell has been reused for a
//! different item. Each request carries a [`CancellationToken`]; a result is
//! only applied while that token is live. Issuing a new request or recycling
//! the slot cancels the outstanding one.

use crate::layout::CancellationToken;
use std::sync::Arc;
use tracing::trace;

/// A pending load started for one slot.
#[derive(Debug, Clone)]
pub struct ImageRequest {
    uri: String,
    token: CancellationToken,
}

impl ImageRequest {
    /// URI being loaded.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Whether the requesting slot still wants this result.
    pub fn is_live(&self) -> bool {
        !self.token.is_cancelled()
    }
}

/// Image state of one cell.
#[derive(Debug, Default)]
pub struct ImageSlot {
    pending: Option<CancellationToken>,
    image: Option<Arc<[u8]>>,
}

impl ImageSlot {
    /// Empty slot with no outstanding request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request for `uri`.
    ///
    /// Returns `None` if the slot already shows an image. Any outstanding
    /// request is cancelled.
    pub fn request(&mut self, uri: impl Into<String>) -> Option<ImageRequest> {
        if self.image.is_some() {
            return None;
        }
        if let Some(previous) = self.pending.take() {
            previous.cancel();
        }

        let token = CancellationToken::new();
        self.pending = Some(token.clone());
        Some(ImageRequest {
            uri: uri.into(),
            token,
        })
    }

    /// Apply a finished load. Returns `false` (and drops `bytes`) when the
    /// request was cancelled in the meantime.
    pub fn apply(&mut self, request: &ImageRequest, bytes: Arc<[u8]>) -> bool {
        if !request.is_live() {
            trace!(uri = request.uri(), "Dropping stale image result");
            return false;
        }
        self.image = Some(bytes);
        self.pending = None;
        true
    }

    /// Clear the slot for reuse by another item, cancelling any load.
    pub fn prepare_for_reuse(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
        self.image = None;
    }

    /// Currently applied image bytes.
    pub fn image(&self) -> Option<&Arc<[u8]>> {
        self.image.as_ref()
    }

    /// Whether a request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }
}
