//! Chunked shelf upload.

use std::num::NonZeroUsize;

use bytes::Bytes;
use tokio_util::sync::CancellationToken;
use tracing::{Span, debug, info, instrument};
use uuid::Uuid;

use diadoc_core::error::InvalidInputError;
use diadoc_core::{ErrorClassifier, QueryParams, Resource, Result, split_parts};

use crate::dispatcher::Dispatcher;

/// Largest body of a single shelf upload request.
pub const SHELF_PART_SIZE: usize = 512 * 1024;

const DEFAULT_PART_SIZE: NonZeroUsize = match NonZeroUsize::new(SHELF_PART_SIZE) {
    Some(size) => size,
    None => panic!("shelf part size is zero"),
};

const SHELF_UPLOAD: &str = "ShelfUpload";

/// Uploads a payload to the shelf in ordered parts under one fresh name.
///
/// Not transactional: a failed part aborts the upload and leaves the parts
/// already sent on the server.
#[derive(Debug, Clone)]
pub struct ChunkedUploader {
    dispatcher: Dispatcher,
    classifier: ErrorClassifier,
    part_size: NonZeroUsize,
    span: Span,
}

impl ChunkedUploader {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher,
            classifier: ErrorClassifier::new(),
            part_size: DEFAULT_PART_SIZE,
            span: Span::none(),
        }
    }

    /// Use a different part size.
    ///
    /// # Errors
    ///
    /// [`InvalidInputError::Other`] if `part_size` is zero.
    pub fn with_part_size(mut self, part_size: usize) -> Result<Self> {
        self.part_size = NonZeroUsize::new(part_size).ok_or_else(|| InvalidInputError::Other {
            message: "shelf part size must be positive".to_string(),
        })?;
        Ok(self)
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn part_size(&self) -> usize {
        self.part_size.get()
    }

    /// Upload `payload` and return the shelf name it was stored under.
    ///
    /// Parts go out strictly in order; only the last carries
    /// `isLastPart=1`. An empty payload is sent as a single empty part.
    #[instrument(
        parent = crate::span::parent(&self.span),
        skip_all,
        fields(len = payload.len())
    )]
    pub async fn upload(&self, payload: Bytes, cancel: &CancellationToken) -> Result<String> {
        let resource = Resource::get(SHELF_UPLOAD)?;
        let name = format!("api-{}", Uuid::new_v4());
        let parts = split_parts(&payload, self.part_size);
        let count = parts.len();
        info!(%name, parts = count, "uploading to shelf");

        for (index, part) in parts.into_iter().enumerate() {
            let mut query = QueryParams::new()
                .with("nameOnShelf", name.as_str())
                .with("partIndex", index.to_string());
            if index + 1 == count {
                query.set("isLastPart", "1");
            }

            let request = resource.request(query)?.with_body(part);
            let response = self.dispatcher.execute(&request, cancel).await?;
            self.classifier.check(resource, response)?;
            debug!(index, "part stored");
        }

        Ok(name)
    }
}
