//! Payload splitting for chunked uploads.

use std::num::NonZeroUsize;

use bytes::Bytes;

/// Split a payload into consecutive parts of at most `part_size` bytes.
///
/// An empty payload yields exactly one empty part, so the upload still
/// registers its name. A payload whose length is a multiple of
/// `part_size` yields no trailing empty part. Parts share the payload's
/// buffer; nothing is copied.
pub fn split_parts(payload: &Bytes, part_size: NonZeroUsize) -> Vec<Bytes> {
    let part_size = part_size.get();
    if payload.is_empty() {
        return vec![Bytes::new()];
    }

    (0..payload.len())
        .step_by(part_size)
        .map(|start| payload.slice(start..payload.len().min(start + part_size)))
        .collect()
}
