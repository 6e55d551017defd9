//! Chunked shelf upload: part count, order and the last-part flag.

mod common;

use bytes::Bytes;
use common::*;
use diadoc_client::{CancellationToken, ChunkedUploader, SHELF_PART_SIZE};
use diadoc_core::error::InvalidInputError;
use diadoc_core::{Error, Request};

fn uploader(transport: &std::sync::Arc<ScriptedTransport>, part_size: usize) -> ChunkedUploader {
    ChunkedUploader::new(dispatcher(transport, Some("tok")))
        .with_part_size(part_size)
        .unwrap()
}

fn uploads(transport: &ScriptedTransport) -> Vec<Request> {
    transport.calls().into_iter().map(|(_, r)| r).collect()
}

#[tokio::test]
async fn parts_are_sent_in_order_with_last_flag() {
    let transport = ScriptedTransport::new()
        .fallback(|_| Ok(ok("")))
        .into_arc();
    let payload = Bytes::from_static(b"0123456789");

    let name = uploader(&transport, 4)
        .upload(payload.clone(), &CancellationToken::new())
        .await
        .unwrap();

    assert!(name.starts_with("api-"));
    let parts = uploads(&transport);
    assert_eq!(parts.len(), 3);

    for (index, part) in parts.iter().enumerate() {
        assert_eq!(part.path(), "/ShelfUpload");
        assert_eq!(part.query().get("nameOnShelf"), Some(name.as_str()));
        assert_eq!(part.query().get("partIndex"), Some(index.to_string().as_str()));
        let last = index == parts.len() - 1;
        assert_eq!(part.query().get("isLastPart"), last.then_some("1"));
    }

    let joined: Vec<u8> = parts
        .iter()
        .flat_map(|p| p.body().unwrap().to_vec())
        .collect();
    assert_eq!(joined, payload.as_ref());
}

#[tokio::test]
async fn part_count_is_ceiling_of_length() {
    for (len, expected) in [(1, 1), (4, 1), (5, 2), (8, 2), (9, 3)] {
        let transport = ScriptedTransport::new()
            .fallback(|_| Ok(ok("")))
            .into_arc();

        uploader(&transport, 4)
            .upload(Bytes::from(vec![b'x'; len]), &CancellationToken::new())
            .await
            .unwrap();

        let parts = uploads(&transport);
        assert_eq!(parts.len(), expected, "len {len}");
        assert!(parts.iter().all(|p| !p.body().unwrap().is_empty()));
    }
}

#[tokio::test]
async fn empty_payload_registers_one_empty_part() {
    let transport = ScriptedTransport::new().script([ok("")]).into_arc();

    let name = uploader(&transport, 4)
        .upload(Bytes::new(), &CancellationToken::new())
        .await
        .unwrap();

    let parts = uploads(&transport);
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].query().get("nameOnShelf"), Some(name.as_str()));
    assert_eq!(parts[0].query().get("isLastPart"), Some("1"));
    assert!(parts[0].body().unwrap().is_empty());
}

#[tokio::test]
async fn failed_part_aborts_upload() {
    let transport = ScriptedTransport::new()
        .script([ok(""), status(403), ok("")])
        .into_arc();

    let err = uploader(&transport, 2)
        .upload(Bytes::from_static(b"abcdef"), &CancellationToken::new())
        .await
        .unwrap_err();

    match err {
        Error::Classified(e) => {
            assert_eq!(e.code, 403);
            assert_eq!(e.resource, "ShelfUpload");
        }
        other => panic!("expected classified error, got {other:?}"),
    }
    assert_eq!(uploads(&transport).len(), 2);
}

#[tokio::test]
async fn every_upload_gets_a_fresh_name() {
    let transport = ScriptedTransport::new()
        .fallback(|_| Ok(ok("")))
        .into_arc();
    let uploader = uploader(&transport, 4);
    let cancel = CancellationToken::new();

    let first = uploader.upload(Bytes::from_static(b"a"), &cancel).await.unwrap();
    let second = uploader.upload(Bytes::from_static(b"a"), &cancel).await.unwrap();

    assert_ne!(first, second);
}

#[test]
fn default_part_size_is_512_kib() {
    assert_eq!(SHELF_PART_SIZE, 524_288);
    let transport = ScriptedTransport::new().into_arc();
    let uploader = ChunkedUploader::new(dispatcher(&transport, None));
    assert_eq!(uploader.part_size(), SHELF_PART_SIZE);
}

#[tokio::test]
async fn zero_part_size_is_rejected() {
    let transport = ScriptedTransport::new().into_arc();

    let err = ChunkedUploader::new(dispatcher(&transport, Some("tok")))
        .with_part_size(0)
        .unwrap_err();

    assert!(matches!(err, Error::InvalidInput(InvalidInputError::Other { .. })));
    assert!(transport.sent().is_empty());
}
