//! Poll-until-ready timing, backstop and cancellation.

mod common;

use std::time::Duration;

use common::*;
use diadoc_client::{AsyncPoller, CancellationToken};
use diadoc_core::error::ProtocolError;
use diadoc_core::{Error, Method, QueryParams, Request, Response};
use tokio::time::Instant;

/// Paused time advances straight to timer deadlines, up to tick rounding.
fn assert_waited(actual: Duration, expected: Duration) {
    assert!(
        actual >= expected && actual < expected + Duration::from_millis(10),
        "waited {actual:?}, expected {expected:?}"
    );
}

fn print_form() -> Request {
    Request::new(Method::Get, "/GetGeneratedPrintForm")
        .unwrap()
        .with_query(QueryParams::new().with("printFormId", "pf-1"))
}

#[tokio::test(start_paused = true)]
async fn waits_for_each_hint_then_returns_success() {
    let transport = ScriptedTransport::new()
        .script([processing("2"), processing("1"), ok("pdf")])
        .into_arc();
    let poller = AsyncPoller::new(dispatcher(&transport, Some("tok")), None);
    let start = Instant::now();

    let response = poller
        .poll_until_ready(&print_form(), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(response.text(), "pdf");
    assert_waited(start.elapsed(), Duration::from_secs(3));

    let calls = transport.calls();
    assert_eq!(calls.len(), 3);
    assert_waited(calls[1].0 - calls[0].0, Duration::from_secs(2));
    assert_waited(calls[2].0 - calls[1].0, Duration::from_secs(1));
    for (_, request) in &calls {
        assert_eq!(request.path(), "/GetGeneratedPrintForm");
        assert_eq!(request.query().get("printFormId"), Some("pf-1"));
    }
}

#[tokio::test(start_paused = true)]
async fn success_with_wait_hint_keeps_polling() {
    let transport = ScriptedTransport::new()
        .script([
            Response::new(200, [("Retry-After", "5")], bytes::Bytes::new()),
            ok("pdf"),
        ])
        .into_arc();
    let poller = AsyncPoller::new(dispatcher(&transport, Some("tok")), None);

    let response = poller
        .poll_until_ready(&print_form(), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(response.text(), "pdf");
    assert_eq!(transport.calls().len(), 2);
}

#[tokio::test]
async fn classified_failure_is_terminal() {
    let transport = ScriptedTransport::new().script([status(404)]).into_arc();
    let poller = AsyncPoller::new(dispatcher(&transport, Some("tok")), None);

    let response = poller
        .poll_until_ready(&print_form(), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
    assert_eq!(transport.calls().len(), 1);
}

#[tokio::test]
async fn missing_hint_is_protocol_error() {
    let transport = ScriptedTransport::new()
        .script([Response::with_status(204, bytes::Bytes::new())])
        .into_arc();
    let poller = AsyncPoller::new(dispatcher(&transport, Some("tok")), None);

    let err = poller
        .poll_until_ready(&print_form(), &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Protocol(ProtocolError::MissingWaitHint { .. })
    ));
    assert_eq!(transport.calls().len(), 1);
}

#[tokio::test]
async fn unparsable_hint_is_protocol_error() {
    let transport = ScriptedTransport::new()
        .script([processing("later")])
        .into_arc();
    let poller = AsyncPoller::new(dispatcher(&transport, Some("tok")), None);

    let err = poller
        .poll_until_ready(&print_form(), &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Protocol(ProtocolError::InvalidWaitHint { ref value, .. }) if value == "later"
    ));
}

#[tokio::test(start_paused = true)]
async fn budget_bounds_the_loop() {
    let transport = ScriptedTransport::new()
        .fallback(|_| Ok(processing("1")))
        .into_arc();
    let poller = AsyncPoller::new(dispatcher(&transport, Some("tok")), Some(3));

    let err = poller
        .poll_until_ready(&print_form(), &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Protocol(ProtocolError::PollBudgetExhausted { attempts: 3, .. })
    ));
    assert_eq!(transport.calls().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn cancel_during_wait_stops_without_next_request() {
    let transport = ScriptedTransport::new()
        .script([processing("60"), ok("pdf")])
        .into_arc();
    let poller = AsyncPoller::new(dispatcher(&transport, Some("tok")), None);
    let cancel = CancellationToken::new();

    let canceller = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(5)).await;
            cancel.cancel();
        })
    };

    let start = Instant::now();
    let err = poller
        .poll_until_ready(&print_form(), &cancel)
        .await
        .unwrap_err();
    canceller.await.unwrap();

    assert!(err.is_cancelled());
    assert_waited(start.elapsed(), Duration::from_secs(5));
    assert_eq!(transport.calls().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn renewal_inside_poll_loop() {
    let transport = ScriptedTransport::new()
        .script([processing("1"), status(401), ok("pdf")])
        .into_arc();
    let poller = AsyncPoller::new(dispatcher(&transport, Some("stale")), None);

    let response = poller
        .poll_until_ready(&print_form(), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(response.text(), "pdf");
    assert_eq!(transport.logins(), 1);
    assert_eq!(transport.calls().len(), 3);
}
