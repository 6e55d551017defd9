//! Scripted in-memory transport shared by the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use diadoc_client::{DiadocClient, Dispatcher, Session};
use diadoc_core::error::TransportError;
use diadoc_core::resources::AUTHENTICATE_PATH;
use diadoc_core::{ApiUrl, Credentials, Request, Response, Result, SessionToken, Transport};
use tokio::time::Instant;

type Handler = Box<dyn Fn(&Request) -> Result<Response> + Send + Sync>;

/// A transport that answers logins itself and replays a script for
/// everything else.
///
/// Logins answer 200 with `token-<n>` (n counting from 1) unless a
/// different login status is configured. Other requests take the next
/// scripted response, then fall back to the handler.
pub struct ScriptedTransport {
    base_url: ApiUrl,
    login_status: u16,
    logins: AtomicUsize,
    script: Mutex<VecDeque<Result<Response>>>,
    fallback: Option<Handler>,
    sent: Mutex<Vec<(Instant, Request)>>,
    yield_on_send: bool,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self {
            base_url: ApiUrl::default(),
            login_status: 200,
            logins: AtomicUsize::new(0),
            script: Mutex::new(VecDeque::new()),
            fallback: None,
            sent: Mutex::new(Vec::new()),
            yield_on_send: false,
        }
    }

    /// Queue responses for non-login requests, in order.
    pub fn script(self, responses: impl IntoIterator<Item = Response>) -> Self {
        self.script
            .lock()
            .unwrap()
            .extend(responses.into_iter().map(Ok));
        self
    }

    /// Queue a transport failure for the next non-login request.
    pub fn fail_next(self, err: TransportError) -> Self {
        self.script.lock().unwrap().push_back(Err(err.into()));
        self
    }

    pub fn fallback(
        mut self,
        handler: impl Fn(&Request) -> Result<Response> + Send + Sync + 'static,
    ) -> Self {
        self.fallback = Some(Box::new(handler));
        self
    }

    pub fn login_status(mut self, status: u16) -> Self {
        self.login_status = status;
        self
    }

    /// Yield to the scheduler inside every send, so concurrent callers interleave.
    pub fn interleaved(mut self) -> Self {
        self.yield_on_send = true;
        self
    }

    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn logins(&self) -> usize {
        self.logins.load(Ordering::SeqCst)
    }

    /// Every request sent, logins included.
    pub fn sent(&self) -> Vec<Request> {
        self.sent.lock().unwrap().iter().map(|(_, r)| r.clone()).collect()
    }

    /// Non-login requests with the instant each was sent.
    pub fn calls(&self) -> Vec<(Instant, Request)> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, r)| r.path() != AUTHENTICATE_PATH)
            .cloned()
            .collect()
    }
}

impl fmt::Debug for ScriptedTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptedTransport")
            .field("logins", &self.logins())
            .finish()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    fn base_url(&self) -> &ApiUrl {
        &self.base_url
    }

    async fn send(&self, request: &Request) -> Result<Response> {
        self.sent
            .lock()
            .unwrap()
            .push((Instant::now(), request.clone()));

        if self.yield_on_send {
            tokio::task::yield_now().await;
        }

        if request.path() == AUTHENTICATE_PATH {
            let n = self.logins.fetch_add(1, Ordering::SeqCst) + 1;
            return Ok(if self.login_status == 200 {
                Response::with_status(200, format!("token-{n}"))
            } else {
                Response::with_status(self.login_status, "bad credentials")
            });
        }

        if let Some(next) = self.script.lock().unwrap().pop_front() {
            return next;
        }

        match &self.fallback {
            Some(handler) => handler(request),
            None => panic!("unscripted request to {}", request.path()),
        }
    }
}

pub fn credentials() -> Credentials {
    Credentials::new("user@example.com", "secret", "client-42")
}

pub fn session(transport: &Arc<ScriptedTransport>, token: Option<&str>) -> Session {
    Session::new(credentials(), transport.clone(), token.map(SessionToken::new))
}

pub fn dispatcher(transport: &Arc<ScriptedTransport>, token: Option<&str>) -> Dispatcher {
    Dispatcher::new(session(transport, token), transport.clone())
}

pub fn client(transport: &Arc<ScriptedTransport>, token: Option<&str>) -> DiadocClient {
    DiadocClient::with_transport(
        transport.clone(),
        credentials(),
        token.map(SessionToken::new),
        Some(64),
    )
}

/// Header a call carries when authorized with `token`.
pub fn token_header(token: &str) -> String {
    format!("DiadocAuth ddauth_api_client_id=client-42,ddauth_token={token}")
}

pub fn ok(body: &'static str) -> Response {
    Response::with_status(200, body)
}

pub fn status(code: u16) -> Response {
    Response::with_status(code, format!("status {code}"))
}

pub fn processing(retry_after: &str) -> Response {
    Response::new(204, [("Retry-After", retry_after)], bytes::Bytes::new())
}
