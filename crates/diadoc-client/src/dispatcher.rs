//! Request dispatch with the single renew-and-retry on 401.

use std::sync::Arc;

use bytes::Bytes;
use tokio_util::sync::CancellationToken;
use tracing::{Span, debug, instrument, trace, warn};

use diadoc_core::error::AuthError;
use diadoc_core::resources::AUTHENTICATE_PATH;
use diadoc_core::{Method, QueryParams, Request, Response, Result, Transport};

use crate::cancel;
use crate::session::Session;

/// Sends requests on behalf of a [`Session`].
///
/// One logical call costs at most one renewal and two round-trips (plus the
/// renewal's own). Network failures are never retried. Statuses other than
/// 401 are returned untouched for the caller to classify.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    session: Session,
    transport: Arc<dyn Transport>,
    span: Span,
}

impl Dispatcher {
    pub fn new(session: Session, transport: Arc<dyn Transport>) -> Self {
        Self {
            session,
            transport,
            span: Span::none(),
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Build a request from its parts and [`execute`](Self::execute) it.
    pub async fn call(
        &self,
        method: Method,
        path: &str,
        params: QueryParams,
        body: Option<Bytes>,
        cancel: &CancellationToken,
    ) -> Result<Response> {
        let mut request = Request::new(method, path)?.with_query(params);
        if let Some(body) = body {
            request = request.with_body(body);
        }
        self.execute(&request, cancel).await
    }

    /// Send a prepared request, renewing the session at most once.
    ///
    /// # Errors
    ///
    /// [`AuthError::Unauthorized`] if the server still answers 401 after a
    /// renewal, login failures from the renewal itself, transport errors
    /// and [`Cancelled`](diadoc_core::error::TransportError::Cancelled).
    #[instrument(
        parent = crate::span::parent(&self.span),
        skip_all,
        fields(method = %request.method(), path = request.path())
    )]
    pub async fn execute(&self, request: &Request, cancel: &CancellationToken) -> Result<Response> {
        if request.path() == AUTHENTICATE_PATH {
            // The login call never renews, whatever it answers
            let header = self.session.authorization_header(true).await?;
            return self.send(&request.authorized(header), cancel).await;
        }

        // `renewal` holds the generation a 401 may still renew from
        let (current, seen) = self.session.authorization().await;
        let (mut header, mut renewal) = match current {
            Some(header) => (header, Some(seen)),
            None => {
                debug!("no session token, renewing before the first request");
                (self.session.renew_after(seen, cancel).await?, None)
            }
        };

        loop {
            let response = self.send(&request.authorized(header), cancel).await?;

            if !response.is_unauthorized() {
                return Ok(response);
            }

            let Some(seen) = renewal.take() else {
                return Err(AuthError::Unauthorized {
                    path: request.path().to_string(),
                    body: response.into_body(),
                }
                .into());
            };

            warn!("unauthorized, renewing session and retrying once");
            header = self.session.renew_after(seen, cancel).await?;
        }
    }

    async fn send(&self, request: &Request, cancel: &CancellationToken) -> Result<Response> {
        let response = cancel::run(cancel, self.transport.send(request)).await?;
        trace!(status = response.status(), "dispatched");
        Ok(response)
    }
}
