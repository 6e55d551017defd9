//! Poll-until-ready for long-running server operations.

use tokio_util::sync::CancellationToken;
use tracing::{Span, debug, instrument};

use diadoc_core::error::ProtocolError;
use diadoc_core::{Request, Response, Result};

use crate::cancel;
use crate::dispatcher::Dispatcher;

/// Re-issues a request while the server reports it as still processing.
///
/// A processing answer must carry `Retry-After` with a whole number of
/// seconds; the poller sleeps that long and sends the identical request
/// again. Any other answer is terminal and returned as is.
#[derive(Debug, Clone)]
pub struct AsyncPoller {
    dispatcher: Dispatcher,
    max_attempts: Option<u32>,
    span: Span,
}

impl AsyncPoller {
    /// `max_attempts: None` polls until a terminal answer or cancellation.
    pub fn new(dispatcher: Dispatcher, max_attempts: Option<u32>) -> Self {
        Self {
            dispatcher,
            max_attempts,
            span: Span::none(),
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Poll `request` until the server answers with a terminal status.
    ///
    /// # Errors
    ///
    /// - [`ProtocolError::MissingWaitHint`] / [`ProtocolError::InvalidWaitHint`]
    ///   if a processing answer has no usable `Retry-After`
    /// - [`ProtocolError::PollBudgetExhausted`] once `max_attempts` requests
    ///   all came back processing
    /// - `Cancelled` if `cancel` fires during a request or a wait; the next
    ///   request is not sent
    #[instrument(
        parent = crate::span::parent(&self.span),
        skip_all,
        fields(path = request.path())
    )]
    pub async fn poll_until_ready(
        &self,
        request: &Request,
        cancel: &CancellationToken,
    ) -> Result<Response> {
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;
            let response = self.dispatcher.execute(request, cancel).await?;

            if !response.is_processing() {
                debug!(attempt, status = response.status(), "operation finished");
                return Ok(response);
            }

            let wait = response.wait_hint(request.path())?;

            if self.max_attempts.is_some_and(|max| attempt >= max) {
                return Err(ProtocolError::PollBudgetExhausted {
                    path: request.path().to_string(),
                    attempts: attempt,
                }
                .into());
            }

            debug!(attempt, wait_secs = wait.as_secs(), "still processing, waiting");
            cancel::sleep(cancel, wait).await?;
        }
    }
}
