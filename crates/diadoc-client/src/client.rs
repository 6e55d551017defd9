//! High-level client facade.

use std::sync::Arc;

use bytes::Bytes;
use tokio_util::sync::CancellationToken;
use tracing::{Span, debug, info, instrument};

use diadoc_core::error::InvalidInputError;
use diadoc_core::{
    Completion, Credentials, ErrorClassifier, QueryParams, Resource, Result, SessionToken,
    Transport,
};

use crate::config::ClientConfig;
use crate::dispatcher::Dispatcher;
use crate::poller::AsyncPoller;
use crate::session::Session;
use crate::transport::HttpTransport;
use crate::uploader::ChunkedUploader;

/// A client for the Diadoc API.
///
/// Every operation takes a [`CancellationToken`]; cancelling it aborts the
/// request in flight or the poll wait and yields `Cancelled`. Payloads are
/// opaque bytes in both directions.
///
/// Clones share one [`Session`], so concurrent calls renew it at most once.
#[derive(Debug, Clone)]
pub struct DiadocClient {
    session: Session,
    transport: Arc<dyn Transport>,
    dispatcher: Dispatcher,
    poller: AsyncPoller,
    uploader: ChunkedUploader,
    classifier: ErrorClassifier,
    max_poll_attempts: Option<u32>,
}

impl DiadocClient {
    /// Create a client over HTTP without contacting the server.
    ///
    /// With no `token`, the first call logs in.
    pub fn new(
        config: ClientConfig,
        credentials: Credentials,
        token: Option<SessionToken>,
    ) -> Result<Self> {
        let transport: Arc<dyn Transport> = Arc::new(HttpTransport::new(&config)?);
        Ok(Self::with_transport(
            transport,
            credentials,
            token,
            config.max_poll_attempts,
        ))
    }

    /// Create a client over any [`Transport`].
    pub fn with_transport(
        transport: Arc<dyn Transport>,
        credentials: Credentials,
        token: Option<SessionToken>,
        max_poll_attempts: Option<u32>,
    ) -> Self {
        let session = Session::new(credentials, transport.clone(), token);
        Self::assemble(session, transport, max_poll_attempts, Span::none())
    }

    /// Create a client and make sure it holds a token.
    ///
    /// Without a bootstrap token this logs in immediately, so bad
    /// credentials fail here rather than on the first call. A bootstrap
    /// token is trusted until the server rejects it.
    #[instrument(skip_all, fields(login = credentials.login(), bootstrap = bootstrap.is_some()))]
    pub async fn connect(
        config: ClientConfig,
        credentials: Credentials,
        bootstrap: Option<SessionToken>,
        cancel: &CancellationToken,
    ) -> Result<Self> {
        let eager = bootstrap.is_none();
        let client = Self::new(config, credentials, bootstrap)?;
        if eager {
            client.session.renew(cancel).await?;
        }
        info!("connected");
        Ok(client)
    }

    /// Emit the events of every component inside `span`.
    pub fn with_span(self, span: Span) -> Self {
        Self::assemble(self.session, self.transport, self.max_poll_attempts, span)
    }

    fn assemble(
        session: Session,
        transport: Arc<dyn Transport>,
        max_poll_attempts: Option<u32>,
        span: Span,
    ) -> Self {
        let session = session.with_span(span.clone());
        let dispatcher =
            Dispatcher::new(session.clone(), transport.clone()).with_span(span.clone());
        let poller =
            AsyncPoller::new(dispatcher.clone(), max_poll_attempts).with_span(span.clone());
        let uploader = ChunkedUploader::new(dispatcher.clone()).with_span(span);

        Self {
            session,
            transport,
            dispatcher,
            poller,
            uploader,
            classifier: ErrorClassifier::new(),
            max_poll_attempts,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn classifier(&self) -> &ErrorClassifier {
        &self.classifier
    }

    /// Call a registered resource once and return its body.
    ///
    /// A 2xx answer yields the body, anything else is classified against
    /// the resource's status table.
    pub async fn call(
        &self,
        resource: &str,
        params: QueryParams,
        body: Option<Bytes>,
        cancel: &CancellationToken,
    ) -> Result<Bytes> {
        let resource = Resource::get(resource)?;
        let request = build(resource, params, body)?;
        let response = self.dispatcher.execute(&request, cancel).await?;
        Ok(self.classifier.check(resource, response)?.into_body())
    }

    /// Call a polled resource, waiting out "processing" answers.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if the resource does not complete asynchronously.
    pub async fn call_polled(
        &self,
        resource: &str,
        params: QueryParams,
        body: Option<Bytes>,
        cancel: &CancellationToken,
    ) -> Result<Bytes> {
        let resource = Resource::get(resource)?;
        if resource.completion() != Completion::Polled {
            return Err(InvalidInputError::Other {
                message: format!("{} is not a polled resource", resource.name()),
            }
            .into());
        }

        let request = build(resource, params, body)?;
        let response = self.poller.poll_until_ready(&request, cancel).await?;
        Ok(self.classifier.check(resource, response)?.into_body())
    }

    /// The current user, as an encoded `User` record.
    pub async fn get_my_user(&self, cancel: &CancellationToken) -> Result<Bytes> {
        self.call("GetMyUser", QueryParams::new(), None, cancel).await
    }

    /// The newest event of a box, or `None` when the box has no events.
    #[instrument(skip(self, cancel))]
    pub async fn get_last_event(
        &self,
        box_id: &str,
        cancel: &CancellationToken,
    ) -> Result<Option<Bytes>> {
        let resource = Resource::get("GetLastEvent")?;
        let request = resource.request(QueryParams::new().with("boxId", box_id))?;
        let response = self.dispatcher.execute(&request, cancel).await?;

        if response.is_no_content() {
            debug!("box has no events");
            return Ok(None);
        }
        Ok(Some(self.classifier.check(resource, response)?.into_body()))
    }

    /// Events of a box after `after_index_key`, or from the start when it
    /// is empty.
    pub async fn get_new_events(
        &self,
        box_id: &str,
        after_index_key: &str,
        cancel: &CancellationToken,
    ) -> Result<Bytes> {
        let params = QueryParams::new()
            .with("boxId", box_id)
            .with_non_empty("afterIndexKey", after_index_key);
        self.call("GetNewEvents", params, None, cancel).await
    }

    /// Result of a counteragent invitation task.
    pub async fn acquire_counteragent_result(
        &self,
        task_id: &str,
        cancel: &CancellationToken,
    ) -> Result<Bytes> {
        let params = QueryParams::new().with("taskId", task_id);
        self.call_polled("AcquireCounteragentResult", params, None, cancel)
            .await
    }

    /// A generated print form, waiting until the server has rendered it.
    pub async fn get_generated_print_form(
        &self,
        print_form_id: &str,
        cancel: &CancellationToken,
    ) -> Result<Bytes> {
        let params = QueryParams::new().with("printFormId", print_form_id);
        self.call_polled("GetGeneratedPrintForm", params, None, cancel)
            .await
    }

    /// Store `payload` on the shelf and return its name.
    pub async fn shelf_upload(
        &self,
        payload: impl Into<Bytes>,
        cancel: &CancellationToken,
    ) -> Result<String> {
        self.uploader.upload(payload.into(), cancel).await
    }

    /// Fetch a file previously stored on the shelf.
    pub async fn shelf_download(
        &self,
        name_on_shelf: &str,
        cancel: &CancellationToken,
    ) -> Result<Bytes> {
        let params = QueryParams::new().with("nameOnShelf", name_on_shelf);
        self.call("ShelfDownload", params, None, cancel).await
    }
}

fn build(
    resource: &Resource,
    params: QueryParams,
    body: Option<Bytes>,
) -> Result<diadoc_core::Request> {
    let request = resource.request(params)?;
    Ok(match body {
        Some(body) => request.with_body(body),
        None => request,
    })
}
