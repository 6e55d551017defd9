//! reqwest-backed transport.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use tracing::{debug, instrument, trace};

use diadoc_core::error::{InvalidInputError, TransportError};
use diadoc_core::{ApiUrl, Error, Method, Request, Response, Result, Transport};

use crate::config::ClientConfig;

/// HTTP transport over a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: ApiUrl,
}

impl HttpTransport {
    /// Build a transport from the timeouts and base address in `config`.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(transport_error)?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    fn method(method: Method) -> reqwest::Method {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn base_url(&self) -> &ApiUrl {
        &self.base_url
    }

    #[instrument(skip_all, fields(method = %request.method(), path = request.path()))]
    async fn send(&self, request: &Request) -> Result<Response> {
        let mut url = self.base_url.endpoint_url(request.path())?;
        if !request.query().is_empty() {
            url.query_pairs_mut().extend_pairs(request.query().iter());
        }
        debug!("sending request");
        trace!(?request, "request details");

        let mut builder = self
            .client
            .request(Self::method(request.method()), url.as_str());

        if let Some(authorization) = request.authorization() {
            let value =
                HeaderValue::from_str(authorization).map_err(|e| InvalidInputError::Header {
                    name: AUTHORIZATION.as_str().to_string(),
                    reason: e.to_string(),
                })?;
            builder = builder.header(AUTHORIZATION, value);
        }

        if let Some(body) = request.body() {
            builder = builder
                .header(CONTENT_TYPE, "application/octet-stream")
                .body(body.clone());
        }

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let headers: Vec<(String, String)> = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();

        // Reading to the end hands the connection back to the pool
        let body = response.bytes().await.map_err(transport_error)?;
        trace!(status, body_len = body.len(), "response received");

        Ok(Response::new(status, headers, body))
    }
}

/// Map a reqwest failure onto the transport taxonomy.
pub(crate) fn transport_error(err: reqwest::Error) -> Error {
    let message = err.to_string();
    let err = if err.is_timeout() {
        TransportError::Timeout { message }
    } else if err.is_connect() {
        TransportError::Connection { message }
    } else {
        TransportError::Http { message }
    };
    err.into()
}
