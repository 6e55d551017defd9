//! Response type.

use bytes::Bytes;
use std::collections::HashMap;
use std::time::Duration;

use crate::error::{Error, ProtocolError};

/// Header carrying the server's wait hint, in whole seconds.
pub const RETRY_AFTER: &str = "retry-after";

/// A fully read HTTP response.
///
/// The body is read to completion by the transport, so holding a
/// `Response` never pins an open connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: u16,
    headers: HashMap<String, String>,
    body: Bytes,
}

impl Response {
    /// Create a response. Header names are matched case-insensitively.
    pub fn new<I, K, V>(status: u16, headers: I, body: impl Into<Bytes>) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let headers = headers
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_ascii_lowercase(), v.into()))
            .collect();

        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// A response with no headers.
    pub fn with_status(status: u16, body: impl Into<Bytes>) -> Self {
        Self::new(status, std::iter::empty::<(&str, String)>(), body)
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    pub fn is_no_content(&self) -> bool {
        self.status == 204
    }

    /// Whether the server reports a long-running operation as not done yet.
    ///
    /// Either a 204, or a success status that carries a wait hint.
    pub fn is_processing(&self) -> bool {
        self.is_no_content() || (self.is_success() && self.header(RETRY_AFTER).is_some())
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    pub fn into_body(self) -> Bytes {
        self.body
    }

    /// The body decoded as text, with invalid UTF-8 replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Parse the wait hint of a processing response.
    ///
    /// # Errors
    ///
    /// A missing or non-integer `Retry-After` is a protocol violation.
    pub fn wait_hint(&self, path: &str) -> Result<Duration, Error> {
        let value = self
            .header(RETRY_AFTER)
            .ok_or_else(|| ProtocolError::MissingWaitHint {
                path: path.to_string(),
            })?;

        let seconds: u64 = value
            .trim()
            .parse()
            .map_err(|_| ProtocolError::InvalidWaitHint {
                path: path.to_string(),
                value: value.to_string(),
            })?;

        Ok(Duration::from_secs(seconds))
    }
}
