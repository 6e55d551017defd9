//! Request type.

use bytes::Bytes;
use std::fmt;

use crate::error::{Error, InvalidInputError};

/// HTTP method of a remote operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query parameters of a request.
///
/// Keys are unique: setting an existing key overwrites its value in place,
/// so the last write wins while the first insertion fixes the order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any previous value for the key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    /// Builder-style [`QueryParams::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Set a parameter only when the value is non-empty.
    ///
    /// Optional filters are omitted from the query rather than sent empty.
    pub fn with_non_empty(self, key: impl Into<String>, value: impl AsRef<str>) -> Self {
        let value = value.as_ref();
        if value.is_empty() {
            self
        } else {
            self.with(key, value)
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (k, v) in iter {
            params.set(k, v);
        }
        params
    }
}

/// A single call to the API: method, path, query and optional binary body.
///
/// Built once per logical call and never mutated afterwards; the
/// authorization header is attached to a copy at send time.
#[derive(Clone, PartialEq, Eq)]
pub struct Request {
    method: Method,
    path: String,
    query: QueryParams,
    body: Option<Bytes>,
    authorization: Option<String>,
}

impl Request {
    /// Create a request for an absolute endpoint path.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` does not begin with `/`.
    pub fn new(method: Method, path: impl Into<String>) -> Result<Self, Error> {
        let path = path.into();
        if !path.starts_with('/') {
            return Err(InvalidInputError::Path {
                value: path,
                reason: "must begin with '/'".to_string(),
            }
            .into());
        }

        Ok(Self {
            method,
            path,
            query: QueryParams::new(),
            body: None,
            authorization: None,
        })
    }

    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Return a copy carrying the given `Authorization` header value.
    pub fn authorized(&self, authorization: String) -> Self {
        Self {
            authorization: Some(authorization),
            ..self.clone()
        }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &QueryParams {
        &self.query
    }

    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    pub fn authorization(&self) -> Option<&str> {
        self.authorization.as_deref()
    }
}

// The authorization header carries the session token
impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("query", &self.query)
            .field("body_len", &self.body.as_ref().map(Bytes::len))
            .field(
                "authorization",
                &self.authorization.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_last_write_wins_in_first_position() {
        let mut params = QueryParams::new();
        params.set("boxId", "a");
        params.set("page", "1");
        params.set("boxId", "b");

        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs, vec![("boxId", "b"), ("page", "1")]);
    }

    #[test]
    fn query_skips_empty_optional_values() {
        let params = QueryParams::new()
            .with("myOrgId", "org")
            .with_non_empty("afterIndexKey", "");
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("afterIndexKey"), None);
    }

    #[test]
    fn request_requires_absolute_path() {
        assert!(Request::new(Method::Get, "GetBox").is_err());
        assert!(Request::new(Method::Get, "/GetBox").is_ok());
    }

    #[test]
    fn authorized_copy_leaves_original_untouched() {
        let request = Request::new(Method::Post, "/ShelfUpload")
            .unwrap()
            .with_body(vec![1u8, 2, 3]);
        let signed = request.authorized("DiadocAuth ddauth_api_client_id=x".to_string());

        assert_eq!(request.authorization(), None);
        assert!(signed.authorization().is_some());
        assert_eq!(signed.body(), request.body());
    }

    #[test]
    fn debug_hides_authorization() {
        let request = Request::new(Method::Get, "/GetBox")
            .unwrap()
            .authorized("DiadocAuth ddauth_token=secret".to_string());
        let debug = format!("{:?}", request);
        assert!(!debug.contains("secret"));
    }
}
