//! Transport trait.

use async_trait::async_trait;

use crate::types::{ApiUrl, Request, Response};
use crate::Result;

/// Issues exactly one HTTP round-trip.
///
/// A transport is stateless: it knows the base address and nothing about
/// sessions or retries. The response body must be read to completion and
/// the connection released before `send` returns, on every path.
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    /// Returns the base address every request path is resolved against.
    fn base_url(&self) -> &ApiUrl;

    /// Send a request and return the raw response, whatever its status.
    ///
    /// Only network-level failures are errors here. Non-success statuses
    /// are returned as responses for the caller to interpret.
    async fn send(&self, request: &Request) -> Result<Response>;
}
