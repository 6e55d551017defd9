//! Validated value types shared by every call.

mod api_url;
mod request;
mod response;

pub use api_url::{ApiUrl, DEFAULT_HOST};
pub use request::{Method, QueryParams, Request};
pub use response::{RETRY_AFTER, Response};
