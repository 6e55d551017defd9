//! Client configuration.

use std::time::Duration;

use diadoc_core::ApiUrl;

/// Default total request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connect timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default number of requests a polled operation may issue.
pub const DEFAULT_MAX_POLL_ATTEMPTS: u32 = 64;

/// Settings for [`DiadocClient`](crate::DiadocClient) and its transport.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base address, `https://diadoc-api.kontur.ru` by default.
    pub base_url: ApiUrl,
    /// Timeout for a whole request including the body.
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
    /// Upper bound on requests per polled call. `None` polls until the
    /// server answers or the caller cancels.
    pub max_poll_attempts: Option<u32>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: ApiUrl::default(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            user_agent: concat!("diadoc-rs/", env!("CARGO_PKG_VERSION")).to_string(),
            max_poll_attempts: Some(DEFAULT_MAX_POLL_ATTEMPTS),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: ApiUrl) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_poll_attempts(mut self, attempts: Option<u32>) -> Self {
        self.max_poll_attempts = attempts;
        self
    }
}
