//! diadoc-client - Session, retry and polling layer for the Diadoc API.
//!
//! Every remote call goes through the same pipeline:
//!
//! 1. [`Session`] holds credentials and the current token, and renews it
//!    at most once per logical call.
//! 2. [`Dispatcher`] attaches the authorization header, sends through a
//!    [`Transport`](diadoc_core::Transport) and retries once after a 401.
//! 3. [`AsyncPoller`] re-issues requests the server reports as still
//!    processing, honouring the `Retry-After` hint.
//! 4. [`ChunkedUploader`] stores large payloads on the shelf part by part.
//!
//! [`DiadocClient`] wires these together over an [`HttpTransport`].
//!
//! # Example
//!
//! ```no_run
//! use diadoc_client::{ClientConfig, DiadocClient};
//! use diadoc_core::Credentials;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> Result<(), diadoc_core::Error> {
//! let credentials = Credentials::new("user@example.com", "secret", "client-id");
//! let cancel = CancellationToken::new();
//! let client = DiadocClient::connect(ClientConfig::default(), credentials, None, &cancel).await?;
//!
//! let name = client.shelf_upload(b"payload".to_vec(), &cancel).await?;
//! println!("stored as {name}");
//! # Ok(())
//! # }
//! ```

mod cancel;
mod client;
mod config;
mod dispatcher;
mod poller;
mod session;
mod span;
mod transport;
mod uploader;

pub use client::DiadocClient;
pub use config::ClientConfig;
pub use dispatcher::Dispatcher;
pub use poller::AsyncPoller;
pub use session::{AUTH_SCHEME, Session};
pub use transport::HttpTransport;
pub use uploader::{ChunkedUploader, SHELF_PART_SIZE};

pub use tokio_util::sync::CancellationToken;
