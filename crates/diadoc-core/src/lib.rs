//! diadoc-core - Core types and traits for the Diadoc API client.
//!
//! Nothing in this crate touches the network. It defines the request and
//! response shapes every call goes through, the [`Transport`] seam, the
//! unified [`Error`] type and the data-driven [`ErrorClassifier`].

pub mod chunk;
pub mod classifier;
pub mod credentials;
pub mod error;
pub mod resources;
pub mod tokens;
pub mod traits;
pub mod types;
pub mod wire;

pub use chunk::split_parts;
pub use classifier::ErrorClassifier;
pub use credentials::Credentials;
pub use error::Error;
pub use resources::{Completion, Resource};
pub use tokens::SessionToken;
pub use traits::Transport;
pub use types::{ApiUrl, Method, QueryParams, Request, Response};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
