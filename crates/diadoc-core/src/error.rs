//! Error types for the Diadoc client.
//!
//! One unified error type with explicit variants for transport,
//! authentication, classified API failures, unclassified API failures,
//! protocol violations and input validation.

use std::fmt;

use bytes::Bytes;
use thiserror::Error;

/// The unified error type for Diadoc operations.
///
/// Every variant propagates to the immediate caller. No failure is ever
/// converted into an empty success.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout, cancellation).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Authentication errors (login rejected, unauthorized after renewal).
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// A known non-success status for a given resource.
    #[error(transparent)]
    Classified(#[from] ClassifiedError),

    /// A non-success status the resource's table does not cover.
    #[error(transparent)]
    Unclassified(#[from] UnclassifiedError),

    /// Malformed or missing data required to continue the protocol.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Input validation errors (base URL, request path, header values).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Check if this error means the credentials or token were rejected.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Auth(_))
    }

    /// Check if this error is the result of caller cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Transport(TransportError::Cancelled))
    }

    /// The HTTP status code behind this error, if the server answered.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Classified(e) => Some(e.code),
            Error::Unclassified(e) => Some(e.code),
            Error::Auth(AuthError::LoginRejected { status, .. }) => Some(*status),
            Error::Auth(AuthError::Unauthorized { .. }) => Some(401),
            _ => None,
        }
    }
}

/// Transport-level errors. Never retried by the client.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// The caller cancelled the operation.
    #[error("operation cancelled")]
    Cancelled,

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The login call itself returned a non-success status.
    #[error("login rejected with status {status}: {}", String::from_utf8_lossy(.body))]
    LoginRejected { status: u16, body: Bytes },

    /// A call was still unauthorized after the session was renewed.
    #[error(
        "{path} is unauthorized after session renewal: {}",
        String::from_utf8_lossy(.body)
    )]
    Unauthorized { path: String, body: Bytes },

    /// An authenticated header was requested while no token is held.
    #[error("no session token; renew the session first")]
    MissingToken,
}

/// A known non-success status for a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedError {
    /// HTTP status code.
    pub code: u16,
    /// Name of the remote operation, e.g. `GetDepartment`.
    pub resource: String,
    /// Human-readable diagnostic for this (resource, code) pair.
    pub message: String,
    /// Raw response body, byte for byte.
    pub body: Bytes,
}

impl ClassifiedError {
    /// The body decoded for display; invalid UTF-8 is replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

impl fmt::Display for ClassifiedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {{{}}} {}", self.resource, self.code, self.message)?;
        if !self.body.is_empty() {
            write!(f, ":\n{}", self.text())?;
        }
        Ok(())
    }
}

impl std::error::Error for ClassifiedError {}

/// A non-success status that is not listed for the resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnclassifiedError {
    /// HTTP status code.
    pub code: u16,
    /// Name of the remote operation.
    pub resource: String,
    /// Raw response body, byte for byte.
    pub body: Bytes,
}

impl UnclassifiedError {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

impl fmt::Display for UnclassifiedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: unexpected status {}", self.resource, self.code)?;
        if !self.body.is_empty() {
            write!(f, ":\n{}", self.text())?;
        }
        Ok(())
    }
}

impl std::error::Error for UnclassifiedError {}

/// Protocol-level errors.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// A "processing" response carried no wait hint.
    #[error("{path} answered 'processing' without a Retry-After header")]
    MissingWaitHint { path: String },

    /// The wait hint was not a non-negative integer number of seconds.
    #[error("{path} answered 'processing' with an invalid Retry-After value '{value}'")]
    InvalidWaitHint { path: String, value: String },

    /// The server never completed within the poll budget.
    #[error("{path} still processing after {attempts} attempts")]
    PollBudgetExhausted { path: String, attempts: u32 },

    /// A payload could not be encoded or decoded.
    #[error("payload codec error: {message}")]
    Codec { message: String },
}

impl From<prost::DecodeError> for ProtocolError {
    fn from(err: prost::DecodeError) -> Self {
        ProtocolError::Codec {
            message: err.to_string(),
        }
    }
}

impl From<prost::DecodeError> for Error {
    fn from(err: prost::DecodeError) -> Self {
        Error::Protocol(ProtocolError::from(err))
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Invalid request path.
    #[error("invalid request path '{value}': {reason}")]
    Path { value: String, reason: String },

    /// A value cannot be carried in an HTTP header.
    #[error("invalid value for header {name}: {reason}")]
    Header { name: String, reason: String },

    /// No registered resource with this name.
    #[error("unknown resource '{name}'")]
    UnknownResource { name: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classified_display_matches_diagnostic_layout() {
        let err = ClassifiedError {
            code: 404,
            resource: "GetBox".to_string(),
            message: "Ящик не найден".to_string(),
            body: Bytes::from_static(b"box 42"),
        };
        assert_eq!(err.to_string(), "GetBox: {404} Ящик не найден:\nbox 42");
    }

    #[test]
    fn status_code_is_exposed_for_server_answers() {
        let err: Error = UnclassifiedError {
            code: 418,
            resource: "GetBox".to_string(),
            body: Bytes::new(),
        }
        .into();
        assert_eq!(err.status_code(), Some(418));
        assert!(!err.is_auth_error());

        let err: Error = TransportError::Cancelled.into();
        assert_eq!(err.status_code(), None);
        assert!(err.is_cancelled());
    }

    #[test]
    fn auth_errors_are_flagged() {
        let err: Error = AuthError::Unauthorized {
            path: "/GetBox".to_string(),
            body: Bytes::new(),
        }
        .into();
        assert!(err.is_auth_error());
        assert_eq!(err.status_code(), Some(401));
    }

    #[test]
    fn display_replaces_invalid_utf8_but_body_keeps_it() {
        let err = UnclassifiedError {
            code: 418,
            resource: "GetBox".to_string(),
            body: Bytes::from_static(&[b'o', b'k', 0xff]),
        };
        assert_eq!(err.to_string(), "GetBox: unexpected status 418:\nok\u{FFFD}");
        assert_eq!(err.body.as_ref(), &[b'o', b'k', 0xff]);
    }
}
