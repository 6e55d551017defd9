//! Binary records the session layer itself has to produce.
//!
//! Business payloads are opaque byte buffers to this crate. The only
//! record encoded here is the login request body.

use bytes::Bytes;
use prost::Message;

use crate::credentials::Credentials;

/// Login request body of `/V3/Authenticate?type=password`.
#[derive(Clone, PartialEq, Message)]
pub struct LoginPassword {
    #[prost(string, required, tag = "1")]
    pub login: String,
    #[prost(string, required, tag = "2")]
    pub password: String,
}

impl LoginPassword {
    pub fn from_credentials(credentials: &Credentials) -> Self {
        Self {
            login: credentials.login().to_string(),
            password: credentials.password().to_string(),
        }
    }

    /// Encode into the protobuf wire format.
    pub fn to_bytes(&self) -> Bytes {
        Bytes::from(self.encode_to_vec())
    }
}
