//! API base URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// Host of the production Diadoc API.
pub const DEFAULT_HOST: &str = "diadoc-api.kontur.ru";

/// A validated Diadoc API base URL.
///
/// This type ensures the URL is absolute, uses HTTPS (or HTTP for localhost),
/// and carries no path, so every endpoint path can be appended verbatim.
///
/// # Example
///
/// ```
/// use diadoc_core::ApiUrl;
///
/// let api = ApiUrl::new("https://diadoc-api.kontur.ru").unwrap();
/// assert_eq!(
///     api.endpoint_url("/GetBox").unwrap().as_str(),
///     "https://diadoc-api.kontur.ru/GetBox"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiUrl(Url);

impl ApiUrl {
    /// Create a new API URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::ApiUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// Create an API URL from a bare host name or a full URL.
    ///
    /// A value without a scheme is treated as an HTTPS host, matching the
    /// `DIADOC_HOST` convention (`diadoc-api.kontur.ru`).
    pub fn from_host(host: impl AsRef<str>) -> Result<Self, Error> {
        let host = host.as_ref().trim();
        if host.contains("://") {
            Self::new(host)
        } else {
            Self::new(format!("https://{}", host))
        }
    }

    /// Returns the absolute URL for an endpoint path.
    ///
    /// The path must begin with `/`.
    pub fn endpoint_url(&self, path: &str) -> Result<Url, Error> {
        if !path.starts_with('/') {
            return Err(InvalidInputError::Path {
                value: path.to_string(),
                reason: "must begin with '/'".to_string(),
            }
            .into());
        }

        let mut url = self.0.clone();
        url.set_path(path);
        Ok(url)
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        // HTTPS only, plain HTTP is accepted for local test servers
        let scheme = url.scheme();
        let is_localhost = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "[::1]");

        if scheme != "https" && !(scheme == "http" && is_localhost) {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must use HTTPS (HTTP allowed only for localhost)".to_string(),
            }
            .into());
        }

        if url.host_str().is_none() {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        if url.path() != "/" && !url.path().is_empty() {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must not carry a path".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl Default for ApiUrl {
    fn default() -> Self {
        Self(Url::parse(&format!("https://{}", DEFAULT_HOST)).expect("default host is a valid URL"))
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ApiUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_host(s)
    }
}

impl Serialize for ApiUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for ApiUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ApiUrl::new(&s).map_err(serde::de::Error::custom)
    }
}
