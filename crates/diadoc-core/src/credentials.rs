//! Login credentials type.

use std::fmt;

/// Credentials for a Diadoc API client instance.
///
/// Holds the user login and password together with the API client
/// identifier issued to the integrating application. Immutable once
/// created.
///
/// # Security
///
/// The password is never exposed in Debug output to prevent accidental logging.
///
/// # Example
///
/// ```
/// use diadoc_core::Credentials;
///
/// let creds = Credentials::new("user@example.com", "secret", "my-client-id");
/// assert_eq!(creds.login(), "user@example.com");
/// assert_eq!(creds.client_id(), "my-client-id");
/// ```
#[derive(Clone)]
pub struct Credentials {
    login: String,
    password: String,
    client_id: String,
}

impl Credentials {
    /// Create new credentials.
    ///
    /// # Arguments
    ///
    /// * `login` - The user login (usually an e-mail address)
    /// * `password` - The user password
    /// * `client_id` - The `ddauth_api_client_id` of the integrating application
    pub fn new(
        login: impl Into<String>,
        password: impl Into<String>,
        client_id: impl Into<String>,
    ) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
            client_id: client_id.into(),
        }
    }

    /// Returns the login.
    pub fn login(&self) -> &str {
        &self.login
    }

    /// Returns the API client identifier.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Returns the password.
    ///
    /// # Security
    ///
    /// Use this only when building the login payload.
    /// Never log or display this value.
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("password", &"[REDACTED]")
            .field("client_id", &self.client_id)
            .finish()
    }
}
