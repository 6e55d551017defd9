//! Session token ownership and renewal.

use std::fmt;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tokio_util::sync::CancellationToken;
use tracing::{Span, debug, info, instrument};

use diadoc_core::error::{AuthError, ProtocolError};
use diadoc_core::resources::AUTHENTICATE;
use diadoc_core::wire::LoginPassword;
use diadoc_core::{Credentials, QueryParams, Resource, Result, SessionToken, Transport};

use crate::cancel;

/// Scheme of every `Authorization` header sent to the API.
pub const AUTH_SCHEME: &str = "DiadocAuth";

/// An authenticated connection to the API.
///
/// Owns the credentials and the current session token. Cheap to clone:
/// clones share the token, so a renewal by one is seen by all.
///
/// # Thread Safety
///
/// Renewals are single-flight. Callers that observed the same stale token
/// queue on one lock; the first renews and the rest reuse its result.
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
    span: Span,
}

struct SessionInner {
    credentials: Credentials,
    transport: Arc<dyn Transport>,
    state: RwLock<TokenState>,
    renewal: Mutex<()>,
}

struct TokenState {
    token: Option<SessionToken>,
    /// Bumped on every successful renewal.
    generation: u64,
}

impl Session {
    /// Create a session.
    ///
    /// With `token: None` the first dispatched call renews before sending.
    /// With a caller-supplied token renewal is deferred until the server
    /// first answers 401.
    pub fn new(
        credentials: Credentials,
        transport: Arc<dyn Transport>,
        token: Option<SessionToken>,
    ) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                credentials,
                transport,
                state: RwLock::new(TokenState {
                    token,
                    generation: 0,
                }),
                renewal: Mutex::new(()),
            }),
            span: Span::none(),
        }
    }

    /// Emit this session's events inside `span`.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn credentials(&self) -> &Credentials {
        &self.inner.credentials
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.inner.transport
    }

    /// Export the current token, e.g. for persistence.
    pub async fn token(&self) -> Option<SessionToken> {
        self.inner.state.read().await.token.clone()
    }

    pub async fn has_token(&self) -> bool {
        self.inner.state.read().await.token.is_some()
    }

    /// Build the `Authorization` header value.
    ///
    /// The login call carries only the client identifier. Every other call
    /// carries the token too.
    ///
    /// # Errors
    ///
    /// [`AuthError::MissingToken`] if a non-login header is requested while
    /// no token is held. Renew first.
    pub async fn authorization_header(&self, is_login: bool) -> Result<String> {
        if is_login {
            return Ok(self.login_header());
        }
        self.authorization()
            .await
            .0
            .ok_or_else(|| AuthError::MissingToken.into())
    }

    /// Current token header, if any, with the generation it belongs to.
    pub(crate) async fn authorization(&self) -> (Option<String>, u64) {
        let state = self.inner.state.read().await;
        let header = state.token.as_ref().map(|token| {
            format!(
                "{} ddauth_api_client_id={},ddauth_token={}",
                AUTH_SCHEME,
                self.inner.credentials.client_id(),
                token.as_str()
            )
        });
        (header, state.generation)
    }

    fn login_header(&self) -> String {
        format!(
            "{} ddauth_api_client_id={}",
            AUTH_SCHEME,
            self.inner.credentials.client_id()
        )
    }

    /// Log in again and replace the token unconditionally.
    ///
    /// # Errors
    ///
    /// [`AuthError::LoginRejected`] if the login call answers non-2xx, or a
    /// transport error. The token stays cleared after a failure.
    pub async fn renew(&self, cancel: &CancellationToken) -> Result<()> {
        let _guard = self.lock_renewal(cancel).await?;
        self.login(cancel).await
    }

    /// Renew unless someone already did since `seen` was observed, and
    /// return the token header that is current afterwards.
    ///
    /// The header is read while the renewal lock is still held, so a
    /// renewal started by another caller cannot clear it in between.
    pub(crate) async fn renew_after(
        &self,
        seen: u64,
        cancel: &CancellationToken,
    ) -> Result<String> {
        let _guard = self.lock_renewal(cancel).await?;

        if let (Some(header), generation) = self.authorization().await {
            if generation != seen {
                debug!("session already renewed by a concurrent call");
                return Ok(header);
            }
        }

        self.login(cancel).await?;
        self.authorization()
            .await
            .0
            .ok_or_else(|| AuthError::MissingToken.into())
    }

    async fn lock_renewal(
        &self,
        cancel: &CancellationToken,
    ) -> Result<tokio::sync::MutexGuard<'_, ()>> {
        cancel::run(cancel, async { Ok(self.inner.renewal.lock().await) }).await
    }

    #[instrument(
        parent = crate::span::parent(&self.span),
        skip_all,
        fields(login = %self.inner.credentials.login())
    )]
    async fn login(&self, cancel: &CancellationToken) -> Result<()> {
        info!("renewing session token");
        self.inner.state.write().await.token = None;

        let body = LoginPassword::from_credentials(&self.inner.credentials).to_bytes();
        let request = Resource::get(AUTHENTICATE)?
            .request(QueryParams::new().with("type", "password"))?
            .with_body(body)
            .authorized(self.login_header());

        let response = cancel::run(cancel, self.inner.transport.send(&request)).await?;
        if !response.is_success() {
            return Err(AuthError::LoginRejected {
                status: response.status(),
                body: response.into_body(),
            }
            .into());
        }

        let token = std::str::from_utf8(response.body()).map_err(|e| ProtocolError::Codec {
            message: format!("login token is not valid UTF-8: {e}"),
        })?;

        let mut state = self.inner.state.write().await;
        state.token = Some(SessionToken::new(token));
        state.generation += 1;
        debug!(generation = state.generation, "session token renewed");
        Ok(())
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("login", &self.inner.credentials.login())
            .field("base_url", &self.inner.transport.base_url().as_str())
            .field("token", &"[REDACTED]")
            .finish()
    }
}
