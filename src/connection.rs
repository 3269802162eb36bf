//! Connection to the messages API.
//!
//! Holds the application credential, an optional default recipient, and the
//! record of the most recent completed exchange.

use crate::error::{ClientError, ClientResult};
use crate::notification::Notification;
use crate::payload::Payload;
use crate::transport::{HttpTransport, Transport};
use serde_json::Value;

/// Fixed endpoint of the Pushover messages API.
pub const DEFAULT_API_URL: &str = "https://api.pushover.net/1/messages.json";

/// Result record of one completed send call.
///
/// Returned by [`Connection::notify_user`] so callers own the outcome of
/// their own call; the connection additionally stores a copy for the
/// last-call accessors.
#[derive(Debug, Clone)]
pub struct SendOutcome {
    /// True iff the HTTP status was 200 and the body's `status` field was 1
    pub accepted: bool,
    /// Raw HTTP status code of the exchange
    pub status_code: u16,
    /// Decoded response body, preserved verbatim; `Value::Null` when the
    /// body was not valid JSON
    pub response: Value,
}

/// Client for sending notifications through the messages API.
///
/// One `Connection` carries one application token. A send call resolves its
/// recipient from the call's explicit user token or the connection's default,
/// performs a single form-encoded POST, and reports whether the API accepted
/// the message. No retry, queueing, or rate limiting.
///
/// # Example
/// ```ignore
/// use pushover_client::{Connection, Notification};
///
/// let mut connection = Connection::new("app-token", Some("user-token"));
/// let outcome = connection
///     .notify_user(&Notification::new("Backup finished"), None, None)
///     .await?;
/// if !outcome.accepted {
///     eprintln!("rejected: {:?}", outcome.response);
/// }
/// ```
pub struct Connection {
    application_token: String,
    default_user_token: Option<String>,
    endpoint: String,
    transport: Box<dyn Transport>,
    last_outcome: Option<SendOutcome>,
}

impl Connection {
    /// Creates a connection using the production HTTP transport.
    ///
    /// Token formats are not validated; both are opaque strings.
    ///
    /// # Arguments
    /// * `application_token` - Credential identifying the sending application
    /// * `default_user_token` - Recipient used when a call passes no explicit token
    pub fn new(
        application_token: impl Into<String>,
        default_user_token: Option<impl Into<String>>,
    ) -> Self {
        Self::with_transport(
            application_token,
            default_user_token,
            Box::new(HttpTransport),
        )
    }

    /// Creates a connection over a caller-supplied transport.
    ///
    /// This is the injection seam used by the tests and by embedders that
    /// route requests through their own HTTP stack.
    pub fn with_transport(
        application_token: impl Into<String>,
        default_user_token: Option<impl Into<String>>,
        transport: Box<dyn Transport>,
    ) -> Self {
        Self {
            application_token: application_token.into(),
            default_user_token: default_user_token.map(Into::into),
            endpoint: DEFAULT_API_URL.to_string(),
            transport,
            last_outcome: None,
        }
    }

    /// Overrides the target URL, e.g. for a self-hosted proxy.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn application_token(&self) -> &str {
        &self.application_token
    }

    pub fn default_user_token(&self) -> Option<&str> {
        self.default_user_token.as_deref()
    }

    /// Sends a notification to a user or one of the user's devices.
    ///
    /// Resolves the recipient (explicit `user_token` wins over the
    /// connection default), builds the payload, and performs one POST to the
    /// endpoint, waiting for the full response.
    ///
    /// # Returns
    /// - `Ok(outcome)` for every completed exchange; API-level rejection is
    ///   `outcome.accepted == false`, with the status code and decoded body
    ///   available for inspection.
    /// - `Err(ClientError::Configuration)` when no recipient token is
    ///   resolvable; checked before any transport invocation.
    /// - `Err(ClientError::Transport)` when the exchange could not complete;
    ///   the last-call record keeps its prior value.
    pub async fn notify_user(
        &mut self,
        notification: &Notification,
        user_token: Option<&str>,
        device_token: Option<&str>,
    ) -> ClientResult<SendOutcome> {
        let user_token = user_token
            .or(self.default_user_token.as_deref())
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ClientError::Configuration {
                message: "You must set a default user token or pass one to notify_user"
                    .to_string(),
            })?;

        let payload = Payload::build(
            &self.application_token,
            user_token,
            notification,
            device_token,
        );

        tracing::debug!(
            endpoint = %self.endpoint,
            transport = self.transport.name(),
            "Sending notification"
        );

        let response = self.transport.post_form(&self.endpoint, &payload).await?;

        let body = serde_json::from_str(&response.body).unwrap_or(Value::Null);
        let accepted = response.status_code == 200
            && body.get("status").and_then(Value::as_i64) == Some(1);

        if !accepted {
            tracing::warn!(
                status_code = response.status_code,
                response = %body,
                "Notification rejected by API"
            );
        }

        let outcome = SendOutcome {
            accepted,
            status_code: response.status_code,
            response: body,
        };
        self.last_outcome = Some(outcome.clone());

        Ok(outcome)
    }

    /// Returns the record of the most recent completed exchange.
    ///
    /// `None` before any completed call; a transport failure does not update
    /// the record.
    pub fn last_outcome(&self) -> Option<&SendOutcome> {
        self.last_outcome.as_ref()
    }

    /// Returns the HTTP status code of the most recent completed exchange.
    pub fn last_status_code(&self) -> Option<u16> {
        self.last_outcome.as_ref().map(|outcome| outcome.status_code)
    }

    /// Returns the decoded response body of the most recent completed exchange.
    pub fn last_response(&self) -> Option<&Value> {
        self.last_outcome.as_ref().map(|outcome| &outcome.response)
    }
}
