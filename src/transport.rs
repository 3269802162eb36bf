//! Transport seam between [`Connection`](crate::Connection) and the network.
//!
//! The trait keeps the HTTP exchange behind an object-safe boundary so tests
//! can script responses and record invocations without touching the network.

use crate::client::HTTP_CLIENT;
use crate::error::ClientResult;
use crate::payload::Payload;
use async_trait::async_trait;

/// Raw result of one completed HTTP exchange.
///
/// Carries the status code and undecoded body; interpreting the body is the
/// caller's concern.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status_code: u16,
    pub body: String,
}

/// One blocking-until-complete form POST.
///
/// Implementations must be `Send + Sync` for use behind a `Box<dyn Transport>`.
/// A transport either completes the exchange (any status code counts as
/// completion) or fails with a transport-level error; it never interprets the
/// response.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `form` URL-encoded to `url` and waits for the full response.
    async fn post_form(&self, url: &str, form: &Payload<'_>) -> ClientResult<TransportResponse>;

    /// Returns the transport name for logging/debugging
    fn name(&self) -> &'static str;
}

/// Production transport over the shared reqwest client.
#[derive(Debug, Default, Clone)]
pub struct HttpTransport;

#[async_trait]
impl Transport for HttpTransport {
    async fn post_form(&self, url: &str, form: &Payload<'_>) -> ClientResult<TransportResponse> {
        let response = HTTP_CLIENT.post(url).form(form).send().await?;

        let status_code = response.status().as_u16();
        let body = response.text().await?;

        Ok(TransportResponse { status_code, body })
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
