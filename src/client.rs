use std::sync::LazyLock;
use std::time::Duration;

/// Shared HTTP client instance used by the production transport.
///
/// Initialized lazily on first access and reused across all [`Connection`]
/// instances, so repeated sends share TCP connections and DNS cache.
///
/// - 30s request timeout, 10s connect timeout
/// - Rustls for TLS, verification enabled
/// - `pushover-client/<version>` User-Agent
///
/// [`Connection`]: crate::Connection
pub static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        // Timeouts
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        // Connection pooling
        .pool_max_idle_per_host(4)
        .pool_idle_timeout(Duration::from_secs(90))
        .use_rustls_tls()
        .user_agent(concat!("pushover-client/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to build HTTP client")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_initialization() {
        // Access the client to ensure it initializes without panicking
        let _ = &*HTTP_CLIENT;
    }
}
