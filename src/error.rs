use thiserror::Error;

/// Client-wide error type covering every failure mode that surfaces to callers.
///
/// API-level rejection (non-200 status, or a 200 body whose `status` field is
/// not 1) is deliberately *not* represented here: the call was made and
/// answered, so it is reported through [`SendOutcome::accepted`] instead.
///
/// [`SendOutcome::accepted`]: crate::connection::SendOutcome
#[derive(Error, Debug)]
pub enum ClientError {
    /// Validation error with field-specific details
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Configuration error raised before any network I/O is attempted
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// The HTTP exchange could not complete (DNS, connect, TLS, timeout)
    #[error("Transport error")]
    Transport {
        #[source]
        source: anyhow::Error,
    },
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        ClientError::Transport {
            source: anyhow::Error::new(error),
        }
    }
}

/// Type alias for Result with ClientError to simplify function signatures
pub type ClientResult<T> = Result<T, ClientError>;
