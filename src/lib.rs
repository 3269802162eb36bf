//! Minimal client for the Pushover push notification API.
//!
//! Builds a form-encoded payload from a [`Notification`]'s fields, performs
//! one POST to the messages endpoint per [`Connection::notify_user`] call,
//! and reports whether the API accepted the message. There is no queueing,
//! retry, batching, or persistence; delivery guarantees are whatever the
//! remote API provides.
//!
//! ```ignore
//! use pushover_client::{Connection, Notification, Priority};
//!
//! let mut connection = Connection::new("app-token", Some("user-token"));
//! let notification = Notification::new("Backup finished")
//!     .title("nightly job")
//!     .priority(Priority::High);
//!
//! let outcome = connection.notify_user(&notification, None, None).await?;
//! assert!(outcome.accepted);
//! ```

pub mod client;
pub mod connection;
pub mod error;
pub mod notification;
pub mod payload;
pub mod transport;

pub use connection::{Connection, SendOutcome, DEFAULT_API_URL};
pub use error::{ClientError, ClientResult};
pub use notification::{Notification, Priority};
pub use payload::Payload;
pub use transport::{HttpTransport, Transport, TransportResponse};
