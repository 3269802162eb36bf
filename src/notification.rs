//! Notification value object and priority enumeration.
//!
//! A [`Notification`] holds the fields of a single outbound message. It is a
//! plain value with no I/O; [`Connection`](crate::Connection) reads it when
//! building the request payload.

use crate::error::{ClientError, ClientResult};

/// Delivery urgency understood by the Pushover API.
///
/// The numeric wire values are fixed by the API:
/// - `-2` generates no notification or alert
/// - `-1` always sends as a quiet notification
/// - `1` displays as high priority and bypasses the user's quiet hours
/// - `2` additionally requires confirmation from the user
///
/// `0` and anything outside `[-2, 2]` are invalid; there is no variant for
/// them, so an invalid priority cannot be stored or sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Silent = -2,
    Quiet = -1,
    High = 1,
    Confirm = 2,
}

impl Priority {
    /// Returns the numeric wire value for this priority.
    pub fn value(self) -> i8 {
        self as i8
    }
}

impl TryFrom<i64> for Priority {
    type Error = ClientError;

    /// Validating entry point for caller-supplied integers.
    ///
    /// Fails at assignment time, never clamps.
    fn try_from(value: i64) -> ClientResult<Self> {
        match value {
            -2 => Ok(Priority::Silent),
            -1 => Ok(Priority::Quiet),
            1 => Ok(Priority::High),
            2 => Ok(Priority::Confirm),
            other => Err(ClientError::Validation {
                field: "priority".to_string(),
                reason: format!("Invalid priority: {other}"),
            }),
        }
    }
}

/// A single outbound message.
///
/// Constructed with the message text, then optionally enriched through the
/// chainable setters before being handed to
/// [`Connection::notify_user`](crate::Connection::notify_user).
///
/// Message content is not validated; an empty message is accepted and left
/// for the API to judge.
///
/// # Example
/// ```
/// use pushover_client::{Notification, Priority};
///
/// let notification = Notification::new("Backup finished")
///     .title("nightly job")
///     .url("https://status.example.com")
///     .url_title("status page")
///     .priority(Priority::High)
///     .sound("magic");
/// ```
#[derive(Debug, Clone)]
pub struct Notification {
    message: String,
    title: Option<String>,
    url: Option<String>,
    url_title: Option<String>,
    priority: Option<Priority>,
    timestamp: Option<i64>,
    sound: Option<String>,
}

impl Notification {
    /// Creates a notification with the given message text.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            title: None,
            url: None,
            url_title: None,
            priority: None,
            timestamp: None,
            sound: None,
        }
    }

    /// Sets the title shown above the message.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets a supplementary link shown with the notification.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the display label for the supplementary link.
    pub fn url_title(mut self, url_title: impl Into<String>) -> Self {
        self.url_title = Some(url_title.into());
        self
    }

    /// Sets the delivery priority.
    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the delivery priority from a raw integer.
    ///
    /// # Returns
    /// Err with validation details when the value is 0 or outside `[-2, 2]`;
    /// a previously stored priority is left unchanged in that case.
    pub fn set_priority_value(&mut self, value: i64) -> ClientResult<()> {
        self.priority = Some(Priority::try_from(value)?);
        Ok(())
    }

    /// Sets the message timestamp (seconds since epoch, caller supplied).
    pub fn timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Sets the name of the sound profile to play on delivery.
    pub fn sound(mut self, sound: impl Into<String>) -> Self {
        self.sound = Some(sound.into());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn get_title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn get_url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn get_url_title(&self) -> Option<&str> {
        self.url_title.as_deref()
    }

    pub fn get_priority(&self) -> Option<Priority> {
        self.priority
    }

    pub fn get_timestamp(&self) -> Option<i64> {
        self.timestamp
    }

    pub fn get_sound(&self) -> Option<&str> {
        self.sound.as_deref()
    }
}
