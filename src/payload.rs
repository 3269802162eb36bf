//! Request payload construction for the messages API.
//!
//! Field names here are the exact wire names the API expects; do not rename.
//! Optional fields serialize only when present, so an unset field is omitted
//! from the form body entirely rather than sent empty.

use crate::notification::Notification;
use serde::Serialize;

/// Form-encoded body for one `POST /1/messages.json` call.
///
/// A pure function of the connection credentials, the notification, and the
/// per-call recipient tokens. Serialization through the transport's form
/// encoder performs all escaping.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Payload<'a> {
    pub token: &'a str,
    pub user: &'a str,
    pub message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<&'a str>,
    #[serde(rename = "urlTitle", skip_serializing_if = "Option::is_none")]
    pub url_title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound: Option<&'a str>,
}

impl<'a> Payload<'a> {
    /// Builds the payload for one send call.
    ///
    /// # Arguments
    /// * `application_token` - Credential identifying the sending application
    /// * `user_token` - Resolved recipient token
    /// * `notification` - The message and its optional fields
    /// * `device_token` - Optional token narrowing delivery to one device
    pub fn build(
        application_token: &'a str,
        user_token: &'a str,
        notification: &'a Notification,
        device_token: Option<&'a str>,
    ) -> Self {
        Self {
            token: application_token,
            user: user_token,
            message: notification.message(),
            device: device_token,
            title: notification.get_title(),
            url: notification.get_url(),
            url_title: notification.get_url_title(),
            priority: notification.get_priority().map(|p| p.value()),
            timestamp: notification.get_timestamp(),
            sound: notification.get_sound(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::Priority;
    use serde_json::Value;

    fn keys(payload: &Payload<'_>) -> Vec<String> {
        let value = serde_json::to_value(payload).unwrap();
        let Value::Object(map) = value else {
            panic!("payload must serialize to an object");
        };
        let mut keys: Vec<String> = map.keys().cloned().collect();
        keys.sort();
        keys
    }

    #[test]
    fn test_minimal_payload_has_only_required_fields() {
        let notification = Notification::new("hello");
        let payload = Payload::build("app-token", "user-token", &notification, None);

        assert_eq!(keys(&payload), vec!["message", "token", "user"]);
        assert_eq!(payload.token, "app-token");
        assert_eq!(payload.user, "user-token");
        assert_eq!(payload.message, "hello");
    }

    #[test]
    fn test_device_token_included_only_when_passed() {
        let notification = Notification::new("hello");

        let without = Payload::build("t", "u", &notification, None);
        assert!(!keys(&without).contains(&"device".to_string()));

        let with = Payload::build("t", "u", &notification, Some("iphone"));
        assert_eq!(with.device, Some("iphone"));
        assert!(keys(&with).contains(&"device".to_string()));
    }

    #[test]
    fn test_each_optional_notification_field_included_independently() {
        let cases: Vec<(Notification, &str, Value)> = vec![
            (Notification::new("m").title("t"), "title", Value::from("t")),
            (
                Notification::new("m").url("https://example.com"),
                "url",
                Value::from("https://example.com"),
            ),
            (
                Notification::new("m").url_title("example"),
                "urlTitle",
                Value::from("example"),
            ),
            (
                Notification::new("m").priority(Priority::Confirm),
                "priority",
                Value::from(2),
            ),
            (
                Notification::new("m").timestamp(1_700_000_000),
                "timestamp",
                Value::from(1_700_000_000),
            ),
            (
                Notification::new("m").sound("magic"),
                "sound",
                Value::from("magic"),
            ),
        ];

        for (notification, field, expected) in cases {
            let payload = Payload::build("t", "u", &notification, None);
            let value = serde_json::to_value(&payload).unwrap();
            assert_eq!(value[field], expected, "field {field} should be included");
            // Exactly one optional field plus the three required ones.
            assert_eq!(keys(&payload).len(), 4, "field {field}");
        }
    }

    #[test]
    fn test_wire_names_and_form_encoding() {
        let notification = Notification::new("deploy done")
            .title("ci")
            .url("https://ci.example.com")
            .url_title("build log")
            .priority(Priority::Quiet)
            .timestamp(1_700_000_000)
            .sound("bike");
        let payload = Payload::build("app", "user", &notification, Some("dev"));

        let encoded = serde_urlencoded::to_string(&payload).unwrap();
        assert_eq!(
            encoded,
            "token=app&user=user&message=deploy+done&device=dev&title=ci\
             &url=https%3A%2F%2Fci.example.com&urlTitle=build+log\
             &priority=-1&timestamp=1700000000&sound=bike"
        );
    }

    #[test]
    fn test_silent_priority_serializes_negative_wire_value() {
        let notification = Notification::new("m").priority(Priority::Silent);
        let payload = Payload::build("t", "u", &notification, None);
        assert_eq!(payload.priority, Some(-2));
    }
}
