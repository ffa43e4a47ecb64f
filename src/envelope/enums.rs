//! Message type tags carried in the envelope's `message` field.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome class reported back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Notification {
    #[serde(rename = "notification:info")]
    Info,
    #[serde(rename = "notification:error")]
    Error,
}

impl Notification {
    pub fn as_str(self) -> &'static str {
        match self {
            Notification::Info => "notification:info",
            Notification::Error => "notification:error",
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Message type tag of an inbound envelope.
///
/// Tags the service does not know are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MessageKind {
    OrderNew,
    Notification(Notification),
    Other(String),
}

impl MessageKind {
    pub fn as_str(&self) -> &str {
        match self {
            MessageKind::OrderNew => "order:new",
            MessageKind::Notification(n) => n.as_str(),
            MessageKind::Other(s) => s,
        }
    }
}

impl From<String> for MessageKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "order:new" => MessageKind::OrderNew,
            "notification:info" => MessageKind::Notification(Notification::Info),
            "notification:error" => MessageKind::Notification(Notification::Error),
            _ => MessageKind::Other(s),
        }
    }
}

impl From<&str> for MessageKind {
    fn from(s: &str) -> Self {
        MessageKind::from(s.to_string())
    }
}

impl From<MessageKind> for String {
    fn from(kind: MessageKind) -> Self {
        match kind {
            MessageKind::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_wire_names() {
        assert_eq!(
            serde_json::to_string(&Notification::Info).unwrap(),
            "\"notification:info\""
        );
        assert_eq!(
            serde_json::to_string(&Notification::Error).unwrap(),
            "\"notification:error\""
        );
    }

    #[test]
    fn known_tags_are_recognised() {
        assert_eq!(MessageKind::from("order:new"), MessageKind::OrderNew);
        assert_eq!(
            MessageKind::from("notification:error"),
            MessageKind::Notification(Notification::Error)
        );
    }

    #[test]
    fn unknown_tag_is_carried_verbatim() {
        let kind: MessageKind = serde_json::from_str("\"shipment:confirm\"").unwrap();
        assert_eq!(kind, MessageKind::Other("shipment:confirm".to_string()));
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"shipment:confirm\"");
    }
}
