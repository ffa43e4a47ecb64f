//! Message envelope - the wire contract of every endpoint.
//!
//! Requests and responses share one shape:
//! ```text
//! {
//!   "message_id": "518726r85010000001",   echoed verbatim
//!   "message":    "order:new",            type tag (optional)
//!   "payload":    { ... }                 loosely-typed JSON object
//! }
//! ```
//! Parsing is strict about structure (`message_id` string, `payload` object)
//! and lenient about content: the payload is kept as an untyped JSON tree and
//! typed accessors pull out what a handler needs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::{Error, MessageId, Result};

pub mod enums;

pub use enums::*;

/// Decoded inbound envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct InboundMessage {
    pub message_id: MessageId,
    pub message: Option<MessageKind>,
    pub payload: Map<String, Value>,
}

impl InboundMessage {
    pub fn new(message_id: impl Into<MessageId>, payload: Map<String, Value>) -> Self {
        Self {
            message_id: message_id.into(),
            message: None,
            payload,
        }
    }

    pub fn with_message(mut self, kind: MessageKind) -> Self {
        self.message = Some(kind);
        self
    }
}

/// `payload` of an outbound envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultPayload {
    pub result: String,
}

/// Outbound envelope.
///
/// A bare acknowledgment carries only `message_id`; notifications carry all
/// three fields. `message_id` is absent only when the request was too broken
/// to recover one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<MessageId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Notification>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<ResultPayload>,
}

impl OutboundMessage {
    /// Serialize to JSON bytes for the transport.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn result(&self) -> Option<&str> {
        self.payload.as_ref().map(|p| p.result.as_str())
    }
}

/// Decode raw request bytes into an [`InboundMessage`].
///
/// Fails with [`Error::MalformedInput`] when the bytes are not JSON, the top
/// level is not an object, `message_id` is missing or not a string, `message`
/// is present but not a string, or `payload` is missing or not an object.
pub fn parse(raw: &[u8]) -> Result<InboundMessage> {
    let value: Value = serde_json::from_slice(raw)
        .map_err(|e| Error::malformed(format!("invalid JSON: {}", e)))?;

    let Value::Object(mut fields) = value else {
        return Err(Error::malformed("envelope must be a JSON object"));
    };

    let message_id = match fields.remove("message_id") {
        Some(Value::String(s)) => MessageId::from(s),
        Some(_) => return Err(Error::malformed("message_id must be a string")),
        None => return Err(Error::malformed("missing required field: message_id")),
    };

    let message = match fields.remove("message") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(MessageKind::from(s)),
        Some(_) => return Err(Error::malformed("message must be a string")),
    };

    let payload = match fields.remove("payload") {
        Some(Value::Object(map)) => map,
        Some(_) => return Err(Error::malformed("payload must be an object")),
        None => return Err(Error::malformed("missing required field: payload")),
    };

    Ok(InboundMessage {
        message_id,
        message,
        payload,
    })
}

/// Best-effort `message_id` extraction from a body that failed [`parse`].
pub fn recover_message_id(raw: &[u8]) -> Option<MessageId> {
    let value: Value = serde_json::from_slice(raw).ok()?;
    value
        .get("message_id")
        .and_then(|v| v.as_str())
        .map(MessageId::from)
}

/// Build a notification envelope wrapping `result` under `payload.result`.
pub fn build(
    message_id: MessageId,
    notification: Notification,
    result: impl Into<String>,
) -> OutboundMessage {
    OutboundMessage {
        message_id: Some(message_id),
        message: Some(notification),
        payload: Some(ResultPayload {
            result: result.into(),
        }),
    }
}

/// Build the bare `{message_id}` acknowledgment.
pub fn acknowledge(message_id: MessageId) -> OutboundMessage {
    OutboundMessage {
        message_id: Some(message_id),
        message: None,
        payload: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn parses_full_envelope() {
        let raw = br#"{"message_id":"abc","message":"order:new","payload":{"order":{}}}"#;
        let msg = parse(raw).unwrap();
        assert_eq!(msg.message_id.as_str(), "abc");
        assert_eq!(msg.message, Some(MessageKind::OrderNew));
        assert!(msg.payload.contains_key("order"));
    }

    #[test]
    fn message_tag_is_optional() {
        let msg = parse(br#"{"message_id":"518726r85010000001","payload":{}}"#).unwrap();
        assert_eq!(msg.message, None);
        assert!(msg.payload.is_empty());
    }

    #[test]
    fn null_message_tag_is_treated_as_absent() {
        let msg = parse(br#"{"message_id":"x","message":null,"payload":{}}"#).unwrap();
        assert_eq!(msg.message, None);
    }

    #[test]
    fn rejects_invalid_json() {
        let err = parse(b"{ invalid json }").unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)));
    }

    #[test]
    fn rejects_non_object_top_level() {
        let err = parse(b"[1,2,3]").unwrap_err();
        assert_eq!(err.to_string(), "malformed input: envelope must be a JSON object");
    }

    #[test]
    fn rejects_missing_payload() {
        let err = parse(br#"{"message_id":"x"}"#).unwrap_err();
        assert_eq!(err.to_string(), "malformed input: missing required field: payload");
    }

    #[test]
    fn rejects_non_object_payload() {
        let err = parse(br#"{"message_id":"x","payload":"nope"}"#).unwrap_err();
        assert_eq!(err.to_string(), "malformed input: payload must be an object");
    }

    #[test]
    fn rejects_missing_or_numeric_message_id() {
        assert!(matches!(
            parse(br#"{"payload":{}}"#),
            Err(Error::MalformedInput(_))
        ));
        assert!(matches!(
            parse(br#"{"message_id":42,"payload":{}}"#),
            Err(Error::MalformedInput(_))
        ));
    }

    #[test]
    fn rejects_non_string_message_tag() {
        let err = parse(br#"{"message_id":"x","message":7,"payload":{}}"#).unwrap_err();
        assert_eq!(err.to_string(), "malformed input: message must be a string");
    }

    #[test]
    fn recovers_id_from_structurally_broken_envelope() {
        let raw = br#"{"message_id":"keep-me","payload":[]}"#;
        assert!(parse(raw).is_err());
        assert_eq!(recover_message_id(raw), Some(MessageId::from("keep-me")));
        assert_eq!(recover_message_id(b"not json"), None);
    }

    #[test]
    fn build_serializes_in_wire_order() {
        let out = build(
            MessageId::from("518726r85010000001"),
            Notification::Info,
            "The address is valid, and the shipment will be sent.",
        );
        let text = String::from_utf8(out.to_bytes().unwrap()).unwrap();
        assert_eq!(
            text,
            r#"{"message_id":"518726r85010000001","message":"notification:info","payload":{"result":"The address is valid, and the shipment will be sent."}}"#
        );
    }

    #[test]
    fn acknowledge_carries_only_the_id() {
        let out = acknowledge(MessageId::from("518726r85010000001"));
        let value: Value = serde_json::from_slice(&out.to_bytes().unwrap()).unwrap();
        assert_eq!(value, json!({"message_id": "518726r85010000001"}));
    }

    #[test]
    fn built_envelope_parses_back_with_same_id() {
        let id = MessageId::from("id with \"quotes\" and \u{1F4E6}");
        let out = build(id.clone(), Notification::Error, "nope");
        let back = parse(&out.to_bytes().unwrap()).unwrap();
        assert_eq!(back.message_id, id);
        assert_eq!(
            back.message,
            Some(MessageKind::Notification(Notification::Error))
        );
        assert_eq!(back.payload.get("result"), Some(&json!("nope")));
    }
}
