//! `POST /drop_ship` — acknowledge the shipment request.

use crate::envelope::{self, InboundMessage, OutboundMessage};

pub fn handle(message: &InboundMessage) -> OutboundMessage {
    tracing::info!(message_id = %message.message_id, "Drop-ship request acknowledged");
    envelope::acknowledge(message.message_id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    #[test]
    fn acknowledgment_has_no_notification() {
        let out = handle(&InboundMessage::new("518726r85010000001", Map::new()));
        assert_eq!(out.message_id.unwrap().as_str(), "518726r85010000001");
        assert!(out.message.is_none());
        assert!(out.payload.is_none());
    }
}
