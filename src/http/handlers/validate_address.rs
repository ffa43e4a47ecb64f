//! `POST /validate_address` — check the order's shipping address.

use crate::address::ShippingAddress;
use crate::envelope::{self, InboundMessage, Notification, OutboundMessage};
use crate::validation::{ValidationOutcome, ZipcodeRange};

pub const ADDRESS_VALID: &str = "The address is valid, and the shipment will be sent.";
pub const ADDRESS_PROBLEM: &str = "There was a problem with this address.";

pub fn handle(message: &InboundMessage, zipcodes: &ZipcodeRange) -> OutboundMessage {
    let message_id = &message.message_id;

    let outcome = match ShippingAddress::from_payload(&message.payload) {
        Ok(address) => zipcodes.validate(&address),
        Err(e) => ValidationOutcome::Malformed(e.to_string()),
    };

    // Invalid and malformed addresses share one caller-visible text.
    match outcome {
        ValidationOutcome::Valid => {
            tracing::info!(message_id = %message_id, "Address accepted");
            envelope::build(message_id.clone(), Notification::Info, ADDRESS_VALID)
        }
        ValidationOutcome::Invalid => {
            tracing::info!(
                message_id = %message_id,
                min = zipcodes.min(),
                max = zipcodes.max(),
                "Address rejected: zipcode out of range"
            );
            envelope::build(message_id.clone(), Notification::Error, ADDRESS_PROBLEM)
        }
        ValidationOutcome::Malformed(reason) => {
            tracing::warn!(message_id = %message_id, reason = %reason, "Address rejected: malformed");
            envelope::build(message_id.clone(), Notification::Error, ADDRESS_PROBLEM)
        }
    }
}
