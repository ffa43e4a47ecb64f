//! Endpoint handlers — raw bytes in, `(status, bytes)` out.
//!
//! Every outcome, including malformed input and rejected addresses, is an
//! HTTP 200 carrying a `notification:*` envelope. Only a failure to encode
//! the response itself produces a non-200 status.

pub mod drop_ship;
pub mod validate_address;

use crate::envelope::{self, InboundMessage, Notification, OutboundMessage, ResultPayload};
use crate::types::Error;
use crate::validation::ZipcodeRange;

/// Result text for an envelope that could not be parsed.
pub const MALFORMED_MESSAGE: &str = "The message could not be parsed.";

/// Routes served by the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    DropShip,
    ValidateAddress,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::DropShip => "/drop_ship",
            Route::ValidateAddress => "/validate_address",
        }
    }
}

/// Transport-level response: status code and JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Handle one request for `route`.
pub fn handle(route: Route, raw: &[u8], zipcodes: &ZipcodeRange) -> HandlerResponse {
    let outbound = match envelope::parse(raw) {
        Ok(message) => dispatch(route, &message, zipcodes),
        Err(err) => malformed_response(raw, &err),
    };
    encode(&outbound)
}

fn dispatch(route: Route, message: &InboundMessage, zipcodes: &ZipcodeRange) -> OutboundMessage {
    match route {
        Route::DropShip => drop_ship::handle(message),
        Route::ValidateAddress => validate_address::handle(message, zipcodes),
    }
}

/// Error envelope for a body that failed to parse. Echoes the `message_id`
/// when one can still be recovered from the raw bytes.
pub fn malformed_response(raw: &[u8], err: &Error) -> OutboundMessage {
    let message_id = envelope::recover_message_id(raw);
    tracing::warn!(
        message_id = message_id.as_ref().map(|id| id.as_str()).unwrap_or(""),
        error = %err,
        "Rejected malformed envelope"
    );
    OutboundMessage {
        message_id,
        message: Some(Notification::Error),
        payload: Some(ResultPayload {
            result: MALFORMED_MESSAGE.to_string(),
        }),
    }
}

fn encode(outbound: &OutboundMessage) -> HandlerResponse {
    match outbound.to_bytes() {
        Ok(body) => HandlerResponse { status: 200, body },
        Err(e) => {
            tracing::error!("Response encoding failed: {}", e);
            HandlerResponse {
                status: 500,
                body: Vec::new(),
            }
        }
    }
}
