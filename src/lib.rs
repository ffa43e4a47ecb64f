//! # Fulfillment Endpoint
//!
//! HTTP service simulating a drop-shipping fulfillment integration:
//! - JSON message envelopes (`message_id`, `message`, `payload`) in and out
//! - Address validation against an inclusive zipcode range
//! - Every outcome answered with HTTP 200; success or failure is carried in
//!   the envelope's `notification:info` / `notification:error` tag
//!
//! ## Architecture
//!
//! ```text
//!   raw bytes ─→ envelope::parse ─→ address::ShippingAddress::from_payload
//!                                          │
//!                                          ▼
//!   raw bytes ←─ envelope::build ←── validation::ZipcodeRange::validate
//! ```
//! The pure core (`envelope`, `address`, `validation`, `http::handlers`) is
//! stateless and reentrant; `http::router` and `http::server` adapt it to axum.

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod address;
pub mod envelope;
pub mod http;
pub mod types;
pub mod validation;

// Internal utilities
pub mod observability;

pub use types::{Config, Error, MessageId, Result};
