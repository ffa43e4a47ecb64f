//! Core types for the fulfillment endpoint.
//!
//! - **IDs**: `MessageId`, echoed verbatim on every response
//! - **Errors**: Application error types with thiserror derives
//! - **Config**: Server, HTTP, observability and validation settings

mod config;
mod errors;
mod ids;

pub use config::{
    Config, HttpConfig, ObservabilityConfig, ServerConfig, ValidationConfig, ENV_LISTEN_ADDR,
    ENV_LOG_FORMAT,
};
pub use errors::{Error, Result};
pub use ids::MessageId;
