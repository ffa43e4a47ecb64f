//! HTTP transport layer.
//!
//! `handlers` holds the transport-agnostic endpoint logic; `router` and
//! `server` adapt it to axum.

pub mod handlers;
pub mod router;
pub mod server;

pub use handlers::{handle, HandlerResponse, Route};
pub use router::{build_router, AppState};
pub use server::HttpServer;
