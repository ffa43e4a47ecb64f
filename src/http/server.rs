//! HTTP server — bind, serve, graceful shutdown.

use axum::Router;
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::http::router::{build_router, AppState};
use crate::types::{Config, Result};

/// HTTP server wrapping the endpoint router.
#[derive(Debug)]
pub struct HttpServer {
    router: Router,
    addr: SocketAddr,
    cancel: CancellationToken,
    shutdown_grace: Duration,
}

impl HttpServer {
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        let state = AppState::from_config(config)?;
        Ok(Self {
            router: build_router(state, &config.http),
            addr: config.server.socket_addr()?,
            cancel: CancellationToken::new(),
            shutdown_grace: config.http.shutdown_grace,
        })
    }

    /// Token that stops the server when cancelled.
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Bind the configured address and run until cancelled.
    pub async fn serve(self) -> Result<()> {
        let listener = TcpListener::bind(self.addr).await?;
        self.serve_on(listener).await
    }

    /// Run on an already-bound listener until cancelled.
    ///
    /// After cancellation, in-flight requests get `shutdown_grace` to finish
    /// before the server returns regardless.
    pub async fn serve_on(self, listener: TcpListener) -> Result<()> {
        let local = listener.local_addr()?;
        tracing::info!("HTTP server listening on {}", local);

        let token = self.cancel.clone();
        let serve = axum::serve(listener, self.router)
            .with_graceful_shutdown(async move { token.cancelled().await })
            .into_future();
        tokio::pin!(serve);

        let cancel = self.cancel.clone();
        let grace = self.shutdown_grace;
        tokio::select! {
            result = &mut serve => result?,
            _ = async move {
                cancel.cancelled().await;
                tokio::time::sleep(grace).await;
            } => {
                tracing::warn!(
                    "Shutdown grace ({}s) elapsed, dropping in-flight requests",
                    grace.as_secs()
                );
            }
        }

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Request graceful shutdown.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}
