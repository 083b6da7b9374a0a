//! Server
//!
//! Runs the REST and gRPC listeners side by side until shutdown.

use std::future::IntoFuture;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::watch;

use crate::config::Config;
use crate::error::{QuestionError, Result};
use crate::storage::{QuestionStore, RecordCodec};

use super::{rest, QuestionService};

/// REST + gRPC server for questionkv
pub struct Server<C: RecordCodec> {
    config: Config,
    store: Arc<QuestionStore<C>>,
    shutdown: watch::Sender<bool>,
}

impl<C: RecordCodec> Server<C> {
    /// Create a new server with the given config and store
    pub fn new(config: Config, store: Arc<QuestionStore<C>>) -> Self {
        let (shutdown, _) = watch::channel(false);
        Self {
            config,
            store,
            shutdown,
        }
    }

    /// Serve both APIs until `shutdown` is called or a listener fails
    ///
    /// A failure in one listener stops the other.
    pub async fn run(&self) -> Result<()> {
        let http_addr = self.config.http_addr().await?;
        let grpc_addr = self.config.grpc_addr().await?;

        let listener = TcpListener::bind(http_addr).await?;
        tracing::info!("REST API listening on {}", listener.local_addr()?);

        let rest = axum::serve(listener, rest::router(Arc::clone(&self.store)))
            .with_graceful_shutdown(self.stopped())
            .into_future();

        let grpc = tonic::transport::Server::builder()
            .add_service(QuestionService::new(Arc::clone(&self.store)).into_server())
            .serve_with_shutdown(grpc_addr, self.stopped());
        tracing::info!("gRPC API listening on {}", grpc_addr);

        tokio::try_join!(
            async { rest.await.map_err(QuestionError::from) },
            async { grpc.await.map_err(QuestionError::from) },
        )?;

        tracing::info!("listeners closed");
        Ok(())
    }

    /// Signal the server to shutdown gracefully
    pub fn shutdown(&self) {
        self.shutdown.send_replace(true);
    }

    /// Resolves once shutdown is requested
    fn stopped(&self) -> impl std::future::Future<Output = ()> + Send + 'static {
        let mut rx = self.shutdown.subscribe();
        async move {
            let _ = rx.wait_for(|stop| *stop).await;
        }
    }
}
