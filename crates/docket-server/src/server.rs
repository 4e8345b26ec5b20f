use std::future::Future;
use std::sync::Arc;

use docket_service::ItemService;
use docket_store::{ActorDirectory, InMemoryItemStore};
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;

/// docket HTTP server.
///
/// Owns one item store for its whole lifetime; items are lost on shutdown.
pub struct DocketServer {
    config: ServerConfig,
    service: ItemService,
}

impl DocketServer {
    pub fn new(config: ServerConfig) -> Self {
        let actors = ActorDirectory::new(config.actors.iter().cloned());
        let service = ItemService::new(Arc::new(InMemoryItemStore::new()), Arc::new(actors));
        Self { config, service }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn service(&self) -> &ItemService {
        &self.service
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.service.clone())
    }

    /// Bind the configured address and serve until Ctrl-C.
    pub async fn serve(self) -> ServerResult<()> {
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        self.serve_on(listener, shutdown_signal()).await
    }

    /// Serve on an already-bound listener until `shutdown` resolves.
    pub async fn serve_on<F>(self, listener: TcpListener, shutdown: F) -> ServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            %addr,
            actors = self.service.actors().len(),
            "docket server listening"
        );
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))?;
        tracing::info!("docket server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "cannot listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;
    use tokio::sync::oneshot;

    use super::*;
    use docket_types::Actor;

    #[test]
    fn server_construction() {
        let server = DocketServer::new(ServerConfig::default());
        assert_eq!(server.config().bind_addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(server.service().actors().len(), 3);
    }

    #[test]
    fn actors_come_from_config() {
        let config = ServerConfig {
            actors: vec![Actor::new(7, "Shemp")],
            ..ServerConfig::default()
        };
        let server = DocketServer::new(config);
        assert_eq!(server.service().actors().len(), 1);
    }

    #[tokio::test]
    async fn serves_over_tcp_until_shutdown() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (stop_tx, stop_rx) = oneshot::channel::<()>();

        let server = DocketServer::new(ServerConfig::default());
        let task = tokio::spawn(server.serve_on(listener, async {
            let _ = stop_rx.await;
        }));

        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut response = Vec::new();
        stream.read_to_end(&mut response).await.unwrap();
        let response = String::from_utf8_lossy(&response);
        assert!(response.starts_with("HTTP/1.1 200"), "got {response}");
        assert!(response.contains(r#"{"status":"ok"}"#));

        stop_tx.send(()).unwrap();
        task.await.unwrap().unwrap();
    }
}
