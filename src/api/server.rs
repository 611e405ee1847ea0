//! API server lifecycle: bind, spawn the axum server in a background
//! task, return a handle with a shutdown channel.

use std::net::SocketAddr;

use thiserror::Error;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::api::router::api_router;
use crate::api::types::ApiContext;
use crate::config::CorsOrigins;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to bind API server on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
}

/// Handle to a running API server.
pub struct ApiServer {
    pub addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl ApiServer {
    /// Signal graceful shutdown. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            tracing::info!("API server shutdown signal sent");
        }
    }

    /// Shut down and wait for in-flight requests to finish.
    pub async fn stop(mut self) {
        self.shutdown();
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::error!("API server task failed: {e}");
            }
        }
    }
}

/// Start the API server on `bind`. Port 0 picks an ephemeral port.
pub async fn start_api_server(
    ctx: ApiContext,
    cors: &CorsOrigins,
    bind: SocketAddr,
) -> Result<ApiServer, ServerError> {
    // 1. Bind
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .map_err(|source| ServerError::Bind { addr: bind, source })?;
    let addr = listener
        .local_addr()
        .map_err(|source| ServerError::Bind { addr: bind, source })?;

    // 2. Build the router
    let app = api_router(ctx, cors);

    // 3. Shutdown channel
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    // 4. Serve in the background
    let task = tokio::spawn(async move {
        let shutdown_signal = async move {
            let _ = shutdown_rx.await;
            tracing::info!("API server received shutdown signal");
        };

        tracing::info!(%addr, "API server started");

        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
        {
            tracing::error!("API server error: {e}");
        }

        tracing::info!("API server stopped");
    });

    Ok(ApiServer {
        addr,
        shutdown_tx: Some(shutdown_tx),
        task: Some(task),
    })
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::SqliteRecordStore;

    fn test_ctx() -> (ApiContext, tempfile::TempDir) {
        let tmp = tempfile::tempdir().unwrap();
        let store = SqliteRecordStore::open(&tmp.path().join("records.db")).unwrap();
        (ApiContext::new(store), tmp)
    }

    fn localhost() -> SocketAddr {
        SocketAddr::from(([127, 0, 0, 1], 0))
    }

    #[tokio::test]
    async fn start_serve_and_stop() {
        let (ctx, _tmp) = test_ctx();
        let server = start_api_server(ctx, &CorsOrigins::Any, localhost())
            .await
            .expect("server should start");
        assert!(server.addr.port() > 0);

        let url = format!("http://{}/api/", server.addr);
        let json: serde_json::Value = reqwest::get(&url).await.unwrap().json().await.unwrap();
        assert_eq!(json["message"], "United Patient Record System API");

        server.stop().await;
    }

    #[tokio::test]
    async fn deep_query_over_http() {
        let (ctx, _tmp) = test_ctx();
        let server = start_api_server(ctx, &CorsOrigins::Any, localhost())
            .await
            .expect("server should start");

        let client = reqwest::Client::new();
        let resp = client
            .post(format!("http://{}/api/deep-query", server.addr))
            .json(&serde_json::json!({"patient_id": "GHOST1", "question": "brain mri"}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

        server.stop().await;
    }

    #[tokio::test]
    async fn bind_conflict_is_reported() {
        let (ctx, _tmp) = test_ctx();
        let first = start_api_server(ctx.clone(), &CorsOrigins::Any, localhost())
            .await
            .unwrap();

        let err = start_api_server(ctx, &CorsOrigins::Any, first.addr)
            .await
            .err()
            .expect("second bind should fail");
        assert!(matches!(err, ServerError::Bind { .. }));

        first.stop().await;
    }

    #[tokio::test]
    async fn shutdown_is_idempotent() {
        let (ctx, _tmp) = test_ctx();
        let mut server = start_api_server(ctx, &CorsOrigins::Any, localhost())
            .await
            .unwrap();

        server.shutdown();
        server.shutdown(); // Second call should be safe
    }
}
