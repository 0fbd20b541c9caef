//! HTTP server initialization and runtime setup.
//!
//! Handles store and publisher construction, state wiring, and the Axum
//! server lifecycle.

use crate::config::Config;
use crate::infrastructure::publisher::{HttpPublisher, NullPublisher, VisitPublisher};
use crate::infrastructure::store::{MemoryStore, RedisUrlStore, UrlStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The URL store (Redis, or the in-process fallback when unconfigured)
/// - The visit publisher (HTTP sink, or the no-op fallback when unconfigured)
/// - The Axum HTTP server
///
/// A configured-but-unreachable Redis is fatal: the store is primary data,
/// so the process fails fast rather than serving from an empty fallback.
///
/// # Errors
///
/// Returns an error if the store connection, server bind, or server runtime
/// fails.
pub async fn run(config: Config) -> Result<()> {
    let store: Arc<dyn UrlStore> = match &config.redis_url {
        Some(redis_url) => {
            let redis = RedisUrlStore::connect(redis_url)
                .await
                .context("Failed to connect to the URL store")?;
            tracing::info!("URL store ready (Redis)");
            Arc::new(redis)
        }
        None => {
            tracing::warn!("REDIS_URL not set; using in-memory store, mappings are lost on restart");
            Arc::new(MemoryStore::new())
        }
    };

    let publisher: Arc<dyn VisitPublisher> = match &config.event_sink_url {
        Some(sink_url) => {
            let http = HttpPublisher::new(sink_url.clone(), config.event_sink_token.clone())
                .context("Failed to construct the visit publisher")?;
            Arc::new(http)
        }
        None => {
            tracing::info!("EVENT_SINK_URL not set; visit publishing disabled");
            Arc::new(NullPublisher::new())
        }
    };

    let state = AppState::new(
        store,
        publisher,
        Duration::from_secs(config.publish_timeout_secs),
    );

    let app = NormalizePathLayer::trim_trailing_slash().layer(app_router(state));

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
