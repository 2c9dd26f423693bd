use axum::{
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use crate::storage::SqliteStore;

pub mod routes;

/// Server state
pub struct AppState {
    pub store: SqliteStore,
}

/// Build the `/trainings` router over a store.
///
/// CORS mirrors the caller's origin, method and headers so credentialed
/// requests from any origin are accepted.
pub fn router(store: SqliteStore) -> Router {
    let state = Arc::new(AppState { store });

    Router::new()
        .route(
            "/trainings",
            get(routes::list_trainings).post(routes::create_training),
        )
        .route(
            "/trainings/{id}",
            get(routes::get_training)
                .put(routes::update_training)
                .delete(routes::delete_training),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

pub async fn start_server(addr: SocketAddr, store: SqliteStore) -> anyhow::Result<()> {
    let app = router(store);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Starting server on {}", addr);
    println!("🏋️ Server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
