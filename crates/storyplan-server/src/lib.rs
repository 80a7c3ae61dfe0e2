pub mod error;
pub mod routes;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the axum Router with both API routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router() -> Router {
    // Allow-all CORS: the planner front end may be served from a
    // different origin than this API.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/options", get(routes::options::get_options))
        .route("/api/ideas", post(routes::ideas::post_idea))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Start the storyplan API server on a pre-bound listener.
///
/// Accepting a `TcpListener` lets the caller bind port 0 and read the
/// actual port before starting.
pub async fn serve(listener: tokio::net::TcpListener) -> anyhow::Result<()> {
    let port = listener.local_addr()?.port();
    let app = build_router();

    tracing::info!("storyplan API listening on http://localhost:{port}");

    axum::serve(listener, app).await?;
    Ok(())
}
