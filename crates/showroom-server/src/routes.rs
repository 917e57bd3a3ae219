use axum::{routing::get, Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tracing::debug;

use showroom_catalog::ModelDescriptor;

use crate::config::ServerConfig;

/// GET /api/models — the full catalog as JSON.
///
/// The response is always the same literal sequence; there is no input and
/// no failure mode.
async fn list_models() -> Json<&'static [ModelDescriptor]> {
    Json(showroom_catalog::models())
}

/// Build the application router.
///
/// All routes are registered before the listener starts accepting
/// connections: the catalog endpoint, the entry document for `/`, and the
/// static mount. `ServeDir` answers missing files with 404 and rejects
/// paths that would escape the static root. The CORS layer permits all
/// origins, methods, and headers on every route.
pub fn router(config: &ServerConfig) -> Router {
    debug!(
        "Mounting '{}' at /static, entry document '{}'",
        config.static_root.display(),
        config.entry_document().display()
    );

    Router::new()
        .route("/api/models", get(list_models))
        .route_service("/", ServeFile::new(config.entry_document()))
        .nest_service("/static", ServeDir::new(&config.static_root))
        .layer(CorsLayer::permissive())
}
