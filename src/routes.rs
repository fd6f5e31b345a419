//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`                - Health check (database)
//! - `/api/*`                      - REST API
//! - `GET  /swagger-ui`            - Swagger UI (when enabled)
//! - `GET  /api-docs/openapi.json` - OpenAPI document (when enabled)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slashes trimmed under `/api`, so `/find/?name=` hits `/find`.
//!   Not applied to `/swagger-ui`, which redirects `/swagger-ui` to `/swagger-ui/`.

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::api::openapi::ApiDoc;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `swagger_enabled` - mount Swagger UI and the OpenAPI document
pub fn app_router(state: AppState, swagger_enabled: bool) -> Router {
    let api: NormalizePath<Router> = NormalizePathLayer::trim_trailing_slash()
        .layer(api::routes::api_routes().with_state(state.clone()));

    let mut router = Router::new()
        .route("/health", get(health_handler))
        .with_state(state)
        .nest_service("/api", api);

    if swagger_enabled {
        router = router.merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );
    }

    router.layer(tracing::layer())
}
