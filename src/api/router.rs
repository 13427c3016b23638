//! API router
//!
//! Wires the page and JSON routes, the per-request storage session
//! teardown, static assets and the Swagger UI.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers::health::{self, HealthResponse};
use crate::api::handlers::pages;
use crate::api::handlers::places::{self, AmenityRef, FilterPlacesRequest};
use crate::storage::Storage;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub started_at: Instant,
}

/// OpenAPI documentation for the JSON surface
#[derive(OpenApi)]
#[openapi(
    paths(places::filter_places, health::health_check),
    components(schemas(FilterPlacesRequest, AmenityRef, HealthResponse)),
    tags(
        (name = "Places", description = "Place filtering"),
        (name = "Health", description = "Service health")
    )
)]
struct ApiDoc;

/// Closes the storage session once the request has produced its response,
/// on success and error paths alike.
async fn close_storage_session(
    State(app): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    app.storage.close().await;
    response
}

/// Builds the application router.
///
/// Routes are registered with and without the trailing slash so both
/// spellings hit the same handler.
pub fn create_api_router(storage: Arc<dyn Storage>) -> Router {
    let state = AppState {
        storage,
        started_at: Instant::now(),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/100-hbnb", get(pages::hbnb))
        .route("/100-hbnb/", get(pages::hbnb))
        .route("/3-hbnb", get(pages::hbnb))
        .route("/3-hbnb/", get(pages::hbnb))
        .route("/100-hbnb/filter_places", post(places::filter_places))
        .route("/health", get(health::health_check))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest_service("/static", ServeDir::new("static"))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            close_storage_session,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

// ── Tests ──────────────────────────────────────────────────────
