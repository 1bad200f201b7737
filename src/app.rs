use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::routes;
use crate::state::AppState;

/// Build the full application router: API routes, Swagger UI, CORS and request tracing
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(routes::PING, get(handlers::ping_handler))
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(routes::ADD_ITEM, post(handlers::add_item_handler))
        .route(routes::LATEST_ITEM, get(handlers::latest_item_handler))
        .with_state(state)
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

/// Any origin, method and header is allowed
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
