use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::{AddItemResponse, MessageResponse, NewItem};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "items-api",
        version = "1.0.0",
        description = "A minimal item store backed by MongoDB"
    ),
    paths(
        handlers::ping::ping_handler,
        handlers::health::health_handler,
        handlers::add_item::add_item_handler,
        handlers::latest_item::latest_item_handler
    ),
    components(
        schemas(
            NewItem,
            AddItemResponse,
            MessageResponse,
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Liveness and readiness checks"),
        (name = "items", description = "Item operations")
    )
)]
pub struct ApiDoc;
