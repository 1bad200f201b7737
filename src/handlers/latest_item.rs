use crate::error::{ApiError, ErrorResponse};
use crate::models::{ItemResponse, LatestItemResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

pub const NO_ITEMS: &str = "No items found in the database.";

/// GET /api/get-latest-item handler - Fetch the most recently added item
///
/// An empty collection is not an error; it yields an informational message.
#[utoipa::path(
    get,
    path = routes::LATEST_ITEM,
    responses(
        (status = 200, description = "The latest item with `_id` as text, or a 'no items' message", body = serde_json::Value),
        (status = 500, description = "Database not connected or query failed", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn latest_item_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<LatestItemResponse>), ApiError> {
    let mongo = state.connections.get_connection().await?;

    let latest = mongo
        .latest_item()
        .await
        .map_err(|e| ApiError::operation("retrieve item", e))?;

    match latest {
        Some(doc) => {
            let item = ItemResponse::try_from(doc)
                .map_err(|e| ApiError::operation("retrieve item", anyhow::anyhow!(e)))?;
            tracing::info!("Retrieved latest item with id: {}", item.id);
            Ok((StatusCode::OK, Json(LatestItemResponse::Found(item))))
        }
        None => {
            tracing::info!("No items found");
            Ok((
                StatusCode::OK,
                Json(LatestItemResponse::Empty {
                    message: NO_ITEMS.to_string(),
                }),
            ))
        }
    }
}
