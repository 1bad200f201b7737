use crate::error::{ApiError, ErrorResponse};
use crate::models::{AddItemResponse, NewItem};
use crate::routes;
use crate::state::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};

/// POST /api/add-item handler - Store a new item
///
/// The body must be a JSON object with a non-empty text `name`. Other fields
/// are ignored.
#[utoipa::path(
    post,
    path = routes::ADD_ITEM,
    request_body = NewItem,
    responses(
        (status = 200, description = "Item stored", body = AddItemResponse),
        (status = 422, description = "Missing or invalid name", body = ErrorResponse),
        (status = 500, description = "Database not connected or insert failed", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn add_item_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewItem>, JsonRejection>,
) -> Result<(StatusCode, Json<AddItemResponse>), ApiError> {
    let Json(item) = payload?;
    item.validate().map_err(ApiError::Validation)?;

    let mongo = state.connections.get_connection().await?;

    let inserted_id = mongo
        .insert_item(&item)
        .await
        .map_err(|e| ApiError::operation("add item", e))?;

    tracing::info!(
        database = %state.config.mongodb_database,
        "Successfully added item with id: {}",
        inserted_id
    );
    Ok((
        StatusCode::OK,
        Json(AddItemResponse {
            message: "Item added successfully!".to_string(),
            inserted_id,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::tests::{test_uri, UNREACHABLE_URI};
    use crate::models::LatestItemResponse;
    use crate::state::test_state;
    use axum::{body::Body, http::Request, Router};
    use tower::ServiceExt;

    async fn post_item(app: Router, body: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(routes::ADD_ITEM)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_add_item_without_connection_string() {
        let app = crate::app::router(test_state(None, "add-item-test"));

        let (status, body) = post_item(app, r#"{"name": "widget"}"#).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "error": "Database not connected" }));
    }

    #[tokio::test]
    async fn test_add_item_missing_name() {
        let app = crate::app::router(test_state(None, "add-item-test"));

        let (status, body) = post_item(app, r#"{"title": "widget"}"#).await;

        // Rejected before any connection attempt
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let error: ErrorResponse = serde_json::from_value(body).unwrap();
        assert!(error.error.contains("name"));
    }

    #[tokio::test]
    async fn test_add_item_wrong_type() {
        let app = crate::app::router(test_state(None, "add-item-test"));

        let (status, _) = post_item(app, r#"{"name": 12}"#).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_add_item_malformed_json() {
        let app = crate::app::router(test_state(None, "add-item-test"));

        let (status, body) = post_item(app, "{not json").await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid item payload"));
    }

    #[tokio::test]
    async fn test_add_item_empty_name() {
        let app = crate::app::router(test_state(None, "add-item-test"));

        let (status, body) = post_item(app, r#"{"name": ""}"#).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "Invalid item payload: name must not be empty");
    }

    #[tokio::test]
    async fn test_add_item_whitespace_name_reaches_database() {
        let app = crate::app::router(test_state(None, "add-item-test"));

        let (status, body) = post_item(app, r#"{"name": "   "}"#).await;

        // Passes validation, then fails on the missing connection string
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "error": "Database not connected" }));
    }

    #[tokio::test]
    async fn test_add_item_database_unreachable() {
        let app = crate::app::router(test_state(Some(UNREACHABLE_URI), "add-item-test"));

        let (status, body) = post_item(app, r#"{"name": "widget"}"#).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let error = body["error"].as_str().unwrap();
        assert!(error.starts_with("Database not connected"));
    }

    #[tokio::test]
    async fn test_add_item_then_get_latest() {
        let state = test_state(Some(&test_uri()), "items_api_add_item_test");
        let Ok(mongo) = state.connections.get_connection().await else {
            // No MongoDB running locally
            return;
        };
        mongo.items().drop(None).await.unwrap();
        let app = crate::app::router(state);

        let (status, body) = post_item(app.clone(), r#"{"name": "widget", "color": "blue"}"#).await;
        assert_eq!(status, StatusCode::OK);
        let added: AddItemResponse = serde_json::from_value(body).unwrap();
        assert_eq!(added.message, "Item added successfully!");
        assert!(!added.inserted_id.is_empty());

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(routes::LATEST_ITEM)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        match serde_json::from_slice::<LatestItemResponse>(&body).unwrap() {
            LatestItemResponse::Found(item) => {
                assert_eq!(item.id, added.inserted_id);
                assert_eq!(item.name, "widget");
                // Unknown fields are not persisted
                assert!(item.extra.is_empty());
            }
            other => panic!("expected an item, got {:?}", other),
        }
    }
}
