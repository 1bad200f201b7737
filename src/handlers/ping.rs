use crate::models::MessageResponse;
use crate::routes;
use axum::Json;

pub const PONG: &str = "Pong! Hello from your Rust backend!";

/// GET /api/ping handler - Liveness check that never touches the database
#[utoipa::path(
    get,
    path = routes::PING,
    responses(
        (status = 200, description = "Server is running", body = MessageResponse)
    ),
    tag = "health"
)]
pub async fn ping_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: PONG.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_state;
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    async fn ping(app: axum::Router) -> (StatusCode, MessageResponse) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(routes::PING)
                    .body(Body::empty())
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
    async fn test_ping_without_database() {
        let app = crate::app::router(test_state(None, "ping-test"));

        let (status, body) = ping(app).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.message, PONG);
    }

    #[tokio::test]
    async fn test_ping_is_idempotent() {
        let app = crate::app::router(test_state(
            Some(crate::db::tests::UNREACHABLE_URI),
            "ping-test",
        ));

        let first = ping(app.clone()).await;
        let second = ping(app).await;

        assert_eq!(first.0, StatusCode::OK);
        assert_eq!(first, second);
    }
}
