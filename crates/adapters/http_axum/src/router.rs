//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use catpoint_app::ports::{ImageService, SecurityRepository};

use crate::api::camera::DEFAULT_MAX_FRAME_BYTES;
use crate::state::AppState;

/// Build the top-level axum [`Router`] with the default camera frame limit
/// ([`DEFAULT_MAX_FRAME_BYTES`]).
pub fn build<R, I>(state: AppState<R, I>) -> Router
where
    R: SecurityRepository + Send + 'static,
    I: ImageService + Send + 'static,
{
    build_with_frame_limit(state, DEFAULT_MAX_FRAME_BYTES)
}

/// Build the top-level axum [`Router`].
///
/// Nests the API under `/api` and adds a [`TraceLayer`] that logs each
/// request/response at `DEBUG` level. Camera frames larger than
/// `max_frame_bytes` are rejected with 413.
pub fn build_with_frame_limit<R, I>(state: AppState<R, I>, max_frame_bytes: usize) -> Router
where
    R: SecurityRepository + Send + 'static,
    I: ImageService + Send + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes(max_frame_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let (app, _, _) = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_route() {
        let (app, _, _) = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
