//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod camera;
#[allow(clippy::missing_errors_doc)]
pub mod sensors;
#[allow(clippy::missing_errors_doc)]
pub mod status;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post, put};

use catpoint_app::ports::{ImageService, SecurityRepository};

use crate::state::AppState;

/// Build the `/api` sub-router.
///
/// `max_frame_bytes` caps the body of `POST /camera/frames`; every other
/// route keeps axum's default limit.
pub fn routes<R, I>(max_frame_bytes: usize) -> Router<AppState<R, I>>
where
    R: SecurityRepository + Send + 'static,
    I: ImageService + Send + 'static,
{
    Router::new()
        // System status
        .route("/status", get(status::get::<R, I>))
        .route("/arming", put(status::set_arming::<R, I>))
        // Sensors
        .route(
            "/sensors",
            get(sensors::list::<R, I>).post(sensors::create::<R, I>),
        )
        .route(
            "/sensors/{sensor_type}/{name}",
            get(sensors::get::<R, I>).delete(sensors::delete::<R, I>),
        )
        .route(
            "/sensors/{sensor_type}/{name}/active",
            put(sensors::set_active::<R, I>),
        )
        // Camera
        .route(
            "/camera/frames",
            post(camera::process_frame::<R, I>).layer(DefaultBodyLimit::max(max_frame_bytes)),
        )
}
