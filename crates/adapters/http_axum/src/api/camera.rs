//! Camera frame upload handler.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use serde::Serialize;

use catpoint_app::ports::{ImageService, SecurityRepository};
use catpoint_domain::camera::CameraFrame;
use catpoint_domain::status::AlarmStatus;

use crate::error::ApiError;
use crate::state::AppState;

/// Largest frame accepted by `POST /api/camera/frames` unless configured
/// otherwise (16 MiB).
pub const DEFAULT_MAX_FRAME_BYTES: usize = 16 * 1024 * 1024;

/// Outcome of classifying one frame.
#[derive(Debug, Serialize)]
pub struct FrameResponse {
    pub cat_detected: bool,
    pub alarm_status: AlarmStatus,
}

/// `POST /api/camera/frames`
///
/// The raw request body is the frame. Bodies over the route's size limit
/// are answered with a JSON 413.
pub async fn process_frame<R, I>(
    State(state): State<AppState<R, I>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<FrameResponse>, ApiError>
where
    R: SecurityRepository + Send + 'static,
    I: ImageService + Send + 'static,
{
    let frame = CameraFrame::new(body?.to_vec());
    let mut service = state.lock();
    let cat_detected = service.process_image(&frame)?;
    Ok(Json(FrameResponse {
        cat_detected,
        alarm_status: service.alarm_status(),
    }))
}
