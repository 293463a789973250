//! JSON REST handlers for the alarm and arming status.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use catpoint_app::ports::{ImageService, SecurityRepository};
use catpoint_app::services::security_service::SecurityService;
use catpoint_domain::status::{AlarmStatus, ArmingStatus};

use crate::state::AppState;

/// Snapshot of the system state shown on the control panel.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub alarm_status: AlarmStatus,
    pub alarm_description: String,
    pub arming_status: ArmingStatus,
    pub arming_description: String,
    pub cat_detected: bool,
}

impl StatusResponse {
    pub(crate) fn from_service<R, I>(service: &SecurityService<R, I>) -> Self
    where
        R: SecurityRepository,
        I: ImageService,
    {
        let alarm_status = service.alarm_status();
        let arming_status = service.arming_status();
        Self {
            alarm_status,
            alarm_description: alarm_status.description().to_string(),
            arming_status,
            arming_description: arming_status.description().to_string(),
            cat_detected: service.cat_detected(),
        }
    }
}

/// Request body for changing the arming mode.
#[derive(Deserialize)]
pub struct SetArmingRequest {
    pub arming_status: ArmingStatus,
}

/// `GET /api/status`
pub async fn get<R, I>(State(state): State<AppState<R, I>>) -> Json<StatusResponse>
where
    R: SecurityRepository + Send + 'static,
    I: ImageService + Send + 'static,
{
    let service = state.lock();
    Json(StatusResponse::from_service(&service))
}

/// `PUT /api/arming`
pub async fn set_arming<R, I>(
    State(state): State<AppState<R, I>>,
    Json(req): Json<SetArmingRequest>,
) -> Json<StatusResponse>
where
    R: SecurityRepository + Send + 'static,
    I: ImageService + Send + 'static,
{
    let mut service = state.lock();
    service.set_arming_status(req.arming_status);
    Json(StatusResponse::from_service(&service))
}
