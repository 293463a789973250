//! JSON REST handlers for sensors.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use catpoint_app::ports::{ImageService, SecurityRepository};
use catpoint_domain::error::{CatpointError, NotFoundError};
use catpoint_domain::sensor::{Sensor, SensorKey, SensorType};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for registering a sensor.
#[derive(Deserialize)]
pub struct CreateSensorRequest {
    pub name: String,
    pub sensor_type: SensorType,
}

/// Request body for reporting a sensor flip.
#[derive(Deserialize)]
pub struct SetActiveRequest {
    pub active: bool,
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Sensor>),
    AlreadyTracked(Json<Sensor>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
            Self::AlreadyTracked(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

fn parse_key(sensor_type: &str, name: String) -> Result<SensorKey, ApiError> {
    let sensor_type = sensor_type.parse::<SensorType>()?;
    Ok(SensorKey::new(name, sensor_type))
}

fn not_found(key: &SensorKey) -> ApiError {
    CatpointError::from(NotFoundError {
        entity: "Sensor",
        id: key.to_string(),
    })
    .into()
}

/// `GET /api/sensors`
pub async fn list<R, I>(State(state): State<AppState<R, I>>) -> Json<Vec<Sensor>>
where
    R: SecurityRepository + Send + 'static,
    I: ImageService + Send + 'static,
{
    Json(state.lock().sensors())
}

/// `GET /api/sensors/{sensor_type}/{name}`
pub async fn get<R, I>(
    State(state): State<AppState<R, I>>,
    Path((sensor_type, name)): Path<(String, String)>,
) -> Result<Json<Sensor>, ApiError>
where
    R: SecurityRepository + Send + 'static,
    I: ImageService + Send + 'static,
{
    let key = parse_key(&sensor_type, name)?;
    let sensor = state.lock().sensor(&key).ok_or_else(|| not_found(&key))?;
    Ok(Json(sensor))
}

/// `POST /api/sensors`
pub async fn create<R, I>(
    State(state): State<AppState<R, I>>,
    Json(req): Json<CreateSensorRequest>,
) -> Result<CreateResponse, ApiError>
where
    R: SecurityRepository + Send + 'static,
    I: ImageService + Send + 'static,
{
    let sensor = Sensor::builder()
        .name(req.name)
        .sensor_type(req.sensor_type)
        .build()?;
    let key = sensor.key();

    let mut service = state.lock();
    let added = service.add_sensor(sensor)?;
    let stored = service.sensor(&key).ok_or_else(|| not_found(&key))?;

    if added {
        Ok(CreateResponse::Created(Json(stored)))
    } else {
        Ok(CreateResponse::AlreadyTracked(Json(stored)))
    }
}

/// `DELETE /api/sensors/{sensor_type}/{name}`
pub async fn delete<R, I>(
    State(state): State<AppState<R, I>>,
    Path((sensor_type, name)): Path<(String, String)>,
) -> Result<DeleteResponse, ApiError>
where
    R: SecurityRepository + Send + 'static,
    I: ImageService + Send + 'static,
{
    let key = parse_key(&sensor_type, name)?;
    state
        .lock()
        .remove_sensor(&key)
        .ok_or_else(|| not_found(&key))?;
    Ok(DeleteResponse::NoContent)
}

/// `PUT /api/sensors/{sensor_type}/{name}/active`
///
/// Sensors that are not tracked yet start being tracked.
pub async fn set_active<R, I>(
    State(state): State<AppState<R, I>>,
    Path((sensor_type, name)): Path<(String, String)>,
    Json(req): Json<SetActiveRequest>,
) -> Result<Json<Sensor>, ApiError>
where
    R: SecurityRepository + Send + 'static,
    I: ImageService + Send + 'static,
{
    let key = parse_key(&sensor_type, name)?;
    let sensor = Sensor::from(key);
    sensor.validate()?;
    let updated = state.lock().change_sensor_activation(&sensor, req.active);
    Ok(Json(updated))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{request, test_app};
    use axum::http::Method;
    use catpoint_domain::status::{AlarmStatus, ArmingStatus};

    #[tokio::test]
    async fn should_create_sensor() {
        let (app, state, _) = test_app();

        let (status, body) = request(
            app,
            Method::POST,
            "/api/sensors",
            Some(serde_json::json!({"name": "Front Door", "sensor_type": "DOOR"})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body,
            serde_json::json!({"name": "Front Door", "sensor_type": "DOOR", "active": false})
        );
        assert_eq!(state.lock().sensors().len(), 1);
    }

    #[tokio::test]
    async fn should_return_existing_sensor_when_created_twice() {
        let (app, state, _) = test_app();
        let key = SensorKey::new("Front Door", SensorType::Door);
        state.lock().add_sensor(Sensor::from(key.clone())).unwrap();
        state
            .lock()
            .change_sensor_activation(&Sensor::from(key), true);

        let (status, body) = request(
            app,
            Method::POST,
            "/api/sensors",
            Some(serde_json::json!({"name": "Front Door", "sensor_type": "DOOR"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["active"], true);
    }

    #[tokio::test]
    async fn should_reject_blank_sensor_name() {
        let (app, _, _) = test_app();

        let (status, body) = request(
            app,
            Method::POST,
            "/api/sensors",
            Some(serde_json::json!({"name": " ", "sensor_type": "WINDOW"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "name must not be empty");
    }

    #[tokio::test]
    async fn should_list_sensors() {
        let (app, state, _) = test_app();
        for name in ["B", "A"] {
            state
                .lock()
                .add_sensor(Sensor::from(SensorKey::new(name, SensorType::Window)))
                .unwrap();
        }

        let (status, body) = request(app, Method::GET, "/api/sensors", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["name"], "A");
        assert_eq!(body[1]["name"], "B");
    }

    #[tokio::test]
    async fn should_get_sensor_by_type_and_name() {
        let (app, state, _) = test_app();
        state
            .lock()
            .add_sensor(Sensor::from(SensorKey::new("Hall", SensorType::Motion)))
            .unwrap();

        let (status, body) = request(app, Method::GET, "/api/sensors/motion/Hall", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["sensor_type"], "MOTION");
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_sensor() {
        let (app, _, _) = test_app();

        let (status, body) = request(app, Method::GET, "/api/sensors/DOOR/Nope", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Sensor DOOR/Nope not found");
    }

    #[tokio::test]
    async fn should_reject_unknown_sensor_type_in_path() {
        let (app, _, _) = test_app();

        let (status, _) = request(app, Method::GET, "/api/sensors/GARAGE/Main", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_delete_sensor() {
        let (app, state, _) = test_app();
        state
            .lock()
            .add_sensor(Sensor::from(SensorKey::new("Back", SensorType::Door)))
            .unwrap();

        let (status, _) = request(app.clone(), Method::DELETE, "/api/sensors/DOOR/Back", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = request(app, Method::DELETE, "/api/sensors/DOOR/Back", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_escalate_alarm_when_sensor_activated_while_armed() {
        let (app, state, _) = test_app();
        state.lock().set_arming_status(ArmingStatus::ArmedHome);

        let (status, body) = request(
            app,
            Method::PUT,
            "/api/sensors/WINDOW/Kitchen/active",
            Some(serde_json::json!({"active": true})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["active"], true);
        assert_eq!(state.lock().alarm_status(), AlarmStatus::PendingAlarm);
    }
}
