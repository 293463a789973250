//! Listener port: observers of the security system's state.

use catpoint_domain::error::CatpointError;
use catpoint_domain::status::AlarmStatus;

/// Receives state-change notifications from the
/// [`SecurityService`](crate::services::security_service::SecurityService).
///
/// Hooks run synchronously while the engine is mid-operation, so an
/// implementation must not call back into the engine. Every hook defaults to
/// a no-op; implement only the ones you care about.
pub trait StatusListener: Send + Sync {
    /// The alarm status was written.
    fn on_alarm_status_changed(&self, _status: AlarmStatus) -> Result<(), CatpointError> {
        Ok(())
    }

    /// A camera frame was classified.
    fn on_cat_detected(&self, _detected: bool) -> Result<(), CatpointError> {
        Ok(())
    }

    /// Sensors or the arming status changed; re-query whatever you display.
    fn on_sensor_status_changed(&self) -> Result<(), CatpointError> {
        Ok(())
    }
}
