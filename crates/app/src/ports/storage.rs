//! Storage port: the sensor store and the two status slots.

use catpoint_domain::sensor::{Sensor, SensorKey};
use catpoint_domain::status::{AlarmStatus, ArmingStatus};

/// Plain storage for sensors and the alarm/arming status.
///
/// Implementations hold no business logic and are last-write-wins.
/// A fresh store reports [`AlarmStatus::NoAlarm`] and
/// [`ArmingStatus::Disarmed`].
pub trait SecurityRepository {
    /// Start tracking a sensor. Returns `false` if one with the same
    /// [`SensorKey`] is already tracked (the stored one is kept).
    fn add_sensor(&mut self, sensor: Sensor) -> bool;

    /// Stop tracking a sensor, returning it if it was tracked.
    fn remove_sensor(&mut self, key: &SensorKey) -> Option<Sensor>;

    /// Insert or replace the stored copy of a sensor.
    fn update_sensor(&mut self, sensor: Sensor);

    /// Look up a tracked sensor.
    fn get_sensor(&self, key: &SensorKey) -> Option<Sensor>;

    /// All tracked sensors.
    fn sensors(&self) -> Vec<Sensor>;

    fn alarm_status(&self) -> AlarmStatus;

    fn set_alarm_status(&mut self, status: AlarmStatus);

    fn arming_status(&self) -> ArmingStatus;

    fn set_arming_status(&mut self, status: ArmingStatus);
}
