//! In-memory sensor store.

use std::collections::BTreeMap;

use catpoint_app::ports::SecurityRepository;
use catpoint_domain::sensor::{Sensor, SensorKey};
use catpoint_domain::status::{AlarmStatus, ArmingStatus};

/// [`SecurityRepository`] kept entirely in memory.
///
/// Nothing survives a restart: the statuses come back as
/// [`AlarmStatus::NoAlarm`] / [`ArmingStatus::Disarmed`] and only the seeded
/// sensors are known.
#[derive(Debug, Default)]
pub struct InMemorySecurityRepository {
    sensors: BTreeMap<SensorKey, Sensor>,
    alarm_status: AlarmStatus,
    arming_status: ArmingStatus,
}

impl InMemorySecurityRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already tracks `sensors`.
    ///
    /// Later duplicates of the same key are ignored.
    #[must_use]
    pub fn with_sensors(sensors: impl IntoIterator<Item = Sensor>) -> Self {
        let mut repo = Self::new();
        for sensor in sensors {
            repo.add_sensor(sensor);
        }
        repo
    }
}

impl SecurityRepository for InMemorySecurityRepository {
    fn add_sensor(&mut self, sensor: Sensor) -> bool {
        let key = sensor.key();
        if self.sensors.contains_key(&key) {
            return false;
        }
        self.sensors.insert(key, sensor);
        true
    }

    fn remove_sensor(&mut self, key: &SensorKey) -> Option<Sensor> {
        self.sensors.remove(key)
    }

    fn update_sensor(&mut self, sensor: Sensor) {
        self.sensors.insert(sensor.key(), sensor);
    }

    fn get_sensor(&self, key: &SensorKey) -> Option<Sensor> {
        self.sensors.get(key).cloned()
    }

    fn sensors(&self) -> Vec<Sensor> {
        self.sensors.values().cloned().collect()
    }

    fn alarm_status(&self) -> AlarmStatus {
        self.alarm_status
    }

    fn set_alarm_status(&mut self, status: AlarmStatus) {
        self.alarm_status = status;
    }

    fn arming_status(&self) -> ArmingStatus {
        self.arming_status
    }

    fn set_arming_status(&mut self, status: ArmingStatus) {
        self.arming_status = status;
    }
}
