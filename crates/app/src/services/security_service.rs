//! Security service: the alarm decision engine.
//!
//! Reconciles three signals into one alarm status: sensor activity, the
//! arming mode, and the last cat-detection result from the camera. Every
//! operation runs to completion (read, decide, write, notify) before it
//! returns. The service takes `&mut self`; callers sharing it across threads
//! wrap it in a single mutex.

use std::sync::Arc;

use catpoint_domain::camera::CameraFrame;
use catpoint_domain::error::CatpointError;
use catpoint_domain::id::ListenerId;
use catpoint_domain::sensor::{Sensor, SensorKey};
use catpoint_domain::status::{AlarmStatus, ArmingStatus};

use crate::notifier::ListenerRegistry;
use crate::ports::{ImageService, SecurityRepository, StatusListener};

/// Confidence (percent) the cat detector must reach for a frame to count.
pub const CAT_CONFIDENCE_THRESHOLD: f32 = 50.0;

/// Owns the authoritative alarm and arming status.
pub struct SecurityService<R, I> {
    repo: R,
    image_service: I,
    listeners: ListenerRegistry,
    cat_detected: bool,
}

impl<R, I> SecurityService<R, I>
where
    R: SecurityRepository,
    I: ImageService,
{
    /// Create a new service backed by the given store and cat detector.
    pub fn new(repo: R, image_service: I) -> Self {
        Self {
            repo,
            image_service,
            listeners: ListenerRegistry::new(),
            cat_detected: false,
        }
    }

    /// Register a listener for status updates.
    pub fn add_status_listener(&mut self, listener: Arc<dyn StatusListener>) -> ListenerId {
        self.listeners.register(listener)
    }

    /// Unregister a listener. Returns `false` if `id` was unknown.
    pub fn remove_status_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.unregister(id)
    }

    #[must_use]
    pub fn alarm_status(&self) -> AlarmStatus {
        self.repo.alarm_status()
    }

    #[must_use]
    pub fn arming_status(&self) -> ArmingStatus {
        self.repo.arming_status()
    }

    /// Result of the most recent successful frame classification.
    #[must_use]
    pub fn cat_detected(&self) -> bool {
        self.cat_detected
    }

    /// All tracked sensors, ordered by key.
    #[must_use]
    pub fn sensors(&self) -> Vec<Sensor> {
        let mut sensors = self.repo.sensors();
        sensors.sort_by_key(Sensor::key);
        sensors
    }

    #[must_use]
    pub fn sensor(&self, key: &SensorKey) -> Option<Sensor> {
        self.repo.get_sensor(key)
    }

    /// Start tracking a sensor.
    ///
    /// Returns `Ok(false)` when a sensor with the same key is already
    /// tracked; the stored one is left as is.
    ///
    /// # Errors
    ///
    /// Returns [`CatpointError::Validation`] if the sensor name is blank.
    #[tracing::instrument(skip(self, sensor), fields(sensor = %sensor.key()))]
    pub fn add_sensor(&mut self, sensor: Sensor) -> Result<bool, CatpointError> {
        sensor.validate()?;
        Ok(self.repo.add_sensor(sensor))
    }

    /// Stop tracking a sensor, returning it if it was tracked.
    #[tracing::instrument(skip(self), fields(sensor = %key))]
    pub fn remove_sensor(&mut self, key: &SensorKey) -> Option<Sensor> {
        self.repo.remove_sensor(key)
    }

    /// Record a sensor's new activation flag and update the alarm status.
    ///
    /// An alarm that is already sounding is never changed by sensors; only
    /// disarming clears it. Otherwise an activation escalates an armed
    /// system one step, and the deactivation of a sensor that was active
    /// clears a pending alarm. Unknown sensors start being tracked.
    ///
    /// Returns the sensor as stored afterwards.
    #[tracing::instrument(skip(self, sensor), fields(sensor = %sensor.key()))]
    pub fn change_sensor_activation(&mut self, sensor: &Sensor, active: bool) -> Sensor {
        let key = sensor.key();
        let was_active = self
            .repo
            .get_sensor(&key)
            .map_or(sensor.active, |stored| stored.active);

        let current = self.repo.alarm_status();
        if current != AlarmStatus::Alarm {
            let next = if active {
                current.on_sensor_activated(self.repo.arming_status())
            } else if was_active {
                current.on_sensor_deactivated()
            } else {
                None
            };
            if let Some(next) = next {
                self.set_alarm_status(next);
            }
        }

        let mut updated = Sensor::from(key);
        updated.active = active;
        self.repo.update_sensor(updated.clone());
        updated
    }

    /// Classify a camera frame and update the alarm status.
    ///
    /// A cat while armed-home sounds the alarm. No cat while no sensor is
    /// active clears it. Listeners learn the detection result either way.
    ///
    /// Returns whether a cat was detected.
    ///
    /// # Errors
    ///
    /// Returns the detector's error unchanged. The alarm status and the
    /// last detection result are left untouched and nobody is notified.
    #[tracing::instrument(skip(self, frame), fields(frame_len = frame.len()))]
    pub fn process_image(&mut self, frame: &CameraFrame) -> Result<bool, CatpointError> {
        let cat = self
            .image_service
            .contains_cat(frame, CAT_CONFIDENCE_THRESHOLD)
            .inspect_err(|err| {
                tracing::warn!(error = %err, "cat detector failed, alarm status unchanged");
            })?;
        self.handle_cat_detected(cat);
        Ok(cat)
    }

    /// Change the arming mode.
    ///
    /// Disarming always clears the alarm. Arming home while a cat is in view
    /// sounds the alarm; any other arming resets every sensor to inactive.
    #[tracing::instrument(skip(self))]
    pub fn set_arming_status(&mut self, status: ArmingStatus) {
        match status {
            ArmingStatus::Disarmed => self.set_alarm_status(AlarmStatus::NoAlarm),
            ArmingStatus::ArmedHome if self.cat_detected => {
                self.set_alarm_status(AlarmStatus::Alarm);
            }
            ArmingStatus::ArmedHome | ArmingStatus::ArmedAway => {
                for sensor in self.repo.sensors() {
                    self.change_sensor_activation(&sensor, false);
                }
            }
        }
        self.repo.set_arming_status(status);
        self.listeners.notify_sensor_status_changed();
    }

    fn handle_cat_detected(&mut self, cat: bool) {
        let sensor_activated = self.repo.sensors().iter().any(|sensor| sensor.active);
        self.cat_detected = cat;

        if cat && self.repo.arming_status() == ArmingStatus::ArmedHome {
            self.set_alarm_status(AlarmStatus::Alarm);
        } else if !cat && !sensor_activated {
            self.set_alarm_status(AlarmStatus::NoAlarm);
        }

        self.listeners.notify_cat_detected(cat);
    }

    fn set_alarm_status(&mut self, status: AlarmStatus) {
        let previous = self.repo.alarm_status();
        self.repo.set_alarm_status(status);
        tracing::debug!(from = %previous, to = %status, "alarm status set");
        self.listeners.notify_alarm_status(status);
    }
}
