//! Event: an immutable record of a notification the engine emitted.

use serde::{Deserialize, Serialize};

use crate::id::EventId;
use crate::status::AlarmStatus;
use crate::time::{Timestamp, now};

/// What happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    /// The alarm status was written.
    AlarmStatusChanged { status: AlarmStatus },
    /// A camera frame was classified.
    CatDetected { detected: bool },
    /// Sensors or the arming status changed; listeners should re-query.
    SensorStatusChanged,
}

/// A timestamped [`EventKind`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub kind: EventKind,
    pub timestamp: Timestamp,
}

impl Event {
    /// Create a new event stamped with the current time.
    #[must_use]
    pub fn new(kind: EventKind) -> Self {
        Self {
            id: EventId::new(),
            kind,
            timestamp: now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_assign_unique_ids() {
        let a = Event::new(EventKind::SensorStatusChanged);
        let b = Event::new(EventKind::SensorStatusChanged);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn should_serialize_kind_with_type_tag() {
        let event = Event::new(EventKind::AlarmStatusChanged {
            status: AlarmStatus::Alarm,
        });
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json["kind"],
            serde_json::json!({"type": "alarm_status_changed", "status": "ALARM"})
        );
    }

    #[test]
    fn should_roundtrip_cat_detected_kind() {
        let kind = EventKind::CatDetected { detected: true };
        let json = serde_json::to_string(&kind).unwrap();
        let parsed: EventKind = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, kind);
    }
}
