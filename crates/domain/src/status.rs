//! Alarm and arming status, and the sensor-driven alarm transition rules.
//!
//! The rules are pure functions of the current status: they return the
//! status to write, or `None` when the event leaves the alarm untouched.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Current alert level of the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlarmStatus {
    #[default]
    NoAlarm,
    PendingAlarm,
    Alarm,
}

impl AlarmStatus {
    /// Human-readable description shown to the occupant.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::NoAlarm => "Cool and Good",
            Self::PendingAlarm => "I'm in Danger...",
            Self::Alarm => "Awooga!",
        }
    }

    /// Status to write after a sensor reports `active == true`.
    ///
    /// A disarmed system never escalates. An armed one escalates one step
    /// per activation and stays at [`Alarm`](Self::Alarm).
    #[must_use]
    pub fn on_sensor_activated(self, arming: ArmingStatus) -> Option<Self> {
        if !arming.is_armed() {
            return None;
        }
        match self {
            Self::NoAlarm => Some(Self::PendingAlarm),
            Self::PendingAlarm => Some(Self::Alarm),
            Self::Alarm => None,
        }
    }

    /// Status to write after a previously active sensor goes inactive.
    #[must_use]
    pub fn on_sensor_deactivated(self) -> Option<Self> {
        match self {
            Self::PendingAlarm => Some(Self::NoAlarm),
            Self::NoAlarm | Self::Alarm => None,
        }
    }
}

impl fmt::Display for AlarmStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAlarm => f.write_str("NO_ALARM"),
            Self::PendingAlarm => f.write_str("PENDING_ALARM"),
            Self::Alarm => f.write_str("ALARM"),
        }
    }
}

/// Operating mode of the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArmingStatus {
    #[default]
    Disarmed,
    ArmedHome,
    ArmedAway,
}

impl ArmingStatus {
    /// Whether sensors can raise an alarm in this mode.
    #[must_use]
    pub fn is_armed(self) -> bool {
        !matches!(self, Self::Disarmed)
    }

    /// Human-readable description shown to the occupant.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Disarmed => "Disarmed",
            Self::ArmedHome => "Armed - At Home",
            Self::ArmedAway => "Armed - Away",
        }
    }
}

impl fmt::Display for ArmingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disarmed => f.write_str("DISARMED"),
            Self::ArmedHome => f.write_str("ARMED_HOME"),
            Self::ArmedAway => f.write_str("ARMED_AWAY"),
        }
    }
}
