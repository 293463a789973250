//! Sensor: a binary presence/contact detector tracked by name and category.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CatpointError, ValidationError};

/// Category of a [`Sensor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SensorType {
    Door,
    Window,
    Motion,
}

impl SensorType {
    /// All known sensor categories.
    pub const ALL: [Self; 3] = [Self::Door, Self::Window, Self::Motion];
}

impl fmt::Display for SensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Door => f.write_str("DOOR"),
            Self::Window => f.write_str("WINDOW"),
            Self::Motion => f.write_str("MOTION"),
        }
    }
}

impl FromStr for SensorType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::UnknownSensorType(s.to_string()))
    }
}

/// Identity of a sensor: its name together with its category.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SensorKey {
    pub name: String,
    pub sensor_type: SensorType,
}

impl SensorKey {
    #[must_use]
    pub fn new(name: impl Into<String>, sensor_type: SensorType) -> Self {
        Self {
            name: name.into(),
            sensor_type,
        }
    }
}

impl fmt::Display for SensorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.sensor_type, self.name)
    }
}

/// A tracked sensor and its last reported activation flag.
///
/// Two sensors are equal when they share the same [`SensorKey`]; the
/// `active` flag is state, not identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sensor {
    pub name: String,
    pub sensor_type: SensorType,
    pub active: bool,
}

impl Sensor {
    /// Create a builder for constructing a [`Sensor`].
    #[must_use]
    pub fn builder() -> SensorBuilder {
        SensorBuilder::default()
    }

    /// The identity of this sensor.
    #[must_use]
    pub fn key(&self) -> SensorKey {
        SensorKey::new(self.name.clone(), self.sensor_type)
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CatpointError::Validation`] when `name` is blank.
    pub fn validate(&self) -> Result<(), CatpointError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }
}

impl From<SensorKey> for Sensor {
    fn from(key: SensorKey) -> Self {
        Self {
            name: key.name,
            sensor_type: key.sensor_type,
            active: false,
        }
    }
}

impl PartialEq for Sensor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.sensor_type == other.sensor_type
    }
}

impl Eq for Sensor {}

impl Hash for Sensor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.sensor_type.hash(state);
    }
}

/// Step-by-step builder for [`Sensor`].
#[derive(Debug, Default)]
pub struct SensorBuilder {
    name: Option<String>,
    sensor_type: Option<SensorType>,
}

impl SensorBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn sensor_type(mut self, sensor_type: SensorType) -> Self {
        self.sensor_type = Some(sensor_type);
        self
    }

    /// Consume the builder, validate, and return a [`Sensor`].
    ///
    /// The sensor starts inactive. The category defaults to [`SensorType::Door`].
    ///
    /// # Errors
    ///
    /// Returns [`CatpointError::Validation`] if `name` is missing or blank.
    pub fn build(self) -> Result<Sensor, CatpointError> {
        let sensor = Sensor {
            name: self.name.unwrap_or_default(),
            sensor_type: self.sensor_type.unwrap_or(SensorType::Door),
            active: false,
        };
        sensor.validate()?;
        Ok(sensor)
    }
}
