//! Virtual camera configuration.

use serde::Deserialize;

/// Configuration for the [`VirtualCatDetector`](crate::VirtualCatDetector).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VirtualCameraConfig {
    /// Confidence (0–100) reported once the scripted scores run out.
    pub fallback_confidence: f32,
    /// Scores replayed in order, one per frame.
    pub scripted_confidences: Vec<f32>,
}

impl Default for VirtualCameraConfig {
    fn default() -> Self {
        Self {
            fallback_confidence: 0.0,
            scripted_confidences: Vec::new(),
        }
    }
}

impl VirtualCameraConfig {
    /// Whether every configured score lies within 0–100.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        std::iter::once(&self.fallback_confidence)
            .chain(&self.scripted_confidences)
            .all(|score| (0.0..=100.0).contains(score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_no_cat() {
        let config = VirtualCameraConfig::default();
        assert!(config.fallback_confidence.abs() < f32::EPSILON);
        assert!(config.scripted_confidences.is_empty());
        assert!(config.is_valid());
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let config: VirtualCameraConfig =
            toml::from_str("scripted_confidences = [80.0, 10.0]").unwrap();
        assert_eq!(config.scripted_confidences, vec![80.0, 10.0]);
        assert!(config.fallback_confidence.abs() < f32::EPSILON);
    }

    #[test]
    fn should_reject_out_of_range_scores() {
        let config = VirtualCameraConfig {
            fallback_confidence: 101.0,
            scripted_confidences: Vec::new(),
        };
        assert!(!config.is_valid());

        let config = VirtualCameraConfig {
            fallback_confidence: 0.0,
            scripted_confidences: vec![-1.0],
        };
        assert!(!config.is_valid());
    }
}
