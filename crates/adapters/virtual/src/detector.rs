//! Scripted cat detector.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use catpoint_app::ports::ImageService;
use catpoint_domain::camera::CameraFrame;
use catpoint_domain::error::CatpointError;

use crate::config::VirtualCameraConfig;
use crate::error::DetectorError;

/// A stand-in for a real image classifier.
///
/// Each frame consumes the next scripted confidence score; once the script
/// runs out, the fallback score is used. A frame shows a cat when its score
/// reaches the requested threshold.
pub struct VirtualCatDetector {
    script: Mutex<VecDeque<f32>>,
    fallback_confidence: f32,
    offline: AtomicBool,
}

impl Default for VirtualCatDetector {
    fn default() -> Self {
        Self::new(&VirtualCameraConfig::default())
    }
}

impl VirtualCatDetector {
    #[must_use]
    pub fn new(config: &VirtualCameraConfig) -> Self {
        Self {
            script: Mutex::new(config.scripted_confidences.iter().copied().collect()),
            fallback_confidence: config.fallback_confidence,
            offline: AtomicBool::new(false),
        }
    }

    /// Queue a score for an upcoming frame.
    pub fn push_confidence(&self, confidence: f32) {
        self.script
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push_back(confidence);
    }

    /// Make every following classification fail (or succeed again).
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn next_confidence(&self) -> f32 {
        self.script
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .pop_front()
            .unwrap_or(self.fallback_confidence)
    }
}

impl ImageService for VirtualCatDetector {
    fn contains_cat(
        &self,
        frame: &CameraFrame,
        confidence_threshold: f32,
    ) -> Result<bool, CatpointError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(DetectorError::Unavailable.into());
        }
        if frame.is_empty() {
            return Err(DetectorError::EmptyFrame.into());
        }
        let confidence = self.next_confidence();
        tracing::debug!(confidence, confidence_threshold, "virtual camera classified frame");
        Ok(confidence >= confidence_threshold)
    }
}
