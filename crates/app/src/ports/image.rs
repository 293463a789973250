//! Image port: the external cat detector.

use std::sync::Arc;

use catpoint_domain::camera::CameraFrame;
use catpoint_domain::error::CatpointError;

/// Classifies camera frames.
pub trait ImageService {
    /// Whether `frame` shows a cat with at least `confidence_threshold`
    /// percent confidence (0–100).
    ///
    /// # Errors
    ///
    /// Returns [`CatpointError::Detector`] when the frame cannot be
    /// classified.
    fn contains_cat(
        &self,
        frame: &CameraFrame,
        confidence_threshold: f32,
    ) -> Result<bool, CatpointError>;
}

impl<T: ImageService + ?Sized> ImageService for Arc<T> {
    fn contains_cat(
        &self,
        frame: &CameraFrame,
        confidence_threshold: f32,
    ) -> Result<bool, CatpointError> {
        (**self).contains_cat(frame, confidence_threshold)
    }
}
