//! Virtual detector error types.

use catpoint_domain::error::CatpointError;

/// Errors specific to the virtual cat detector.
#[derive(Debug, thiserror::Error)]
pub enum DetectorError {
    /// The detector was switched offline.
    #[error("virtual camera unavailable")]
    Unavailable,

    /// The frame carried no image data.
    #[error("empty camera frame")]
    EmptyFrame,
}

impl From<DetectorError> for CatpointError {
    fn from(err: DetectorError) -> Self {
        Self::Detector(Box::new(err))
    }
}
