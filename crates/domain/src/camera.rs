//! Camera frame: the opaque image payload handed to the cat detector.

/// A single frame captured by the security camera.
///
/// The domain never looks inside the bytes; only the cat detector does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CameraFrame {
    bytes: Vec<u8>,
}

impl CameraFrame {
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
