//! # catpoint-adapter-virtual
//!
//! Virtual adapters for running the security service without hardware.
//!
//! | Adapter | Port | Behaviour |
//! |---------|------|-----------|
//! | [`InMemorySecurityRepository`] | `SecurityRepository` | Sensors in a `BTreeMap`, statuses in fields |
//! | [`VirtualCatDetector`] | `ImageService` | Replays scripted confidence scores |
//!
//! ## Dependency rule
//!
//! Depends on `catpoint-app` (port traits) and `catpoint-domain` only.

mod config;
mod detector;
mod error;
mod repository;

pub use config::VirtualCameraConfig;
pub use detector::VirtualCatDetector;
pub use error::DetectorError;
pub use repository::InMemorySecurityRepository;
