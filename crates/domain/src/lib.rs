//! # catpoint-domain
//!
//! Pure domain model for the catpoint home security controller.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Sensors** (door, window and motion detectors keyed by name and type)
//! - Define **Alarm status** and **Arming status**, plus the sensor-driven
//!   alarm transition rules
//! - Define **Camera frames** (opaque payloads for the cat detector)
//! - Define **Events** (notification records)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod camera;
pub mod event;
pub mod sensor;
pub mod status;
