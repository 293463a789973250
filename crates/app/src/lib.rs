//! # catpoint-app
//!
//! Application layer: the alarm decision engine and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `SecurityRepository`: sensor store plus alarm/arming status slots
//!   - `ImageService`: the camera cat detector
//!   - `StatusListener`: observers of state changes
//! - Provide the **driving/inbound** use-case struct:
//!   - `SecurityService`: sensor flips, camera frames, arming changes
//! - Provide **in-process infrastructure** that doesn't need IO
//!   (listener registry, event bus)
//!
//! ## Dependency rule
//! Depends on `catpoint-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod event_bus;
pub mod notifier;
pub mod ports;
pub mod services;
