//! # catpoint-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** for the control panel
//!   (`/api/status`, `/api/arming`, `/api/sensors`, `/api/camera/frames`)
//! - Map HTTP requests into security service calls (driving adapter)
//! - Map service results and errors into HTTP responses
//!
//! ## Concurrency
//! The security service is synchronous and takes `&mut self`. It lives
//! behind one mutex in [`state::AppState`]; each handler locks it, runs a
//! single operation, and releases it before responding.
//!
//! ## Dependency rule
//! Depends on `catpoint-app` (for port traits and services) and
//! `catpoint-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;

#[cfg(test)]
mod test_support;
