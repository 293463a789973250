//! Shared application state for axum handlers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use catpoint_app::ports::{ImageService, SecurityRepository};
use catpoint_app::services::security_service::SecurityService;

/// Application state shared across all axum handlers.
///
/// Generic over the store and detector types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone`. Only the `Arc` wrapper is cloned.
pub struct AppState<R, I> {
    /// The security service, behind its single mutual-exclusion boundary.
    pub security_service: Arc<Mutex<SecurityService<R, I>>>,
}

impl<R, I> Clone for AppState<R, I> {
    fn clone(&self) -> Self {
        Self {
            security_service: Arc::clone(&self.security_service),
        }
    }
}

impl<R, I> AppState<R, I>
where
    R: SecurityRepository + Send + 'static,
    I: ImageService + Send + 'static,
{
    /// Create a new application state owning the service.
    pub fn new(security_service: SecurityService<R, I>) -> Self {
        Self {
            security_service: Arc::new(Mutex::new(security_service)),
        }
    }

    /// Lock the service for one operation. A poisoned lock is recovered.
    pub fn lock(&self) -> MutexGuard<'_, SecurityService<R, I>> {
        self.security_service
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
