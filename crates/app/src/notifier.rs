//! Listener registry: synchronous fan-out to status listeners.
//!
//! Broadcasts borrow the registry shared and `register`/`unregister` borrow
//! it exclusively, so a registration change can never overlap a broadcast:
//! it only affects later ones. Listeners are called in registration order.
//! A listener whose hook fails is logged and skipped; the remaining
//! listeners are still notified.

use std::sync::Arc;

use catpoint_domain::error::CatpointError;
use catpoint_domain::id::ListenerId;
use catpoint_domain::status::AlarmStatus;

use crate::ports::StatusListener;

/// Set of registered [`StatusListener`]s.
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: Vec<(ListenerId, Arc<dyn StatusListener>)>,
}

impl ListenerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener.
    ///
    /// Registering the same `Arc` twice returns the id of the existing
    /// registration instead of adding a duplicate.
    pub fn register(&mut self, listener: Arc<dyn StatusListener>) -> ListenerId {
        if let Some((id, _)) = self
            .listeners
            .iter()
            .find(|(_, existing)| Arc::ptr_eq(existing, &listener))
        {
            return *id;
        }
        let id = ListenerId::new();
        self.listeners.push((id, listener));
        id
    }

    /// Remove a listener. Returns `false` if `id` was not registered.
    pub fn unregister(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn notify_alarm_status(&self, status: AlarmStatus) {
        self.broadcast("on_alarm_status_changed", |listener| {
            listener.on_alarm_status_changed(status)
        });
    }

    pub fn notify_cat_detected(&self, detected: bool) {
        self.broadcast("on_cat_detected", |listener| {
            listener.on_cat_detected(detected)
        });
    }

    pub fn notify_sensor_status_changed(&self) {
        self.broadcast("on_sensor_status_changed", |listener| {
            listener.on_sensor_status_changed()
        });
    }

    fn broadcast<F>(&self, hook: &'static str, call: F)
    where
        F: Fn(&dyn StatusListener) -> Result<(), CatpointError>,
    {
        for (id, listener) in &self.listeners {
            if let Err(err) = call(listener.as_ref()) {
                tracing::warn!(listener = %id, hook, error = %err, "status listener failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingListener {
        alarm: AtomicUsize,
        cat: AtomicUsize,
        sensor: AtomicUsize,
    }

    impl StatusListener for CountingListener {
        fn on_alarm_status_changed(&self, _status: AlarmStatus) -> Result<(), CatpointError> {
            self.alarm.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn on_cat_detected(&self, _detected: bool) -> Result<(), CatpointError> {
            self.cat.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn on_sensor_status_changed(&self) -> Result<(), CatpointError> {
            self.sensor.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct FailingListener {
        calls: Mutex<Vec<&'static str>>,
    }

    #[derive(Debug)]
    struct ListenerDown;

    impl std::fmt::Display for ListenerDown {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("listener down")
        }
    }

    impl std::error::Error for ListenerDown {}

    impl StatusListener for FailingListener {
        fn on_alarm_status_changed(&self, _status: AlarmStatus) -> Result<(), CatpointError> {
            self.calls.lock().unwrap().push("alarm");
            Err(CatpointError::Listener(Box::new(ListenerDown)))
        }
    }

    #[test]
    fn should_notify_every_registered_listener() {
        let mut registry = ListenerRegistry::new();
        let a = Arc::new(CountingListener::default());
        let b = Arc::new(CountingListener::default());
        registry.register(a.clone());
        registry.register(b.clone());

        registry.notify_alarm_status(AlarmStatus::Alarm);
        registry.notify_cat_detected(true);
        registry.notify_sensor_status_changed();

        for listener in [&a, &b] {
            assert_eq!(listener.alarm.load(Ordering::SeqCst), 1);
            assert_eq!(listener.cat.load(Ordering::SeqCst), 1);
            assert_eq!(listener.sensor.load(Ordering::SeqCst), 1);
        }
    }

    #[test]
    fn should_not_register_same_listener_twice() {
        let mut registry = ListenerRegistry::new();
        let listener = Arc::new(CountingListener::default());

        let first = registry.register(listener.clone());
        let second = registry.register(listener.clone());

        assert_eq!(first, second);
        assert_eq!(registry.len(), 1);

        registry.notify_cat_detected(false);
        assert_eq!(listener.cat.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn should_stop_notifying_after_unregister() {
        let mut registry = ListenerRegistry::new();
        let listener = Arc::new(CountingListener::default());
        let id = registry.register(listener.clone());

        assert!(registry.unregister(id));
        assert!(registry.is_empty());

        registry.notify_sensor_status_changed();
        assert_eq!(listener.sensor.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn should_return_false_when_unregistering_unknown_id() {
        let mut registry = ListenerRegistry::new();
        assert!(!registry.unregister(ListenerId::new()));
    }

    struct NamedListener {
        name: &'static str,
        log: Arc<Mutex<Vec<&'static str>>>,
    }

    impl StatusListener for NamedListener {
        fn on_sensor_status_changed(&self) -> Result<(), CatpointError> {
            self.log.lock().unwrap().push(self.name);
            Ok(())
        }
    }

    #[test]
    fn should_notify_in_registration_order_and_only_later_registrations_afterwards() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let named = |name| {
            Arc::new(NamedListener {
                name,
                log: Arc::clone(&log),
            })
        };
        let mut registry = ListenerRegistry::new();
        registry.register(named("first"));
        registry.register(named("second"));

        registry.notify_sensor_status_changed();
        registry.register(named("third"));
        registry.notify_sensor_status_changed();

        assert_eq!(
            *log.lock().unwrap(),
            vec!["first", "second", "first", "second", "third"]
        );
    }

    #[test]
    fn should_keep_notifying_when_a_listener_fails() {
        let mut registry = ListenerRegistry::new();
        let failing = Arc::new(FailingListener {
            calls: Mutex::new(Vec::new()),
        });
        let counting = Arc::new(CountingListener::default());
        registry.register(failing.clone());
        registry.register(counting.clone());

        registry.notify_alarm_status(AlarmStatus::PendingAlarm);

        assert_eq!(*failing.calls.lock().unwrap(), vec!["alarm"]);
        assert_eq!(counting.alarm.load(Ordering::SeqCst), 1);
    }
}
