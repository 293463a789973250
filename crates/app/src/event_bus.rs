//! In-process event bus backed by a tokio broadcast channel.

use tokio::sync::broadcast;

use catpoint_domain::error::CatpointError;
use catpoint_domain::event::{Event, EventKind};
use catpoint_domain::status::AlarmStatus;

use crate::ports::StatusListener;

/// Status listener that republishes every notification as an [`Event`] on a
/// tokio [`broadcast`] channel.
///
/// Publishing succeeds even when there are no active subscribers
/// (the event is simply dropped).
pub struct InProcessEventBus {
    sender: broadcast::Sender<Event>,
}

impl InProcessEventBus {
    /// Create a new event bus with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to events on this bus.
    ///
    /// Returns a receiver that will get all events published *after*
    /// the subscription is created.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    /// Publish an event to all current subscribers.
    pub fn publish(&self, event: Event) {
        // broadcast::send fails only when there are zero receivers.
        let _ = self.sender.send(event);
    }
}

impl StatusListener for InProcessEventBus {
    fn on_alarm_status_changed(&self, status: AlarmStatus) -> Result<(), CatpointError> {
        self.publish(Event::new(EventKind::AlarmStatusChanged { status }));
        Ok(())
    }

    fn on_cat_detected(&self, detected: bool) -> Result<(), CatpointError> {
        self.publish(Event::new(EventKind::CatDetected { detected }));
        Ok(())
    }

    fn on_sensor_status_changed(&self) -> Result<(), CatpointError> {
        self.publish(Event::new(EventKind::SensorStatusChanged));
        Ok(())
    }
}
