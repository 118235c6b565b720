use crate::error::ListenerError;
use crate::event::{ButtonEvent, EventKind};
use crate::listener::ButtonListener;
use tracing::{debug, info};

/// A listener that logs every event it receives through `tracing`.
///
/// `Held` fires on every poll while a button is down, so it goes to DEBUG;
/// presses and releases go to INFO.
#[derive(Debug, Clone)]
pub struct EventLogger {
    pad: String,
}

impl EventLogger {
    /// `pad` is attached to each record as the `pad` field.
    pub fn new(pad: impl Into<String>) -> Self {
        EventLogger { pad: pad.into() }
    }
}

impl ButtonListener for EventLogger {
    fn on_event(&mut self, event: &ButtonEvent) -> Result<(), ListenerError> {
        match event.kind {
            EventKind::Held => debug!(pad = %self.pad, button = %event.button, "held"),
            kind => info!(pad = %self.pad, button = %event.button, %kind, "button"),
        }
        Ok(())
    }
}
