//! Press-to-toggle helper.
//!
//! A [`Toggle`] turns a momentary button into an on/off switch: every press flips
//! the state and runs either the activate or the deactivate callback. Register it
//! on the `Pressed` kind (see [`GamepadRegistry::toggle`](crate::GamepadRegistry::toggle));
//! holding the button down does not flip it again.
//!
//! ```
//! use padlisten::{Button, ButtonSet, GamepadRegistry, Toggle};
//!
//! let mut pad = GamepadRegistry::new();
//! let toggle = Toggle::new();
//! let intake = toggle.handle();
//! pad.toggle(Button::A, toggle);
//!
//! pad.update(&ButtonSet::from([Button::A])).unwrap();
//! assert!(intake.is_active());
//! pad.update(&ButtonSet::from([Button::A])).unwrap(); // held, no flip
//! assert!(intake.is_active());
//! pad.update(&ButtonSet::empty()).unwrap();
//! pad.update(&ButtonSet::from([Button::A])).unwrap();
//! assert!(!intake.is_active());
//! ```

use crate::error::ListenerError;
use crate::event::{ButtonEvent, EventKind};
use crate::listener::ButtonListener;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

type Action = Box<dyn FnMut() + Send>;

/// On/off state flipped by each press.
pub struct Toggle {
    active: Arc<AtomicBool>,
    on_activate: Option<Action>,
    on_deactivate: Option<Action>,
}

/// Read side of a [`Toggle`], usable after the toggle has been registered.
#[derive(Debug, Clone)]
pub struct ToggleHandle(Arc<AtomicBool>);

impl ToggleHandle {
    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl Toggle {
    /// Starts inactive, with no callbacks.
    pub fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(false)),
            on_activate: None,
            on_deactivate: None,
        }
    }

    /// Runs `f` each time the toggle turns on.
    pub fn on_activate(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.on_activate = Some(Box::new(f));
        self
    }

    /// Runs `f` each time the toggle turns off.
    pub fn on_deactivate(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.on_deactivate = Some(Box::new(f));
        self
    }

    pub fn handle(&self) -> ToggleHandle {
        ToggleHandle(self.active.clone())
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }
}

impl Default for Toggle {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonListener for Toggle {
    fn on_event(&mut self, event: &ButtonEvent) -> Result<(), ListenerError> {
        if event.kind != EventKind::Pressed {
            return Ok(());
        }
        let now_active = !self.active.fetch_xor(true, Ordering::Relaxed);
        let action = if now_active {
            self.on_activate.as_mut()
        } else {
            self.on_deactivate.as_mut()
        };
        if let Some(f) = action {
            f();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::Button;
    use std::sync::Mutex;

    #[test]
    fn alternates_callbacks() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let (on, off) = (calls.clone(), calls.clone());
        let mut toggle = Toggle::new()
            .on_activate(move || on.lock().unwrap().push("on"))
            .on_deactivate(move || off.lock().unwrap().push("off"));

        let press = ButtonEvent::new(Button::Y, EventKind::Pressed);
        let held = ButtonEvent::new(Button::Y, EventKind::Held);
        toggle.on_event(&press).unwrap();
        toggle.on_event(&held).unwrap();
        toggle.on_event(&press).unwrap();
        toggle.on_event(&press).unwrap();

        assert_eq!(*calls.lock().unwrap(), vec!["on", "off", "on"]);
        assert!(toggle.is_active());
    }
}
