//! Gamepad registry: one tracker per button.
//!
//! [`GamepadRegistry`] owns a [`ButtonTracker`] for every [`Button`], created up
//! front and kept for the registry's whole life. Each `update` takes one
//! snapshot and feeds every tracker its sample.
//!
//! # Threading
//! A registry is driven by a single polling thread. It is `Send`, so it can be
//! built on one thread and moved to the poller, but it is not meant to be shared:
//! listeners run on whichever thread calls `update`.
//!
//! # Ordering
//! Within one tracker, listeners run in registration order. Across buttons,
//! `update` currently walks [`Button::ALL`] in order, but listeners for different
//! buttons must not depend on their relative order within a single update.

use crate::button::{Button, ButtonSet};
use crate::config::PadConfig;
use crate::error::{DispatchError, ListenerError, UnknownButton};
use crate::event::{ButtonEvent, EventKind};
use crate::listener::ButtonListener;
use crate::logger::EventLogger;
use crate::snapshot::ButtonSnapshot;
use crate::toggle::Toggle;
use crate::tracker::{ButtonTracker, Subscription};
use tracing::debug;

pub struct GamepadRegistry {
    name: String,
    trackers: [ButtonTracker; Button::COUNT],
}

impl GamepadRegistry {
    pub fn new() -> Self {
        Self::named("gamepad")
    }

    /// Registry labelled `name` in log records.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        debug!(pad = %name, buttons = Button::COUNT, "registry created");
        Self {
            name,
            trackers: std::array::from_fn(|i| ButtonTracker::new(Button::ALL[i])),
        }
    }

    /// Registry set up from `config`; with `log_events` every button/kind pair
    /// gets an [`EventLogger`].
    pub fn from_config(config: &PadConfig) -> Self {
        let mut pad = Self::named(config.name.clone());
        if config.log_events {
            let logger = EventLogger::new(config.name.clone());
            for tracker in pad.trackers.iter_mut() {
                for kind in EventKind::ALL {
                    tracker.subscribe_listener(kind, logger.clone());
                }
            }
        }
        pad
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tracker(&self, button: Button) -> &ButtonTracker {
        &self.trackers[button.index()]
    }

    pub fn tracker_mut(&mut self, button: Button) -> &mut ButtonTracker {
        &mut self.trackers[button.index()]
    }

    /// Looks a tracker up by button name (or alias).
    pub fn tracker_by_name(&self, name: &str) -> Result<&ButtonTracker, UnknownButton> {
        let button: Button = name.parse()?;
        Ok(self.tracker(button))
    }

    /// All trackers, in [`Button::ALL`] order.
    pub fn trackers(&self) -> impl Iterator<Item = &ButtonTracker> {
        self.trackers.iter()
    }

    pub fn subscribe<F>(&mut self, button: Button, kind: EventKind, listener: F) -> Subscription
    where
        F: FnMut(&ButtonEvent) + Send + 'static,
    {
        self.tracker_mut(button).subscribe(kind, listener)
    }

    pub fn try_subscribe<F>(&mut self, button: Button, kind: EventKind, listener: F) -> Subscription
    where
        F: FnMut(&ButtonEvent) -> Result<(), ListenerError> + Send + 'static,
    {
        self.tracker_mut(button).try_subscribe(kind, listener)
    }

    pub fn subscribe_listener(
        &mut self,
        button: Button,
        kind: EventKind,
        listener: impl ButtonListener + 'static,
    ) -> Subscription {
        self.tracker_mut(button).subscribe_listener(kind, listener)
    }

    /// Makes `button` flip `toggle` on every press.
    pub fn toggle(&mut self, button: Button, toggle: Toggle) -> Subscription {
        self.subscribe_listener(button, EventKind::Pressed, toggle)
    }

    pub fn unsubscribe(&mut self, sub: Subscription) -> bool {
        self.tracker_mut(sub.button()).unsubscribe(sub)
    }

    pub fn set_enabled(&mut self, sub: Subscription, enabled: bool) -> bool {
        self.tracker_mut(sub.button()).set_enabled(sub, enabled)
    }

    pub fn is_pressed(&self, button: Button) -> bool {
        self.tracker(button).is_pressed()
    }

    /// Buttons down as of the last update.
    pub fn pressed(&self) -> ButtonSet {
        self.trackers
            .iter()
            .filter(|t| t.is_pressed())
            .map(|t| t.button())
            .collect()
    }

    /// Feeds one snapshot to every tracker.
    ///
    /// Every button is processed even if some listeners fail; the failures of
    /// the whole sweep come back together.
    pub fn update<S>(&mut self, snapshot: &S) -> Result<(), DispatchError>
    where
        S: ButtonSnapshot + ?Sized,
    {
        let mut failed = DispatchError::default();
        for tracker in self.trackers.iter_mut() {
            let pressed = snapshot.is_pressed(tracker.button());
            if let Err(err) = tracker.update(pressed) {
                failed.absorb(err);
            }
        }
        failed.into_result()
    }
}

impl Default for GamepadRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GamepadRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GamepadRegistry")
            .field("name", &self.name)
            .field("pressed", &self.pressed())
            .finish()
    }
}
