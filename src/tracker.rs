//! Per-button edge tracker.
//!
//! [`ButtonTracker`] remembers the last two samples of one button, labels every
//! update with an [`EventKind`] and runs the listeners registered for that kind.
//!
//! # Semantics
//! - Each `update` consumes exactly one sample; `previous` is always the
//!   `current` value from just before the call.
//! - A fresh tracker starts released, so a button already down at the first poll
//!   reports `Pressed`, not `Held`.
//! - Listeners of a kind run in registration order, once per registration. The
//!   same closure registered twice fires twice.
//! - A failing listener does not stop the others; see
//!   [`DispatchError`](crate::error::DispatchError).

use crate::button::Button;
use crate::error::{DispatchError, ListenerError, ListenerFailure};
use crate::event::{ButtonEvent, EventKind};
use crate::listener::{ButtonListener, Infallible};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, trace, warn};

/// Handle to one listener registration.
///
/// Returned by every subscribe call; pass it back to
/// [`ButtonTracker::unsubscribe`] or [`ButtonTracker::set_enabled`]. Ids are
/// unique per tracker and never reused, and a handle only ever matches the
/// tracker that issued it, even across registries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription {
    owner: u64,
    button: Button,
    kind: EventKind,
    id: u64,
}

impl Subscription {
    pub fn button(&self) -> Button {
        self.button
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }
}

impl fmt::Display for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}#{}", self.button, self.kind, self.id)
    }
}

struct ListenerEntry {
    id: u64,
    enabled: bool,
    listener: Box<dyn ButtonListener>,
}

/// Source of tracker identities for [`Subscription`] ownership checks.
static NEXT_OWNER: AtomicU64 = AtomicU64::new(0);

/// Edge detector and listener list for a single button.
pub struct ButtonTracker {
    owner: u64,
    button: Button,
    previous: bool,
    current: bool,
    next_id: u64,
    listeners: [Vec<ListenerEntry>; EventKind::COUNT],
}

impl ButtonTracker {
    /// Fresh tracker: released, no listeners.
    pub fn new(button: Button) -> Self {
        Self {
            owner: NEXT_OWNER.fetch_add(1, Ordering::Relaxed),
            button,
            previous: false,
            current: false,
            next_id: 0,
            listeners: Default::default(),
        }
    }

    pub fn button(&self) -> Button {
        self.button
    }

    /// Sample from the most recent update.
    pub fn is_pressed(&self) -> bool {
        self.current
    }

    /// Sample from the update before that.
    pub fn was_pressed(&self) -> bool {
        self.previous
    }

    /// Edge kind produced by the most recent update, if any.
    pub fn state(&self) -> Option<EventKind> {
        EventKind::from_edge(self.previous, self.current)
    }

    /// Registers an infallible closure for `kind`.
    pub fn subscribe<F>(&mut self, kind: EventKind, listener: F) -> Subscription
    where
        F: FnMut(&ButtonEvent) + Send + 'static,
    {
        self.push(kind, Box::new(Infallible(listener)))
    }

    /// Registers a closure that may fail; failures are reported from `update`.
    pub fn try_subscribe<F>(&mut self, kind: EventKind, listener: F) -> Subscription
    where
        F: FnMut(&ButtonEvent) -> Result<(), ListenerError> + Send + 'static,
    {
        self.push(kind, Box::new(listener))
    }

    /// Registers any [`ButtonListener`] for `kind`.
    pub fn subscribe_listener(
        &mut self,
        kind: EventKind,
        listener: impl ButtonListener + 'static,
    ) -> Subscription {
        self.push(kind, Box::new(listener))
    }

    fn push(&mut self, kind: EventKind, listener: Box<dyn ButtonListener>) -> Subscription {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners[kind.index()].push(ListenerEntry {
            id,
            enabled: true,
            listener,
        });
        debug!(button = %self.button, %kind, id, "listener subscribed");
        Subscription {
            owner: self.owner,
            button: self.button,
            kind,
            id,
        }
    }

    /// Removes the registration named by `sub`.
    ///
    /// Returns `false` if it was already removed or was issued by another tracker.
    pub fn unsubscribe(&mut self, sub: Subscription) -> bool {
        if !self.owns(sub) {
            return false;
        }
        let list = &mut self.listeners[sub.kind.index()];
        match list.iter().position(|e| e.id == sub.id) {
            Some(pos) => {
                list.remove(pos);
                debug!(button = %self.button, kind = %sub.kind, id = sub.id, "listener removed");
                true
            }
            None => false,
        }
    }

    /// Mutes or unmutes a listener without changing its place in the order.
    pub fn set_enabled(&mut self, sub: Subscription, enabled: bool) -> bool {
        if !self.owns(sub) {
            return false;
        }
        match self.listeners[sub.kind.index()]
            .iter_mut()
            .find(|e| e.id == sub.id)
        {
            Some(entry) => {
                entry.enabled = enabled;
                true
            }
            None => false,
        }
    }

    fn owns(&self, sub: Subscription) -> bool {
        sub.owner == self.owner
    }

    /// Number of registrations (enabled or not) for `kind`.
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners[kind.index()].len()
    }

    /// Feeds one sample, then runs the listeners for the resulting edge.
    ///
    /// State is committed before any listener runs. Returns the edge kind, or
    /// `None` when the button stayed released. If listeners failed, every one of
    /// them still ran and the failures come back as [`DispatchError`].
    pub fn update(&mut self, pressed: bool) -> Result<Option<EventKind>, DispatchError> {
        self.previous = self.current;
        self.current = pressed;

        let Some(kind) = EventKind::from_edge(self.previous, self.current) else {
            return Ok(None);
        };
        trace!(button = %self.button, %kind, "edge");

        let (owner, button) = (self.owner, self.button);
        let event = ButtonEvent::new(button, kind);
        let mut failed = DispatchError::default();

        for entry in self.listeners[kind.index()].iter_mut() {
            if !entry.enabled {
                continue;
            }
            if let Err(error) = entry.listener.on_event(&event) {
                warn!(%button, %kind, id = entry.id, %error, "listener failed");
                failed.failures.push(ListenerFailure {
                    subscription: Subscription {
                        owner,
                        button,
                        kind,
                        id: entry.id,
                    },
                    error,
                });
            }
        }

        failed.into_result().map(|()| Some(kind))
    }
}

impl fmt::Debug for ButtonTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonTracker")
            .field("button", &self.button)
            .field("previous", &self.previous)
            .field("current", &self.current)
            .field("pressed_listeners", &self.listener_count(EventKind::Pressed))
            .field("released_listeners", &self.listener_count(EventKind::Released))
            .field("held_listeners", &self.listener_count(EventKind::Held))
            .finish()
    }
}
