//! Edge events.
//!
//! A tracker compares each new sample against the previous one and labels the
//! transition with an [`EventKind`]:
//!
//! | previous | current | kind       |
//! |----------|---------|------------|
//! | `false`  | `true`  | `Pressed`  |
//! | `true`   | `false` | `Released` |
//! | `true`   | `true`  | `Held`     |
//! | `false`  | `false` | *(none)*   |
//!
//! `Held` therefore fires on every poll while the button stays down, not once.

use crate::button::Button;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of edge detected between two consecutive samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// The button just went down.
    Pressed,
    /// The button just went up.
    Released,
    /// The button stayed down across the poll interval.
    Held,
}

impl EventKind {
    pub const COUNT: usize = 3;

    pub const ALL: [EventKind; EventKind::COUNT] =
        [EventKind::Pressed, EventKind::Released, EventKind::Held];

    /// Applies the edge table to a `(previous, current)` pair.
    #[inline]
    pub const fn from_edge(previous: bool, current: bool) -> Option<EventKind> {
        match (previous, current) {
            (false, true) => Some(EventKind::Pressed),
            (true, false) => Some(EventKind::Released),
            (true, true) => Some(EventKind::Held),
            (false, false) => None,
        }
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            EventKind::Pressed => "pressed",
            EventKind::Released => "released",
            EventKind::Held => "held",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The value handed to listeners: which button, and what happened to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ButtonEvent {
    pub button: Button,
    pub kind: EventKind,
}

impl ButtonEvent {
    pub const fn new(button: Button, kind: EventKind) -> Self {
        Self { button, kind }
    }
}

impl fmt::Display for ButtonEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.button, self.kind)
    }
}
