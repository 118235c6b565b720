//! Per-poll snapshot of gamepad state.
//!
//! A snapshot is an **immutable** read of the device at one poll instant. The
//! registry only needs one thing from it, answered by [`ButtonSnapshot`]: is a
//! given button down right now?
//!
//! [`GamepadData`] is the full read (digital buttons plus sticks and triggers)
//! produced by the bundled sources. Anything else that can answer the question
//! works too:
//! - a [`ButtonSet`] (member means pressed),
//! - a closure `Fn(Button) -> bool`.
//!
//! # Example
//! ```
//! use padlisten::{Button, ButtonSet, GamepadData};
//!
//! let data = GamepadData {
//!     buttons: ButtonSet::from([Button::A]),
//!     left_trigger: 0.8,
//!     ..GamepadData::default()
//! };
//! use padlisten::ButtonSnapshot;
//! assert!(data.is_pressed(Button::A));
//! assert!(data.is_pressed(Button::LeftTrigger)); // 0.8 > 0.5
//! assert!(!data.is_pressed(Button::RightTrigger));
//! ```

use crate::button::{Button, ButtonSet};
use serde::{Deserialize, Serialize};

/// Default analog level above which a trigger counts as pressed.
pub const DEFAULT_TRIGGER_THRESHOLD: f32 = 0.5;

/// Read access to the digital state of every button at one poll instant.
pub trait ButtonSnapshot {
    fn is_pressed(&self, button: Button) -> bool;
}

impl ButtonSnapshot for ButtonSet {
    #[inline]
    fn is_pressed(&self, button: Button) -> bool {
        self.contains(button)
    }
}

impl<F> ButtonSnapshot for F
where
    F: Fn(Button) -> bool,
{
    #[inline]
    fn is_pressed(&self, button: Button) -> bool {
        self(button)
    }
}

/// Everything a source read from the device at one poll.
///
/// Axes use the usual conventions:
/// - sticks are normalized to `[-1.0, 1.0]`,
/// - triggers are normalized to `[0.0, 1.0]` (released .. fully pulled).
///
/// Missing fields deserialize to their defaults, so a scripted frame can be as
/// short as `{"buttons": ["a"]}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GamepadData {
    /// Buttons reported as digitally pressed.
    pub buttons: ButtonSet,
    pub left_stick_x: f32,
    pub left_stick_y: f32,
    pub right_stick_x: f32,
    pub right_stick_y: f32,
    pub left_trigger: f32,
    pub right_trigger: f32,
    /// Analog trigger level that counts as a press (strictly greater than).
    #[serde(skip, default = "default_trigger_threshold")]
    pub trigger_threshold: f32,
}

fn default_trigger_threshold() -> f32 {
    DEFAULT_TRIGGER_THRESHOLD
}

impl Default for GamepadData {
    fn default() -> Self {
        Self {
            buttons: ButtonSet::empty(),
            left_stick_x: 0.0,
            left_stick_y: 0.0,
            right_stick_x: 0.0,
            right_stick_y: 0.0,
            left_trigger: 0.0,
            right_trigger: 0.0,
            trigger_threshold: DEFAULT_TRIGGER_THRESHOLD,
        }
    }
}

impl GamepadData {
    /// Snapshot with only the given buttons down.
    pub fn with_buttons(buttons: impl Into<ButtonSet>) -> Self {
        Self {
            buttons: buttons.into(),
            ..Self::default()
        }
    }

    /// Set of every button that reads as pressed, triggers included.
    pub fn pressed(&self) -> ButtonSet {
        Button::ALL
            .into_iter()
            .filter(|b| self.is_pressed(*b))
            .collect()
    }
}

impl ButtonSnapshot for GamepadData {
    fn is_pressed(&self, button: Button) -> bool {
        if self.buttons.contains(button) {
            return true;
        }
        if !button.is_trigger() {
            return false;
        }
        let level = if button == Button::LeftTrigger {
            self.left_trigger
        } else {
            self.right_trigger
        };
        level > self.trigger_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_threshold_is_strict() {
        let mut data = GamepadData {
            left_trigger: 0.5,
            ..GamepadData::default()
        };
        assert!(!data.is_pressed(Button::LeftTrigger));
        data.left_trigger = 0.51;
        assert!(data.is_pressed(Button::LeftTrigger));
        data.trigger_threshold = 0.9;
        assert!(!data.is_pressed(Button::LeftTrigger));
    }

    #[test]
    fn digital_trigger_bit_wins() {
        let data = GamepadData::with_buttons([Button::RightTrigger]);
        assert!(data.is_pressed(Button::RightTrigger));
        assert_eq!(data.pressed(), ButtonSet::from([Button::RightTrigger]));
    }

    #[test]
    fn sparse_frame_deserializes() {
        let data: GamepadData = serde_json::from_str(r#"{"buttons":["x"],"right_trigger":1.0}"#).unwrap();
        assert_eq!(data.trigger_threshold, DEFAULT_TRIGGER_THRESHOLD);
        assert_eq!(
            data.pressed(),
            ButtonSet::from([Button::X, Button::RightTrigger])
        );
    }

    #[test]
    fn closures_are_snapshots() {
        let only_b = |b: Button| b == Button::B;
        assert!(only_b.is_pressed(Button::B));
        assert!(!only_b.is_pressed(Button::A));
    }
}
