//! Button identity.
//!
//! [`Button`] is the closed set of digital controls a gamepad exposes. Because the
//! set is a plain enum, every lookup keyed by `Button` is total: there is no
//! "missing button" case at runtime. The only fallible path is parsing a name
//! (config files, consoles), which yields [`UnknownButton`].
//!
//! ## Naming
//! Each button has a stable snake_case name (`"a"`, `"left_bumper"`, `"dpad_up"`)
//! used for `Display`, serde and [`FromStr`]. Parsing also accepts a few common
//! short aliases (`"lb"`, `"rt"`, `"l3"`, `"up"`, ...).

use crate::error::UnknownButton;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A digital control on the gamepad.
///
/// Triggers appear here in their digital form; see
/// [`GamepadData`](crate::snapshot::GamepadData) for the threshold that turns an
/// analog trigger into a press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Button {
    A,
    B,
    X,
    Y,
    LeftBumper,
    RightBumper,
    LeftTrigger,
    RightTrigger,
    DpadUp,
    DpadDown,
    DpadLeft,
    DpadRight,
    /// Left stick click (L3).
    LeftStick,
    /// Right stick click (R3).
    RightStick,
    Back,
    Start,
}

impl Button {
    /// Number of buttons in the set.
    pub const COUNT: usize = 16;

    /// Every button, each exactly once, in declaration order.
    pub const ALL: [Button; Button::COUNT] = [
        Button::A,
        Button::B,
        Button::X,
        Button::Y,
        Button::LeftBumper,
        Button::RightBumper,
        Button::LeftTrigger,
        Button::RightTrigger,
        Button::DpadUp,
        Button::DpadDown,
        Button::DpadLeft,
        Button::DpadRight,
        Button::LeftStick,
        Button::RightStick,
        Button::Back,
        Button::Start,
    ];

    /// Dense index in `0..COUNT`, matching the position in [`Button::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Canonical snake_case name.
    pub const fn name(self) -> &'static str {
        match self {
            Button::A => "a",
            Button::B => "b",
            Button::X => "x",
            Button::Y => "y",
            Button::LeftBumper => "left_bumper",
            Button::RightBumper => "right_bumper",
            Button::LeftTrigger => "left_trigger",
            Button::RightTrigger => "right_trigger",
            Button::DpadUp => "dpad_up",
            Button::DpadDown => "dpad_down",
            Button::DpadLeft => "dpad_left",
            Button::DpadRight => "dpad_right",
            Button::LeftStick => "left_stick",
            Button::RightStick => "right_stick",
            Button::Back => "back",
            Button::Start => "start",
        }
    }

    /// `true` for the two trigger buttons, which also have an analog reading.
    pub const fn is_trigger(self) -> bool {
        matches!(self, Button::LeftTrigger | Button::RightTrigger)
    }

    #[inline]
    const fn bit(self) -> u32 {
        1 << self.index()
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Button {
    type Err = UnknownButton;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if let Some(b) = Button::ALL.iter().find(|b| b.name() == lower) {
            return Ok(*b);
        }
        let aliased = match lower.as_str() {
            "lb" => Button::LeftBumper,
            "rb" => Button::RightBumper,
            "lt" => Button::LeftTrigger,
            "rt" => Button::RightTrigger,
            "l3" => Button::LeftStick,
            "r3" => Button::RightStick,
            "up" => Button::DpadUp,
            "down" => Button::DpadDown,
            "left" => Button::DpadLeft,
            "right" => Button::DpadRight,
            "select" => Button::Back,
            "menu" => Button::Start,
            _ => return Err(UnknownButton(s.to_string())),
        };
        Ok(aliased)
    }
}

/// Compact set of buttons.
///
/// Serialises as a list of button names, e.g. `["a", "left_bumper"]`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ButtonSet(u32);

impl ButtonSet {
    #[inline]
    pub const fn empty() -> Self {
        ButtonSet(0)
    }

    /// Set holding every button.
    pub fn all() -> Self {
        Button::ALL.iter().copied().collect()
    }

    #[inline]
    pub const fn contains(self, button: Button) -> bool {
        self.0 & button.bit() != 0
    }

    #[inline]
    pub fn insert(&mut self, button: Button) {
        self.0 |= button.bit();
    }

    #[inline]
    pub fn remove(&mut self, button: Button) {
        self.0 &= !button.bit();
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members in [`Button::ALL`] order.
    pub fn iter(self) -> impl Iterator<Item = Button> {
        Button::ALL.into_iter().filter(move |b| self.contains(*b))
    }
}

impl FromIterator<Button> for ButtonSet {
    fn from_iter<I: IntoIterator<Item = Button>>(iter: I) -> Self {
        let mut set = ButtonSet::empty();
        for b in iter {
            set.insert(b);
        }
        set
    }
}

impl<const N: usize> From<[Button; N]> for ButtonSet {
    fn from(buttons: [Button; N]) -> Self {
        buttons.into_iter().collect()
    }
}

impl fmt::Debug for ButtonSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Serialize for ButtonSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for ButtonSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let buttons = Vec::<Button>::deserialize(deserializer)?;
        Ok(buttons.into_iter().collect())
    }
}
