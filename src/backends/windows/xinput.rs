#![cfg(target_os = "windows")]

//! Windows XInput gamepad source.
//!
//! Reads one XInput user slot (0–3) per poll and turns it into a
//! [`GamepadData`] snapshot.
//!
//! # Conventions
//! - Thumbsticks are normalized to `[-1.0, 1.0]`. Y is **not** inverted: up is
//!   positive, as XInput reports it.
//! - Triggers are normalized from `0..255` to `[0.0, 1.0]`; whether a trigger
//!   counts as pressed is decided by the snapshot's threshold.
//! - The guide button is not exposed by the public XInput API and has no
//!   [`Button`] counterpart.
//!
//! A disconnected or empty slot polls as `None`.

use crate::button::{Button, ButtonSet};
use crate::config::{check_trigger_threshold, check_xinput_slot, PadConfig};
use crate::error::ConfigError;
use crate::snapshot::{GamepadData, DEFAULT_TRIGGER_THRESHOLD};
use crate::source::GamepadSource;
use tracing::debug;

// Windows XInput FFI.
use windows_sys::Win32::UI::Input::XboxController::*;

/// XInput wButtons bit for each button that has one. Triggers are analog only.
const BUTTON_MAP: &[(u16, Button)] = &[
    (XINPUT_GAMEPAD_A, Button::A),
    (XINPUT_GAMEPAD_B, Button::B),
    (XINPUT_GAMEPAD_X, Button::X),
    (XINPUT_GAMEPAD_Y, Button::Y),
    (XINPUT_GAMEPAD_LEFT_SHOULDER, Button::LeftBumper),
    (XINPUT_GAMEPAD_RIGHT_SHOULDER, Button::RightBumper),
    (XINPUT_GAMEPAD_DPAD_UP, Button::DpadUp),
    (XINPUT_GAMEPAD_DPAD_DOWN, Button::DpadDown),
    (XINPUT_GAMEPAD_DPAD_LEFT, Button::DpadLeft),
    (XINPUT_GAMEPAD_DPAD_RIGHT, Button::DpadRight),
    (XINPUT_GAMEPAD_LEFT_THUMB, Button::LeftStick),
    (XINPUT_GAMEPAD_RIGHT_THUMB, Button::RightStick),
    (XINPUT_GAMEPAD_BACK, Button::Back),
    (XINPUT_GAMEPAD_START, Button::Start),
];

/// XInput-backed gamepad (slot 0–3).
pub struct XInputGamepad {
    /// XInput slot index in `0..4`.
    index: u32,
    id: String,
    name: String,
    trigger_threshold: f32,
    /// Packet number of the last successful read; XInput bumps it on any change.
    last_packet: Option<u32>,
}

impl XInputGamepad {
    /// Source for XInput slot `index`, which must be below 4.
    pub fn new(index: u32) -> Result<Self, ConfigError> {
        check_xinput_slot(index)?;
        Ok(Self {
            index,
            id: format!("xinput:{index}"),
            name: format!("XInput Controller {index}"),
            trigger_threshold: DEFAULT_TRIGGER_THRESHOLD,
            last_packet: None,
        })
    }

    /// Slot and trigger threshold taken from `config`.
    pub fn from_config(config: &PadConfig) -> Result<Self, ConfigError> {
        check_trigger_threshold(config.trigger_threshold)?;
        let mut pad = Self::new(config.xinput_slot)?;
        pad.trigger_threshold = config.trigger_threshold;
        Ok(pad)
    }

    #[inline]
    /// Normalize a signed thumbstick axis into `[-1, 1]`.
    fn normalize_thumb(v: i16) -> f32 {
        // Map [-32768, 32767] -> [-1, 1]
        if v >= 0 {
            (v as f32) / 32767.0
        } else {
            (v as f32) / 32768.0
        }
    }

    #[inline]
    /// Normalize an 8-bit trigger into `[0, 1]`.
    fn normalize_trigger(v: u8) -> f32 {
        (v as f32) / 255.0
    }

    fn buttons_from_bits(bits: u16) -> ButtonSet {
        BUTTON_MAP
            .iter()
            .filter(|(mask, _)| bits & mask != 0)
            .map(|&(_, button)| button)
            .collect()
    }
}

impl GamepadSource for XInputGamepad {
    fn poll(&mut self) -> Option<GamepadData> {
        // FFI struct: must be manually zeroed
        let mut state: XINPUT_STATE = unsafe { std::mem::zeroed() };

        // NOTE: XInputGetState returns 0 on success.
        let res = unsafe { XInputGetState(self.index, &mut state) };
        if res != 0 {
            if self.last_packet.take().is_some() {
                debug!(slot = self.index, code = res, "xinput slot lost");
            }
            return None;
        }
        self.last_packet = Some(state.dwPacketNumber);

        let gp = state.Gamepad;
        Some(GamepadData {
            buttons: Self::buttons_from_bits(gp.wButtons),
            left_stick_x: Self::normalize_thumb(gp.sThumbLX),
            left_stick_y: Self::normalize_thumb(gp.sThumbLY),
            right_stick_x: Self::normalize_thumb(gp.sThumbRX),
            right_stick_y: Self::normalize_thumb(gp.sThumbRY),
            left_trigger: Self::normalize_trigger(gp.bLeftTrigger),
            right_trigger: Self::normalize_trigger(gp.bRightTrigger),
            trigger_threshold: self.trigger_threshold,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> &str {
        &self.id
    }
}
