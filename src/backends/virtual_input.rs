//! Scripted in-memory gamepad.
//!
//! [`VirtualGamepad`] hands out queued frames, one per poll, and reports
//! disconnected (`None`) once the queue is empty. Frames can be pushed one by
//! one, built with the `press`/`release` helpers, or loaded from a JSON script:
//!
//! ```json
//! [
//!   {"buttons": ["a"]},
//!   {"buttons": ["a"], "left_trigger": 0.9},
//!   {}
//! ]
//! ```

use crate::button::Button;
use crate::config::check_trigger_threshold;
use crate::error::{ConfigError, ScriptError};
use crate::snapshot::{GamepadData, DEFAULT_TRIGGER_THRESHOLD};
use crate::source::GamepadSource;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct VirtualGamepad {
    id: String,
    name: String,
    frames: VecDeque<GamepadData>,
    trigger_threshold: f32,
}

impl VirtualGamepad {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            frames: VecDeque::new(),
            trigger_threshold: DEFAULT_TRIGGER_THRESHOLD,
        }
    }

    /// Loads a JSON array of frames.
    pub fn from_json(id: &str, name: &str, script: &str) -> Result<Self, ScriptError> {
        let frames: Vec<GamepadData> = serde_json::from_str(script)?;
        let mut pad = Self::new(id, name);
        pad.frames.extend(frames);
        Ok(pad)
    }

    /// Threshold stamped on every frame this gamepad hands out; must be in `[0, 1)`.
    pub fn with_trigger_threshold(mut self, threshold: f32) -> Result<Self, ConfigError> {
        check_trigger_threshold(threshold)?;
        self.trigger_threshold = threshold;
        Ok(self)
    }

    /// Queue a frame as-is.
    pub fn push_frame(&mut self, frame: GamepadData) {
        self.frames.push_back(frame);
    }

    /// Queue a frame equal to the last queued one, with `button` down.
    pub fn press(&mut self, button: Button) {
        let mut frame = self.last_frame();
        frame.buttons.insert(button);
        self.push_frame(frame);
    }

    /// Queue a frame equal to the last queued one, with `button` up.
    pub fn release(&mut self, button: Button) {
        let mut frame = self.last_frame();
        frame.buttons.remove(button);
        self.push_frame(frame);
    }

    /// Queue a copy of the last queued frame (one more poll with nothing changed).
    pub fn repeat(&mut self) {
        let frame = self.last_frame();
        self.push_frame(frame);
    }

    pub fn pending(&self) -> usize {
        self.frames.len()
    }

    fn last_frame(&self) -> GamepadData {
        self.frames.back().cloned().unwrap_or_default()
    }
}

impl GamepadSource for VirtualGamepad {
    fn poll(&mut self) -> Option<GamepadData> {
        let mut frame = self.frames.pop_front()?;
        frame.trigger_threshold = self.trigger_threshold;
        Some(frame)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::ButtonSet;
    use crate::snapshot::ButtonSnapshot;

    #[test]
    fn helpers_build_on_last_frame() {
        let mut pad = VirtualGamepad::new("virtual:0", "Test");
        pad.press(Button::A);
        pad.press(Button::B);
        pad.release(Button::A);

        let frames: Vec<_> = std::iter::from_fn(|| pad.poll()).map(|f| f.buttons).collect();
        assert_eq!(
            frames,
            vec![
                ButtonSet::from([Button::A]),
                ButtonSet::from([Button::A, Button::B]),
                ButtonSet::from([Button::B]),
            ]
        );
        assert!(pad.poll().is_none());
    }

    #[test]
    fn script_and_threshold() {
        let script = r#"[{"buttons":["start"]},{"left_trigger":0.4}]"#;
        let mut pad = VirtualGamepad::from_json("virtual:1", "Script", script)
            .unwrap()
            .with_trigger_threshold(0.3)
            .unwrap();
        assert_eq!(pad.pending(), 2);
        assert!(pad.poll().unwrap().is_pressed(Button::Start));
        assert!(pad.poll().unwrap().is_pressed(Button::LeftTrigger));
    }

    #[test]
    fn rejects_unusable_threshold() {
        let pad = VirtualGamepad::new("virtual:2", "Test");
        assert!(matches!(
            pad.clone().with_trigger_threshold(1.0),
            Err(ConfigError::Invalid(_))
        ));
        assert!(pad.with_trigger_threshold(f32::NAN).is_err());
    }

    #[test]
    fn bad_script() {
        assert!(VirtualGamepad::from_json("v", "v", r#"[{"buttons":["turbo"]}]"#).is_err());
    }
}
