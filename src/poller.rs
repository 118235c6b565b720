//! One poll step: source → registry.
//!
//! [`GamepadPoller`] pairs a [`GamepadSource`] with the [`GamepadRegistry`] it
//! drives. It does not own a loop or a timer; the host calls
//! [`poll_once`](GamepadPoller::poll_once) at its own rate.
//!
//! ```
//! use padlisten::backends::virtual_input::VirtualGamepad;
//! use padlisten::{Button, EventKind, GamepadPoller, GamepadRegistry, PollStatus};
//!
//! let mut source = VirtualGamepad::new("virtual:0", "Demo");
//! source.press(Button::B);
//!
//! let mut poller = GamepadPoller::new(source, GamepadRegistry::new());
//! poller.registry_mut().subscribe(Button::B, EventKind::Pressed, |ev| println!("{ev}"));
//! assert_eq!(poller.poll_once().unwrap(), PollStatus::Updated);
//! ```

use crate::button::ButtonSet;
use crate::config::PadConfig;
use crate::error::DispatchError;
use crate::gamepad::GamepadRegistry;
use crate::source::GamepadSource;
use tracing::info;

/// What one [`GamepadPoller::poll_once`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollStatus {
    /// A snapshot was read and fed to the registry.
    Updated,
    /// The source just went away; with `release_on_disconnect` an all-released
    /// snapshot was fed.
    Disconnected,
    /// Still disconnected; nothing happened.
    Idle,
}

pub struct GamepadPoller<S> {
    source: S,
    registry: GamepadRegistry,
    connected: bool,
    release_on_disconnect: bool,
}

impl<S: GamepadSource> GamepadPoller<S> {
    pub fn new(source: S, registry: GamepadRegistry) -> Self {
        Self {
            source,
            registry,
            connected: false,
            release_on_disconnect: true,
        }
    }

    /// Builds the registry from `config` as well.
    pub fn from_config(source: S, config: &PadConfig) -> Self {
        Self::new(source, GamepadRegistry::from_config(config))
            .release_on_disconnect(config.release_on_disconnect)
    }

    pub fn release_on_disconnect(mut self, enabled: bool) -> Self {
        self.release_on_disconnect = enabled;
        self
    }

    pub fn registry(&self) -> &GamepadRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut GamepadRegistry {
        &mut self.registry
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Pulls at most one snapshot from the source and feeds it to the registry.
    pub fn poll_once(&mut self) -> Result<PollStatus, DispatchError> {
        match self.source.poll() {
            Some(data) => {
                if !self.connected {
                    info!(pad = %self.registry.name(), source = %self.source.id(), name = %self.source.name(), "source connected");
                    self.connected = true;
                }
                self.registry.update(&data)?;
                Ok(PollStatus::Updated)
            }
            None if self.connected => {
                info!(pad = %self.registry.name(), source = %self.source.id(), "source disconnected");
                self.connected = false;
                if self.release_on_disconnect {
                    self.registry.update(&ButtonSet::empty())?;
                }
                Ok(PollStatus::Disconnected)
            }
            None => Ok(PollStatus::Idle),
        }
    }
}
