//! padlisten: button events over a polled gamepad.
//!
//! The host polls its gamepad once per cycle and hands the snapshot to a
//! [`GamepadRegistry`]. The registry keeps one [`ButtonTracker`] per [`Button`];
//! each tracker compares the new sample with the previous one and runs the
//! listeners subscribed to the resulting [`EventKind`] (`Pressed`, `Released`
//! or `Held`).
//!
//! ```
//! use padlisten::{Button, ButtonSet, EventKind, GamepadRegistry};
//!
//! let mut pad = GamepadRegistry::new();
//! pad.subscribe(Button::A, EventKind::Pressed, |ev| println!("{ev}"));
//!
//! pad.update(&ButtonSet::from([Button::A])).unwrap(); // prints "a pressed"
//! pad.update(&ButtonSet::from([Button::A])).unwrap(); // held
//! pad.update(&ButtonSet::empty()).unwrap();           // released
//! ```
//!
//! Everything runs synchronously on the thread that calls `update`.

pub mod backends;
pub mod button;
pub mod config;
pub mod error;
pub mod event;
pub mod gamepad;
pub mod listener;
pub mod logger;
pub mod poller;
pub mod snapshot;
pub mod source;
pub mod toggle;
pub mod tracker;

pub use button::*;
pub use config::PadConfig;
pub use error::*;
pub use event::*;
pub use gamepad::GamepadRegistry;
pub use listener::ButtonListener;
pub use logger::EventLogger;
pub use poller::{GamepadPoller, PollStatus};
pub use snapshot::*;
pub use source::GamepadSource;
pub use toggle::{Toggle, ToggleHandle};
pub use tracker::{ButtonTracker, Subscription};
