#![cfg(target_os = "windows")]

//! Windows snapshot sources.
//!
//! - **XInput** controllers (slots 0..4) via `XInputGetState`
//!
//! Most users wrap the source in a [`GamepadPoller`](crate::poller::GamepadPoller)
//! rather than polling it by hand.

pub mod xinput;

pub use xinput::XInputGamepad;
