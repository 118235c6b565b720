//! Snapshot sources for `padlisten`.
//!
//! Implementations of [`GamepadSource`](crate::source::GamepadSource).
//!
//! # Feature flags
//! - **`xinput`**: enables the Windows XInput backend.
//!
//! The virtual backend is always available; it is what tests and demos drive.

pub mod virtual_input;

#[cfg(all(feature = "xinput", target_os = "windows"))]
#[cfg_attr(docsrs, doc(cfg(all(feature = "xinput", target_os = "windows"))))]
pub mod windows;
