//! Error types.
//!
//! The dispatch path is deliberately forgiving: a listener that fails is
//! reported, never allowed to stop the rest of a poll sweep. See
//! [`DispatchError`] for how failures surface to the caller.

use crate::tracker::Subscription;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A button name that does not belong to the fixed [`Button`](crate::Button) set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown button name `{0}`")]
pub struct UnknownButton(pub String);

/// Failure raised by a listener while handling an event.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// Plain message, for listeners with nothing richer to report.
    #[error("{0}")]
    Message(String),

    /// Any other error the listener wants to hand back.
    #[error("{0}")]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl ListenerError {
    pub fn msg(message: impl fmt::Display) -> Self {
        ListenerError::Message(message.to_string())
    }

    pub fn new(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        ListenerError::Other(Box::new(err))
    }
}

/// One listener that failed during a dispatch.
#[derive(Debug, Error)]
#[error("listener {subscription} failed: {error}")]
pub struct ListenerFailure {
    /// Handle of the listener that failed (button, kind and id).
    pub subscription: Subscription,
    #[source]
    pub error: ListenerError,
}

/// Listener failures collected over one `update` call.
///
/// Returned only after every listener of the update has run; tracker state is
/// already committed by then.
#[derive(Debug, Default, Error)]
#[error("{} listener(s) failed{}", .failures.len(), first_failure(.failures))]
pub struct DispatchError {
    pub failures: Vec<ListenerFailure>,
}

impl DispatchError {
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Folds `other` into `self`, keeping order.
    pub(crate) fn absorb(&mut self, other: DispatchError) {
        self.failures.extend(other.failures);
    }

    pub(crate) fn into_result(self) -> Result<(), DispatchError> {
        if self.failures.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

fn first_failure(failures: &[ListenerFailure]) -> String {
    failures
        .first()
        .map(|first| format!("; first: {first}"))
        .unwrap_or_default()
}

/// Errors while loading or validating a [`PadConfig`](crate::config::PadConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config value: {0}")]
    Invalid(String),
}

/// Errors while loading a scripted frame sequence for a virtual gamepad.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("invalid frame script: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Button, ButtonTracker, EventKind};

    #[test]
    fn dispatch_error_names_first_failure() {
        assert_eq!(DispatchError::default().to_string(), "0 listener(s) failed");

        let mut t = ButtonTracker::new(Button::B);
        t.try_subscribe(EventKind::Pressed, |_| Err(ListenerError::msg("stuck")));
        t.try_subscribe(EventKind::Pressed, |_| Err(ListenerError::msg("also stuck")));
        let text = t.update(true).unwrap_err().to_string();
        assert!(text.starts_with("2 listener(s) failed; first: listener "));
        assert!(text.ends_with("failed: stuck"));
    }
}
