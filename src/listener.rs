use crate::error::ListenerError;
use crate::event::ButtonEvent;

/// Something that reacts to button edge events.
///
/// Closures of shape `FnMut(&ButtonEvent) -> Result<(), ListenerError>` implement
/// this directly; infallible closures are registered through
/// [`ButtonTracker::subscribe`](crate::tracker::ButtonTracker::subscribe), which
/// wraps them. Implement it by hand for listeners that carry state, like
/// [`Toggle`](crate::toggle::Toggle).
///
/// Listeners run synchronously on the polling thread and should return quickly.
pub trait ButtonListener: Send {
    fn on_event(&mut self, event: &ButtonEvent) -> Result<(), ListenerError>;
}

impl<F> ButtonListener for F
where
    F: FnMut(&ButtonEvent) -> Result<(), ListenerError> + Send,
{
    fn on_event(&mut self, event: &ButtonEvent) -> Result<(), ListenerError> {
        self(event)
    }
}

/// Adapts a closure that cannot fail.
pub(crate) struct Infallible<F>(pub(crate) F);

impl<F> ButtonListener for Infallible<F>
where
    F: FnMut(&ButtonEvent) + Send,
{
    fn on_event(&mut self, event: &ButtonEvent) -> Result<(), ListenerError> {
        (self.0)(event);
        Ok(())
    }
}
