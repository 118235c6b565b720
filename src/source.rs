use crate::snapshot::GamepadData;

/// Producer of gamepad snapshots, polled once per cycle by the host loop.
///
/// `poll` returns `None` when the device is disconnected or has nothing for
/// this cycle.
pub trait GamepadSource {
    fn poll(&mut self) -> Option<GamepadData>;
    fn name(&self) -> &str;
    fn id(&self) -> &str;
}
