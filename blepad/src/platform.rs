use blepad_types::input::InputChannel;
use blepad_types::wake::WakeCause;
use embassy_time::{Duration, Instant};

use crate::error::GamepadError;

/// Chip level services used by the control loop.
///
/// The clock and the delay are both provided here, so tests can drive time explicitly.
pub trait Platform {
    /// Monotonic time since boot
    fn now(&self) -> Instant;

    /// Why the chip started, read once at startup
    fn wake_cause(&self) -> WakeCause;

    /// Wait, used for the loop cadence and short pauses between transport calls
    async fn delay(&mut self, duration: Duration);

    /// Arm the wake sources and enter deep sleep.
    ///
    /// Execution resumes from reset when the chip wakes up.
    fn deep_sleep(&mut self, wake_on: InputChannel, timer_wake: Option<Duration>) -> !;

    /// Software reset
    fn restart(&mut self) -> !;
}

/// The power management collaborator
pub trait PowerMonitor {
    /// Voltage of the power source in volts
    async fn source_voltage(&mut self) -> Result<f32, GamepadError>;
}
