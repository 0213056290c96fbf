/// Reason the firmware is starting, as recorded by the platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WakeCause {
    /// Woken by the periodic sleep timer.
    TimerWake,
    /// Woken by the configured input edge.
    EdgeWake,
    /// Power-on, reset, or any other cause.
    ColdBoot,
}
