//! Idle deep sleep and wake classification.
//!
//! The device sleeps after [`SleepConfig::inactivity_timeout`] without a reported input change.
//! Deep sleep resets the chip, so the decision what to do after waking is made at startup by
//! [`classify_wake`], from the [`WakeCause`] and the inputs held at that moment.

use blepad_types::input::{InputChannel, InputState};
use blepad_types::wake::WakeCause;
use embassy_time::{Duration, Instant};

use crate::config::SleepConfig;
use crate::feedback::Cue;

/// Terminal state of the control loop.
///
/// Both variants hand the chip back to the platform and never return to the loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerAction {
    /// Enter deep sleep, waking on the active edge of `wake_on` and optionally on a timer
    DeepSleep {
        wake_on: InputChannel,
        timer_wake: Option<Duration>,
    },
    /// Software restart
    Restart,
}

/// Tracks the time of the last reported input change.
#[derive(Clone, Copy, Debug)]
pub struct ActivityMonitor {
    last_activity: Instant,
    config: SleepConfig,
}

impl ActivityMonitor {
    pub fn new(config: SleepConfig, now: Instant) -> Self {
        Self {
            last_activity: now,
            config,
        }
    }

    /// Record input activity. The clock never moves backwards.
    pub fn record_activity(&mut self, now: Instant) {
        if now > self.last_activity {
            self.last_activity = now;
        }
    }

    pub fn last_activity(&self) -> Instant {
        self.last_activity
    }

    pub fn idle_for(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.last_activity)
    }

    /// Check the idle time, returns the sleep action once the inactivity timeout has elapsed.
    pub fn tick(&self, now: Instant) -> Option<PowerAction> {
        let idle = self.idle_for(now);
        if idle >= self.config.inactivity_timeout {
            info!("Idle for {}ms, going to deep sleep", idle.as_millis());
            Some(self.sleep_action())
        } else {
            None
        }
    }

    /// The configured deep sleep mode
    pub fn sleep_action(&self) -> PowerAction {
        PowerAction::DeepSleep {
            wake_on: self.config.wake_on,
            timer_wake: self.config.timer_wake,
        }
    }
}

/// What to do right after reset
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WakeDecision {
    /// Normal startup, announced with the given cue
    Proceed(Cue),
    /// Spurious wake, go straight back to sleep without any cue or advertising
    Sleep(PowerAction),
}

/// Classify the wake cause at startup.
///
/// A timer wake is only real if a direction is held when it fires. Otherwise the device goes back
/// to edge-only sleep on `wake_on`.
pub fn classify_wake(cause: WakeCause, inputs: &InputState, wake_on: InputChannel) -> WakeDecision {
    match cause {
        WakeCause::TimerWake if !inputs.any_direction() => {
            debug!("Timer wake without direction input, back to sleep");
            WakeDecision::Sleep(PowerAction::DeepSleep {
                wake_on,
                timer_wake: None,
            })
        }
        WakeCause::TimerWake => {
            info!("Woken by direction input");
            WakeDecision::Proceed(Cue::Wake)
        }
        WakeCause::EdgeWake => {
            info!("Woken by {:?}", wake_on);
            WakeDecision::Proceed(Cue::Wake)
        }
        WakeCause::ColdBoot => {
            info!("Cold boot");
            WakeDecision::Proceed(Cue::PowerOn)
        }
    }
}
