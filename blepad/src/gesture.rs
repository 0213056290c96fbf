use embassy_time::{Duration, Instant};

use crate::config::TimingConfig;

/// Administrative action triggered by holding fire
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gesture {
    /// Fire and left held past the restart threshold
    Restart,
    /// Fire held alone past the pairing threshold, once per hold
    Pairing,
}

/// Tracks how long fire has been held and classifies long holds.
///
/// Idle (fire released) -> Holding (fire pressed) -> Idle on release.
/// While holding, [`Gesture::Restart`] is reported every poll once the restart threshold is crossed
/// with left pressed. The caller restarts the device on the first one.
/// [`Gesture::Pairing`] is latched and fires at most once until fire is released and pressed again.
#[derive(Clone, Copy, Debug)]
pub struct GestureTimer {
    /// When the current hold started, `None` while fire is released
    hold_start: Option<Instant>,
    /// Pairing already fired during the current hold
    pairing_latched: bool,
    pairing_hold: Duration,
    restart_hold: Duration,
}

impl GestureTimer {
    pub fn new(pairing_hold: Duration, restart_hold: Duration) -> Self {
        Self {
            hold_start: None,
            pairing_latched: false,
            pairing_hold,
            restart_hold,
        }
    }

    pub fn from_config(config: &TimingConfig) -> Self {
        Self::new(config.pairing_hold, config.restart_hold)
    }

    /// Whether fire is currently being held
    pub fn is_holding(&self) -> bool {
        self.hold_start.is_some()
    }

    /// Time fire has been held at `now`, zero when released
    pub fn held(&self, now: Instant) -> Duration {
        self.hold_start
            .map(|start| now.saturating_duration_since(start))
            .unwrap_or_default()
    }

    /// Feed the raw fire/left levels of one poll.
    pub fn update(&mut self, fire: bool, left: bool, now: Instant) -> Option<Gesture> {
        if !fire {
            if let Some(start) = self.hold_start.take() {
                debug!(
                    "Fire released after {}ms, resetting hold timer",
                    now.saturating_duration_since(start).as_millis()
                );
            }
            return None;
        }

        let start = match self.hold_start {
            Some(start) => start,
            None => {
                debug!("Fire pressed, starting hold timer");
                self.hold_start = Some(now);
                // Allow pairing on each fresh press
                self.pairing_latched = false;
                now
            }
        };

        let held = now.saturating_duration_since(start);
        if left && held >= self.restart_hold {
            info!("Fire + left held for {}ms, restart", held.as_millis());
            Some(Gesture::Restart)
        } else if !left && !self.pairing_latched && held >= self.pairing_hold {
            info!("Fire held for {}ms, entering pairing mode", held.as_millis());
            self.pairing_latched = true;
            Some(Gesture::Pairing)
        } else {
            None
        }
    }
}

impl Default for GestureTimer {
    fn default() -> Self {
        Self::from_config(&TimingConfig::default())
    }
}
