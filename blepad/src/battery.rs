use embassy_time::{Duration, Instant};

use crate::config::BatteryConfig;

/// Convert a source voltage to a battery percentage.
///
/// The range `min_voltage..=max_voltage` maps linearly onto 0..=100, anything outside is clamped.
/// An unreadable value (NaN) counts as empty.
pub fn voltage_to_percent(voltage: f32, min_voltage: f32, max_voltage: f32) -> u8 {
    let span = max_voltage - min_voltage;
    if span.is_nan() || span <= 0.0 {
        return 0;
    }
    let ratio = (voltage - min_voltage) / span;
    if ratio.is_nan() || ratio <= 0.0 {
        0
    } else if ratio >= 1.0 {
        100
    } else {
        // Round to nearest, f32 steps like 3.6V would otherwise truncate to 49
        (ratio * 100.0 + 0.5) as u8
    }
}

/// Decides when the battery level is due and remembers the last published level.
#[derive(Clone, Copy, Debug)]
pub struct BatterySampler {
    config: BatteryConfig,
    interval: Duration,
    last_sample: Option<Instant>,
    level: Option<u8>,
}

impl BatterySampler {
    pub fn new(config: BatteryConfig, interval: Duration) -> Self {
        Self {
            config,
            interval,
            last_sample: None,
            level: None,
        }
    }

    /// The last published level, if any sample succeeded
    pub fn level(&self) -> Option<u8> {
        self.level
    }

    /// A sample is due when none was taken yet or more than the interval has passed
    pub fn is_due(&self, now: Instant) -> bool {
        match self.last_sample {
            Some(last) => now.saturating_duration_since(last) > self.interval,
            None => true,
        }
    }

    /// Mark a sample attempt, the next one is due an interval later whether or not it succeeds.
    pub fn start_sample(&mut self, now: Instant) {
        self.last_sample = Some(now);
    }

    /// Convert a voltage reading to the level to publish
    pub fn percent(&self, voltage: f32) -> u8 {
        let level = voltage_to_percent(voltage, self.config.min_voltage, self.config.max_voltage);
        trace!("Battery voltage: {}V, level: {}%", voltage, level);
        level
    }

    /// Remember a level the transport accepted
    pub fn publish(&mut self, level: u8) {
        self.level = Some(level);
    }
}
