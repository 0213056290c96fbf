use blepad_types::input::{InputChannel, InputState};
use embedded_hal::digital::InputPin;

/// Source of the raw input levels, read once per loop iteration.
pub trait InputSampler {
    /// Read all channels and return their logical levels, `true` is pressed.
    fn sample(&mut self) -> InputState;
}

/// Samples five direct-wired GPIO pins.
///
/// Pins are given in [`InputChannel::ALL`] order: up, down, left, right, fire.
pub struct PinSampler<I: InputPin> {
    pins: [I; 5],
    /// Pin active level. Switches pulled up and shorted to ground are low-active.
    low_active: bool,
}

impl<I: InputPin> PinSampler<I> {
    pub fn new(pins: [I; 5], low_active: bool) -> Self {
        Self { pins, low_active }
    }

    /// Read the logical level of a single channel.
    ///
    /// A failed pin read counts as released.
    pub fn read_level(&mut self, channel: InputChannel) -> bool {
        let pin = &mut self.pins[channel as usize];
        if self.low_active {
            pin.is_low().ok().unwrap_or_default()
        } else {
            pin.is_high().ok().unwrap_or_default()
        }
    }

    /// Give back the pins, e.g. to configure them as wake sources before deep sleep.
    pub fn release(self) -> [I; 5] {
        self.pins
    }
}

impl<I: InputPin> InputSampler for PinSampler<I> {
    fn sample(&mut self) -> InputState {
        let mut levels = [false; 5];
        for (level, channel) in levels.iter_mut().zip(InputChannel::ALL) {
            *level = self.read_level(channel);
        }
        InputState::from_levels(levels)
    }
}
