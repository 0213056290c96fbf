use blepad_types::input::InputState;

/// Result of comparing a fresh sample against the last reported state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebounceState {
    /// At least one channel differs from the last reported state, which is now replaced.
    Changed(InputState),
    /// Nothing to report.
    Unchanged,
}

/// Edge-triggered change detector.
///
/// There is no time window here: the loop's poll interval is the debounce interval,
/// so a bounce shorter than one poll is never observed.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChangeDetector {
    /// The last state that was reported, not the last raw sample
    reported: InputState,
}

impl ChangeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// The state most recently reported
    pub fn reported(&self) -> InputState {
        self.reported
    }

    pub fn detect_change(&mut self, sample: InputState) -> DebounceState {
        if sample == self.reported {
            return DebounceState::Unchanged;
        }
        self.reported = sample;
        DebounceState::Changed(sample)
    }
}
