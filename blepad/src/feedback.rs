use embassy_time::Duration;

/// Audible cues played by the [`Feedback`] collaborator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Cue {
    /// Cold boot, a single long beep
    PowerOn,
    /// Deliberate wake from deep sleep, a fast rising sweep
    Wake,
    /// A host connected
    Connected,
    /// Bonds cleared and pairing advertisement started
    Pairing,
    /// About to restart
    Restart,
}

/// A single tone of a cue
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tone {
    pub frequency_hz: u16,
    pub duration: Duration,
}

/// Frequencies `start..end` in `step` increments, each played for `duration_ms`
struct Sweep {
    start: u16,
    end: u16,
    step: u16,
    duration_ms: u64,
}

impl Sweep {
    const fn single(frequency_hz: u16, duration_ms: u64) -> Self {
        Self {
            start: frequency_hz,
            end: frequency_hz + 1,
            step: 1,
            duration_ms,
        }
    }
}

impl Cue {
    fn sweep(&self) -> Sweep {
        match self {
            Cue::PowerOn => Sweep::single(800, 150),
            Cue::Wake => Sweep {
                start: 600,
                end: 1500,
                step: 50,
                duration_ms: 20,
            },
            Cue::Connected | Cue::Pairing => Sweep {
                start: 800,
                end: 1400,
                step: 50,
                duration_ms: 100,
            },
            Cue::Restart => Sweep::single(1000, 100),
        }
    }

    /// The tones of this cue, in playing order
    pub fn tones(self) -> impl Iterator<Item = Tone> {
        let sweep = self.sweep();
        let duration = Duration::from_millis(sweep.duration_ms);
        (sweep.start..sweep.end)
            .step_by(sweep.step as usize)
            .map(move |frequency_hz| Tone { frequency_hz, duration })
    }

    /// Total playing time of this cue
    pub fn duration(&self) -> Duration {
        self.tones().fold(Duration::from_ticks(0), |total, tone| total + tone.duration)
    }
}

/// Audio feedback collaborator, usually a buzzer.
///
/// Playing blocks the loop for the duration of the cue, cues are short.
pub trait Feedback {
    async fn play(&mut self, cue: Cue);
}
