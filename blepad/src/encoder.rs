use blepad_types::direction::DirectionCode;
use blepad_types::input::InputState;

/// Map the directional channels onto a single [`DirectionCode`].
///
/// Diagonals win over single axes. When opposite channels are both asserted
/// the first matching diagonal is taken, in the order UL, UR, DL, DR.
pub fn encode_direction(state: &InputState) -> DirectionCode {
    let InputState {
        up, down, left, right, ..
    } = *state;
    if up && left {
        DirectionCode::UpLeft
    } else if up && right {
        DirectionCode::UpRight
    } else if down && left {
        DirectionCode::DownLeft
    } else if down && right {
        DirectionCode::DownRight
    } else if up {
        DirectionCode::Up
    } else if down {
        DirectionCode::Down
    } else if left {
        DirectionCode::Left
    } else if right {
        DirectionCode::Right
    } else {
        DirectionCode::Centered
    }
}

/// What the transport is told for one reported input change
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GamepadReport {
    pub direction: DirectionCode,
    /// The single momentary button, mirrored 1:1 from fire
    pub button: bool,
}

impl From<&InputState> for GamepadReport {
    fn from(state: &InputState) -> Self {
        Self {
            direction: encode_direction(state),
            button: state.fire,
        }
    }
}
