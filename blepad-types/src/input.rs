/// A physical input of the gamepad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputChannel {
    Up,
    Down,
    Left,
    Right,
    Fire,
}

impl InputChannel {
    /// All channels, in sampling order.
    pub const ALL: [InputChannel; 5] = [
        InputChannel::Up,
        InputChannel::Down,
        InputChannel::Left,
        InputChannel::Right,
        InputChannel::Fire,
    ];
}

/// Logical level of every channel for one poll. `true` means pressed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

impl InputState {
    /// Build a state from levels given in [`InputChannel::ALL`] order.
    pub const fn from_levels(levels: [bool; 5]) -> Self {
        Self {
            up: levels[0],
            down: levels[1],
            left: levels[2],
            right: levels[3],
            fire: levels[4],
        }
    }

    /// Whether any of the four directional channels is pressed.
    pub const fn any_direction(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}
