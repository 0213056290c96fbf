/// Recoverable failures reported by the collaborators.
///
/// None of these stop the control loop. They are logged and the affected
/// state is left as it was for the current iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GamepadError {
    /// The transport failed to accept a direction, button or battery update
    ReportError,
    /// Bonded peers could not be cleared
    BondError,
    /// Advertising or pairing mode could not be started
    AdvertiseError,
    /// The power collaborator failed to read the source voltage
    BatteryReadError,
}
