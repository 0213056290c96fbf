use blepad_types::direction::DirectionCode;

use crate::config::DeviceConfig;
use crate::error::GamepadError;

/// The wireless HID gamepad transport.
///
/// Implementations own the BLE stack: advertising, bonding, and encoding the
/// gamepad report on the wire. Setting the direction or the button sends a report
/// to the connected host.
pub trait GamepadTransport {
    /// Start the HID service and advertise with the given identity
    async fn begin(&mut self, device: &DeviceConfig<'_>) -> Result<(), GamepadError>;

    /// Whether a host is connected right now
    fn is_connected(&self) -> bool;

    async fn set_direction(&mut self, direction: DirectionCode) -> Result<(), GamepadError>;

    /// Press or release the single gamepad button
    async fn set_button_pressed(&mut self, pressed: bool) -> Result<(), GamepadError>;

    /// Update the level exposed by the battery service, 0..=100
    async fn set_battery_level(&mut self, level: u8) -> Result<(), GamepadError>;

    /// Forget every bonded host
    async fn delete_all_bonds(&mut self) -> Result<(), GamepadError>;

    /// Advertise as pairable so a new host can bond
    async fn enter_pairing_mode(&mut self) -> Result<(), GamepadError>;
}
