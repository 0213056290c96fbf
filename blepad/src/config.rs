use blepad_types::input::InputChannel;
use embassy_time::Duration;

/// The config struct for the gamepad core.
///
/// Every field has a product default, so boards usually only override what differs:
///
/// ```rust,ignore
/// let config = GamepadConfig {
///     device: DeviceConfig { name: "My Stick", ..Default::default() },
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct GamepadConfig<'a> {
    pub timing: TimingConfig,
    pub battery: BatteryConfig,
    pub sleep: SleepConfig,
    pub device: DeviceConfig<'a>,
}

/// Loop cadence and hold gesture thresholds
#[derive(Clone, Copy, Debug)]
pub struct TimingConfig {
    /// Delay between two loop iterations, which is also the debounce interval
    pub poll_interval: Duration,
    /// Fire held alone for this long enters pairing mode
    pub pairing_hold: Duration,
    /// Fire held together with left for this long restarts the device
    pub restart_hold: Duration,
    /// Minimum time between two battery level updates
    pub battery_interval: Duration,
    /// Pause between clearing bonds and starting pairing advertisement
    pub pairing_settle: Duration,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(30),
            pairing_hold: Duration::from_millis(5000),
            restart_hold: Duration::from_millis(6000),
            battery_interval: Duration::from_secs(60),
            pairing_settle: Duration::from_millis(100),
        }
    }
}

/// Voltage range of the battery, mapped linearly onto 0..=100 percent
#[derive(Clone, Copy, Debug)]
pub struct BatteryConfig {
    pub min_voltage: f32,
    pub max_voltage: f32,
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            min_voltage: 3.0,
            max_voltage: 4.2,
        }
    }
}

/// Config for idle deep sleep
#[derive(Clone, Copy, Debug)]
pub struct SleepConfig {
    /// Time without input activity before deep sleep
    pub inactivity_timeout: Duration,
    /// The channel whose active edge wakes the device
    pub wake_on: InputChannel,
    /// Also wake periodically to poll the directional inputs.
    ///
    /// `None` arms edge wake only. 100ms is a reasonable polling period.
    pub timer_wake: Option<Duration>,
}

impl Default for SleepConfig {
    fn default() -> Self {
        Self {
            inactivity_timeout: Duration::from_secs(60),
            wake_on: InputChannel::Fire,
            timer_wake: None,
        }
    }
}

/// Identity and advertising parameters handed to the transport on startup
#[derive(Clone, Copy, Debug)]
pub struct DeviceConfig<'a> {
    pub name: &'a str,
    pub manufacturer: &'a str,
    pub vid: u16,
    pub pid: u16,
    /// Battery level advertised before the first sample
    pub initial_battery_level: u8,
    /// Minimum advertising interval, in units of 0.625ms
    pub adv_interval_min: u16,
    /// Maximum advertising interval, in units of 0.625ms
    pub adv_interval_max: u16,
}

impl Default for DeviceConfig<'_> {
    fn default() -> Self {
        Self {
            name: "ESP32 Joystick",
            manufacturer: "Omer Agmon",
            vid: 0x0810,
            pid: 0x0001,
            initial_battery_level: 100,
            adv_interval_min: 0x00A0,
            adv_interval_max: 0x00F0,
        }
    }
}
