//! # blepad
//!
//! Control core of a battery-powered BLE gamepad with a four-way stick and one fire button.
//!
//! A single polling loop samples the inputs, reports changes to the host as a
//! hat direction plus a button, detects long-press gestures on fire (hold alone for
//! pairing mode, hold with left to restart), puts the device into deep sleep when idle
//! and keeps the battery level of the BLE battery service up to date.
//!
//! Everything hardware specific sits behind the collaborator traits:
//! [`InputSampler`](sampler::InputSampler), [`GamepadTransport`](transport::GamepadTransport),
//! [`Platform`](platform::Platform), [`PowerMonitor`](platform::PowerMonitor) and
//! [`Feedback`](feedback::Feedback). A board crate implements them and calls [`run_gamepad`].
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
#![no_std]
#![allow(async_fn_in_trait)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod battery;
pub mod config;
pub mod connection;
pub mod debounce;
pub mod encoder;
pub mod error;
pub mod feedback;
pub mod gamepad;
pub mod gesture;
pub mod platform;
pub mod sampler;
pub mod sleep;
pub mod transport;

pub use blepad_types::direction::DirectionCode;
pub use blepad_types::input::{InputChannel, InputState};
pub use blepad_types::wake::WakeCause;
pub use config::GamepadConfig;
pub use error::GamepadError;
pub use gamepad::Gamepad;
pub use sleep::PowerAction;

use crate::feedback::Feedback;
use crate::platform::{Platform, PowerMonitor};
use crate::sampler::InputSampler;
use crate::transport::GamepadTransport;

/// Run the gamepad from reset until it goes to deep sleep or restarts.
///
/// # Example
/// ```rust,ignore
/// let sampler = PinSampler::new([up, down, left, right, fire], true);
/// run_gamepad(sampler, ble_gamepad, platform, pmic, buzzer, GamepadConfig::default()).await
/// ```
pub async fn run_gamepad<S, T, P, B, F>(
    sampler: S,
    transport: T,
    platform: P,
    power: B,
    feedback: F,
    config: GamepadConfig<'_>,
) -> !
where
    S: InputSampler,
    T: GamepadTransport,
    P: Platform,
    B: PowerMonitor,
    F: Feedback,
{
    let mut gamepad = Gamepad::new(sampler, transport, platform, power, feedback, config);
    let action = match gamepad.startup().await {
        Some(action) => action,
        None => gamepad.run().await,
    };
    gamepad.execute(action)
}
