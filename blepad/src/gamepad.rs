use embassy_time::Instant;

use crate::battery::BatterySampler;
use crate::config::GamepadConfig;
use crate::connection::{ConnectionChange, ConnectionTracker};
use crate::debounce::{ChangeDetector, DebounceState};
use crate::encoder::GamepadReport;
use crate::feedback::{Cue, Feedback};
use crate::gesture::{Gesture, GestureTimer};
use crate::platform::{Platform, PowerMonitor};
use crate::sampler::InputSampler;
use crate::sleep::{ActivityMonitor, PowerAction, WakeDecision, classify_wake};
use crate::transport::GamepadTransport;

/// The gamepad control loop.
///
/// Owns every collaborator and all loop state. Nothing survives a [`PowerAction`]:
/// after deep sleep or restart the firmware starts over with a fresh `Gamepad`.
pub struct Gamepad<'a, S, T, P, B, F>
where
    S: InputSampler,
    T: GamepadTransport,
    P: Platform,
    B: PowerMonitor,
    F: Feedback,
{
    sampler: S,
    transport: T,
    platform: P,
    power: B,
    feedback: F,
    config: GamepadConfig<'a>,
    detector: ChangeDetector,
    gesture: GestureTimer,
    activity: ActivityMonitor,
    connection: ConnectionTracker,
    battery: BatterySampler,
}

impl<'a, S, T, P, B, F> Gamepad<'a, S, T, P, B, F>
where
    S: InputSampler,
    T: GamepadTransport,
    P: Platform,
    B: PowerMonitor,
    F: Feedback,
{
    pub fn new(sampler: S, transport: T, platform: P, power: B, feedback: F, config: GamepadConfig<'a>) -> Self {
        let now = platform.now();
        Self {
            sampler,
            transport,
            platform,
            power,
            feedback,
            detector: ChangeDetector::new(),
            gesture: GestureTimer::from_config(&config.timing),
            activity: ActivityMonitor::new(config.sleep, now),
            connection: ConnectionTracker::new(),
            battery: BatterySampler::new(config.battery, config.timing.battery_interval),
            config,
        }
    }

    pub fn config(&self) -> &GamepadConfig<'a> {
        &self.config
    }

    /// Last battery level the transport accepted
    pub fn battery_level(&self) -> Option<u8> {
        self.battery.level()
    }

    pub fn last_activity(&self) -> Instant {
        self.activity.last_activity()
    }

    /// Classify the wake cause and bring the gamepad up.
    ///
    /// Returns a power action if the wake was spurious. In that case neither the
    /// transport nor the feedback has been touched.
    pub async fn startup(&mut self) -> Option<PowerAction> {
        let cause = self.platform.wake_cause();
        let inputs = self.sampler.sample();
        match classify_wake(cause, &inputs, self.config.sleep.wake_on) {
            WakeDecision::Sleep(action) => return Some(action),
            WakeDecision::Proceed(cue) => self.feedback.play(cue).await,
        }

        info!(
            "Starting {}, vid: {:#x}, pid: {:#x}",
            self.config.device.name, self.config.device.vid, self.config.device.pid
        );
        if let Err(e) = self.transport.begin(&self.config.device).await {
            error!("Failed to start advertising: {:?}", e);
        }

        let now = self.platform.now();
        self.update_battery(now).await;
        self.activity.record_activity(now);
        None
    }

    /// Run a single loop iteration.
    ///
    /// Order: idle check, hold gestures, connection edge, report, battery.
    pub async fn step(&mut self) -> Option<PowerAction> {
        let now = self.platform.now();
        if let Some(action) = self.activity.tick(now) {
            return Some(action);
        }

        let inputs = self.sampler.sample();
        match self.gesture.update(inputs.fire, inputs.left, now) {
            Some(Gesture::Restart) => {
                self.feedback.play(Cue::Restart).await;
                return Some(PowerAction::Restart);
            }
            Some(Gesture::Pairing) => self.enter_pairing().await,
            None => {}
        }

        let connected = self.transport.is_connected();
        match self.connection.observe(connected) {
            Some(ConnectionChange::Connected) => {
                info!("Connected");
                self.feedback.play(Cue::Connected).await;
            }
            Some(ConnectionChange::Disconnected) => info!("Disconnected"),
            None => {}
        }

        // The detector only tracks what the host has seen
        if connected {
            if let DebounceState::Changed(state) = self.detector.detect_change(inputs) {
                self.activity.record_activity(now);
                self.send_report(GamepadReport::from(&state)).await;
            }
        }

        if self.battery.is_due(now) {
            self.update_battery(now).await;
        }

        None
    }

    /// Loop until a power action is requested, then return it.
    pub async fn run(&mut self) -> PowerAction {
        loop {
            if let Some(action) = self.step().await {
                return action;
            }
            self.platform.delay(self.config.timing.poll_interval).await;
        }
    }

    /// Hand the chip to the platform, never returns.
    pub fn execute(mut self, action: PowerAction) -> ! {
        match action {
            PowerAction::DeepSleep { wake_on, timer_wake } => self.platform.deep_sleep(wake_on, timer_wake),
            PowerAction::Restart => {
                warn!("Restarting gamepad!");
                self.platform.restart()
            }
        }
    }

    async fn send_report(&mut self, report: GamepadReport) {
        debug!("Sending report: {:?}", report);
        if let Err(e) = self.transport.set_direction(report.direction).await {
            warn!("Failed to send direction: {:?}", e);
        }
        if let Err(e) = self.transport.set_button_pressed(report.button).await {
            warn!("Failed to send button state: {:?}", e);
        }
    }

    async fn enter_pairing(&mut self) {
        if let Err(e) = self.transport.delete_all_bonds().await {
            warn!("Failed to clear bonds: {:?}", e);
        }
        self.platform.delay(self.config.timing.pairing_settle).await;
        if let Err(e) = self.transport.enter_pairing_mode().await {
            warn!("Failed to enter pairing mode: {:?}", e);
        }
        self.feedback.play(Cue::Pairing).await;
    }

    async fn update_battery(&mut self, now: Instant) {
        // A failed attempt waits for the next interval as well
        self.battery.start_sample(now);
        let voltage = match self.power.source_voltage().await {
            Ok(voltage) => voltage,
            Err(e) => {
                warn!("Failed to read battery voltage: {:?}", e);
                return;
            }
        };
        let level = self.battery.percent(voltage);
        match self.transport.set_battery_level(level).await {
            Ok(()) => {
                self.battery.publish(level);
                info!("Battery level updated: {}%", level);
            }
            Err(e) => warn!("Failed to update battery level: {:?}", e),
        }
    }
}
