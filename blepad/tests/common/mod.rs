#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use blepad::config::{DeviceConfig, GamepadConfig};
use blepad::feedback::{Cue, Feedback};
use blepad::platform::{Platform, PowerMonitor};
use blepad::sampler::InputSampler;
use blepad::transport::GamepadTransport;
use blepad::{DirectionCode, Gamepad, GamepadError, InputChannel, InputState, WakeCause};
use embassy_time::{Duration, Instant};

// Init logger for tests
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Everything the collaborators were asked to do, in order
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Begin,
    Direction(DirectionCode),
    Button(bool),
    Battery(u8),
    DeleteBonds,
    PairingMode,
    Cue(Cue),
    Delay(Duration),
}

pub struct RigState {
    pub now: Instant,
    pub inputs: InputState,
    pub connected: bool,
    pub wake_cause: WakeCause,
    pub voltage: Result<f32, GamepadError>,
    pub voltage_reads: usize,
    /// When set, every fallible transport call fails with this error
    pub transport_error: Option<GamepadError>,
    pub calls: Vec<Call>,
}

/// Shared state behind the mock collaborators, with an injectable clock
#[derive(Clone)]
pub struct TestRig {
    state: Rc<RefCell<RigState>>,
}

pub type TestGamepad = Gamepad<'static, MockSampler, MockTransport, MockPlatform, MockPower, MockFeedback>;

impl TestRig {
    pub fn new(wake_cause: WakeCause) -> Self {
        init_log();
        Self {
            state: Rc::new(RefCell::new(RigState {
                now: Instant::from_millis(0),
                inputs: InputState::default(),
                connected: false,
                wake_cause,
                voltage: Ok(4.2),
                voltage_reads: 0,
                transport_error: None,
                calls: Vec::new(),
            })),
        }
    }

    pub fn gamepad(&self) -> TestGamepad {
        self.gamepad_with_config(GamepadConfig::default())
    }

    pub fn gamepad_with_config(&self, config: GamepadConfig<'static>) -> TestGamepad {
        Gamepad::new(
            MockSampler(self.clone()),
            MockTransport(self.clone()),
            MockPlatform(self.clone()),
            MockPower(self.clone()),
            MockFeedback(self.clone()),
            config,
        )
    }

    pub fn now(&self) -> Instant {
        self.state.borrow().now
    }

    pub fn advance(&self, ms: u64) {
        let mut state = self.state.borrow_mut();
        state.now = state.now + Duration::from_millis(ms);
    }

    pub fn set_inputs(&self, inputs: InputState) {
        self.state.borrow_mut().inputs = inputs;
    }

    pub fn press(&self, channels: &[InputChannel]) {
        let mut inputs = InputState::default();
        for channel in channels {
            match channel {
                InputChannel::Up => inputs.up = true,
                InputChannel::Down => inputs.down = true,
                InputChannel::Left => inputs.left = true,
                InputChannel::Right => inputs.right = true,
                InputChannel::Fire => inputs.fire = true,
            }
        }
        self.set_inputs(inputs);
    }

    pub fn release_all(&self) {
        self.set_inputs(InputState::default());
    }

    pub fn set_connected(&self, connected: bool) {
        self.state.borrow_mut().connected = connected;
    }

    pub fn set_voltage(&self, voltage: Result<f32, GamepadError>) {
        self.state.borrow_mut().voltage = voltage;
    }

    pub fn voltage_reads(&self) -> usize {
        self.state.borrow().voltage_reads
    }

    pub fn set_transport_error(&self, error: Option<GamepadError>) {
        self.state.borrow_mut().transport_error = error;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    pub fn cues(&self) -> Vec<Cue> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Cue(cue) => Some(cue),
                _ => None,
            })
            .collect()
    }

    /// Direction and button calls only
    pub fn reports(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| matches!(call, Call::Direction(_) | Call::Button(_)))
            .collect()
    }

    pub fn count(&self, expected: &Call) -> usize {
        self.calls().iter().filter(|call| *call == expected).count()
    }

    fn record(&self, call: Call) {
        self.state.borrow_mut().calls.push(call);
    }

    fn transport_result(&self, call: Call) -> Result<(), GamepadError> {
        self.record(call);
        match self.state.borrow().transport_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

pub struct MockSampler(TestRig);

impl InputSampler for MockSampler {
    fn sample(&mut self) -> InputState {
        self.0.state.borrow().inputs
    }
}

pub struct MockTransport(TestRig);

impl GamepadTransport for MockTransport {
    async fn begin(&mut self, _device: &DeviceConfig<'_>) -> Result<(), GamepadError> {
        self.0.transport_result(Call::Begin)
    }

    fn is_connected(&self) -> bool {
        self.0.state.borrow().connected
    }

    async fn set_direction(&mut self, direction: DirectionCode) -> Result<(), GamepadError> {
        self.0.transport_result(Call::Direction(direction))
    }

    async fn set_button_pressed(&mut self, pressed: bool) -> Result<(), GamepadError> {
        self.0.transport_result(Call::Button(pressed))
    }

    async fn set_battery_level(&mut self, level: u8) -> Result<(), GamepadError> {
        self.0.transport_result(Call::Battery(level))
    }

    async fn delete_all_bonds(&mut self) -> Result<(), GamepadError> {
        self.0.transport_result(Call::DeleteBonds)
    }

    async fn enter_pairing_mode(&mut self) -> Result<(), GamepadError> {
        self.0.transport_result(Call::PairingMode)
    }
}

pub struct MockPlatform(TestRig);

impl Platform for MockPlatform {
    fn now(&self) -> Instant {
        self.0.now()
    }

    fn wake_cause(&self) -> WakeCause {
        self.0.state.borrow().wake_cause
    }

    async fn delay(&mut self, duration: Duration) {
        self.0.record(Call::Delay(duration));
        self.0.advance(duration.as_millis());
    }

    fn deep_sleep(&mut self, wake_on: InputChannel, timer_wake: Option<Duration>) -> ! {
        panic!("Deep sleep requested, wake on {:?}, timer {:?}", wake_on, timer_wake)
    }

    fn restart(&mut self) -> ! {
        panic!("Restart requested")
    }
}

pub struct MockPower(TestRig);

impl PowerMonitor for MockPower {
    async fn source_voltage(&mut self) -> Result<f32, GamepadError> {
        let mut state = self.0.state.borrow_mut();
        state.voltage_reads += 1;
        state.voltage
    }
}

pub struct MockFeedback(TestRig);

impl Feedback for MockFeedback {
    async fn play(&mut self, cue: Cue) {
        self.0.record(Call::Cue(cue));
    }
}
