//! In-memory sink that records every boundary call.
//!
//! Useful in tests and for hosts bringing up a new device: feed events into an
//! [`InputContext`](crate::context::InputContext) and inspect what would have
//! reached native code. Value-returning calls answer from scripted settings.

use crate::event::{BridgeKind, DeviceId, MotionAction};
use crate::sink::NativeSink;

#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Vec<BridgeKind>,
    /// Return code for `pad_down`/`pad_up` (0 = consumed).
    pub pad_result: i32,
    /// Answer for `soft_return`.
    pub consume_return: bool,
    /// Number of pad calls seen.
    pub pad_calls: usize,
    /// Number of `soft_return` calls seen.
    pub return_calls: usize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pad handler answers "not consumed" (-1).
    pub fn rejecting_pads(mut self) -> Self {
        self.pad_result = -1;
        self
    }

    pub fn consuming_return(mut self) -> Self {
        self.consume_return = true;
        self
    }

    pub fn events(&self) -> &[BridgeKind] {
        &self.events
    }

    /// Drain the recorded calls.
    pub fn take(&mut self) -> Vec<BridgeKind> {
        std::mem::take(&mut self.events)
    }

    pub fn count(&self, pred: impl Fn(&BridgeKind) -> bool) -> usize {
        self.events.iter().filter(|e| pred(*e)).count()
    }

    fn feed(&mut self, kind: BridgeKind) {
        self.events.push(kind);
    }
}

impl NativeSink for RecordingSink {
    fn add_device(&mut self, device_id: DeviceId, name: &str, axes: usize, hats: usize) {
        self.feed(BridgeKind::DeviceAdded {
            device_id,
            name: name.to_string(),
            axes,
            hats,
        });
    }

    fn remove_device(&mut self, device_id: DeviceId) {
        self.feed(BridgeKind::DeviceRemoved { device_id });
    }

    fn joystick_axis(&mut self, device_id: DeviceId, axis: usize, value: f32) {
        self.feed(BridgeKind::JoystickAxis {
            device_id,
            axis,
            value,
        });
    }

    fn joystick_hat(&mut self, device_id: DeviceId, hat: usize, x: i32, y: i32) {
        self.feed(BridgeKind::JoystickHat {
            device_id,
            hat,
            x,
            y,
        });
    }

    fn touch(
        &mut self,
        device_id: DeviceId,
        pointer_id: i32,
        action: MotionAction,
        x: f32,
        y: f32,
        pressure: f32,
    ) {
        self.feed(BridgeKind::Touch {
            device_id,
            pointer_id,
            action,
            x,
            y,
            pressure,
        });
    }

    fn key_down(&mut self, keycode: i32) {
        self.feed(BridgeKind::KeyDown { keycode });
    }

    fn key_up(&mut self, keycode: i32) {
        self.feed(BridgeKind::KeyUp { keycode });
    }

    fn pad_down(&mut self, _device_id: DeviceId, _keycode: i32) -> i32 {
        self.pad_calls += 1;
        self.pad_result
    }

    fn pad_up(&mut self, _device_id: DeviceId, _keycode: i32) -> i32 {
        self.pad_calls += 1;
        self.pad_result
    }

    fn commit_text(&mut self, text: &str, cursor: i32) {
        self.feed(BridgeKind::CommitText {
            text: text.to_string(),
            cursor,
        });
    }

    fn set_composing_text(&mut self, text: &str, cursor: i32) {
        self.feed(BridgeKind::ComposingText {
            text: text.to_string(),
            cursor,
        });
    }

    fn backspace(&mut self) {
        self.feed(BridgeKind::Backspace);
    }

    fn scancode_for_char(&mut self, ch: char) {
        self.feed(BridgeKind::Scancode { ch });
    }

    fn soft_return(&mut self) -> bool {
        self.return_calls += 1;
        self.consume_return
    }

    fn keyboard_focus_lost(&mut self) {
        self.feed(BridgeKind::KeyboardFocusLost);
    }

    fn accelerometer(&mut self, x: f32, y: f32, z: f32) {
        self.feed(BridgeKind::Accelerometer { x, y, z });
    }
}
