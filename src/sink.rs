//! The native boundary.
//!
//! [`NativeSink`] is the capability surface the routers call into. On a device
//! this is a thin JNI/FFI shim over the native multimedia library; in tests it is
//! a [`RecordingSink`](crate::recording::RecordingSink); for fan-out it is an
//! [`EventBus`](crate::eventbus::EventBus).
//!
//! Calls are synchronous and must not re-enter the [`InputContext`](crate::context::InputContext)
//! that issued them.

use crate::event::{DeviceId, MotionAction};

pub trait NativeSink {
    fn add_device(&mut self, device_id: DeviceId, name: &str, axes: usize, hats: usize);
    fn remove_device(&mut self, device_id: DeviceId);

    /// `value` is normalized to `[-1, 1]`.
    fn joystick_axis(&mut self, device_id: DeviceId, axis: usize, value: f32);
    fn joystick_hat(&mut self, device_id: DeviceId, hat: usize, x: i32, y: i32);

    /// `x`/`y` are divided by the surface size (nominally `[0, 1]`).
    fn touch(
        &mut self,
        device_id: DeviceId,
        pointer_id: i32,
        action: MotionAction,
        x: f32,
        y: f32,
        pressure: f32,
    );

    fn key_down(&mut self, keycode: i32);
    fn key_up(&mut self, keycode: i32);

    /// Returns `0` when the key was consumed as a pad button.
    fn pad_down(&mut self, device_id: DeviceId, keycode: i32) -> i32;
    /// Returns `0` when the key was consumed as a pad button.
    fn pad_up(&mut self, device_id: DeviceId, keycode: i32) -> i32;

    fn commit_text(&mut self, text: &str, cursor: i32);
    fn set_composing_text(&mut self, text: &str, cursor: i32);
    fn backspace(&mut self);
    /// Simulated physical key press for an ASCII code point.
    fn scancode_for_char(&mut self, ch: char);
    /// The soft keyboard's return key; `true` if the native side consumed it.
    fn soft_return(&mut self) -> bool;
    fn keyboard_focus_lost(&mut self);

    /// Accelerometer sample in units of standard gravity.
    fn accelerometer(&mut self, x: f32, y: f32, z: f32);
}
