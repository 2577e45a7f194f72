//! Joystick axis normalization and generic-motion routing.

use crate::event::{MotionAction, MotionEvent};
use crate::registry::DeviceRegistry;
use crate::sink::NativeSink;

/// Map `raw` from `[min, min + range]` onto `[-1, 1]`.
///
/// `range` must be positive; callers only pass device-reported ranges.
#[inline]
pub fn normalize_axis(raw: f32, min: f32, range: f32) -> f32 {
    debug_assert!(range > 0.0, "axis range must be positive, got {range}");
    (raw - min) / range * 2.0 - 1.0
}

/// Round a hat axis pair to its discrete direction (half away from zero).
#[inline]
pub fn normalize_hat(raw_x: f32, raw_y: f32) -> (i32, i32) {
    (raw_x.round() as i32, raw_y.round() as i32)
}

/// Route a generic motion event from a joystick.
///
/// Only `Move` events from tracked devices produce calls: every axis, then every
/// hat, read at the event's action index. Returns `true` when the event came
/// from a joystick-class source, whether or not anything was emitted. Sources
/// are classed the same way the registry admits devices.
pub fn route_joystick_motion(
    registry: &DeviceRegistry,
    event: &MotionEvent,
    sink: &mut dyn NativeSink,
) -> bool {
    if !event.source.is_joystick_class() {
        return false;
    }
    if event.action != MotionAction::Move {
        return true;
    }
    let Some(device) = registry.get(event.device_id) else {
        return true;
    };

    let idx = event.action_index;
    for a in &device.axes {
        let value = a.normalize(event.axis_value(a.axis, idx));
        sink.joystick_axis(device.id, a.index, value);
    }
    for hat in &device.hats {
        let (x, y) = normalize_hat(
            event.axis_value(hat.x_axis, idx),
            event.axis_value(hat.y_axis, idx),
        );
        sink.joystick_hat(device.id, hat.index, x, y);
    }

    #[cfg(feature = "debug-log")]
    tracing::trace!(
        device_id = device.id,
        axes = device.axes.len(),
        hats = device.hats.len(),
        "joystick motion"
    );
    true
}
