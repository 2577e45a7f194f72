//! Touch routing.
//!
//! Converts a (possibly multi-pointer) touch event into per-pointer sink calls
//! with coordinates divided by the last known surface size.
//!
//! Which pointer a call describes depends on the action:
//!
//! | action                      | pointers reported            |
//! |-----------------------------|------------------------------|
//! | `Move`                      | every pointer                |
//! | `Down`, `Up`                | index 0, always              |
//! | `PointerDown`, `PointerUp`  | the event's action index     |
//! | `Cancel`                    | every pointer, sent as `Up`  |
//!
//! Other actions are dropped.

use crate::event::{MotionAction, MotionEvent};
use crate::sink::NativeSink;

/// Last surface size reported by the host.
///
/// Starts at `1.0 x 1.0` so that events arriving before the first resize pass
/// through as raw pixels instead of dividing by zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
        }
    }
}

impl SurfaceSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Route a touch event; the event is always consumed.
pub fn route_touch(surface: SurfaceSize, event: &MotionEvent, sink: &mut dyn NativeSink) -> bool {
    let mut emit = |index: usize, action: MotionAction| {
        let Some(p) = event.pointers.get(index) else {
            return;
        };
        sink.touch(
            event.device_id,
            p.id,
            action,
            p.x / surface.width,
            p.y / surface.height,
            p.pressure,
        );
    };

    match event.action {
        MotionAction::Move => {
            for i in 0..event.pointer_count() {
                emit(i, MotionAction::Move);
            }
        }
        MotionAction::Down | MotionAction::Up => emit(0, event.action),
        MotionAction::PointerDown | MotionAction::PointerUp => {
            emit(event.action_index, event.action)
        }
        MotionAction::Cancel => {
            for i in 0..event.pointer_count() {
                emit(i, MotionAction::Up);
            }
        }
        _ => {}
    }
    true
}
