//! Host events and the boundary-call records derived from them.
//!
//! StickBridge mirrors the Android input model closely enough that a host
//! integration layer can fill these structs straight from `android.view.KeyEvent`
//! / `MotionEvent` (or `ndk::event`) without translation tables.
//!
//! ## Value conventions
//! - **Source bitmasks** use the Android `InputDevice.SOURCE_*` values. A source
//!   "includes" a class only when *all* of the class bits are present
//!   (see [`Source::includes`]).
//! - **Keycodes** and **axis ids** are the raw Android integers ([`keycode`], [`axis`]).
//! - **Motion actions** are the masked action (`getActionMasked()`).
//!
//! Outbound, every one-way call issued on a [`NativeSink`](crate::sink::NativeSink)
//! can be recorded as a [`BridgeKind`], optionally timestamped as a [`BridgeEvent`].

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Platform device identifier (`InputDevice.getId()`).
pub type DeviceId = i32;

bitflags! {
    /// Input source bitmask (`InputDevice.SOURCE_*`).
    ///
    /// Composite sources share class bits: `GAMEPAD` (0x401) and `KEYBOARD` (0x101)
    /// both carry `CLASS_BUTTON`. Use [`Source::includes`] for classification.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Source: u32 {
        const CLASS_BUTTON = 0x0000_0001;
        const CLASS_POINTER = 0x0000_0002;
        const CLASS_TRACKBALL = 0x0000_0004;
        const CLASS_POSITION = 0x0000_0008;
        const CLASS_JOYSTICK = 0x0000_0010;

        const KEYBOARD = 0x0000_0101;
        const DPAD = 0x0000_0201;
        const GAMEPAD = 0x0000_0401;
        const TOUCHSCREEN = 0x0000_1002;
        const MOUSE = 0x0000_2002;
        const STYLUS = 0x0000_4002;
        const TRACKBALL = 0x0001_0004;
        const TOUCHPAD = 0x0010_0008;
        const JOYSTICK = 0x0100_0010;
    }
}

impl Source {
    /// Build from a raw platform bitmask, keeping unknown bits.
    #[inline]
    pub fn from_raw(raw: u32) -> Self {
        Self::from_bits_retain(raw)
    }

    /// `true` when every bit of `class` is present.
    #[inline]
    pub fn includes(self, class: Source) -> bool {
        self.contains(class)
    }

    #[inline]
    pub fn is_joystick_class(self) -> bool {
        self.includes(Source::CLASS_JOYSTICK)
    }

    /// Gamepad or directional pad.
    #[inline]
    pub fn is_pad(self) -> bool {
        self.includes(Source::GAMEPAD) || self.includes(Source::DPAD)
    }
}

/// Android keycodes used by the routers.
pub mod keycode {
    pub const BACK: i32 = 4;
    pub const VOLUME_UP: i32 = 24;
    pub const VOLUME_DOWN: i32 = 25;
    pub const CAMERA: i32 = 27;
    pub const ENTER: i32 = 66;
    pub const DEL: i32 = 67;
    pub const ZOOM_IN: i32 = 168;
    pub const ZOOM_OUT: i32 = 169;
}

/// Android motion axis ids (`MotionEvent.AXIS_*`).
pub mod axis {
    pub const X: i32 = 0;
    pub const Y: i32 = 1;
    pub const PRESSURE: i32 = 2;
    pub const Z: i32 = 11;
    pub const RX: i32 = 12;
    pub const RY: i32 = 13;
    pub const RZ: i32 = 14;
    pub const HAT_X: i32 = 15;
    pub const HAT_Y: i32 = 16;
    pub const LTRIGGER: i32 = 17;
    pub const RTRIGGER: i32 = 18;

    /// `true` for the two explicit hat axes.
    #[inline]
    pub fn is_hat(id: i32) -> bool {
        id == HAT_X || id == HAT_Y
    }
}

/// Key action (`KeyEvent.getAction()`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Down,
    Up,
    Multiple,
}

/// A key event as delivered by the host.
#[derive(Clone, Debug)]
pub struct KeyEvent {
    pub device_id: DeviceId,
    pub source: Source,
    pub action: KeyAction,
    pub keycode: i32,
    /// Character produced by the key, when it is a printing key.
    pub printing_char: Option<char>,
}

impl KeyEvent {
    pub fn new(device_id: DeviceId, source: Source, action: KeyAction, keycode: i32) -> Self {
        Self {
            device_id,
            source,
            action,
            keycode,
            printing_char: None,
        }
    }

    /// Attach the character a printing key produces.
    pub fn with_char(mut self, c: char) -> Self {
        self.printing_char = Some(c);
        self
    }

    #[inline]
    pub fn is_printing_key(&self) -> bool {
        self.printing_char.is_some()
    }
}

/// Masked motion action (`MotionEvent.getActionMasked()`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionAction {
    Down,
    Up,
    Move,
    Cancel,
    Outside,
    PointerDown,
    PointerUp,
    Other(i32),
}

impl MotionAction {
    pub fn from_masked(code: i32) -> Self {
        match code {
            0 => MotionAction::Down,
            1 => MotionAction::Up,
            2 => MotionAction::Move,
            3 => MotionAction::Cancel,
            4 => MotionAction::Outside,
            5 => MotionAction::PointerDown,
            6 => MotionAction::PointerUp,
            other => MotionAction::Other(other),
        }
    }

    /// The raw Android action code, as the native sink expects it.
    pub fn code(self) -> i32 {
        match self {
            MotionAction::Down => 0,
            MotionAction::Up => 1,
            MotionAction::Move => 2,
            MotionAction::Cancel => 3,
            MotionAction::Outside => 4,
            MotionAction::PointerDown => 5,
            MotionAction::PointerUp => 6,
            MotionAction::Other(code) => code,
        }
    }
}

/// One pointer of a motion event, in window pixels.
#[derive(Clone, Debug, Default)]
pub struct PointerCoords {
    /// Pointer id, unique within the gesture.
    pub id: i32,
    pub x: f32,
    pub y: f32,
    pub pressure: f32,
    /// Additional axis values `(axis id, value)` (joystick axes, hats, triggers).
    pub axes: Vec<(i32, f32)>,
}

impl PointerCoords {
    pub fn new(id: i32, x: f32, y: f32, pressure: f32) -> Self {
        Self {
            id,
            x,
            y,
            pressure,
            axes: Vec::new(),
        }
    }

    pub fn with_axis(mut self, axis: i32, value: f32) -> Self {
        self.axes.push((axis, value));
        self
    }
}

/// A motion event (touch or generic motion) as delivered by the host.
#[derive(Clone, Debug)]
pub struct MotionEvent {
    pub device_id: DeviceId,
    pub source: Source,
    pub action: MotionAction,
    /// `getActionIndex()`: the pointer the action refers to.
    pub action_index: usize,
    pub pointers: Vec<PointerCoords>,
}

impl MotionEvent {
    #[inline]
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// `getAxisValue(axis, pointer_index)`; unknown axes and pointers read as `0.0`.
    ///
    /// Values attached with [`PointerCoords::with_axis`] win; `X`, `Y` and
    /// `PRESSURE` otherwise fall back to the pointer's own fields.
    pub fn axis_value(&self, axis_id: i32, pointer_index: usize) -> f32 {
        let Some(p) = self.pointers.get(pointer_index) else {
            return 0.0;
        };
        if let Some(&(_, v)) = p.axes.iter().find(|(id, _)| *id == axis_id) {
            return v;
        }
        match axis_id {
            axis::X => p.x,
            axis::Y => p.y,
            axis::PRESSURE => p.pressure,
            _ => 0.0,
        }
    }
}

/// A one-way boundary call, recorded for observers.
///
/// Calls that return a value (`pad_down`, `pad_up`, `soft_return`) are not
/// represented here; they are answered by handlers, see [`EventBus`](crate::eventbus::EventBus).
#[derive(Clone, Debug, PartialEq)]
pub enum BridgeKind {
    DeviceAdded {
        device_id: DeviceId,
        name: String,
        axes: usize,
        hats: usize,
    },
    DeviceRemoved {
        device_id: DeviceId,
    },
    JoystickAxis {
        device_id: DeviceId,
        axis: usize,
        value: f32,
    },
    JoystickHat {
        device_id: DeviceId,
        hat: usize,
        x: i32,
        y: i32,
    },
    Touch {
        device_id: DeviceId,
        pointer_id: i32,
        action: MotionAction,
        x: f32,
        y: f32,
        pressure: f32,
    },
    KeyDown {
        keycode: i32,
    },
    KeyUp {
        keycode: i32,
    },
    CommitText {
        text: String,
        cursor: i32,
    },
    ComposingText {
        text: String,
        cursor: i32,
    },
    Backspace,
    Scancode {
        ch: char,
    },
    KeyboardFocusLost,
    Accelerometer {
        x: f32,
        y: f32,
        z: f32,
    },
}

/// Timestamped boundary call.
#[derive(Clone, Debug)]
pub struct BridgeEvent {
    /// Capture time (monotonic).
    pub at: std::time::Instant,
    pub kind: BridgeKind,
}

impl BridgeEvent {
    pub fn now(kind: BridgeKind) -> Self {
        Self {
            at: std::time::Instant::now(),
            kind,
        }
    }
}
