use crate::event::{BridgeEvent, BridgeKind, DeviceId, MotionAction};
use crate::sink::NativeSink;
use std::collections::BTreeMap;

/// Trait for reacting to one-way boundary calls.
pub trait BridgeListener: Send {
    fn on_event(&mut self, event: &BridgeEvent);
}

/// Determines which kinds of events a listener wants to receive.
#[derive(Debug, Clone, Copy)]
pub enum EventFilter {
    All,
    DevicesOnly,
    JoystickOnly,
    TouchOnly,
    KeysOnly,
    TextOnly,
    Custom(fn(&BridgeEvent) -> bool),
}

impl EventFilter {
    fn passes(&self, event: &BridgeEvent) -> bool {
        use BridgeKind::*;
        match self {
            EventFilter::All => true,
            EventFilter::DevicesOnly => {
                matches!(event.kind, DeviceAdded { .. } | DeviceRemoved { .. })
            }
            EventFilter::JoystickOnly => {
                matches!(event.kind, JoystickAxis { .. } | JoystickHat { .. })
            }
            EventFilter::TouchOnly => matches!(event.kind, Touch { .. }),
            EventFilter::KeysOnly => matches!(event.kind, KeyDown { .. } | KeyUp { .. }),
            EventFilter::TextOnly => matches!(
                event.kind,
                CommitText { .. } | ComposingText { .. } | Backspace | Scancode { .. }
            ),
            EventFilter::Custom(f) => f(event),
        }
    }
}

/// Device the event refers to, when it refers to one.
fn device_of(kind: &BridgeKind) -> Option<DeviceId> {
    match kind {
        BridgeKind::DeviceAdded { device_id, .. }
        | BridgeKind::DeviceRemoved { device_id }
        | BridgeKind::JoystickAxis { device_id, .. }
        | BridgeKind::JoystickHat { device_id, .. }
        | BridgeKind::Touch { device_id, .. } => Some(*device_id),
        _ => None,
    }
}

/// Metadata-wrapped listener with filters and control flags.
struct ListenerEntry {
    listener: Box<dyn BridgeListener>,
    enabled: bool,
    filter: EventFilter,
    /// Only events for this device (events without a device always pass).
    device: Option<DeviceId>,
}

type PadHandler = Box<dyn FnMut(DeviceId, i32, bool) -> i32 + Send>;
type ReturnHandler = Box<dyn FnMut() -> bool + Send>;

/// A [`NativeSink`] that fans calls out to registered observers.
///
/// One-way calls become [`BridgeEvent`]s delivered to every enabled, matching
/// listener. The calls that answer something are routed to a single handler
/// each: without a pad handler pads are never consumed (`-1`), without a return
/// handler the soft return is never consumed.
#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    /// Keyed by registration order; delivery follows it.
    listeners: BTreeMap<u64, ListenerEntry>,
    pad_handler: Option<PadHandler>,
    return_handler: Option<ReturnHandler>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener with optional filtering by kind and device.
    pub fn add_listener(
        &mut self,
        listener: impl BridgeListener + 'static,
        filter: EventFilter,
        device: Option<DeviceId>,
    ) -> u64 {
        let id = self.next_id;
        self.listeners.insert(
            id,
            ListenerEntry {
                listener: Box::new(listener),
                enabled: true,
                filter,
                device,
            },
        );
        self.next_id += 1;
        id
    }

    pub fn enable(&mut self, id: u64) {
        if let Some(entry) = self.listeners.get_mut(&id) {
            entry.enabled = true;
        }
    }

    /// Mutes a listener without removing it.
    pub fn disable(&mut self, id: u64) {
        if let Some(entry) = self.listeners.get_mut(&id) {
            entry.enabled = false;
        }
    }

    pub fn remove_listener(&mut self, id: u64) {
        self.listeners.remove(&id);
    }

    /// Answers `pad_down` (`down = true`) and `pad_up`; `0` means consumed.
    pub fn set_pad_handler(&mut self, f: impl FnMut(DeviceId, i32, bool) -> i32 + Send + 'static) {
        self.pad_handler = Some(Box::new(f));
    }

    /// Answers `soft_return`.
    pub fn set_return_handler(&mut self, f: impl FnMut() -> bool + Send + 'static) {
        self.return_handler = Some(Box::new(f));
    }

    fn emit(&mut self, kind: BridgeKind) {
        let event = BridgeEvent::now(kind);
        let device = device_of(&event.kind);
        for entry in self.listeners.values_mut() {
            if !entry.enabled {
                continue;
            }
            if let (Some(wanted), Some(dev)) = (entry.device, device) {
                if wanted != dev {
                    continue;
                }
            }
            if entry.filter.passes(&event) {
                entry.listener.on_event(&event);
            }
        }
    }

    fn pad(&mut self, device_id: DeviceId, keycode: i32, down: bool) -> i32 {
        match self.pad_handler.as_mut() {
            Some(f) => f(device_id, keycode, down),
            None => -1,
        }
    }
}

impl NativeSink for EventBus {
    fn add_device(&mut self, device_id: DeviceId, name: &str, axes: usize, hats: usize) {
        self.emit(BridgeKind::DeviceAdded {
            device_id,
            name: name.to_string(),
            axes,
            hats,
        });
    }

    fn remove_device(&mut self, device_id: DeviceId) {
        self.emit(BridgeKind::DeviceRemoved { device_id });
    }

    fn joystick_axis(&mut self, device_id: DeviceId, axis: usize, value: f32) {
        self.emit(BridgeKind::JoystickAxis {
            device_id,
            axis,
            value,
        });
    }

    fn joystick_hat(&mut self, device_id: DeviceId, hat: usize, x: i32, y: i32) {
        self.emit(BridgeKind::JoystickHat {
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
        self.emit(BridgeKind::Touch {
            device_id,
            pointer_id,
            action,
            x,
            y,
            pressure,
        });
    }

    fn key_down(&mut self, keycode: i32) {
        self.emit(BridgeKind::KeyDown { keycode });
    }

    fn key_up(&mut self, keycode: i32) {
        self.emit(BridgeKind::KeyUp { keycode });
    }

    fn pad_down(&mut self, device_id: DeviceId, keycode: i32) -> i32 {
        self.pad(device_id, keycode, true)
    }

    fn pad_up(&mut self, device_id: DeviceId, keycode: i32) -> i32 {
        self.pad(device_id, keycode, false)
    }

    fn commit_text(&mut self, text: &str, cursor: i32) {
        self.emit(BridgeKind::CommitText {
            text: text.to_string(),
            cursor,
        });
    }

    fn set_composing_text(&mut self, text: &str, cursor: i32) {
        self.emit(BridgeKind::ComposingText {
            text: text.to_string(),
            cursor,
        });
    }

    fn backspace(&mut self) {
        self.emit(BridgeKind::Backspace);
    }

    fn scancode_for_char(&mut self, ch: char) {
        self.emit(BridgeKind::Scancode { ch });
    }

    fn soft_return(&mut self) -> bool {
        match self.return_handler.as_mut() {
            Some(f) => f(),
            None => false,
        }
    }

    fn keyboard_focus_lost(&mut self) {
        self.emit(BridgeKind::KeyboardFocusLost);
    }

    fn accelerometer(&mut self, x: f32, y: f32, z: f32) {
        self.emit(BridgeKind::Accelerometer { x, y, z });
    }
}
