//! The input context: all mutable bridge state in one place.
//!
//! The host integration layer owns one [`InputContext`] and calls into it from
//! its event thread. Every entry point takes the sink by reference, so the
//! context itself holds no handle to native code and no global state.
//!
//! ```
//! use stickbridge::{InputContext, MotionAction, MotionEvent, PointerCoords, RecordingSink, Source};
//!
//! let mut ctx = InputContext::default();
//! let mut sink = RecordingSink::new();
//! ctx.on_resize(800, 600);
//! ctx.on_touch(
//!     &MotionEvent {
//!         device_id: 1,
//!         source: Source::TOUCHSCREEN,
//!         action: MotionAction::Down,
//!         action_index: 0,
//!         pointers: vec![PointerCoords::new(0, 400.0, 300.0, 1.0)],
//!     },
//!     &mut sink,
//! );
//! assert_eq!(sink.events().len(), 1);
//! ```

use crate::config::BridgeConfig;
use crate::event::{KeyEvent, MotionEvent};
use crate::joystick::route_joystick_motion;
use crate::key::{route_edit_view_key, route_key, route_pre_ime_key};
use crate::registry::{DeviceRegistry, PollDiff};
use crate::sensor::{remap_accelerometer, Rotation};
use crate::sink::NativeSink;
use crate::snapshot::DeviceSnapshotProvider;
use crate::text::{TextBridge, TextDiff};
use crate::touch::{route_touch, SurfaceSize};
use tracing::{debug, warn};

#[derive(Debug)]
pub struct InputContext {
    config: BridgeConfig,
    registry: DeviceRegistry,
    surface: SurfaceSize,
    text: TextBridge,
    text_input_visible: bool,
    rotation: Rotation,
}

impl Default for InputContext {
    fn default() -> Self {
        Self::new(BridgeConfig::default())
    }
}

impl InputContext {
    pub fn new(config: BridgeConfig) -> Self {
        Self {
            registry: DeviceRegistry::new(config.hat_policy),
            text: TextBridge::new(config.synthesize_scancodes),
            surface: SurfaceSize::default(),
            text_input_visible: false,
            rotation: Rotation::default(),
            config,
        }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn registry(&self) -> &DeviceRegistry {
        &self.registry
    }

    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    /// Diff the joystick registry against the host's device list.
    pub fn poll_devices(
        &mut self,
        provider: &dyn DeviceSnapshotProvider,
        sink: &mut dyn NativeSink,
    ) -> PollDiff {
        self.registry.poll(provider, sink)
    }

    /// Surface size changed; later touch coordinates are divided by it.
    ///
    /// A zero dimension is ignored and the previous size kept.
    pub fn on_resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            warn!(width, height, "ignoring empty surface size");
            return;
        }
        debug!(width, height, "surface resized");
        self.surface = SurfaceSize::new(width as f32, height as f32);
    }

    pub fn on_touch(&mut self, event: &MotionEvent, sink: &mut dyn NativeSink) -> bool {
        route_touch(self.surface, event, sink)
    }

    /// Generic motion (joysticks). Returns `true` for joystick-class sources.
    pub fn on_generic_motion(&mut self, event: &MotionEvent, sink: &mut dyn NativeSink) -> bool {
        route_joystick_motion(&self.registry, event, sink)
    }

    /// Key event on the main surface.
    pub fn on_key(&mut self, event: &KeyEvent, sink: &mut dyn NativeSink) -> bool {
        route_key(&self.config, event, sink)
    }

    /// Hardware key event on the hidden text-edit view.
    pub fn on_edit_view_key(&mut self, event: &KeyEvent, sink: &mut dyn NativeSink) -> bool {
        if self.config.is_host_key(event.keycode) {
            return false;
        }
        route_edit_view_key(event, sink)
    }

    /// Key event seen before the input method gets it.
    pub fn on_pre_ime_key(&mut self, event: &KeyEvent, sink: &mut dyn NativeSink) -> bool {
        route_pre_ime_key(event, self.text_input_visible, sink)
    }

    /// Text input shown (`Some(initial text)`) or hidden (`None`).
    pub fn set_text_input(&mut self, initial: Option<&str>) {
        self.text_input_visible = initial.is_some();
        self.text.reset(initial.unwrap_or_default());
    }

    pub fn text_input_visible(&self) -> bool {
        self.text_input_visible
    }

    /// The soft-keyboard bridge, for the input-connection entry points.
    pub fn text(&mut self) -> &mut TextBridge {
        &mut self.text
    }

    pub fn on_editable_changed(&mut self, current: &str, sink: &mut dyn NativeSink) -> TextDiff {
        self.text.on_editable_changed(current, sink)
    }

    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    /// Raw accelerometer sample (m/s²) in device coordinates.
    pub fn on_accelerometer(&mut self, values: [f32; 3], sink: &mut dyn NativeSink) {
        let [x, y, z] = remap_accelerometer(values, self.rotation);
        sink.accelerometer(x, y, z);
    }
}
