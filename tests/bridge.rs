use std::sync::{Arc, Mutex};

use stickbridge::{
    axis, keycode, BridgeConfig, BridgeEvent, BridgeKind, BridgeListener, DeviceInfo,
    DeviceSnapshot, EventBus, EventFilter, HatPolicy, InputContext, KeyAction, KeyEvent, Logger,
    MotionAction, MotionEvent, MotionRange, PointerCoords, RecordingSink, Rotation, Source,
};

fn gamepad(name: &str) -> DeviceInfo {
    DeviceInfo::new(name, Source::JOYSTICK | Source::GAMEPAD)
        .with_range(MotionRange::new(axis::RZ, Source::JOYSTICK, -1.0, 1.0))
        .with_range(MotionRange::new(axis::X, Source::JOYSTICK, -1.0, 1.0))
        .with_range(MotionRange::new(axis::HAT_X, Source::JOYSTICK, -1.0, 1.0))
        .with_range(MotionRange::new(axis::HAT_Y, Source::JOYSTICK, -1.0, 1.0))
        .with_range(MotionRange::new(axis::LTRIGGER, Source::JOYSTICK, 0.0, 1.0))
}

fn stick_move(device_id: i32, values: &[(i32, f32)]) -> MotionEvent {
    let mut p = PointerCoords::new(0, 0.0, 0.0, 0.0);
    for &(a, v) in values {
        p = p.with_axis(a, v);
    }
    MotionEvent {
        device_id,
        source: Source::JOYSTICK,
        action: MotionAction::Move,
        action_index: 0,
        pointers: vec![p],
    }
}

#[test]
fn joystick_motion_is_normalized_in_sorted_axis_order() {
    let mut ctx = InputContext::default();
    let mut sink = RecordingSink::new();
    ctx.poll_devices(&DeviceSnapshot::new().with_device(8, gamepad("Pad")), &mut sink);
    assert_eq!(
        sink.take(),
        vec![BridgeKind::DeviceAdded {
            device_id: 8,
            name: "Pad".into(),
            axes: 3,
            hats: 1
        }]
    );

    let ev = stick_move(
        8,
        &[
            (axis::X, 0.5),
            (axis::RZ, -1.0),
            (axis::LTRIGGER, 1.0),
            (axis::HAT_X, -1.0),
            (axis::HAT_Y, 0.6),
        ],
    );
    assert!(ctx.on_generic_motion(&ev, &mut sink));
    assert_eq!(
        sink.take(),
        vec![
            BridgeKind::JoystickAxis { device_id: 8, axis: 0, value: 0.5 },
            BridgeKind::JoystickAxis { device_id: 8, axis: 1, value: -1.0 },
            BridgeKind::JoystickAxis { device_id: 8, axis: 2, value: 1.0 },
            BridgeKind::JoystickHat { device_id: 8, hat: 0, x: -1, y: 1 },
        ]
    );
}

#[test]
fn motion_from_unknown_or_non_joystick_sources_emits_nothing() {
    let mut ctx = InputContext::default();
    let mut sink = RecordingSink::new();

    // Joystick source, but the device was never polled.
    assert!(ctx.on_generic_motion(&stick_move(3, &[(axis::X, 1.0)]), &mut sink));

    let mut touch = stick_move(3, &[]);
    touch.source = Source::TOUCHSCREEN;
    assert!(!ctx.on_generic_motion(&touch, &mut sink));
    assert!(sink.events().is_empty());
}

#[test]
fn removed_device_stops_routing() {
    let mut ctx = InputContext::default();
    let mut sink = RecordingSink::new();
    ctx.poll_devices(&DeviceSnapshot::new().with_device(8, gamepad("Pad")), &mut sink);
    ctx.poll_devices(&DeviceSnapshot::new(), &mut sink);
    sink.take();

    ctx.on_generic_motion(&stick_move(8, &[(axis::X, 1.0)]), &mut sink);
    assert!(sink.events().is_empty());
    assert!(ctx.registry().is_empty());
}

#[test]
fn touch_uses_last_resize() {
    let mut ctx = InputContext::default();
    let mut sink = RecordingSink::new();
    let down = MotionEvent {
        device_id: 1,
        source: Source::TOUCHSCREEN,
        action: MotionAction::Down,
        action_index: 1,
        pointers: vec![
            PointerCoords::new(4, 50.0, 20.0, 1.0),
            PointerCoords::new(5, 90.0, 90.0, 1.0),
        ],
    };

    ctx.on_touch(&down, &mut sink);
    ctx.on_resize(100, 40);
    ctx.on_touch(&down, &mut sink);

    let xs: Vec<(i32, f32, f32)> = sink
        .events()
        .iter()
        .filter_map(|e| match e {
            BridgeKind::Touch { pointer_id, x, y, .. } => Some((*pointer_id, *x, *y)),
            _ => None,
        })
        .collect();
    assert_eq!(xs, vec![(4, 50.0, 20.0), (4, 0.5, 0.5)]);
}

#[test]
fn empty_resize_keeps_previous_surface() {
    let mut ctx = InputContext::default();
    let mut sink = RecordingSink::new();
    ctx.on_resize(200, 100);
    ctx.on_resize(0, 0);
    ctx.on_resize(50, 0);
    ctx.on_touch(
        &MotionEvent {
            device_id: 1,
            source: Source::TOUCHSCREEN,
            action: MotionAction::Down,
            action_index: 0,
            pointers: vec![PointerCoords::new(0, 10.0, 0.0, 1.0)],
        },
        &mut sink,
    );
    assert_eq!(
        sink.events(),
        &[BridgeKind::Touch {
            device_id: 1,
            pointer_id: 0,
            action: MotionAction::Down,
            x: 0.05,
            y: 0.0,
            pressure: 1.0
        }]
    );
}

#[test]
fn configured_host_keys_are_left_to_the_host() {
    let cfg = BridgeConfig::from_toml_str("host_keys = [66]").unwrap();
    let mut ctx = InputContext::new(cfg);
    let mut sink = RecordingSink::new();

    let enter = KeyEvent::new(0, Source::KEYBOARD, KeyAction::Down, keycode::ENTER);
    assert!(!ctx.on_key(&enter, &mut sink));
    assert!(!ctx.on_edit_view_key(&enter, &mut sink));

    let vol = KeyEvent::new(0, Source::KEYBOARD, KeyAction::Down, keycode::VOLUME_UP);
    assert!(ctx.on_key(&vol, &mut sink));
    assert_eq!(sink.events(), &[BridgeKind::KeyDown { keycode: keycode::VOLUME_UP }]);
}

#[test]
fn text_input_session() {
    let mut ctx = InputContext::default();
    let mut sink = RecordingSink::new();

    ctx.set_text_input(Some("Hell"));
    assert!(ctx.text_input_visible());
    let diff = ctx.on_editable_changed("Hello!", &mut sink);
    assert_eq!(diff.committed.as_deref(), Some("o!"));
    ctx.on_editable_changed("Hello", &mut sink);
    assert_eq!(sink.count(|e| *e == BridgeKind::Backspace), 1);

    ctx.text().set_composing_text("wor", 1, &mut sink);
    assert!(sink.events().contains(&BridgeKind::ComposingText {
        text: "wor".into(),
        cursor: 1
    }));

    let back = KeyEvent::new(0, Source::KEYBOARD, KeyAction::Up, keycode::BACK);
    ctx.on_pre_ime_key(&back, &mut sink);
    assert_eq!(sink.events().last(), Some(&BridgeKind::KeyboardFocusLost));

    ctx.set_text_input(None);
    assert!(!ctx.text_input_visible());
    assert_eq!(ctx.text().previous(), "");
}

#[test]
fn accelerometer_follows_rotation() {
    let mut ctx = InputContext::default();
    let mut sink = RecordingSink::new();
    ctx.set_rotation(Rotation::Rotation90);
    ctx.on_accelerometer([0.0, stickbridge::STANDARD_GRAVITY, 0.0], &mut sink);
    assert_eq!(
        sink.events(),
        &[BridgeKind::Accelerometer { x: 1.0, y: 0.0, z: -1.0 }]
    );
}

#[test]
fn rejecting_hat_policy_skips_odd_devices() {
    let cfg = BridgeConfig {
        hat_policy: HatPolicy::Reject,
        ..BridgeConfig::default()
    };
    let mut ctx = InputContext::new(cfg);
    let mut sink = RecordingSink::new();
    let odd = DeviceInfo::new("Odd", Source::JOYSTICK)
        .with_range(MotionRange::new(axis::HAT_Y, Source::JOYSTICK, -1.0, 1.0));
    let diff = ctx.poll_devices(&DeviceSnapshot::new().with_device(2, odd), &mut sink);
    assert!(diff.is_empty());
}

#[derive(Clone, Default)]
struct Shared(Arc<Mutex<Vec<BridgeKind>>>);

impl BridgeListener for Shared {
    fn on_event(&mut self, event: &BridgeEvent) {
        self.0.lock().unwrap().push(event.kind.clone());
    }
}

#[test]
fn event_bus_drives_a_whole_session() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let mut ctx = InputContext::default();
    let mut bus = EventBus::new();
    let devices = Shared::default();
    let text = Shared::default();
    bus.add_listener(Logger::new(), EventFilter::All, None);
    bus.add_listener(devices.clone(), EventFilter::DevicesOnly, None);
    bus.add_listener(text.clone(), EventFilter::TextOnly, None);
    bus.set_pad_handler(|_, code, _| if code == 96 { 0 } else { 1 });
    bus.set_return_handler(|| true);

    ctx.poll_devices(
        &DeviceSnapshot::new()
            .with_device(1, gamepad("A"))
            .with_device(2, gamepad("B")),
        &mut bus,
    );
    let added: Vec<i32> = devices
        .0
        .lock()
        .unwrap()
        .iter()
        .filter_map(|e| match e {
            BridgeKind::DeviceAdded { device_id, .. } => Some(*device_id),
            _ => None,
        })
        .collect();
    assert_eq!(added, vec![2, 1]);

    let button_a = KeyEvent::new(1, Source::GAMEPAD, KeyAction::Down, 96);
    assert!(ctx.on_key(&button_a, &mut bus));
    let button_b = KeyEvent::new(1, Source::GAMEPAD, KeyAction::Down, 97);
    assert!(!ctx.on_key(&button_b, &mut bus));

    ctx.on_editable_changed("hi\nthere", &mut bus);
    assert_eq!(
        *text.0.lock().unwrap(),
        vec![BridgeKind::Scancode { ch: 'h' }, BridgeKind::Scancode { ch: 'i' }]
    );
}
