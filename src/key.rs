//! Key and pad routing.
//!
//! Some gamepads and D-pads also report the keyboard class, so a key event is
//! offered to the pad handler first and only falls back to plain key dispatch
//! when the pad handler declines it *and* the source includes the keyboard
//! class. Host keys (volume, camera, zoom) are filtered before any of this.

use crate::config::BridgeConfig;
use crate::event::{keycode, KeyAction, KeyEvent, Source};
use crate::sink::NativeSink;

/// Route a key event from the main surface. Returns `true` when handled.
pub fn route_key(config: &BridgeConfig, event: &KeyEvent, sink: &mut dyn NativeSink) -> bool {
    if config.is_host_key(event.keycode) {
        return false;
    }

    if event.source.is_pad() {
        let rc = match event.action {
            KeyAction::Down => Some(sink.pad_down(event.device_id, event.keycode)),
            KeyAction::Up => Some(sink.pad_up(event.device_id, event.keycode)),
            KeyAction::Multiple => None,
        };
        if rc == Some(0) {
            return true;
        }
    }

    if event.source.includes(Source::KEYBOARD) {
        return dispatch_plain(event, sink);
    }

    false
}

/// Route a key event delivered to the hidden text-edit view (hardware keyboard
/// while text input is active).
///
/// Printing keys are committed as text on key-down and swallowed on key-up.
pub fn route_edit_view_key(event: &KeyEvent, sink: &mut dyn NativeSink) -> bool {
    if let Some(c) = event.printing_char {
        if event.action == KeyAction::Down {
            let mut buf = [0u8; 4];
            sink.commit_text(c.encode_utf8(&mut buf), 1);
        }
        return true;
    }
    dispatch_plain(event, sink)
}

/// Pre-IME hook: a BACK release while text input is showing means the soft
/// keyboard was dismissed. Never consumes the event.
pub fn route_pre_ime_key(event: &KeyEvent, text_input_visible: bool, sink: &mut dyn NativeSink) -> bool {
    if event.action == KeyAction::Up && event.keycode == keycode::BACK && text_input_visible {
        sink.keyboard_focus_lost();
    }
    false
}

fn dispatch_plain(event: &KeyEvent, sink: &mut dyn NativeSink) -> bool {
    match event.action {
        KeyAction::Down => {
            sink.key_down(event.keycode);
            true
        }
        KeyAction::Up => {
            sink.key_up(event.keycode);
            true
        }
        KeyAction::Multiple => false,
    }
}
