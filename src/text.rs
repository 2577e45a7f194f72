//! Soft-keyboard text bridge.
//!
//! The native side only understands discrete key events and committed text, so
//! edits made through the input method are replayed as: backspaces for
//! everything after the common prefix, a simulated scancode for each ASCII code
//! point typed, then one commit with the new tail.
//!
//! Diffing is per code point (`char`). A grapheme made of several code points
//! (flags, ZWJ emoji) yields several backspaces when deleted.

use crate::event::{keycode, KeyAction, KeyEvent};
use crate::sink::NativeSink;

/// Outcome of one [`TextBridge::on_editable_changed`] call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextDiff {
    pub backspaces: usize,
    /// Text committed to the sink, if any.
    pub committed: Option<String>,
    /// A newline was consumed by the soft-return handler; processing stopped there.
    pub return_consumed: bool,
}

#[derive(Debug)]
pub struct TextBridge {
    previous: String,
    synthesize_scancodes: bool,
}

impl Default for TextBridge {
    fn default() -> Self {
        Self::new(true)
    }
}

impl TextBridge {
    pub fn new(synthesize_scancodes: bool) -> Self {
        Self {
            previous: String::new(),
            synthesize_scancodes,
        }
    }

    /// Last text seen.
    pub fn previous(&self) -> &str {
        &self.previous
    }

    /// Re-seed the previous snapshot, e.g. when text input is shown again.
    pub fn reset(&mut self, text: impl Into<String>) {
        self.previous = text.into();
    }

    /// Replay the change from the previous snapshot to `current`.
    pub fn on_editable_changed(&mut self, current: &str, sink: &mut dyn NativeSink) -> TextDiff {
        let mut diff = TextDiff::default();

        let match_len = self
            .previous
            .chars()
            .zip(current.chars())
            .take_while(|(a, b)| a == b)
            .count();

        for _ in self.previous.chars().skip(match_len) {
            sink.backspace();
            diff.backspaces += 1;
        }

        let tail_start = current
            .char_indices()
            .nth(match_len)
            .map_or(current.len(), |(i, _)| i);
        let tail = &current[tail_start..];

        for c in tail.chars() {
            if c == '\n' && sink.soft_return() {
                diff.return_consumed = true;
                break;
            }
            if self.synthesize_scancodes && (1..=127).contains(&(c as u32)) {
                sink.scancode_for_char(c);
            }
        }

        if !diff.return_consumed && !tail.is_empty() {
            sink.commit_text(tail, 0);
            diff.committed = Some(tail.to_string());
        }

        self.previous = current.to_string();

        #[cfg(feature = "debug-log")]
        tracing::trace!(?diff, "editable changed");
        diff
    }

    /// `InputConnection.commitText`.
    pub fn commit_text(&mut self, text: &str, cursor: i32, sink: &mut dyn NativeSink) -> bool {
        sink.commit_text(text, cursor);
        true
    }

    /// `InputConnection.setComposingText`.
    pub fn set_composing_text(&mut self, text: &str, cursor: i32, sink: &mut dyn NativeSink) -> bool {
        sink.set_composing_text(text, cursor);
        true
    }

    /// `InputConnection.deleteSurroundingText`.
    ///
    /// Some keyboards report backspace as "delete one char before the cursor"
    /// instead of a DEL key event; that case is turned into a DEL press/release.
    /// Anything else is left to the host (`false`).
    pub fn delete_surrounding_text(&mut self, before: usize, after: usize, sink: &mut dyn NativeSink) -> bool {
        if before == 1 && after == 0 {
            sink.key_down(keycode::DEL);
            sink.key_up(keycode::DEL);
            return true;
        }
        false
    }

    /// `InputConnection.sendKeyEvent`: soft-keyboard keys and IME-translated
    /// hardware keys.
    pub fn send_key_event(&mut self, event: &KeyEvent, sink: &mut dyn NativeSink) -> bool {
        match event.action {
            KeyAction::Down => {
                if let Some(c) = event.printing_char {
                    let mut buf = [0u8; 4];
                    self.commit_text(c.encode_utf8(&mut buf), 1, sink);
                }
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
}
