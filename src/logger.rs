use crate::event::BridgeEvent;
use crate::eventbus::BridgeListener;

/// A simple listener that logs every bridge event at `debug` level.
#[derive(Default)]
pub struct Logger;

impl Logger {
    pub fn new() -> Self {
        Logger
    }
}

impl BridgeListener for Logger {
    fn on_event(&mut self, event: &BridgeEvent) {
        tracing::debug!(target: "stickbridge::bridge", kind = ?event.kind, "bridge event");
    }
}
