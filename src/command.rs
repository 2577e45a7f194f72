//! Native-thread → UI-thread plumbing.
//!
//! Two shapes cover everything the native side asks of the UI thread:
//!
//! - **Fire-and-forget commands** ([`UiCommand`]) go through a single-slot
//!   queue. The sender never blocks; a full slot is reported as
//!   [`BridgeError::QueueFull`] and the caller decides whether to retry.
//! - **Requests that need an answer** (system-service lookups, message boxes)
//!   use [`request_channel`]. The requester waits at most the configured
//!   timeout and learns whether the responder timed out or gave up.
//!
//! The command slot is a lock-free single-element queue shared by both sides;
//! the UI side drains it from its own loop without blocking. Requests travel
//! over a bounded async channel and are answered through a one-shot reply.

use crate::config::BridgeConfig;
use crate::error::{BridgeError, Result};
use concurrent_queue::{ConcurrentQueue, PushError};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

/// Requests that may be in flight before `request` starts waiting for room.
const REQUEST_BACKLOG: usize = 16;

/// Extra height given to the text-input region so the soft keyboard does not
/// sit flush against the edited field.
pub const TEXT_INPUT_HEIGHT_PADDING: i32 = 15;

/// On-screen rectangle of the active text field, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextInputRegion {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl TextInputRegion {
    /// The region the hidden edit view should occupy.
    pub fn padded(self) -> Self {
        Self {
            h: self.h + TEXT_INPUT_HEIGHT_PADDING,
            ..self
        }
    }
}

/// Commands the native side posts to the UI thread.
#[derive(Clone, Debug, PartialEq)]
pub enum UiCommand {
    ChangeTitle(String),
    ShowTextInput(TextInputRegion),
    TextEditHide,
    SetKeepScreenOn(bool),
    /// Application-defined command (`command >= 0x8000` by convention).
    User { command: i32, param: i32 },
}

/// UI-side consumer of [`UiCommand`]s.
pub trait CommandHandler {
    /// Returns `false` if the command was not understood.
    fn handle(&mut self, command: &UiCommand) -> bool;
}

/// Native-side handle; cheap to clone.
#[derive(Clone, Debug)]
pub struct CommandSender(Arc<ConcurrentQueue<UiCommand>>);

/// UI-side handle. Dropping it closes the queue.
#[derive(Debug)]
pub struct CommandReceiver(Arc<ConcurrentQueue<UiCommand>>);

/// A queue holding at most one pending command.
pub fn command_queue() -> (CommandSender, CommandReceiver) {
    let slot = Arc::new(ConcurrentQueue::bounded(1));
    (CommandSender(slot.clone()), CommandReceiver(slot))
}

impl CommandSender {
    pub fn send(&self, command: UiCommand) -> Result<()> {
        self.0.push(command).map_err(|e| match e {
            PushError::Full(_) => BridgeError::QueueFull,
            PushError::Closed(_) => BridgeError::Disconnected,
        })
    }
}

impl CommandReceiver {
    /// Hand every pending command to `handler`. Returns how many were taken.
    pub fn dispatch_pending(&self, handler: &mut dyn CommandHandler) -> usize {
        let mut n = 0;
        while let Ok(cmd) = self.0.pop() {
            n += 1;
            if !handler.handle(&cmd) {
                warn!(?cmd, "unhandled ui command");
            }
        }
        n
    }
}

impl Drop for CommandReceiver {
    fn drop(&mut self) {
        if self.0.close() {
            debug!("command queue closed");
        }
    }
}

type Envelope<Req, Resp> = (Req, oneshot::Sender<Resp>);

/// Asking side of a request/response channel.
#[derive(Debug)]
pub struct Requester<Req, Resp> {
    tx: mpsc::Sender<Envelope<Req, Resp>>,
    timeout: Duration,
}

impl<Req, Resp> Clone for Requester<Req, Resp> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
            timeout: self.timeout,
        }
    }
}

/// Serving side of a request/response channel.
#[derive(Debug)]
pub struct Responder<Req, Resp> {
    rx: mpsc::Receiver<Envelope<Req, Resp>>,
}

/// Request/response pair whose requests wait at most `timeout`.
pub fn request_channel<Req, Resp>(timeout: Duration) -> (Requester<Req, Resp>, Responder<Req, Resp>) {
    let (tx, rx) = mpsc::channel(REQUEST_BACKLOG);
    (Requester { tx, timeout }, Responder { rx })
}

/// [`request_channel`] with the timeout taken from `config`.
pub fn configured_request_channel<Req, Resp>(
    config: &BridgeConfig,
) -> (Requester<Req, Resp>, Responder<Req, Resp>) {
    request_channel(config.request_timeout())
}

impl<Req, Resp> Requester<Req, Resp> {
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Send `req` and wait for the answer.
    ///
    /// Fails with [`BridgeError::Timeout`] when no answer arrives in time,
    /// [`BridgeError::Cancelled`] when the responder dropped the request, and
    /// [`BridgeError::Disconnected`] when the responder no longer exists.
    /// Must be awaited inside a tokio runtime with the time driver enabled.
    pub async fn request(&self, req: Req) -> Result<Resp> {
        let (reply_tx, reply_rx) = oneshot::channel();
        let exchange = async {
            self.tx
                .send((req, reply_tx))
                .await
                .map_err(|_| BridgeError::Disconnected)?;
            reply_rx.await.map_err(|_| BridgeError::Cancelled)
        };
        tokio::time::timeout(self.timeout, exchange)
            .await
            .map_err(|_| BridgeError::Timeout(self.timeout))?
    }
}

impl<Req, Resp> Responder<Req, Resp> {
    /// Answer every pending request without blocking. Returning `None` cancels
    /// that request.
    pub fn serve_pending(&mut self, mut f: impl FnMut(Req) -> Option<Resp>) -> usize {
        let mut n = 0;
        while let Ok((req, reply)) = self.rx.try_recv() {
            n += 1;
            if let Some(resp) = f(req) {
                if reply.send(resp).is_err() {
                    debug!("requester stopped waiting");
                }
            }
        }
        n
    }
}
