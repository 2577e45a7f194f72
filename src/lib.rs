//! StickBridge — Android input normalization and routing for native sinks.
//!
//! Tracks joystick-class devices, normalizes axes, hats, touches and
//! accelerometer samples, routes key events between pad and keyboard handlers,
//! and replays soft-keyboard edits as discrete key/text events. Everything ends
//! up as calls on a [`NativeSink`].
//!
//! Start with [`InputContext`]: the host owns one and forwards its callbacks.

pub mod command;
pub mod config;
pub mod context;
pub mod device;
pub mod error;
pub mod event;
pub mod eventbus;
pub mod joystick;
pub mod key;
pub mod logger;
pub mod metadata;
pub mod recording;
pub mod registry;
pub mod sensor;
pub mod sink;
pub mod snapshot;
pub mod text;
pub mod touch;

pub use command::*;
pub use config::*;
pub use context::*;
pub use device::*;
pub use error::*;
pub use event::*;
pub use eventbus::*;
pub use joystick::*;
pub use key::*;
pub use logger::*;
pub use metadata::*;
pub use recording::*;
pub use registry::*;
pub use sensor::*;
pub use sink::*;
pub use snapshot::*;
pub use text::*;
pub use touch::*;
