//! Host-reported device metadata.
//!
//! [`DeviceInfo`] is what the host returns for `InputDevice.getDevice(id)`: a
//! display name, the source bitmask and the motion ranges. It is cloneable and
//! serializable so hosts can log or persist what a device reported.
//!
//! # Conventions
//! - `sources` is the device-wide bitmask; each [`MotionRange`] carries its own
//!   source because one device can expose joystick and touch ranges side by side.
//!
//! # Example
//! ```
//! use stickbridge::{axis, DeviceInfo, MotionRange, Source};
//!
//! let info = DeviceInfo::new("Pad", Source::JOYSTICK | Source::GAMEPAD)
//!     .with_range(MotionRange::new(axis::X, Source::JOYSTICK, -1.0, 1.0));
//! assert!(info.to_json().unwrap().contains("\"Pad\""));
//! ```

use crate::error::Result;
use crate::event::Source;
use serde::{Deserialize, Serialize};

/// One motion range (`InputDevice.MotionRange`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MotionRange {
    /// Raw axis id (`MotionEvent.AXIS_*`).
    pub axis: i32,
    /// Source this range belongs to.
    pub source: Source,
    pub min: f32,
    pub max: f32,
}

impl MotionRange {
    pub fn new(axis: i32, source: Source, min: f32, max: f32) -> Self {
        Self {
            axis,
            source,
            min,
            max,
        }
    }

    /// `max - min`.
    #[inline]
    pub fn range(&self) -> f32 {
        self.max - self.min
    }
}

/// Snapshot of what the host knows about one device.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// Human-readable name (`InputDevice.getName()`).
    pub name: String,

    /// Source capability bitmask.
    pub sources: Source,

    /// Motion ranges in platform order (unsorted).
    pub motion_ranges: Vec<MotionRange>,
}

impl DeviceInfo {
    pub fn new(name: impl Into<String>, sources: Source) -> Self {
        Self {
            name: name.into(),
            sources,
            motion_ranges: Vec::new(),
        }
    }

    pub fn with_range(mut self, range: MotionRange) -> Self {
        self.motion_ranges.push(range);
        self
    }

    /// Pretty JSON dump, for diagnostics.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
