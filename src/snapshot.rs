//! Device-list snapshots fed to the registry.
//!
//! The host answers two questions per poll: which device ids exist right now
//! (`InputDevice.getDeviceIds()`, in platform order) and what a given id reports
//! (`InputDevice.getDevice(id)`). [`DeviceSnapshotProvider`] is that seam;
//! [`DeviceSnapshot`] is an owned implementation hosts can fill in one go.
//!
//! # Semantics
//! - `device_ids` order is the platform enumeration order. The registry walks it
//!   in reverse.
//! - `device_info` returning `None` means "no capabilities"; it is never an error.
//!
//! ```
//! use stickbridge::{DeviceInfo, DeviceSnapshot, DeviceSnapshotProvider, Source};
//!
//! let snap = DeviceSnapshot::new()
//!     .with_device(3, DeviceInfo::new("Touch", Source::TOUCHSCREEN))
//!     .with_unknown(7);
//! assert_eq!(snap.device_ids(), vec![3, 7]);
//! assert!(snap.device_info(7).is_none());
//! ```

use crate::event::DeviceId;
use crate::metadata::DeviceInfo;

/// Source of the current device list.
pub trait DeviceSnapshotProvider {
    /// Current device ids, in platform enumeration order.
    fn device_ids(&self) -> Vec<DeviceId>;

    /// Capabilities of one device, if the platform reports any.
    fn device_info(&self, device_id: DeviceId) -> Option<DeviceInfo>;
}

/// Owned device list captured at a point in time.
#[derive(Clone, Debug, Default)]
pub struct DeviceSnapshot(Vec<(DeviceId, Option<DeviceInfo>)>);

impl DeviceSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_device(mut self, device_id: DeviceId, info: DeviceInfo) -> Self {
        self.0.push((device_id, Some(info)));
        self
    }

    /// A device id the platform lists but reports no capabilities for.
    pub fn with_unknown(mut self, device_id: DeviceId) -> Self {
        self.0.push((device_id, None));
        self
    }

    /// Iterate `(device_id, info)` pairs in enumeration order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &(DeviceId, Option<DeviceInfo>)> {
        self.0.iter()
    }
}

impl DeviceSnapshotProvider for DeviceSnapshot {
    fn device_ids(&self) -> Vec<DeviceId> {
        self.0.iter().map(|(id, _)| *id).collect()
    }

    fn device_info(&self, device_id: DeviceId) -> Option<DeviceInfo> {
        self.0
            .iter()
            .find(|(id, _)| *id == device_id)
            .and_then(|(_, info)| info.clone())
    }
}
