//! Joystick device registry.
//!
//! The registry is diffed against the host's device list on every poll. It is
//! the only place [`InputDevice`]s are created or dropped.
//!
//! New ids are examined in **reverse** enumeration order. Some receivers (the
//! Xbox 360 wireless dongle for one) enumerate their pads backwards, and walking
//! the list from the end makes the first controller the receiver knows about
//! the first one the native side sees.

use crate::config::HatPolicy;
use crate::device::InputDevice;
use crate::event::DeviceId;
use crate::snapshot::DeviceSnapshotProvider;
use crate::sink::NativeSink;
use tracing::debug;

/// Changes produced by one [`DeviceRegistry::poll`].
#[derive(Clone, Debug, Default)]
pub struct PollDiff {
    /// Newly tracked devices, in the order they were added.
    pub added: Vec<InputDevice>,
    pub removed: Vec<DeviceId>,
}

impl PollDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct DeviceRegistry {
    /// Tracked devices in add order.
    devices: Vec<InputDevice>,
    hat_policy: HatPolicy,
}

impl DeviceRegistry {
    pub fn new(hat_policy: HatPolicy) -> Self {
        Self {
            devices: Vec::new(),
            hat_policy,
        }
    }

    /// Diff the registry against `provider`, notifying `sink` of every change.
    pub fn poll(
        &mut self,
        provider: &dyn DeviceSnapshotProvider,
        sink: &mut dyn NativeSink,
    ) -> PollDiff {
        let ids = provider.device_ids();
        let mut diff = PollDiff::default();

        for &id in ids.iter().rev() {
            if self.get(id).is_some() {
                continue;
            }
            let Some(info) = provider.device_info(id) else {
                continue;
            };
            let Some(device) = InputDevice::from_info(id, &info, self.hat_policy) else {
                continue;
            };

            debug!(
                device_id = id,
                name = %device.name,
                axes = device.axes.len(),
                hats = device.hats.len(),
                "joystick added"
            );
            sink.add_device(id, &device.name, device.axes.len(), device.hats.len());
            self.devices.push(device.clone());
            diff.added.push(device);
        }

        let removed: Vec<DeviceId> = self
            .devices
            .iter()
            .map(|d| d.id)
            .filter(|id| !ids.contains(id))
            .collect();
        for id in removed {
            debug!(device_id = id, "joystick removed");
            sink.remove_device(id);
            self.devices.retain(|d| d.id != id);
            diff.removed.push(id);
        }

        diff
    }

    pub fn get(&self, device_id: DeviceId) -> Option<&InputDevice> {
        self.devices.iter().find(|d| d.id == device_id)
    }

    /// Tracked devices, in add order.
    pub fn devices(&self) -> impl Iterator<Item = &InputDevice> {
        self.devices.iter()
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{axis, BridgeKind, Source};
    use crate::metadata::{DeviceInfo, MotionRange};
    use crate::recording::RecordingSink;
    use crate::snapshot::DeviceSnapshot;

    fn pad(name: &str) -> DeviceInfo {
        DeviceInfo::new(name, Source::JOYSTICK | Source::GAMEPAD)
            .with_range(MotionRange::new(axis::X, Source::JOYSTICK, -1.0, 1.0))
            .with_range(MotionRange::new(axis::Y, Source::JOYSTICK, -1.0, 1.0))
            .with_range(MotionRange::new(axis::HAT_X, Source::JOYSTICK, -1.0, 1.0))
            .with_range(MotionRange::new(axis::HAT_Y, Source::JOYSTICK, -1.0, 1.0))
    }

    #[test]
    fn new_ids_are_processed_in_reverse() {
        let snap = DeviceSnapshot::new()
            .with_device(5, pad("five"))
            .with_device(3, pad("three"))
            .with_device(9, pad("nine"));
        let mut reg = DeviceRegistry::default();
        let mut sink = RecordingSink::new();

        let diff = reg.poll(&snap, &mut sink);
        let order: Vec<DeviceId> = diff.added.iter().map(|d| d.id).collect();
        assert_eq!(order, vec![9, 3, 5]);
        let tracked: Vec<DeviceId> = reg.devices().map(|d| d.id).collect();
        assert_eq!(tracked, vec![9, 3, 5]);
        assert_eq!(
            sink.events()[0],
            BridgeKind::DeviceAdded {
                device_id: 9,
                name: "nine".into(),
                axes: 2,
                hats: 1
            }
        );
    }

    #[test]
    fn unchanged_poll_is_silent() {
        let snap = DeviceSnapshot::new().with_device(1, pad("a"));
        let mut reg = DeviceRegistry::default();
        let mut sink = RecordingSink::new();

        assert_eq!(reg.poll(&snap, &mut sink).added.len(), 1);
        sink.take();
        assert!(reg.poll(&snap, &mut sink).is_empty());
        assert!(sink.events().is_empty());
    }

    #[test]
    fn absent_ids_are_removed_once() {
        let mut reg = DeviceRegistry::default();
        let mut sink = RecordingSink::new();
        reg.poll(
            &DeviceSnapshot::new()
                .with_device(1, pad("a"))
                .with_device(2, pad("b")),
            &mut sink,
        );
        sink.take();

        let only_two = DeviceSnapshot::new().with_device(2, pad("b"));
        let diff = reg.poll(&only_two, &mut sink);
        assert_eq!(diff.removed, vec![1]);
        assert_eq!(sink.take(), vec![BridgeKind::DeviceRemoved { device_id: 1 }]);

        assert!(reg.poll(&only_two, &mut sink).is_empty());
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn unknown_and_non_joystick_devices_are_ignored() {
        let snap = DeviceSnapshot::new()
            .with_unknown(1)
            .with_device(2, DeviceInfo::new("Touch", Source::TOUCHSCREEN));
        let mut reg = DeviceRegistry::default();
        let mut sink = RecordingSink::new();

        assert!(reg.poll(&snap, &mut sink).is_empty());
        assert!(reg.is_empty());
    }
}
