//! Tracked joystick devices and their axis layout.
//!
//! An [`InputDevice`] is built once, from the [`DeviceInfo`] the host reports
//! when the registry first sees an id. Its layout never changes afterwards:
//! axis `i` reported to the native sink always refers to the same raw axis.
//!
//! # Layout rules
//! - Only motion ranges whose source includes the joystick class are kept.
//! - Ranges are sorted ascending by raw axis id (stable).
//! - `AXIS_HAT_X` / `AXIS_HAT_Y` ranges become [`HatPair`]s, X then Y; every
//!   other range becomes an [`AxisDescriptor`], indexed in sorted order.

use crate::config::HatPolicy;
use crate::event::{axis, DeviceId, Source};
use crate::joystick::normalize_axis;
use crate::metadata::{DeviceInfo, MotionRange};
use tracing::warn;

/// One general axis of a joystick.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisDescriptor {
    /// Logical index reported to the sink.
    pub index: usize,
    /// Raw platform axis id.
    pub axis: i32,
    pub min: f32,
    /// `max - min`; positive for any range the platform reports.
    pub range: f32,
}

impl AxisDescriptor {
    fn from_range(index: usize, r: &MotionRange) -> Self {
        Self {
            index,
            axis: r.axis,
            min: r.min,
            range: r.range(),
        }
    }

    /// Map a raw value into `[-1, 1]`.
    #[inline]
    pub fn normalize(&self, raw: f32) -> f32 {
        normalize_axis(raw, self.min, self.range)
    }
}

/// Two hat axes consumed together.
#[derive(Clone, Debug, PartialEq)]
pub struct HatPair {
    pub index: usize,
    /// Raw axis id of the X half.
    pub x_axis: i32,
    /// Raw axis id of the Y half.
    pub y_axis: i32,
}

/// A joystick-class device known to the registry.
#[derive(Clone, Debug)]
pub struct InputDevice {
    pub id: DeviceId,
    pub name: String,
    pub sources: Source,
    pub axes: Vec<AxisDescriptor>,
    pub hats: Vec<HatPair>,
}

impl InputDevice {
    /// Build the layout for a device.
    ///
    /// Returns `None` when the device is not joystick-class, or when it reports an
    /// unpaired hat axis and `policy` is [`HatPolicy::Reject`].
    pub fn from_info(id: DeviceId, info: &DeviceInfo, policy: HatPolicy) -> Option<Self> {
        if !info.sources.is_joystick_class() {
            return None;
        }

        let mut ranges: Vec<&MotionRange> = info
            .motion_ranges
            .iter()
            .filter(|r| r.source.is_joystick_class())
            .collect();
        ranges.sort_by_key(|r| r.axis);

        let (hat_ranges, axis_ranges): (Vec<&MotionRange>, Vec<&MotionRange>) =
            ranges.into_iter().partition(|r| axis::is_hat(r.axis));

        let axes = axis_ranges
            .iter()
            .enumerate()
            .map(|(i, r)| AxisDescriptor::from_range(i, r))
            .collect();

        if hat_ranges.len() % 2 != 0 {
            match policy {
                HatPolicy::IgnoreTrailing => {
                    warn!(device_id = id, name = %info.name, "unpaired hat axis dropped");
                }
                HatPolicy::Reject => {
                    warn!(device_id = id, name = %info.name, "unpaired hat axis, device rejected");
                    return None;
                }
            }
        }

        let hats = hat_ranges
            .chunks_exact(2)
            .enumerate()
            .map(|(i, pair)| HatPair {
                index: i,
                x_axis: pair[0].axis,
                y_axis: pair[1].axis,
            })
            .collect();

        Some(Self {
            id,
            name: info.name.clone(),
            sources: info.sources,
            axes,
            hats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn js(id: i32) -> MotionRange {
        MotionRange::new(id, Source::JOYSTICK, -1.0, 1.0)
    }

    #[test]
    fn axes_sorted_and_hats_split() {
        let info = DeviceInfo::new("Pad", Source::JOYSTICK | Source::GAMEPAD)
            .with_range(js(axis::RZ))
            .with_range(js(axis::HAT_Y))
            .with_range(js(axis::X))
            .with_range(js(axis::HAT_X))
            .with_range(js(axis::Z))
            .with_range(MotionRange::new(axis::Y, Source::TOUCHSCREEN, 0.0, 800.0));

        let dev = InputDevice::from_info(4, &info, HatPolicy::IgnoreTrailing).unwrap();
        let raw: Vec<i32> = dev.axes.iter().map(|a| a.axis).collect();
        assert_eq!(raw, vec![axis::X, axis::Z, axis::RZ]);
        assert_eq!(dev.axes[2].index, 2);
        assert_eq!(
            dev.hats,
            vec![HatPair {
                index: 0,
                x_axis: axis::HAT_X,
                y_axis: axis::HAT_Y
            }]
        );
    }

    #[test]
    fn non_joystick_is_skipped() {
        let info = DeviceInfo::new("Keys", Source::KEYBOARD).with_range(js(axis::X));
        assert!(InputDevice::from_info(1, &info, HatPolicy::IgnoreTrailing).is_none());
    }

    #[test]
    fn unpaired_hat_follows_policy() {
        let info = DeviceInfo::new("Odd", Source::JOYSTICK)
            .with_range(js(axis::X))
            .with_range(js(axis::HAT_X));

        let dev = InputDevice::from_info(2, &info, HatPolicy::IgnoreTrailing).unwrap();
        assert_eq!(dev.axes.len(), 1);
        assert!(dev.hats.is_empty());

        assert!(InputDevice::from_info(2, &info, HatPolicy::Reject).is_none());
    }
}
