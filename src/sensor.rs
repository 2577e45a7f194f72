//! Accelerometer normalization.

/// `SensorManager.GRAVITY_EARTH`, m/s².
pub const STANDARD_GRAVITY: f32 = 9.80665;

/// Display rotation (`Display.getRotation()`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rotation {
    #[default]
    Rotation0,
    Rotation90,
    Rotation180,
    Rotation270,
}

impl Rotation {
    /// From the `Surface.ROTATION_*` value; unknown values read as unrotated.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            1 => Rotation::Rotation90,
            2 => Rotation::Rotation180,
            3 => Rotation::Rotation270,
            _ => Rotation::Rotation0,
        }
    }
}

/// Rotate a raw accelerometer sample into screen space and scale it to units
/// of gravity. At rest, face up, the result is `[0, 0, 0]`.
pub fn remap_accelerometer(values: [f32; 3], rotation: Rotation) -> [f32; 3] {
    let [v0, v1, v2] = values;
    let (x, y) = match rotation {
        Rotation::Rotation90 => (-v1, v0),
        Rotation::Rotation270 => (v1, -v0),
        Rotation::Rotation180 => (-v1, -v0),
        Rotation::Rotation0 => (v0, v1),
    };
    [
        -x / STANDARD_GRAVITY,
        y / STANDARD_GRAVITY,
        v2 / STANDARD_GRAVITY - 1.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_device_reads_zero() {
        let out = remap_accelerometer([0.0, 0.0, STANDARD_GRAVITY], Rotation::Rotation0);
        assert_eq!(out, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn rotation_swaps_axes() {
        let g = STANDARD_GRAVITY;
        assert_eq!(remap_accelerometer([g, 0.0, 0.0], Rotation::Rotation0), [-1.0, 0.0, -1.0]);
        assert_eq!(remap_accelerometer([g, 0.0, 0.0], Rotation::Rotation90), [0.0, 1.0, -1.0]);
        assert_eq!(remap_accelerometer([g, 0.0, 0.0], Rotation::Rotation270), [0.0, -1.0, -1.0]);
        assert_eq!(Rotation::from_raw(3), Rotation::Rotation270);
        assert_eq!(Rotation::from_raw(9), Rotation::Rotation0);
    }
}
