use crate::{DMat3, DQuat};
use serde::{Deserialize, Serialize};

/// Rotation as Euler angles in radians, applied in fixed XYZ order.
///
/// The composed rotation is `Rx * Ry * Rz`, so with column vectors the
/// z rotation acts on a point first.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Euler {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Euler {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Convert to a unit quaternion for matrix composition.
    pub fn to_quat(self) -> DQuat {
        DQuat::from_rotation_x(self.x)
            * DQuat::from_rotation_y(self.y)
            * DQuat::from_rotation_z(self.z)
    }

    /// Recover XYZ angles from a pure rotation matrix.
    ///
    /// At gimbal lock (`|y| == pi/2`) the x and z axes coincide; `z` is set to 0.
    pub fn from_rotation_matrix(m: DMat3) -> Self {
        // Row-major names: m13 is row 1, column 3.
        let m11 = m.x_axis.x;
        let m12 = m.y_axis.x;
        let m13 = m.z_axis.x;
        let m22 = m.y_axis.y;
        let m23 = m.z_axis.y;
        let m32 = m.y_axis.z;
        let m33 = m.z_axis.z;

        let y = m13.clamp(-1.0, 1.0).asin();
        if m13.abs() < 0.999_999_9 {
            Self::new((-m23).atan2(m33), y, (-m12).atan2(m11))
        } else {
            Self::new(m32.atan2(m22), y, 0.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_zero_is_identity() {
        let q = Euler::ZERO.to_quat();
        assert!(q.abs_diff_eq(DQuat::IDENTITY, 1e-15));
    }

    #[test]
    fn test_single_axis_matches_glam() {
        let q = Euler::new(0.0, FRAC_PI_2, 0.0).to_quat();
        assert!(q.abs_diff_eq(DQuat::from_rotation_y(FRAC_PI_2), 1e-12));
    }

    #[test]
    fn test_order_is_xyz() {
        let e = Euler::new(0.3, -0.7, 1.1);
        let expected = DMat3::from_rotation_x(0.3)
            * DMat3::from_rotation_y(-0.7)
            * DMat3::from_rotation_z(1.1);
        let actual = DMat3::from_quat(e.to_quat());
        assert!(actual.abs_diff_eq(expected, 1e-12));
    }

    #[test]
    fn test_matrix_round_trip() {
        let e = Euler::new(0.4, 0.2, -2.5);
        let back = Euler::from_rotation_matrix(DMat3::from_quat(e.to_quat()));
        assert_abs_diff_eq!(back.x, e.x, epsilon = 1e-12);
        assert_abs_diff_eq!(back.y, e.y, epsilon = 1e-12);
        assert_abs_diff_eq!(back.z, e.z, epsilon = 1e-12);
    }

    #[test]
    fn test_gimbal_lock_sets_z_to_zero() {
        let m = DMat3::from_quat(Euler::new(0.0, FRAC_PI_2, 0.0).to_quat());
        let e = Euler::from_rotation_matrix(m);
        assert_abs_diff_eq!(e.y, FRAC_PI_2, epsilon = 1e-6);
        assert_eq!(e.z, 0.0);
    }

    #[test]
    fn test_full_turn_is_periodic() {
        let a = Euler::new(0.0, 0.5, 0.0).to_quat();
        let b = Euler::new(0.0, 0.5 + 2.0 * PI, 0.0).to_quat();
        // q and -q are the same rotation
        let ma = DMat3::from_quat(a);
        let mb = DMat3::from_quat(b);
        assert!(ma.abs_diff_eq(mb, 1e-12));
    }

    #[test]
    fn test_serde() {
        let e = Euler::new(1.0, 2.0, 3.0);
        let json = serde_json::to_string(&e).unwrap();
        assert_eq!(json, r#"{"x":1.0,"y":2.0,"z":3.0}"#);
        let back: Euler = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }
}
