use crate::{DMat3, DMat4, Euler, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Local placement of an object: translation, Euler rotation, and
/// componentwise scale.
///
/// The world matrix composes as `T * R * S`. A zero scale component gives a
/// singular matrix; that is accepted input and never an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Point3,
    pub rotation: Euler,
    pub scale: Vector3,
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            position: Point3::ZERO,
            rotation: Euler::ZERO,
            scale: Vector3::ONE,
        }
    }

    pub fn from_position(position: Point3) -> Self {
        Self {
            position,
            ..Self::identity()
        }
    }

    pub fn with_position(mut self, position: Point3) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: Euler) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vector3) -> Self {
        self.scale = scale;
        self
    }

    /// Local-to-parent matrix.
    pub fn matrix(&self) -> DMat4 {
        DMat4::from_scale_rotation_translation(self.scale, self.rotation.to_quat(), self.position)
    }

    pub fn transform_point(&self, p: Point3) -> Point3 {
        self.matrix().transform_point3(p)
    }

    /// Rotate so that the local -Z axis points from `position` toward `target`.
    ///
    /// Cameras look down their local -Z, so this aims a camera. Does nothing
    /// when `target` coincides with `position`.
    pub fn look_at(&mut self, target: Point3, up: Vector3) {
        let back = self.position - target;
        if back.length_squared() < 1e-24 {
            return;
        }
        let back = back.normalize();

        let mut right = up.cross(back);
        if right.length_squared() < 1e-24 {
            // up is parallel to the view direction
            let fallback = if back.z.abs() < 0.9 { Vector3::Z } else { Vector3::X };
            right = fallback.cross(back);
        }
        let right = right.normalize();
        let true_up = back.cross(right);

        self.rotation = Euler::from_rotation_matrix(DMat3::from_cols(right, true_up, back));
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
