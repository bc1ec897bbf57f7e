//! Rotation state and the per-frame view transform
use nalgebra::{Matrix3, Vector3};

/// Accumulated rotation angles (in radians)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    /// Angle A, around the horizontal axis
    pub pitch: f32,
    /// Angle B, around the vertical axis
    pub yaw: f32,
}

impl RotationState {
    pub fn new(pitch: f32, yaw: f32) -> Self {
        Self { pitch, yaw }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Rotate by delta amounts (in radians).
    ///
    /// Angles grow without bound; only their cosine and sine are ever used.
    pub fn rotate(&mut self, d_pitch: f32, d_yaw: f32) {
        self.pitch += d_pitch;
        self.yaw += d_yaw;
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}

/// Transform builder for the glyph-to-camera mapping
pub struct Transform;

impl Transform {
    /// Yaw around Y, then pitch around X
    pub fn rotation_matrix(rotation: &RotationState) -> Matrix3<f32> {
        let (sin_a, cos_a) = rotation.pitch.sin_cos();
        let (sin_b, cos_b) = rotation.yaw.sin_cos();

        #[rustfmt::skip]
        let yaw = Matrix3::new(
            cos_b, 0.0, -sin_b,
            0.0,   1.0, 0.0,
            sin_b, 0.0, cos_b,
        );
        #[rustfmt::skip]
        let pitch = Matrix3::new(
            1.0, 0.0,   0.0,
            0.0, cos_a, -sin_a,
            0.0, sin_a, cos_a,
        );
        pitch * yaw
    }

    /// Horizontal shear proportional to height, giving an italic lean
    pub fn shear_matrix(tilt: f32) -> Matrix3<f32> {
        #[rustfmt::skip]
        let shear = Matrix3::new(
            1.0, tilt, 0.0,
            0.0, 1.0,  0.0,
            0.0, 0.0,  1.0,
        );
        shear
    }

    /// Matrix taking glyph-space points into camera orientation.
    ///
    /// Normals use the plain rotation since shear does not apply to them.
    pub fn point_matrix(rotation: &RotationState, tilt: f32) -> Matrix3<f32> {
        Self::rotation_matrix(rotation) * Self::shear_matrix(tilt)
    }

    pub fn apply(matrix: &Matrix3<f32>, v: &Vector3<f32>) -> Vector3<f32> {
        matrix * v
    }
}
