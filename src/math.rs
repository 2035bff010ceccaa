//! Rotation kernel shared by the 2D and 3D turtles.
//!
//! Angles cross this boundary in degrees and are converted to radians here.
//! Both constructors are counter-clockwise-positive; the turtle applies
//! [`RotationSense`] on top so the sign convention lives in one place.

use crate::error::{LsysError, Result};
use glam::{DMat2, DMat3, DVec3};
use serde::{Deserialize, Serialize};

/// Largest deviation from unit length accepted by [`try_rotation_3d`].
pub const AXIS_TOLERANCE: f64 = 1e-9;

/// Which direction a positive turn angle rotates the heading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationSense {
    /// Positive angles rotate counter-clockwise (right-hand rule about the axis).
    #[default]
    CounterClockwise,
    /// Positive angles rotate clockwise.
    Clockwise,
}

impl RotationSense {
    /// Sign applied to an angle before it reaches the kernel.
    pub fn signum(self) -> f64 {
        match self {
            Self::CounterClockwise => 1.0,
            Self::Clockwise => -1.0,
        }
    }

    /// Maps a caller-facing angle (degrees) onto the kernel's convention.
    pub fn apply(self, degrees: f64) -> f64 {
        self.signum() * degrees
    }
}

/// 2x2 rotation by `degrees`, counter-clockwise-positive.
pub fn rotation_2d(degrees: f64) -> DMat2 {
    let (s, c) = degrees.to_radians().sin_cos();
    DMat2::from_cols_array(&[c, s, -s, c])
}

/// 3x3 axis–angle rotation by `degrees` about `axis` (Rodrigues).
///
/// `axis` is used as given; callers must supply a unit vector. Use
/// [`try_rotation_3d`] when the axis comes from outside the turtle.
pub fn rotation_3d(degrees: f64, axis: DVec3) -> DMat3 {
    let (s, c) = degrees.to_radians().sin_cos();
    let t = 1.0 - c;
    let DVec3 { x, y, z } = axis;

    // cos·I + sin·[u]x + (1 - cos)·(u ⊗ u), written column by column.
    DMat3::from_cols(
        DVec3::new(c + x * x * t, y * x * t + z * s, z * x * t - y * s),
        DVec3::new(x * y * t - z * s, c + y * y * t, z * y * t + x * s),
        DVec3::new(x * z * t + y * s, y * z * t - x * s, c + z * z * t),
    )
}

/// Like [`rotation_3d`] but rejects an axis that is not unit length.
pub fn try_rotation_3d(degrees: f64, axis: DVec3) -> Result<DMat3> {
    let norm = axis.length();
    if !norm.is_finite() || (norm - 1.0).abs() > AXIS_TOLERANCE {
        return Err(LsysError::UnnormalizedAxis { norm });
    }
    Ok(rotation_3d(degrees, axis))
}
