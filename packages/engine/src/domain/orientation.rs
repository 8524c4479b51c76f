//! OrientationGravityMapper - device sensor readings to a gravity vector
//!
//! Orientation events carry Euler angles in degrees. A phone held in portrait,
//! screen facing the user, reports `beta` (front/back tilt) and `gamma`
//! (left/right tilt); both are divided by an empirical calibration constant to
//! land in m/s². `alpha` (compass heading) has no effect on gravity.
//!
//! Motion events carry `accelerationIncludingGravity`, which is the reaction
//! to gravity, so it is negated. Only the screen-plane axes are kept: the
//! enclosure is shallow in z and bodies live on the z = 0 plane.

use serde::{Deserialize, Serialize};

use crate::domain::config::GravityConfig;
use crate::rigid_body::Vec3;

/// Sensor degrees per simulator m/s². Negative: tilting right pulls bodies right.
pub const DEG_TO_PHYSIC: f32 = -7.174311;

/// One `deviceorientation` reading, angles in degrees
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OrientationSample {
    pub alpha: f32,
    pub beta: f32,
    pub gamma: f32,
}

impl OrientationSample {
    pub fn new(alpha: f32, beta: f32, gamma: f32) -> Self {
        Self { alpha, beta, gamma }
    }
}

/// One `devicemotion` reading (`accelerationIncludingGravity`, m/s²)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MotionSample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl MotionSample {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientationGravityMapper {
    deg_to_physic: f32,
    motion_scale: f32,
}

impl OrientationGravityMapper {
    pub fn new(deg_to_physic: f32, motion_scale: f32) -> Self {
        Self { deg_to_physic, motion_scale }
    }

    pub fn from_config(config: &GravityConfig) -> Self {
        Self::new(config.deg_to_physic, config.motion_scale)
    }

    pub fn deg_to_physic(&self) -> f32 {
        self.deg_to_physic
    }

    /// Gravity for an orientation sample. Pure; `z` is always 0.
    pub fn map(&self, sample: &OrientationSample) -> Vec3 {
        Vec3::new(
            finite_or_zero(sample.gamma) / self.deg_to_physic,
            finite_or_zero(sample.beta) / self.deg_to_physic,
            0.0,
        )
    }

    /// Gravity for a motion sample: the negated, scaled acceleration projected
    /// onto the screen plane. Pure; `z` is always 0.
    pub fn map_motion(&self, sample: &MotionSample) -> Vec3 {
        Vec3::new(
            -finite_or_zero(sample.x) * self.motion_scale,
            -finite_or_zero(sample.y) * self.motion_scale,
            0.0,
        )
    }
}

impl Default for OrientationGravityMapper {
    fn default() -> Self {
        Self::new(DEG_TO_PHYSIC, 1.0)
    }
}

/// Browsers report `null` axes on devices without the sensor.
#[inline]
fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() { v } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_is_deterministic() {
        let mapper = OrientationGravityMapper::default();
        let sample = OrientationSample::new(120.0, 33.3, -12.7);
        assert_eq!(mapper.map(&sample), mapper.map(&sample));
    }

    #[test]
    fn z_is_always_zero() {
        let mapper = OrientationGravityMapper::default();
        for &(a, b, g) in &[(0.0, 0.0, 0.0), (359.0, -180.0, 90.0), (10.0, 180.0, -90.0)] {
            assert_eq!(mapper.map(&OrientationSample::new(a, b, g)).z, 0.0);
        }
    }

    #[test]
    fn level_device_has_no_gravity() {
        let mapper = OrientationGravityMapper::default();
        let g = mapper.map(&OrientationSample::new(75.0, 0.0, 0.0));
        assert_eq!(g.x, 0.0);
        assert_eq!(g.y, 0.0);
        assert_eq!(g.length(), 0.0);
    }

    #[test]
    fn calibration_constant_maps_to_unit() {
        let mapper = OrientationGravityMapper::default();
        let g = mapper.map(&OrientationSample::new(0.0, 0.0, -7.174311));
        assert_eq!(g.x, 1.0);
    }

    #[test]
    fn alpha_is_ignored() {
        let mapper = OrientationGravityMapper::default();
        let a = mapper.map(&OrientationSample::new(0.0, 20.0, 10.0));
        let b = mapper.map(&OrientationSample::new(270.0, 20.0, 10.0));
        assert_eq!(a, b);
    }

    #[test]
    fn upright_portrait_pulls_down_screen() {
        // beta = 90 means the phone is held upright; bodies fall toward -y.
        let mapper = OrientationGravityMapper::default();
        let g = mapper.map(&OrientationSample::new(0.0, 90.0, 0.0));
        assert!(g.y < -12.0 && g.y > -13.0);
    }

    #[test]
    fn missing_axes_count_as_zero() {
        let mapper = OrientationGravityMapper::default();
        let g = mapper.map(&OrientationSample::new(f32::NAN, f32::NAN, 14.0));
        assert_eq!(g.y, 0.0);
        assert!(g.x.is_finite());
    }

    #[test]
    fn motion_is_negated_and_scaled() {
        let mapper = OrientationGravityMapper::new(DEG_TO_PHYSIC, 2.0);
        let g = mapper.map_motion(&MotionSample::new(0.5, 9.81, -1.0));
        assert_eq!(g, Vec3::new(-1.0, -19.62, 0.0));
    }

    #[test]
    fn face_down_device_has_no_depth_gravity() {
        let mapper = OrientationGravityMapper::default();
        let g = mapper.map_motion(&MotionSample::new(0.0, 0.0, -9.81));
        assert_eq!(g.z, 0.0);
        assert_eq!(g.length(), 0.0);
    }
}
