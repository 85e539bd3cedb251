//! Camera description and the orbit control that drives it.
//!
//! These types avoid platform-specific APIs; the web frontend feeds pointer
//! and wheel deltas in and reads matrices out.

use crate::constants::{
    camera_eye_vec3, CAMERA_FOVY_DEG, CAMERA_ZFAR, CAMERA_ZNEAR, ORBIT_MIN_RADIUS,
    ORBIT_POLAR_EPS, ORBIT_ZOOM_STEP,
};
use glam::{Mat4, Vec3};
use std::f32::consts::{PI, TAU};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Orbit around a target: drag rotates, wheel dollies, secondary drag pans.
///
/// Angles follow the usual Y-up spherical convention: `azimuth` is measured
/// around +Y from +Z, `polar` down from +Y.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub target: Vec3,
    radius: f32,
    azimuth: f32,
    polar: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::looking_at(camera_eye_vec3(), Vec3::ZERO)
    }
}

impl OrbitCamera {
    pub fn looking_at(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let radius = offset.length().max(ORBIT_MIN_RADIUS);
        let azimuth = offset.x.atan2(offset.z);
        let polar = (offset.y / radius).clamp(-1.0, 1.0).acos();
        Self {
            target,
            radius,
            azimuth,
            polar: polar.clamp(ORBIT_POLAR_EPS, PI - ORBIT_POLAR_EPS),
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    pub fn polar(&self) -> f32 {
        self.polar
    }

    pub fn eye(&self) -> Vec3 {
        let sin_p = self.polar.sin();
        self.target
            + Vec3::new(
                self.radius * sin_p * self.azimuth.sin(),
                self.radius * self.polar.cos(),
                self.radius * sin_p * self.azimuth.cos(),
            )
    }

    /// Drag-to-rotate. A drag across the full viewport height is one turn.
    pub fn rotate(&mut self, dx_px: f32, dy_px: f32, viewport_height_px: f32) {
        let h = viewport_height_px.max(1.0);
        self.azimuth = (self.azimuth - TAU * dx_px / h).rem_euclid(TAU);
        self.polar = (self.polar - TAU * dy_px / h).clamp(ORBIT_POLAR_EPS, PI - ORBIT_POLAR_EPS);
    }

    /// Scroll-to-zoom. Negative `delta_y` (wheel up) moves closer.
    pub fn zoom(&mut self, delta_y: f32) {
        if delta_y < 0.0 {
            self.radius *= ORBIT_ZOOM_STEP;
        } else if delta_y > 0.0 {
            self.radius /= ORBIT_ZOOM_STEP;
        }
        self.radius = self.radius.clamp(ORBIT_MIN_RADIUS, self.zfar);
    }

    /// Move the target within the view plane; the scene follows the pointer.
    pub fn pan(&mut self, dx_px: f32, dy_px: f32, viewport_height_px: f32) {
        let h = viewport_height_px.max(1.0);
        let eye = self.eye();
        let forward = (self.target - eye).normalize();
        let right = forward.cross(Vec3::Y).normalize();
        let up = right.cross(forward);
        // World units covered by one pixel at the target's depth.
        let per_px = 2.0 * self.radius * (self.fovy_radians * 0.5).tan() / h;
        self.target += -right * dx_px * per_px + up * dy_px * per_px;
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.eye(),
            target: self.target,
            up: Vec3::Y,
            aspect: aspect.max(1e-3),
            fovy_radians: self.fovy_radians,
            znear: self.znear,
            zfar: self.zfar,
        }
    }
}
