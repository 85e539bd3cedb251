use glam::Vec3;

// Shared tuning constants used by the lifecycle controller and the web frontend.

// Generation
pub const GENERATION_DELAY_MS: u64 = 3000; // fake "generation" time before the model is shown

// Scratch store keys
pub const POSITIONS_KEY: &str = "positions";
pub const ROTATIONS_KEY: &str = "rotations";

// Scene layout
pub const TETRA_RADIUS: f32 = 1.0; // circumscribed radius of each tetrahedron
pub const SPIN_PER_FRAME: f32 = 0.01; // group Y rotation added per rendered frame (radians)
pub const MODEL_COLOR: [f32; 3] = [0.0, 0.5, 0.0]; // one color for the whole batch

// Camera
pub const CAMERA_EYE: [f32; 3] = [0.0, 0.0, 5.0];
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Orbit control
pub const ORBIT_ZOOM_STEP: f32 = 0.95; // radius multiplier per wheel step (zoom in)
pub const ORBIT_MIN_RADIUS: f32 = 1e-3;
pub const ORBIT_POLAR_EPS: f32 = 1e-6; // keeps the eye off the poles

// Lighting
pub const AMBIENT_INTENSITY: f32 = 0.35;
pub const POINT_LIGHT_POSITION: [f32; 3] = [10.0, 10.0, 10.0];
pub const POINT_LIGHT_INTENSITY: f32 = 0.9;

// Background
pub const CLEAR_COLOR: [f64; 3] = [1.0, 0.94, 0.96]; // pale pink page tint behind the model

// Notification
pub const NOTIFICATION_MS: u64 = 3000;

#[inline]
pub fn camera_eye_vec3() -> Vec3 {
    Vec3::new(CAMERA_EYE[0], CAMERA_EYE[1], CAMERA_EYE[2])
}

#[inline]
pub fn point_light_vec3() -> Vec3 {
    Vec3::new(
        POINT_LIGHT_POSITION[0],
        POINT_LIGHT_POSITION[1],
        POINT_LIGHT_POSITION[2],
    )
}
