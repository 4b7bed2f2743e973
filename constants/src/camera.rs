use bevy::math::Vec3;

pub const FOV_DEGREES: f32 = 50.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 1000.0;

pub const INITIAL_POSITION: Vec3 = Vec3::new(0.0, 5.0, 15.0);
pub const ORBIT_TARGET: Vec3 = Vec3::ZERO;

/// Dolly distance clamps.
pub const MIN_DISTANCE: f32 = 8.0;
pub const MAX_DISTANCE: f32 = 25.0;

/// Pitch may not take the camera below the model; 2π/3 from straight up.
pub const MAX_POLAR_ANGLE: f32 = std::f32::consts::PI / 1.5;

pub const DAMPING_FACTOR: f32 = 0.05;
pub const YAW_SENSITIVITY: f32 = 0.005;
pub const PITCH_SENSITIVITY: f32 = 0.005;
pub const DOLLY_LINE_STEP: f32 = 1.0;
pub const DOLLY_PIXEL_STEP: f32 = 0.05;
