/// Uniform scale target: the largest bounding-box extent ends up this wide.
pub const TARGET_EXTENT: f32 = 6.0;

/// Resting height of the model centre above the ground plane.
pub const REST_HEIGHT: f32 = 2.0;

/// Presentation yaw applied when the model is first placed.
pub const INITIAL_YAW: f32 = std::f32::consts::FRAC_PI_6;

/// Idle float: y = REST_HEIGHT + FLOAT_AMPLITUDE * sin(FLOAT_FREQUENCY * t).
pub const FLOAT_AMPLITUDE: f32 = 0.2;
pub const FLOAT_FREQUENCY: f32 = 1.0;

/// Idle turntable spin, radians per second.
pub const IDLE_SPIN_SPEED: f32 = 0.12;
