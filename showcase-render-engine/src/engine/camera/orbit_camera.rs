use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::input::mouse::MouseScrollUnit;
use bevy::math::EulerRot;
use bevy::{
    input::mouse::{MouseMotion, MouseWheel},
    prelude::*,
};

use constants::camera::{
    DAMPING_FACTOR, DOLLY_LINE_STEP, DOLLY_PIXEL_STEP, FAR_PLANE, FOV_DEGREES, INITIAL_POSITION,
    MAX_DISTANCE, MAX_POLAR_ANGLE, MIN_DISTANCE, NEAR_PLANE, ORBIT_TARGET, PITCH_SENSITIVITY,
    YAW_SENSITIVITY,
};

/// Damped orbit around a fixed target. Pan is deliberately absent; the
/// model stays centred and the camera only yaws, pitches and dollies.
#[derive(Resource)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        let offset = INITIAL_POSITION - ORBIT_TARGET;
        let distance = offset.length();
        Self {
            target: ORBIT_TARGET,
            yaw: offset.x.atan2(offset.z),
            pitch: -(offset.y / distance).asin(),
            distance,
        }
    }
}

impl OrbitCamera {
    /// Lowest allowed pitch keeps the polar angle (from straight up) within
    /// the configured limit so the camera never dives under the model.
    fn clamp_pitch(pitch: f32) -> f32 {
        let max_pitch = MAX_POLAR_ANGLE - std::f32::consts::FRAC_PI_2;
        pitch.clamp(-1.54, max_pitch)
    }

    /// Eye position for the current orbit parameters.
    pub fn eye(&self) -> Vec3 {
        let rotation = Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0);
        self.target + rotation * (Vec3::Z * self.distance)
    }
}

pub fn spawn_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: FOV_DEGREES.to_radians(),
            near: NEAR_PLANE,
            far: FAR_PLANE,
            ..default()
        }),
        Tonemapping::AcesFitted,
        Transform::from_translation(INITIAL_POSITION).looking_at(ORBIT_TARGET, Vec3::Y),
    ));
    commands.insert_resource(OrbitCamera::default());
}

pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut orbit: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    // Read mouse motion
    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    // Drag to orbit
    if mouse_button.pressed(MouseButton::Left) && mouse_delta != Vec2::ZERO {
        orbit.yaw -= mouse_delta.x * YAW_SENSITIVITY;
        let pitch = orbit.pitch - mouse_delta.y * PITCH_SENSITIVITY;
        orbit.pitch = OrbitCamera::clamp_pitch(pitch);
    }

    // Mouse wheel scroll accumulation (pixel and line scroll)
    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y * DOLLY_LINE_STEP,
            MouseScrollUnit::Pixel => ev.y * DOLLY_PIXEL_STEP,
        };
    }
    if scroll_accum.abs() > f32::EPSILON {
        orbit.distance = (orbit.distance - scroll_accum).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    // Damped approach toward the target pose.
    let eye = orbit.eye();
    let desired = Transform::from_translation(eye).looking_at(orbit.target, Vec3::Y);
    let smoothing = (DAMPING_FACTOR * 60.0 * time.delta_secs()).min(1.0);
    camera_transform.translation = camera_transform.translation.lerp(desired.translation, smoothing);
    camera_transform.rotation = camera_transform.rotation.slerp(desired.rotation, smoothing);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_orbit_matches_initial_position() {
        let orbit = OrbitCamera::default();
        assert!((orbit.eye() - INITIAL_POSITION).length() < 1e-3);
    }

    #[test]
    fn test_pitch_clamp_honours_polar_limit() {
        let clamped = OrbitCamera::clamp_pitch(2.0);
        assert!(clamped <= MAX_POLAR_ANGLE - std::f32::consts::FRAC_PI_2 + 1e-6);
        let clamped = OrbitCamera::clamp_pitch(-2.0);
        assert!(clamped >= -1.54 - 1e-6);
    }
}
