use bevy::pbr::DirectionalLightShadowMap;
use bevy::prelude::*;

use constants::lighting::{
    ACCENT_CYAN, ACCENT_CYAN_POSITION, ACCENT_INTENSITY, ACCENT_RED, ACCENT_RED_POSITION,
    AMBIENT_BRIGHTNESS, FILL_LIGHT_ILLUMINANCE, FILL_LIGHT_POSITION, KEY_LIGHT_ILLUMINANCE,
    KEY_LIGHT_POSITION, SHADOW_MAP_SIZE,
};

/// Studio rig: ambient wash, shadowed key light, front fill and two
/// coloured accent points.
pub fn spawn_lighting(commands: &mut Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_BRIGHTNESS,
        ..default()
    });
    commands.insert_resource(DirectionalLightShadowMap {
        size: SHADOW_MAP_SIZE,
    });

    commands.spawn((
        DirectionalLight {
            illuminance: KEY_LIGHT_ILLUMINANCE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(KEY_LIGHT_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: FILL_LIGHT_ILLUMINANCE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(FILL_LIGHT_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        PointLight {
            color: ACCENT_CYAN,
            intensity: ACCENT_INTENSITY,
            ..default()
        },
        Transform::from_translation(ACCENT_CYAN_POSITION),
    ));
    commands.spawn((
        PointLight {
            color: ACCENT_RED,
            intensity: ACCENT_INTENSITY,
            ..default()
        },
        Transform::from_translation(ACCENT_RED_POSITION),
    ));
}
