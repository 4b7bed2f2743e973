use bevy::color::{Color, Srgba};
use bevy::math::Vec3;

/// Light grey page backdrop behind the model.
pub const CLEAR_COLOR: Color = Color::Srgba(Srgba {
    red: 0.961,
    green: 0.961,
    blue: 0.961,
    alpha: 1.0,
});

pub const AMBIENT_BRIGHTNESS: f32 = 400.0;

pub const KEY_LIGHT_POSITION: Vec3 = Vec3::new(5.0, 10.0, 7.0);
pub const KEY_LIGHT_ILLUMINANCE: f32 = 12_000.0;
pub const SHADOW_MAP_SIZE: usize = 2048;

/// Front fill so the casing reads against the dark body material.
pub const FILL_LIGHT_POSITION: Vec3 = Vec3::new(-3.0, 5.0, 8.0);
pub const FILL_LIGHT_ILLUMINANCE: f32 = 6_000.0;

/// Brand-coloured accents, one cool and one warm.
pub const ACCENT_CYAN: Color = Color::Srgba(Srgba {
    red: 0.0,
    green: 0.604,
    blue: 0.780,
    alpha: 1.0,
});
pub const ACCENT_RED: Color = Color::Srgba(Srgba {
    red: 0.902,
    green: 0.0,
    blue: 0.071,
    alpha: 1.0,
});
pub const ACCENT_CYAN_POSITION: Vec3 = Vec3::new(-5.0, 3.0, 5.0);
pub const ACCENT_RED_POSITION: Vec3 = Vec3::new(5.0, 3.0, -5.0);
pub const ACCENT_INTENSITY: f32 = 60_000.0;
