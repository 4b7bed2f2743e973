pub mod idle_motion;
pub mod lighting;

use bevy::prelude::*;

/// Root of the spawned model scene. `rest_y` is the placed resting height
/// the idle float oscillates around.
#[derive(Component, Default)]
pub struct ShowcaseModelRoot {
    pub rest_y: f32,
}
