use bevy::prelude::*;
use bevy::render::primitives::Aabb;
use bevy::window::PrimaryWindow;

use crate::engine::assets::bounds::ModelBounds;
use crate::engine::assets::showcase_assets::ShowcaseAssets;
use crate::engine::interaction::events::{OpenRequested, RequestSource};
use crate::engine::interaction::sequencer::HingeSequencer;
use crate::engine::loading::model_loader::extend_with_aabb;
use crate::engine::scene::ShowcaseModelRoot;

/// Refresh the model's world AABB so the hit test follows the idle spin and
/// the hinge motion.
pub fn update_model_bounds(
    assets: Res<ShowcaseAssets>,
    mut bounds: ResMut<ModelBounds>,
    root_query: Query<Entity, With<ShowcaseModelRoot>>,
    children_query: Query<&Children>,
    mesh_bounds: Query<(&Aabb, &GlobalTransform)>,
) {
    if !assets.is_loaded {
        return;
    }
    let Ok(root) = root_query.single() else {
        return;
    };

    bounds.reset();
    for node in children_query.iter_descendants(root) {
        if let Ok((aabb, global)) = mesh_bounds.get(node) {
            extend_with_aabb(&mut bounds, aabb, global);
        }
    }
}

/// Cast the cursor into the scene on click; a hit on the model while it is
/// closed becomes an open request.
pub fn pointer_click_system(
    mouse_button: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    bounds: Res<ModelBounds>,
    sequencer: Res<HingeSequencer>,
    mut open_events: EventWriter<OpenRequested>,
) {
    if !mouse_button.just_pressed(MouseButton::Left) {
        return;
    }
    if !sequencer.model_ready() || sequencer.is_open() {
        return;
    }

    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor) else {
        return;
    };

    if bounds.ray_intersects(ray.origin, *ray.direction) {
        open_events.write(OpenRequested {
            source: RequestSource::Pointer,
        });
    }
}
