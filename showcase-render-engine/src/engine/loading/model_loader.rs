use bevy::prelude::*;
use bevy::render::primitives::Aabb;
use bevy::scene::{SceneInstance, SceneSpawner};

use crate::engine::assets::bounds::ModelBounds;
use crate::engine::assets::showcase_assets::ShowcaseAssets;
use crate::engine::assets::showcase_manifest::{PartRole, ShowcaseManifest};
use crate::engine::interaction::systems::HingeLid;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::ShowcaseModelRoot;
use constants::model::{INITIAL_YAW, REST_HEIGHT, TARGET_EXTENT};

/// Spawn the model scene once the glTF asset has landed.
pub fn spawn_model_scene(
    mut loading_progress: ResMut<LoadingProgress>,
    assets: Res<ShowcaseAssets>,
    asset_server: Res<AssetServer>,
    mut commands: Commands,
) {
    if !loading_progress.manifest_loaded || loading_progress.scene_spawned {
        return;
    }

    match asset_server.get_load_state(&assets.scene) {
        Some(bevy::asset::LoadState::Loaded) => {
            commands.spawn((
                SceneRoot(assets.scene.clone()),
                Transform::default(),
                Visibility::default(),
                ShowcaseModelRoot::default(),
            ));
            loading_progress.scene_spawned = true;
            println!("✓ Model scene spawned");
        }
        Some(bevy::asset::LoadState::Failed(_)) => {
            // Degrade to an empty stage; the loading screen still clears.
            warn!("Model scene failed to load");
            loading_progress.load_failed = true;
        }
        _ => {}
    }
}

// Check if the per-role textures are in
pub fn check_texture_loading(
    mut loading_progress: ResMut<LoadingProgress>,
    assets: Res<ShowcaseAssets>,
    asset_server: Res<AssetServer>,
) {
    if loading_progress.textures_loaded || !loading_progress.manifest_loaded {
        return;
    }

    let buttons_loaded = matches!(
        asset_server.get_load_state(&assets.buttons_texture),
        Some(bevy::asset::LoadState::Loaded)
    );
    let lens_loaded = matches!(
        asset_server.get_load_state(&assets.camera_lens_texture),
        Some(bevy::asset::LoadState::Loaded)
    );

    if buttons_loaded && lens_loaded {
        println!("✓ Role textures loaded");
        loading_progress.textures_loaded = true;
    }
}

/// One-time binding pass over the instantiated scene: resolve each authored
/// part binding by exact node name, tag the lid for the hinge driver and
/// assign role materials. Unresolved bindings warn and are skipped.
pub fn bind_model_parts(
    mut loading_progress: ResMut<LoadingProgress>,
    manifest: Option<Res<ShowcaseManifest>>,
    assets: Res<ShowcaseAssets>,
    scene_spawner: Res<SceneSpawner>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut commands: Commands,
    root_query: Query<(Entity, &SceneInstance), With<ShowcaseModelRoot>>,
    children_query: Query<&Children>,
    names: Query<&Name>,
    transforms: Query<&Transform>,
    mesh_materials: Query<(), With<MeshMaterial3d<StandardMaterial>>>,
) {
    if loading_progress.parts_bound || !loading_progress.scene_spawned {
        return;
    }
    let Some(manifest) = manifest else {
        return;
    };
    let Ok((root, instance)) = root_query.single() else {
        return;
    };
    if !scene_spawner.instance_is_ready(**instance) {
        return;
    }

    let body_material = materials.add(StandardMaterial {
        base_color: manifest.body_color(),
        perceptual_roughness: manifest.body_material.roughness,
        metallic: manifest.body_material.metalness,
        ..default()
    });
    let buttons_material = materials.add(StandardMaterial {
        base_color_texture: Some(assets.buttons_texture.clone()),
        ..default()
    });
    let lens_material = materials.add(StandardMaterial {
        base_color_texture: Some(assets.camera_lens_texture.clone()),
        ..default()
    });

    let mut resolved = 0usize;
    for node in children_query.iter_descendants(root) {
        let Ok(name) = names.get(node) else {
            continue;
        };
        let Some(role) = manifest.role_for(name.as_str()) else {
            continue;
        };
        resolved += 1;

        match role {
            PartRole::Lid => {
                let base_rotation = transforms
                    .get(node)
                    .map(|transform| transform.rotation)
                    .unwrap_or(Quat::IDENTITY);
                commands.entity(node).insert(HingeLid { base_rotation });
            }
            PartRole::Body => {
                assign_material(
                    node,
                    &body_material,
                    &children_query,
                    &mesh_materials,
                    &mut commands,
                );
            }
            PartRole::Buttons => {
                assign_material(
                    node,
                    &buttons_material,
                    &children_query,
                    &mesh_materials,
                    &mut commands,
                );
            }
            PartRole::CameraLens => {
                assign_material(
                    node,
                    &lens_material,
                    &children_query,
                    &mesh_materials,
                    &mut commands,
                );
            }
            // Screens keep the material they were authored with.
            PartRole::Screen => {}
        }
    }

    if resolved < manifest.parts.len() {
        for binding in &manifest.parts {
            let found = children_query
                .iter_descendants(root)
                .any(|node| names.get(node).is_ok_and(|name| name.as_str() == binding.node));
            if !found {
                warn!("Part binding '{}' not found in scene", binding.node);
            }
        }
    }
    if manifest.lid_node().is_none() {
        warn!("Manifest authors no lid binding; hinge animation disabled");
    }

    loading_progress.parts_bound = true;
    println!("✓ Part bindings applied ({resolved} nodes)");
}

/// Override the material on a bound node and every mesh below it.
fn assign_material(
    node: Entity,
    material: &Handle<StandardMaterial>,
    children_query: &Query<&Children>,
    mesh_materials: &Query<(), With<MeshMaterial3d<StandardMaterial>>>,
    commands: &mut Commands,
) {
    for target in std::iter::once(node).chain(children_query.iter_descendants(node)) {
        if mesh_materials.get(target).is_ok() {
            commands
                .entity(target)
                .insert(MeshMaterial3d(material.clone()));
        }
    }
}

/// Scale the bound model so its largest extent spans the target width,
/// centre it over the origin at rest height and apply the presentation yaw.
pub fn place_model(
    mut loading_progress: ResMut<LoadingProgress>,
    mut root_query: Query<(Entity, &mut Transform, &mut ShowcaseModelRoot)>,
    children_query: Query<&Children>,
    mesh_bounds: Query<(&Aabb, &GlobalTransform)>,
) {
    if loading_progress.model_placed || !loading_progress.parts_bound {
        return;
    }
    let Ok((root, mut transform, mut model_root)) = root_query.single_mut() else {
        return;
    };

    let mut bounds = ModelBounds::default();
    for node in children_query.iter_descendants(root) {
        if let Ok((aabb, global)) = mesh_bounds.get(node) {
            extend_with_aabb(&mut bounds, aabb, global);
        }
    }
    if !bounds.is_valid() {
        // Mesh AABBs land a frame or two after the scene instantiates.
        return;
    }

    let scale = TARGET_EXTENT / bounds.max_extent();
    let center = bounds.center();
    transform.scale = Vec3::splat(scale);
    transform.translation = Vec3::new(
        -center.x * scale,
        REST_HEIGHT - center.y * scale,
        -center.z * scale,
    );
    transform.rotation = Quat::from_rotation_y(INITIAL_YAW);
    model_root.rest_y = transform.translation.y;

    loading_progress.model_placed = true;
    println!("✓ Model placed (scale {scale:.3})");
}

/// Fold one mesh AABB, taken to world space, into the running bounds.
pub fn extend_with_aabb(bounds: &mut ModelBounds, aabb: &Aabb, global: &GlobalTransform) {
    let center = Vec3::from(aabb.center);
    let half = Vec3::from(aabb.half_extents);
    for corner in 0..8 {
        let sign = Vec3::new(
            if corner & 1 == 0 { -1.0 } else { 1.0 },
            if corner & 2 == 0 { -1.0 } else { 1.0 },
            if corner & 4 == 0 { -1.0 } else { 1.0 },
        );
        bounds.extend(global.transform_point(center + half * sign));
    }
}
