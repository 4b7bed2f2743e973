use crate::engine::assets::showcase_manifest::ShowcaseManifest;
use bevy::prelude::*;

/// Handle bundle for everything the showcase loads: the manifest, the model
/// scene and the per-role textures. `is_loaded` flips once the scene is
/// spawned, bound and placed; until then the sequencer treats every trigger
/// as a no-op.
#[derive(Resource, Default)]
pub struct ShowcaseAssets {
    pub manifest: Option<Handle<ShowcaseManifest>>,
    pub scene: Handle<Scene>,
    pub buttons_texture: Handle<Image>,
    pub camera_lens_texture: Handle<Image>,
    pub is_loaded: bool,
}
