use bevy::gltf::GltfAssetLabel;
use bevy::prelude::*;

use crate::engine::assets::showcase_assets::ShowcaseAssets;
use crate::engine::assets::showcase_manifest::ShowcaseManifest;
use crate::engine::loading::progress::LoadingProgress;
use constants::path::RELATIVE_MANIFEST_PATH;

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<ShowcaseManifest>>,
}

// Start the loading process
pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    let manifest_path = format!("{}/manifest.json", RELATIVE_MANIFEST_PATH);
    manifest_loader.handle = Some(asset_server.load(&manifest_path));
}

/// Poll the manifest and kick off the model and texture loads once it lands.
pub fn load_manifest_system(
    mut loading_progress: ResMut<LoadingProgress>,
    manifest_loader: Res<ManifestLoader>,
    mut assets: ResMut<ShowcaseAssets>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<ShowcaseManifest>>,
) {
    if loading_progress.manifest_loaded {
        return;
    }

    let Some(ref handle) = manifest_loader.handle else {
        return;
    };

    if matches!(
        asset_server.get_load_state(handle),
        Some(bevy::asset::LoadState::Failed(_))
    ) {
        warn!("Showcase manifest failed to load");
        loading_progress.load_failed = true;
        return;
    }

    if let Some(manifest) = manifests.get(handle) {
        println!("✓ Showcase manifest loaded");
        assets.manifest = Some(handle.clone());
        loading_progress.manifest_loaded = true;

        // The manifest names everything else we need.
        assets.scene = asset_server
            .load(GltfAssetLabel::Scene(0).from_asset(manifest.scene_path().to_string()));
        assets.buttons_texture = asset_server.load(&manifest.textures.buttons);
        assets.camera_lens_texture = asset_server.load(&manifest.textures.camera_lens);

        commands.insert_resource(manifest.clone());
    }
}
