use bevy::prelude::*;

use crate::engine::assets::showcase_assets::ShowcaseAssets;
use crate::engine::interaction::sequencer::HingeSequencer;
use crate::engine::loading::progress::LoadingProgress;
use crate::rpc::web_rpc::WebRpcInterface;

/// Flip the loaded flag and arm the sequencer once every loading stage is
/// done. Until this runs, open and close triggers are silent no-ops.
pub fn finish_loading(
    loading_progress: Res<LoadingProgress>,
    mut assets: ResMut<ShowcaseAssets>,
    mut sequencer: ResMut<HingeSequencer>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    if assets.is_loaded || !loading_progress.is_complete() {
        return;
    }

    assets.is_loaded = true;
    sequencer.set_model_ready(true);
    rpc_interface.send_notification("model_loaded", serde_json::json!({ "success": true }));
    println!("✓ Showcase ready");
}

/// Mirror loading stages to the host page so it can drive its own progress
/// indicator.
pub fn report_loading_progress(
    loading_progress: Res<LoadingProgress>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    if !loading_progress.is_changed() || loading_progress.is_added() {
        return;
    }

    let stages = vec![
        ("manifest", loading_progress.manifest_loaded),
        ("model", loading_progress.scene_spawned),
        ("textures", loading_progress.textures_loaded),
        ("bindings", loading_progress.parts_bound),
        ("placement", loading_progress.model_placed),
    ];
    let stages: Vec<serde_json::Value> = stages
        .into_iter()
        .map(|(stage, done)| serde_json::json!({ "stage": stage, "done": done }))
        .collect();

    rpc_interface.send_notification(
        "loading_progress",
        serde_json::json!({
            "stages": stages,
            "failed": loading_progress.load_failed,
        }),
    );
}
