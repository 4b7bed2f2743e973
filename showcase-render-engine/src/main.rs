use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

mod engine;
mod page;
mod rpc;

use crate::engine::assets::bounds::ModelBounds;
use crate::engine::assets::showcase_assets::ShowcaseAssets;
use crate::engine::assets::showcase_manifest::ShowcaseManifest;
use crate::engine::camera::orbit_camera::{camera_controller, spawn_camera};
use crate::engine::core::app_state::{AppState, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::interaction::events::{
    CloseRequested, CloseStarted, DeviceClosed, DeviceOpened, OpenRequested,
};
use crate::engine::interaction::picking::{pointer_click_system, update_model_bounds};
use crate::engine::interaction::sequencer::HingeSequencer;
use crate::engine::interaction::systems::{PreOpenPose, advance_hinge, handle_device_requests};
use crate::engine::loading::completion::{finish_loading, report_loading_progress};
use crate::engine::loading::manifest_loader::{ManifestLoader, load_manifest_system, start_loading};
use crate::engine::loading::model_loader::{
    bind_model_parts, check_texture_loading, place_model, spawn_model_scene,
};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::idle_motion::idle_motion_system;
use crate::engine::scene::lighting::spawn_lighting;
use crate::engine::ui::hero::{spawn_hero, toggle_hero_hint};
use crate::engine::ui::hud::{fps_text_update_system, spawn_hud};
use crate::engine::ui::loading_screen::{clear_loading_screen, spawn_loading_screen};
use crate::engine::ui::nav_links::{
    hide_nav_on_close, nav_link_press_system, nav_pulse_system, nav_pulse_trigger,
    nav_reveal_system, press_feedback_system, spawn_nav_links,
};
use crate::page::navigation::{
    NavigationState, SectionNavigationRequested, escape_close_system, handle_section_navigation,
    tick_scroll_handoff,
};
use crate::page::scroll_effects::{
    ActiveSection, ScrollState, SectionVisibilityReported, apply_hero_parallax,
    track_active_section, update_scroll_indicator,
};
use crate::rpc::web_rpc::WebRpcPlugin;
use constants::lighting::CLEAR_COLOR;

fn main() {
    let mut app = create_app();

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            app.run();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.run();
    }
}

/// Create the application: plugins, state, resources, events and schedule.
fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(JsonAssetPlugin::<ShowcaseManifest>::new(&["json"]))
        .add_plugins(WebRpcPlugin);

    app.insert_resource(ClearColor(CLEAR_COLOR))
        .init_state::<AppState>()
        .init_resource::<ManifestLoader>()
        .init_resource::<LoadingProgress>()
        .init_resource::<ShowcaseAssets>()
        .init_resource::<HingeSequencer>()
        .init_resource::<ModelBounds>()
        .init_resource::<PreOpenPose>()
        .init_resource::<NavigationState>()
        .init_resource::<ScrollState>()
        .init_resource::<ActiveSection>()
        .add_event::<OpenRequested>()
        .add_event::<CloseRequested>()
        .add_event::<DeviceOpened>()
        .add_event::<CloseStarted>()
        .add_event::<DeviceClosed>()
        .add_event::<SectionNavigationRequested>()
        .add_event::<SectionVisibilityReported>()
        .add_systems(Startup, (setup, start_loading))
        .add_systems(
            Update,
            (
                load_manifest_system,
                spawn_model_scene,
                check_texture_loading,
                bind_model_parts,
                place_model,
                finish_loading,
                spawn_nav_links,
                spawn_hero,
                transition_to_running,
            )
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(
            Update,
            (
                camera_controller,
                fps_text_update_system,
                report_loading_progress,
                clear_loading_screen,
            ),
        )
        .add_systems(
            Update,
            (
                update_model_bounds,
                pointer_click_system,
                escape_close_system,
                nav_link_press_system,
                handle_section_navigation,
                (handle_device_requests, advance_hinge).chain(),
                idle_motion_system,
            )
                .run_if(in_state(AppState::Running)),
        )
        .add_systems(
            Update,
            (
                nav_reveal_system,
                nav_pulse_trigger,
                nav_pulse_system,
                press_feedback_system,
                hide_nav_on_close,
                tick_scroll_handoff,
                toggle_hero_hint,
                apply_hero_parallax,
                update_scroll_indicator,
                track_active_section,
            )
                .run_if(in_state(AppState::Running)),
        );

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}

/// Spawn the static stage: lighting rig, orbit camera and overlay UI.
fn setup(mut commands: Commands) {
    println!("=== INTERACTIVE PRODUCT SHOWCASE ===");

    spawn_lighting(&mut commands);
    spawn_camera(&mut commands);
    spawn_ui(&mut commands);
}

fn spawn_ui(commands: &mut Commands) {
    spawn_loading_screen(commands);
    spawn_hud(commands);
}
