use bevy::prelude::*;

use crate::engine::assets::showcase_assets::ShowcaseAssets;
use crate::engine::interaction::sequencer::{HingePhase, HingeSequencer};
use crate::engine::scene::ShowcaseModelRoot;
use constants::model::{FLOAT_AMPLITUDE, FLOAT_FREQUENCY, IDLE_SPIN_SPEED};

/// Gentle float and turntable spin while the device is closed and no tween
/// is in flight. Suspends from the open trigger until a close completes.
pub fn idle_motion_system(
    time: Res<Time>,
    assets: Res<ShowcaseAssets>,
    sequencer: Res<HingeSequencer>,
    mut root_query: Query<(&mut Transform, &ShowcaseModelRoot)>,
) {
    if !assets.is_loaded || sequencer.is_open() || sequencer.phase() != HingePhase::Idle {
        return;
    }
    let Ok((mut transform, root)) = root_query.single_mut() else {
        return;
    };

    let t = time.elapsed_secs();
    transform.translation.y = root.rest_y + FLOAT_AMPLITUDE * (FLOAT_FREQUENCY * t).sin();
    transform.rotate_y(IDLE_SPIN_SPEED * time.delta_secs());
}
