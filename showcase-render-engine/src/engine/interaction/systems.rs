use bevy::math::EulerRot;
use bevy::prelude::*;

use crate::engine::interaction::events::{
    CloseRequested, CloseStarted, DeviceClosed, DeviceOpened, OpenRequested,
};
use crate::engine::interaction::sequencer::{HingeSequencer, StepOutcome};
use crate::engine::scene::ShowcaseModelRoot;
use crate::rpc::web_rpc::WebRpcInterface;
use constants::model::INITIAL_YAW;

/// The hinged node resolved from the manifest. The sequencer's angle is
/// applied on top of the rotation the node was authored with.
#[derive(Component)]
pub struct HingeLid {
    pub base_rotation: Quat,
}

/// Turntable yaw captured when an open begins, restored when the close
/// completes so the resumed idle spin picks up where it left off.
#[derive(Resource, Default)]
pub struct PreOpenPose {
    pub yaw: Option<f32>,
}

/// Feed queued open/close requests to the sequencer. Rejected requests are
/// dropped silently; accepted ones fan out as events and page
/// notifications.
pub fn handle_device_requests(
    time: Res<Time>,
    mut sequencer: ResMut<HingeSequencer>,
    mut open_events: EventReader<OpenRequested>,
    mut close_events: EventReader<CloseRequested>,
    mut opened_events: EventWriter<DeviceOpened>,
    mut close_started_events: EventWriter<CloseStarted>,
    mut pre_open: ResMut<PreOpenPose>,
    root_query: Query<&Transform, With<ShowcaseModelRoot>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    let now = time.elapsed();

    for event in open_events.read() {
        if !sequencer.open(now) {
            continue;
        }

        if let Ok(transform) = root_query.single() {
            let (yaw, _, _) = transform.rotation.to_euler(EulerRot::YXZ);
            pre_open.yaw = Some(yaw);
        }

        info!("Device opening via {:?}", event.source);
        opened_events.write(DeviceOpened {
            source: event.source,
        });
        rpc_interface.send_notification(
            "device_opened",
            serde_json::json!({ "source": format!("{:?}", event.source) }),
        );
    }

    for event in close_events.read() {
        if !sequencer.close(now) {
            continue;
        }

        info!("Device closing via {:?}", event.source);
        close_started_events.write(CloseStarted {
            source: event.source,
        });
    }
}

/// Advance the active tween once per frame and mirror the angle onto the
/// lid's transform. A finished close restores the pre-open turntable yaw.
pub fn advance_hinge(
    time: Res<Time>,
    mut sequencer: ResMut<HingeSequencer>,
    mut lid_query: Query<(&mut Transform, &HingeLid)>,
    mut root_query: Query<&mut Transform, (With<ShowcaseModelRoot>, Without<HingeLid>)>,
    mut pre_open: ResMut<PreOpenPose>,
    mut closed_events: EventWriter<DeviceClosed>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    let outcome = sequencer.step(time.elapsed());
    if outcome == StepOutcome::Idle {
        return;
    }

    let angle = sequencer.angle();
    for (mut transform, lid) in &mut lid_query {
        transform.rotation = lid.base_rotation * Quat::from_rotation_x(angle);
    }

    if outcome == StepOutcome::CloseComplete {
        if let Ok(mut transform) = root_query.single_mut() {
            let yaw = pre_open.yaw.take().unwrap_or(INITIAL_YAW);
            transform.rotation = Quat::from_rotation_y(yaw);
        }
        closed_events.write(DeviceClosed);
        rpc_interface.send_notification("device_closed", serde_json::json!({}));
    }
}
