use bevy::prelude::*;

use crate::engine::interaction::events::{CloseRequested, RequestSource};
use crate::engine::ui::nav_links::NavLinks;
use crate::rpc::web_rpc::WebRpcInterface;
use constants::animation::SCROLL_HANDOFF_DELAY;

/// A nav link or the host page asked to move to a content section. The
/// device closes first; the page is told to scroll once the handoff delay
/// elapses.
#[derive(Event)]
pub struct SectionNavigationRequested {
    pub section: String,
}

/// At most one scroll handoff is pending; a newer request replaces it.
#[derive(Resource, Default)]
pub struct NavigationState {
    pending_scroll: Option<(Timer, String)>,
}

pub fn handle_section_navigation(
    mut nav_events: EventReader<SectionNavigationRequested>,
    mut close_events: EventWriter<CloseRequested>,
    mut navigation: ResMut<NavigationState>,
) {
    for event in nav_events.read() {
        close_events.write(CloseRequested {
            source: RequestSource::Navigation,
        });
        navigation.pending_scroll = Some((
            Timer::new(SCROLL_HANDOFF_DELAY, TimerMode::Once),
            event.section.clone(),
        ));
    }
}

/// Fire the deferred scroll once its delay has elapsed. The handoff runs
/// whether or not the close was accepted; an already-closed device just
/// scrolls sooner.
pub fn tick_scroll_handoff(
    time: Res<Time>,
    mut navigation: ResMut<NavigationState>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    let Some((timer, _)) = navigation.pending_scroll.as_mut() else {
        return;
    };
    timer.tick(time.delta());
    if !timer.finished() {
        return;
    }

    if let Some((_, section)) = navigation.pending_scroll.take() {
        info!("Scrolling page to section '{section}'");
        rpc_interface.send_notification(
            "scroll_to_section",
            serde_json::json!({ "section": section }),
        );
    }
}

/// Escape closes the device while the navigation overlay is showing.
pub fn escape_close_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    nav_query: Query<&Visibility, With<NavLinks>>,
    mut close_events: EventWriter<CloseRequested>,
) {
    if !keyboard.just_pressed(KeyCode::Escape) {
        return;
    }
    let visible = nav_query
        .iter()
        .any(|visibility| *visibility == Visibility::Visible);
    if visible {
        close_events.write(CloseRequested {
            source: RequestSource::Keyboard,
        });
    }
}
