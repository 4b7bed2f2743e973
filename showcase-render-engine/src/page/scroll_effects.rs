use bevy::color::Alpha;
use bevy::prelude::*;

use crate::engine::ui::hero::{HeroContent, HeroText, ScrollIndicator};
use crate::rpc::web_rpc::WebRpcInterface;

/// Latest page scroll reported by the host over RPC.
#[derive(Resource)]
pub struct ScrollState {
    pub offset: f32,
    pub viewport_height: f32,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            offset: 0.0,
            viewport_height: 1.0,
        }
    }
}

/// The host page reported a content section entering the viewport.
#[derive(Event)]
pub struct SectionVisibilityReported {
    pub section: String,
}

#[derive(Resource, Default)]
pub struct ActiveSection {
    pub id: Option<String>,
}

/// Hero fades out linearly over the first viewport of scrolling.
pub fn hero_opacity(offset: f32, viewport_height: f32) -> f32 {
    if viewport_height <= 0.0 {
        return 1.0;
    }
    (1.0 - offset / viewport_height).clamp(0.0, 1.0)
}

/// Hero drifts down at half scroll speed.
pub fn hero_shift(offset: f32) -> f32 {
    offset * 0.5
}

/// The scroll hint only shows near the top of the page.
pub fn indicator_visible(offset: f32) -> bool {
    offset <= 100.0
}

pub fn apply_hero_parallax(
    scroll: Res<ScrollState>,
    mut hero_query: Query<(&mut Node, &HeroContent)>,
    mut text_query: Query<&mut TextColor, With<HeroText>>,
) {
    if !scroll.is_changed() {
        return;
    }

    let opacity = hero_opacity(scroll.offset, scroll.viewport_height);
    for (mut node, hero) in &mut hero_query {
        node.top = Val::Px(hero.base_top + hero_shift(scroll.offset));
    }
    for mut color in &mut text_query {
        color.0.set_alpha(opacity);
    }
}

pub fn update_scroll_indicator(
    scroll: Res<ScrollState>,
    mut query: Query<&mut Visibility, With<ScrollIndicator>>,
) {
    if !scroll.is_changed() {
        return;
    }
    let target = if indicator_visible(scroll.offset) {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
    for mut visibility in &mut query {
        if *visibility != target {
            *visibility = target;
        }
    }
}

/// Keep the active-section record current and echo it to the host for nav
/// highlighting.
pub fn track_active_section(
    mut events: EventReader<SectionVisibilityReported>,
    mut active: ResMut<ActiveSection>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for event in events.read() {
        if active.id.as_deref() == Some(event.section.as_str()) {
            continue;
        }
        info!("Active section: {}", event.section);
        active.id = Some(event.section.clone());
        rpc_interface.send_notification(
            "active_section",
            serde_json::json!({ "section": event.section }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_opacity_fades_over_viewport() {
        assert!((hero_opacity(0.0, 800.0) - 1.0).abs() < 1e-6);
        assert!((hero_opacity(400.0, 800.0) - 0.5).abs() < 1e-6);
        assert!(hero_opacity(800.0, 800.0).abs() < 1e-6);
        // Past one viewport the hero stays fully transparent.
        assert!(hero_opacity(1200.0, 800.0).abs() < 1e-6);
    }

    #[test]
    fn test_hero_opacity_handles_degenerate_viewport() {
        assert!((hero_opacity(300.0, 0.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_hero_shift_is_half_speed() {
        assert!((hero_shift(240.0) - 120.0).abs() < 1e-6);
    }

    #[test]
    fn test_indicator_hides_past_threshold() {
        assert!(indicator_visible(0.0));
        assert!(indicator_visible(100.0));
        assert!(!indicator_visible(101.0));
    }
}
