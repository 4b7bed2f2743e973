use bevy::prelude::*;

use crate::engine::assets::showcase_manifest::ShowcaseManifest;
use crate::engine::interaction::events::{DeviceClosed, DeviceOpened};

/// Hero banner over the canvas; the host page's scroll offset fades and
/// shifts it.
#[derive(Component)]
pub struct HeroContent {
    pub base_top: f32,
}

#[derive(Component)]
pub struct HeroText;

/// The click prompt under the title; pointless while the device is open.
#[derive(Component)]
pub struct HeroHint;

/// Bottom-centre scroll hint, hidden once the page scrolls away.
#[derive(Component)]
pub struct ScrollIndicator;

pub fn spawn_hero(
    manifest: Option<Res<ShowcaseManifest>>,
    existing: Query<(), With<HeroContent>>,
    mut commands: Commands,
) {
    let Some(manifest) = manifest else {
        return;
    };
    if !existing.is_empty() {
        return;
    }

    let base_top = 120.0;
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(base_top),
                width: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                row_gap: Val::Px(8.0),
                ..default()
            },
            HeroContent { base_top },
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(manifest.title.clone()),
                TextFont {
                    font_size: 44.0,
                    ..default()
                },
                TextColor(Color::srgb(0.12, 0.12, 0.12)),
                HeroText,
            ));
            parent.spawn((
                Text::new("Click the device to open it"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.35, 0.35, 0.35)),
                HeroText,
                HeroHint,
            ));
        });

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(48.0),
                width: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                ..default()
            },
            ScrollIndicator,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Scroll ▾"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.35, 0.35, 0.35)),
            ));
        });
}

/// Drop the click prompt once an open trigger lands; bring it back when the
/// device has closed again.
pub fn toggle_hero_hint(
    mut opened_events: EventReader<DeviceOpened>,
    mut closed_events: EventReader<DeviceClosed>,
    mut hints: Query<&mut Visibility, With<HeroHint>>,
) {
    let opened = !opened_events.is_empty();
    let closed = !closed_events.is_empty();
    opened_events.clear();
    closed_events.clear();

    if opened == closed {
        return;
    }

    let target = if opened {
        Visibility::Hidden
    } else {
        Visibility::Inherited
    };
    for mut visibility in &mut hints {
        *visibility = target;
    }
}
