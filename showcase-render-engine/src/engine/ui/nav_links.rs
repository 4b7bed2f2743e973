use bevy::prelude::*;

use crate::engine::assets::showcase_manifest::ShowcaseManifest;
use crate::engine::interaction::events::CloseStarted;
use crate::engine::interaction::sequencer::HingeSequencer;
use crate::page::navigation::SectionNavigationRequested;
use constants::animation::{
    NAV_PRESS_FEEDBACK, NAV_PULSE_DURATION, NAV_PULSE_SCALE, NAV_PULSE_STAGGER,
};

/// Container for the navigation affordances revealed by an open.
#[derive(Component)]
pub struct NavLinks;

#[derive(Component)]
pub struct NavLink {
    pub index: usize,
    pub section: String,
}

/// Staggered attention pulse scheduled shortly after the reveal.
#[derive(Component)]
pub struct NavPulse {
    delay: Timer,
    pulse: Timer,
}

/// Brief scale-down acknowledging a pressed link.
#[derive(Component)]
pub struct PressFeedback(Timer);

/// Build the nav overlay from the manifest's navigation entries. Spawned
/// hidden; the sequencer's reveal deadline makes it visible.
pub fn spawn_nav_links(
    manifest: Option<Res<ShowcaseManifest>>,
    existing: Query<(), With<NavLinks>>,
    mut commands: Commands,
) {
    let Some(manifest) = manifest else {
        return;
    };
    if !existing.is_empty() {
        return;
    }

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(24.0),
                width: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                column_gap: Val::Px(24.0),
                ..default()
            },
            Visibility::Hidden,
            NavLinks,
        ))
        .with_children(|parent| {
            for (index, entry) in manifest.navigation.iter().enumerate() {
                parent
                    .spawn((
                        Button,
                        Node {
                            padding: UiRect::axes(Val::Px(18.0), Val::Px(8.0)),
                            ..default()
                        },
                        BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.85)),
                        BorderRadius::all(Val::Px(6.0)),
                        NavLink {
                            index,
                            section: entry.section.clone(),
                        },
                    ))
                    .with_children(|button| {
                        button.spawn((
                            Text::new(entry.label.clone()),
                            TextFont {
                                font_size: 18.0,
                                ..default()
                            },
                            TextColor(Color::WHITE),
                        ));
                    });
            }
        });
}

pub fn nav_reveal_system(
    time: Res<Time>,
    mut sequencer: ResMut<HingeSequencer>,
    mut query: Query<&mut Visibility, With<NavLinks>>,
) {
    if !sequencer.take_due_reveal(time.elapsed()) {
        return;
    }
    for mut visibility in &mut query {
        *visibility = Visibility::Visible;
    }
    info!("Navigation links revealed");
}

pub fn nav_pulse_trigger(
    time: Res<Time>,
    mut sequencer: ResMut<HingeSequencer>,
    links: Query<(Entity, &NavLink)>,
    mut commands: Commands,
) {
    if !sequencer.take_due_pulse(time.elapsed()) {
        return;
    }
    for (entity, link) in &links {
        commands.entity(entity).insert(NavPulse {
            delay: Timer::new(NAV_PULSE_STAGGER * link.index as u32, TimerMode::Once),
            pulse: Timer::new(NAV_PULSE_DURATION, TimerMode::Once),
        });
    }
}

pub fn nav_pulse_system(
    time: Res<Time>,
    mut query: Query<(Entity, &mut NavPulse, &mut Transform)>,
    mut commands: Commands,
) {
    for (entity, mut pulse, mut transform) in &mut query {
        pulse.delay.tick(time.delta());
        if !pulse.delay.finished() {
            continue;
        }

        pulse.pulse.tick(time.delta());
        let arc = (std::f32::consts::PI * pulse.pulse.fraction()).sin();
        transform.scale = Vec3::splat(1.0 + (NAV_PULSE_SCALE - 1.0) * arc);

        if pulse.pulse.finished() {
            transform.scale = Vec3::ONE;
            commands.entity(entity).remove::<NavPulse>();
        }
    }
}

/// Close hides the links immediately and abandons any pulse in flight.
pub fn hide_nav_on_close(
    mut close_events: EventReader<CloseStarted>,
    mut containers: Query<&mut Visibility, With<NavLinks>>,
    mut pulses: Query<(Entity, &mut Transform), With<NavPulse>>,
    mut commands: Commands,
) {
    if close_events.is_empty() {
        return;
    }
    close_events.clear();

    for mut visibility in &mut containers {
        *visibility = Visibility::Hidden;
    }
    for (entity, mut transform) in &mut pulses {
        transform.scale = Vec3::ONE;
        commands.entity(entity).remove::<NavPulse>();
    }
}

pub fn nav_link_press_system(
    interactions: Query<(Entity, &Interaction, &NavLink), Changed<Interaction>>,
    mut nav_events: EventWriter<SectionNavigationRequested>,
    mut commands: Commands,
) {
    for (entity, interaction, link) in &interactions {
        if *interaction != Interaction::Pressed {
            continue;
        }
        nav_events.write(SectionNavigationRequested {
            section: link.section.clone(),
        });
        commands
            .entity(entity)
            .insert(PressFeedback(Timer::new(NAV_PRESS_FEEDBACK, TimerMode::Once)));
    }
}

pub fn press_feedback_system(
    time: Res<Time>,
    mut query: Query<(Entity, &mut PressFeedback, &mut Transform)>,
    mut commands: Commands,
) {
    for (entity, mut feedback, mut transform) in &mut query {
        feedback.0.tick(time.delta());
        if feedback.0.finished() {
            transform.scale = Vec3::ONE;
            commands.entity(entity).remove::<PressFeedback>();
        } else {
            transform.scale = Vec3::splat(0.95);
        }
    }
}
