use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;
use constants::lighting::CLEAR_COLOR;

#[derive(Component)]
pub struct LoadingScreen;

/// Full-screen overlay shown until the model is ready. Also cleared on a
/// failed load; the failure itself stays silent.
pub fn spawn_loading_screen(commands: &mut Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(CLEAR_COLOR),
            GlobalZIndex(10),
            LoadingScreen,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Loading…"),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(Color::srgb(0.25, 0.25, 0.25)),
            ));
        });
}

pub fn clear_loading_screen(
    loading_progress: Res<LoadingProgress>,
    mut query: Query<&mut Visibility, With<LoadingScreen>>,
) {
    if !loading_progress.is_complete() && !loading_progress.load_failed {
        return;
    }
    for mut visibility in &mut query {
        if *visibility != Visibility::Hidden {
            *visibility = Visibility::Hidden;
        }
    }
}
