use std::f32::consts::TAU;

use bevy::prelude::*;
use constants::palette::{PAGE_BLACK, PURPLE_600, TEXT_WHITE};
use constants::timing::SPINNER_PERIOD_SECS;

use super::theme;

#[derive(Component)]
pub struct LoadingScreen;

/// 2D camera that only lives while the loading screen is up.
#[derive(Component)]
pub struct LoadingCamera;

#[derive(Component)]
pub struct Spinner;

/// Spinner ring alpha at `seconds`, pulsing between 0.3 and 1.0.
pub fn spinner_alpha(seconds: f32) -> f32 {
    let phase = (seconds / SPINNER_PERIOD_SECS) * TAU;
    0.65 + 0.35 * phase.cos()
}

pub fn spawn_loading_screen(mut commands: Commands) {
    info!("Showing loading screen");

    commands.spawn((LoadingCamera, Camera2d, Name::new("LoadingCamera")));

    commands
        .spawn((
            LoadingScreen,
            Name::new("LoadingScreen"),
            Node {
                width: Val::Vw(100.0),
                height: Val::Vh(100.0),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                row_gap: Val::Px(16.0),
                ..default()
            },
            BackgroundColor(PAGE_BLACK),
            GlobalZIndex(100),
        ))
        .with_children(|screen| {
            screen.spawn((
                Spinner,
                Node {
                    width: Val::Px(theme::SPINNER_SIZE),
                    height: Val::Px(theme::SPINNER_SIZE),
                    border: UiRect::all(Val::Px(2.0)),
                    ..default()
                },
                BorderColor(PURPLE_600),
                BorderRadius::MAX,
            ));
            screen.spawn((
                Text::new("Loading experience..."),
                TextFont {
                    font_size: theme::FONT_BODY,
                    ..default()
                },
                TextColor(TEXT_WHITE),
            ));
        });
}

pub fn animate_spinner(time: Res<Time>, mut spinners: Query<&mut BorderColor, With<Spinner>>) {
    let alpha = spinner_alpha(time.elapsed_secs());
    for mut border in &mut spinners {
        border.0.set_alpha(alpha);
    }
}

pub fn despawn_loading_screen(
    mut commands: Commands,
    screens: Query<Entity, Or<(With<LoadingScreen>, With<LoadingCamera>)>>,
) {
    for entity in &screens {
        commands.entity(entity).despawn();
    }
    info!("Loading screen removed");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_pulse_bounds() {
        assert!((spinner_alpha(0.0) - 1.0).abs() < 1e-6);
        assert!((spinner_alpha(SPINNER_PERIOD_SECS / 2.0) - 0.3).abs() < 1e-5);
        for step in 0..40 {
            let alpha = spinner_alpha(step as f32 * 0.05);
            assert!((0.3 - 1e-5..=1.0 + 1e-5).contains(&alpha));
        }
    }

    #[test]
    fn test_loading_screen_round_trip() {
        let mut world = World::new();
        world.run_system_cached(spawn_loading_screen).unwrap();

        let mut screens = world.query_filtered::<Entity, With<LoadingScreen>>();
        assert_eq!(screens.iter(&world).count(), 1);
        let mut spinners = world.query_filtered::<Entity, With<Spinner>>();
        assert_eq!(spinners.iter(&world).count(), 1);

        world.run_system_cached(despawn_loading_screen).unwrap();
        assert_eq!(screens.iter(&world).count(), 0);
        assert_eq!(spinners.iter(&world).count(), 0);
        let mut cameras = world.query_filtered::<Entity, With<LoadingCamera>>();
        assert_eq!(cameras.iter(&world).count(), 0);
    }
}
