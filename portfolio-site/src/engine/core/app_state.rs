use bevy::prelude::*;

use crate::engine::core::config::SiteConfig;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

/// One-shot delay between launch and mounting the page.
#[derive(Resource, Debug)]
pub struct LoadingTimer(pub Timer);

pub fn start_loading_timer(mut commands: Commands, config: Res<SiteConfig>) {
    info!(
        "Loading gate armed for {} ms",
        config.loading_delay.as_millis()
    );
    commands.insert_resource(LoadingTimer(Timer::new(
        config.loading_delay,
        TimerMode::Once,
    )));
}

pub fn tick_loading_timer(
    time: Res<Time>,
    timer: Option<ResMut<LoadingTimer>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(mut timer) = timer else {
        return;
    };

    if timer.0.tick(time.delta()).just_finished() {
        info!("→ Loading delay elapsed, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}

pub fn clear_loading_timer(mut commands: Commands) {
    commands.remove_resource::<LoadingTimer>();
}

/// Drop a pending loading timer when the app shuts down before it fires.
pub fn clear_loading_timer_on_exit(
    mut exits: EventReader<AppExit>,
    timer: Option<Res<LoadingTimer>>,
    mut commands: Commands,
) {
    if exits.read().count() == 0 || timer.is_none() {
        return;
    }
    info!("Exit requested during loading, cancelling loading timer");
    commands.remove_resource::<LoadingTimer>();
}
