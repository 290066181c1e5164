use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy::window::WindowResized;
use constants::palette::PAGE_BLACK;

use crate::content::PortfolioContent;
use crate::engine::background::BackgroundPlugin;
use crate::engine::core::app_state::{
    AppState, clear_loading_timer, clear_loading_timer_on_exit, start_loading_timer,
    tick_loading_timer,
};
use crate::engine::core::config::SiteConfig;
use crate::engine::core::viewport::{Viewport, init_viewport_from_window, track_viewport_size};
use crate::engine::core::window_config::create_window_config;
use crate::engine::scroll::ScrollObserverPlugin;
use crate::ui::PageUiPlugin;

pub fn create_app(config: SiteConfig, content: PortfolioContent) -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .insert_resource(ClearColor(PAGE_BLACK));

    add_site_plugins(&mut app, config, content);

    app
}

/// Everything except the windowing and rendering plugins, so tests can run the
/// site headless on top of `MinimalPlugins`.
pub fn add_site_plugins(app: &mut App, config: SiteConfig, content: PortfolioContent) {
    app.insert_resource(config)
        .insert_resource(content)
        .init_state::<AppState>()
        .init_resource::<Viewport>()
        .add_event::<WindowResized>()
        .add_plugins(BackgroundPlugin)
        .add_plugins(ScrollObserverPlugin)
        .add_plugins(PageUiPlugin);

    // Loading gate
    app.add_systems(OnEnter(AppState::Loading), start_loading_timer)
        .add_systems(
            Update,
            tick_loading_timer.run_if(in_state(AppState::Loading)),
        )
        .add_systems(OnExit(AppState::Loading), clear_loading_timer)
        .add_systems(Last, clear_loading_timer_on_exit);

    // Viewport tracking
    app.add_systems(Startup, init_viewport_from_window)
        .add_systems(PreUpdate, track_viewport_size);
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
