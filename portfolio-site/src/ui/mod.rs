//! Page UI: loading screen, header, sections and their reveal animation.
//!
//! ## Lifecycle
//!
//! ```text
//! OnEnter(Loading) ──> spawn_loading_screen (2D camera, spinner)
//! OnExit(Loading)  ──> despawn_loading_screen
//! OnEnter(Running) ──> spawn_page (header + PageRoot with six sections and footer)
//!
//! Update (Running)
//!   ├─ button styles, hover borders, action buttons ──> ScrollToSection / OpenLink
//!   ├─ header style and nav highlight from ScrollObserver
//!   └─ reveal progress ──> slide / fade, landing parallax from PageScroll
//! ```

/// Header bar, nav items and their scroll-driven styling.
pub mod header;

/// Scroll-target and external-link buttons.
pub mod links;

/// Loading screen shown before the page mounts.
pub mod loading;

/// Page root assembly.
pub mod page;

/// Reveal transitions and landing parallax.
pub mod reveal;

pub mod sections;

/// Layout constants, font sizes and gradient lookup.
pub mod theme;

/// Shared spawn helpers and interaction styling.
pub mod widgets;

use bevy::prelude::*;

use crate::engine::core::app_state::AppState;
use crate::engine::scroll::{PageScroll, ScrollObserver, ScrollToSection};

pub use links::OpenLink;
pub use reveal::RevealProgress;

pub struct PageUiPlugin;

impl Plugin for PageUiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RevealProgress>()
            .add_event::<OpenLink>()
            .add_event::<links::LinkFollowed>()
            .add_event::<ScrollToSection>()
            .add_systems(OnEnter(AppState::Loading), loading::spawn_loading_screen)
            .add_systems(
                Update,
                loading::animate_spinner.run_if(in_state(AppState::Loading)),
            )
            .add_systems(OnExit(AppState::Loading), loading::despawn_loading_screen)
            .add_systems(OnEnter(AppState::Running), page::spawn_page)
            .add_systems(
                Update,
                (
                    (
                        widgets::update_button_styles,
                        widgets::update_hover_borders,
                        links::handle_action_buttons,
                        links::open_links,
                    )
                        .chain(),
                    header::update_header_style.run_if(resource_changed::<ScrollObserver>),
                    header::update_nav_items,
                    reveal::advance_reveal,
                    reveal::apply_reveal_slide
                        .after(reveal::advance_reveal)
                        .run_if(resource_changed::<RevealProgress>),
                    reveal::apply_landing_parallax.run_if(resource_changed::<PageScroll>),
                    reveal::apply_reveal_fade
                        .after(reveal::advance_reveal)
                        .run_if(
                            resource_changed::<RevealProgress>
                                .or(resource_changed::<PageScroll>),
                        ),
                )
                    .run_if(in_state(AppState::Running)),
            );
    }
}
