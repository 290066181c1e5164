use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use constants::scroll::{KEY_SCROLL_STEP_PX, PAGE_SCROLL_FRACTION, WHEEL_LINE_HEIGHT_PX};

use super::layout::{PageRoot, ScrollTrailer, SectionLayout};
use super::observer::{ObserverSettings, ScrollObserver};
use super::section::{PageSection, SectionId};
use super::smooth::{PageScroll, scroll_target};
use crate::engine::core::app_state::AppState;
use crate::engine::core::config::SiteConfig;
use crate::engine::core::viewport::Viewport;

/// Smooth-scroll the page so the section's top meets the viewport top.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollToSection(pub SectionId);

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionRevealed(pub SectionId);

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSectionChanged(pub SectionId);

impl From<&SiteConfig> for ObserverSettings {
    fn from(config: &SiteConfig) -> Self {
        Self {
            scrolled_threshold: config.scrolled_threshold,
            active_probe: config.active_probe,
            reveal_threshold: config.reveal_threshold,
        }
    }
}

impl FromWorld for ScrollObserver {
    fn from_world(world: &mut World) -> Self {
        let settings = world
            .get_resource::<SiteConfig>()
            .map(ObserverSettings::from)
            .unwrap_or_default();
        ScrollObserver::new(settings)
    }
}

pub struct ScrollObserverPlugin;

impl Plugin for ScrollObserverPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SectionLayout>()
            .init_resource::<PageScroll>()
            .init_resource::<ScrollObserver>()
            .init_resource::<Viewport>()
            .init_resource::<ButtonInput<KeyCode>>()
            .add_event::<MouseWheel>()
            .add_event::<ScrollToSection>()
            .add_event::<SectionRevealed>()
            .add_event::<ActiveSectionChanged>()
            .add_systems(
                Update,
                (
                    measure_sections,
                    sync_scroll_bounds,
                    apply_scroll_input,
                    handle_scroll_requests,
                    advance_smooth_scroll,
                    sync_scroll_position,
                    observe_scroll,
                )
                    .chain()
                    .run_if(in_state(AppState::Running)),
            );
    }
}

fn logical_height(node: &ComputedNode) -> f32 {
    node.size().y * node.inverse_scale_factor()
}

/// Rebuild [`SectionLayout`] when a section or trailer node is resized or the
/// viewport changes.
pub fn measure_sections(
    sections: Query<(&PageSection, Ref<ComputedNode>)>,
    trailers: Query<Ref<ComputedNode>, With<ScrollTrailer>>,
    viewport: Res<Viewport>,
    mut layout: ResMut<SectionLayout>,
) {
    let resized = sections.iter().any(|(_, node)| node.is_changed())
        || trailers.iter().any(|node| node.is_changed());
    if !resized && !viewport.is_changed() {
        return;
    }

    let mut heights: Vec<(SectionId, f32)> = sections
        .iter()
        .map(|(section, node)| (section.0, logical_height(&node)))
        .collect();
    heights.sort_by_key(|(id, _)| id.index());
    let trailer_height: f32 = trailers.iter().map(|node| logical_height(&node)).sum();

    layout.set_if_neq(SectionLayout::stacked(
        heights,
        trailer_height,
        viewport.height,
    ));
}

pub fn sync_scroll_bounds(layout: Res<SectionLayout>, mut scroll: ResMut<PageScroll>) {
    if layout.is_changed() {
        scroll.set_max(layout.max_scroll());
    }
}

/// Wheel and keyboard scrolling.
pub fn apply_scroll_input(
    mut wheel: EventReader<MouseWheel>,
    keys: Res<ButtonInput<KeyCode>>,
    viewport: Res<Viewport>,
    mut scroll: ResMut<PageScroll>,
) {
    let mut delta = 0.0;
    for event in wheel.read() {
        let pixels = match event.unit {
            MouseScrollUnit::Line => event.y * WHEEL_LINE_HEIGHT_PX,
            MouseScrollUnit::Pixel => event.y,
        };
        // Positive wheel y scrolls towards the top of the page.
        delta -= pixels;
    }

    let page_step = viewport.height * PAGE_SCROLL_FRACTION;
    if keys.just_pressed(KeyCode::ArrowDown) {
        delta += KEY_SCROLL_STEP_PX;
    }
    if keys.just_pressed(KeyCode::ArrowUp) {
        delta -= KEY_SCROLL_STEP_PX;
    }
    if keys.just_pressed(KeyCode::PageDown) || keys.just_pressed(KeyCode::Space) {
        delta += page_step;
    }
    if keys.just_pressed(KeyCode::PageUp) {
        delta -= page_step;
    }

    if keys.just_pressed(KeyCode::Home) {
        scroll.jump_to(0.0);
    } else if keys.just_pressed(KeyCode::End) {
        let end = scroll.max_offset();
        scroll.jump_to(end);
    } else if delta != 0.0 {
        scroll.scroll_by(delta);
    }
}

pub fn handle_scroll_requests(
    mut requests: EventReader<ScrollToSection>,
    layout: Res<SectionLayout>,
    config: Res<SiteConfig>,
    mut scroll: ResMut<PageScroll>,
) {
    for ScrollToSection(section) in requests.read() {
        match scroll_target(&layout, *section) {
            Some(target) => {
                debug!("Scrolling to {section} at {target:.0}px");
                scroll.scroll_to(target, config.smooth_scroll_secs);
            }
            None => debug!("Section {section} is not mounted, ignoring scroll request"),
        }
    }
}

pub fn advance_smooth_scroll(time: Res<Time>, mut scroll: ResMut<PageScroll>) {
    if scroll.is_animating() {
        scroll.advance(time.delta_secs());
    }
}

pub fn sync_scroll_position(
    scroll: Res<PageScroll>,
    mut roots: Query<&mut ScrollPosition, With<PageRoot>>,
) {
    for mut position in &mut roots {
        if position.offset_y != scroll.offset() {
            position.offset_y = scroll.offset();
        }
    }
}

/// Run the observer and publish what changed. The resource is only marked
/// changed when an observation actually changed something.
pub fn observe_scroll(
    layout: Res<SectionLayout>,
    scroll: Res<PageScroll>,
    mut observer: ResMut<ScrollObserver>,
    mut revealed: EventWriter<SectionRevealed>,
    mut active: EventWriter<ActiveSectionChanged>,
) {
    let observation = observer
        .bypass_change_detection()
        .observe(&layout, scroll.offset());
    if observation.is_empty() {
        return;
    }
    observer.set_changed();

    for section in observation.newly_revealed {
        debug!("Section {section} revealed");
        revealed.write(SectionRevealed(section));
    }
    if let Some(section) = observation.active_changed {
        active.write(ActiveSectionChanged(section));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::event::Events;
    use bevy::state::app::StatesPlugin;
    use bevy::time::TimeUpdateStrategy;
    use std::time::Duration;

    fn scroll_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin))
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(50)))
            .insert_resource(SiteConfig::default())
            .insert_state(AppState::Running)
            .add_plugins(ScrollObserverPlugin);
        app.update();

        app.insert_resource(SectionLayout::stacked(
            [
                (SectionId::Landing, 800.0),
                (SectionId::About, 900.0),
                (SectionId::Experience, 700.0),
                (SectionId::Projects, 1200.0),
                (SectionId::Skills, 600.0),
                (SectionId::Contact, 500.0),
            ],
            120.0,
            800.0,
        ));
        app.update();
        app
    }

    fn drain<E: Event + Copy>(app: &mut App) -> Vec<E> {
        app.world_mut()
            .resource_mut::<Events<E>>()
            .drain()
            .collect()
    }

    #[test]
    fn test_scroll_to_known_section_lands_on_top() {
        let mut app = scroll_app();
        app.world_mut()
            .send_event(ScrollToSection(SectionId::Projects));

        for _ in 0..20 {
            app.update();
        }

        let scroll = app.world().resource::<PageScroll>();
        assert!(!scroll.is_animating());
        assert!((scroll.offset() - 2400.0).abs() <= 1.0);
        assert_eq!(
            app.world().resource::<ScrollObserver>().active(),
            SectionId::Projects
        );
    }

    #[test]
    fn test_scroll_to_unmounted_section_is_noop() {
        let mut app = scroll_app();
        app.insert_resource(SectionLayout::stacked(
            [(SectionId::Landing, 800.0), (SectionId::About, 900.0)],
            0.0,
            800.0,
        ));
        app.update();
        app.world_mut().resource_mut::<PageScroll>().jump_to(300.0);

        app.world_mut()
            .send_event(ScrollToSection(SectionId::Contact));
        app.update();
        app.update();

        let scroll = app.world().resource::<PageScroll>();
        assert!(!scroll.is_animating());
        assert_eq!(scroll.offset(), 300.0);
    }

    #[test]
    fn test_wheel_lines_scroll_down_and_clamp() {
        let mut app = scroll_app();
        app.world_mut().send_event(MouseWheel {
            unit: MouseScrollUnit::Line,
            x: 0.0,
            y: -3.0,
            window: Entity::PLACEHOLDER,
        });
        app.update();
        assert_eq!(app.world().resource::<PageScroll>().offset(), 120.0);

        app.world_mut().send_event(MouseWheel {
            unit: MouseScrollUnit::Pixel,
            x: 0.0,
            y: 500.0,
            window: Entity::PLACEHOLDER,
        });
        app.update();
        assert_eq!(app.world().resource::<PageScroll>().offset(), 0.0);
    }

    #[test]
    fn test_reveal_and_active_events() {
        let mut app = scroll_app();
        let revealed: Vec<SectionRevealed> = drain(&mut app);
        assert_eq!(revealed, [SectionRevealed(SectionId::Landing)]);

        app.world_mut().resource_mut::<PageScroll>().jump_to(900.0);
        app.update();

        let revealed: Vec<SectionRevealed> = drain(&mut app);
        assert_eq!(revealed, [SectionRevealed(SectionId::About)]);
        let active: Vec<ActiveSectionChanged> = drain(&mut app);
        assert_eq!(active, [ActiveSectionChanged(SectionId::About)]);

        app.world_mut().resource_mut::<PageScroll>().jump_to(0.0);
        app.update();
        let revealed: Vec<SectionRevealed> = drain(&mut app);
        assert!(revealed.is_empty());
        assert!(app.world().resource::<ScrollObserver>().is_revealed(SectionId::About));
    }

    #[test]
    fn test_scroll_position_follows_page_scroll() {
        let mut app = scroll_app();
        let root = app
            .world_mut()
            .spawn((PageRoot, ScrollPosition::default()))
            .id();

        app.world_mut().resource_mut::<PageScroll>().jump_to(640.0);
        app.update();

        let position = app.world().get::<ScrollPosition>(root).unwrap();
        assert_eq!(position.offset_y, 640.0);
    }
}
