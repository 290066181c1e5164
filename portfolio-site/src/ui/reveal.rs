use bevy::prelude::*;
use constants::scroll::{
    LANDING_FADE_RANGE_PX, LANDING_PARALLAX_RANGE_PX, LANDING_PARALLAX_SHIFT_PX,
};
use constants::timing::REVEAL_SLIDE_PX;

use crate::engine::core::config::SiteConfig;
use crate::engine::scroll::{PageScroll, ScrollObserver, SectionId};

/// Per-section reveal transition progress in `[0, 1]`. Only ever increases.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct RevealProgress([f32; SectionId::ALL.len()]);

impl RevealProgress {
    pub fn get(&self, section: SectionId) -> f32 {
        self.0[section.index()]
    }

    pub fn advance(&mut self, section: SectionId, delta: f32, duration: f32) {
        let progress = &mut self.0[section.index()];
        *progress = if duration <= 0.0 {
            1.0
        } else {
            (*progress + delta.max(0.0) / duration).min(1.0)
        };
    }
}

/// Content column that slides up into place as its section reveals.
#[derive(Component, Debug, Clone, Copy)]
pub struct RevealSlide(pub SectionId);

/// Text that fades from transparent to `base_alpha` as its section reveals.
#[derive(Component, Debug, Clone, Copy)]
pub struct RevealFade {
    pub section: SectionId,
    pub base_alpha: f32,
}

/// Landing hero block driven by scroll parallax instead of a slide.
#[derive(Component)]
pub struct LandingHero;

/// Grid overlay behind the landing hero. Moves with the hero but does not fade.
#[derive(Component)]
pub struct LandingGrid;

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t.clamp(0.0, 1.0)).powi(3)
}

/// Remaining slide distance at `progress`.
pub fn slide_offset(progress: f32) -> f32 {
    REVEAL_SLIDE_PX * (1.0 - ease_out_cubic(progress))
}

pub fn reveal_alpha(progress: f32) -> f32 {
    ease_out_cubic(progress)
}

/// Hero vertical offset (px, negative is up) and opacity for a scroll offset.
pub fn landing_parallax(scroll_y: f32) -> (f32, f32) {
    let shift = (scroll_y / LANDING_PARALLAX_RANGE_PX).clamp(0.0, 1.0);
    let fade = (scroll_y / LANDING_FADE_RANGE_PX).clamp(0.0, 1.0);
    (-LANDING_PARALLAX_SHIFT_PX * shift, 1.0 - fade)
}

pub fn advance_reveal(
    time: Res<Time>,
    config: Res<SiteConfig>,
    observer: Res<ScrollObserver>,
    mut progress: ResMut<RevealProgress>,
) {
    let mut next = *progress;
    for section in SectionId::ALL {
        if observer.is_revealed(section) {
            next.advance(section, time.delta_secs(), config.reveal_secs);
        }
    }
    progress.set_if_neq(next);
}

pub fn apply_reveal_slide(
    progress: Res<RevealProgress>,
    mut columns: Query<(&RevealSlide, &mut Node)>,
) {
    for (slide, mut node) in &mut columns {
        node.top = Val::Px(slide_offset(progress.get(slide.0)));
    }
}

pub fn apply_landing_parallax(
    scroll: Res<PageScroll>,
    mut heroes: Query<&mut Node, Or<(With<LandingHero>, With<LandingGrid>)>>,
) {
    let (offset, _) = landing_parallax(scroll.offset());
    for mut node in &mut heroes {
        node.top = Val::Px(offset);
    }
}

/// Text alpha: reveal progress times base alpha, and for the landing
/// section also the parallax fade.
pub fn apply_reveal_fade(
    progress: Res<RevealProgress>,
    scroll: Res<PageScroll>,
    mut texts: Query<(&RevealFade, &mut TextColor)>,
) {
    let (_, landing_opacity) = landing_parallax(scroll.offset());

    for (fade, mut color) in &mut texts {
        let mut alpha = fade.base_alpha * reveal_alpha(progress.get(fade.section));
        if fade.section == SectionId::Landing {
            alpha *= landing_opacity;
        }
        color.0.set_alpha(alpha);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_is_monotonic_and_capped() {
        let mut progress = RevealProgress::default();
        let mut last = 0.0;
        for _ in 0..30 {
            progress.advance(SectionId::Skills, 0.05, 1.0);
            let now = progress.get(SectionId::Skills);
            assert!(now >= last);
            last = now;
        }
        assert_eq!(progress.get(SectionId::Skills), 1.0);
        assert_eq!(progress.get(SectionId::About), 0.0);

        progress.advance(SectionId::Skills, -5.0, 1.0);
        assert_eq!(progress.get(SectionId::Skills), 1.0);
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let mut progress = RevealProgress::default();
        progress.advance(SectionId::Contact, 0.0, 0.0);
        assert_eq!(progress.get(SectionId::Contact), 1.0);
    }

    #[test]
    fn test_slide_runs_from_full_offset_to_zero() {
        assert_eq!(slide_offset(0.0), REVEAL_SLIDE_PX);
        assert_eq!(slide_offset(1.0), 0.0);
        assert!(slide_offset(0.5) < REVEAL_SLIDE_PX / 2.0);
    }

    #[test]
    fn test_grid_moves_with_hero() {
        let mut scroll = PageScroll::default();
        scroll.set_max(3000.0);
        scroll.jump_to(500.0);

        let mut app = App::new();
        app.insert_resource(scroll)
            .add_systems(Update, apply_landing_parallax);
        let hero = app.world_mut().spawn((LandingHero, Node::default())).id();
        let grid = app.world_mut().spawn((LandingGrid, Node::default())).id();
        let other = app.world_mut().spawn(Node::default()).id();
        app.update();

        let top = |entity| app.world().get::<Node>(entity).unwrap().top;
        assert_eq!(top(hero), Val::Px(-100.0));
        assert_eq!(top(grid), top(hero));
        assert_eq!(top(other), Val::Auto);
    }

    #[test]
    fn test_landing_parallax_bounds() {
        assert_eq!(landing_parallax(0.0), (0.0, 1.0));

        let (offset, opacity) = landing_parallax(200.0);
        assert!((offset + 40.0).abs() < 1e-4);
        assert!((opacity - 0.5).abs() < 1e-6);

        assert_eq!(landing_parallax(400.0).1, 0.0);
        assert_eq!(landing_parallax(1000.0).0, -200.0);
        assert_eq!(landing_parallax(5000.0), (-200.0, 0.0));
        assert_eq!(landing_parallax(-30.0), (0.0, 1.0));
    }
}
