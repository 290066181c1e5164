use bevy::prelude::*;

use super::layout::SectionLayout;
use super::section::SectionId;

/// One-way reveal flags, one per section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealSet([bool; SectionId::ALL.len()]);

impl RevealSet {
    pub fn is_revealed(&self, id: SectionId) -> bool {
        self.0[id.index()]
    }

    /// Mark `id` revealed. Returns `true` only on the first call for a section.
    pub fn reveal(&mut self, id: SectionId) -> bool {
        let flag = &mut self.0[id.index()];
        if *flag {
            return false;
        }
        *flag = true;
        true
    }

    pub fn count(&self) -> usize {
        self.0.iter().filter(|revealed| **revealed).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverSettings {
    /// Offset past which the header switches to its scrolled style.
    pub scrolled_threshold: f32,
    /// Viewport-relative y used to pick the active section.
    pub active_probe: f32,
    pub reveal_threshold: f32,
}

impl Default for ObserverSettings {
    fn default() -> Self {
        use constants::scroll::{
            ACTIVE_PROBE_PX, REVEAL_VISIBILITY_THRESHOLD, SCROLLED_THRESHOLD_PX,
        };
        Self {
            scrolled_threshold: SCROLLED_THRESHOLD_PX,
            active_probe: ACTIVE_PROBE_PX,
            reveal_threshold: REVEAL_VISIBILITY_THRESHOLD,
        }
    }
}

/// What changed during one [`ScrollObserver::observe`] call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Observation {
    pub newly_revealed: Vec<SectionId>,
    pub scrolled_changed: bool,
    pub active_changed: Option<SectionId>,
}

impl Observation {
    pub fn is_empty(&self) -> bool {
        self.newly_revealed.is_empty() && !self.scrolled_changed && self.active_changed.is_none()
    }
}

/// Scroll-derived page state: reveal flags, header style and active nav item.
#[derive(Resource, Debug, Clone)]
pub struct ScrollObserver {
    settings: ObserverSettings,
    revealed: RevealSet,
    scrolled: bool,
    active: SectionId,
}

// Inherent rather than `impl Default`: a `Default` impl would make bevy's
// blanket `FromWorld` conflict with the config-aware one in `systems.rs`.
impl ScrollObserver {
    #[allow(clippy::should_implement_trait)]
    pub fn default() -> Self {
        Self::new(ObserverSettings::default())
    }

    pub fn new(settings: ObserverSettings) -> Self {
        Self {
            settings,
            revealed: RevealSet::default(),
            scrolled: false,
            active: SectionId::Landing,
        }
    }

    pub fn settings(&self) -> &ObserverSettings {
        &self.settings
    }

    pub fn revealed(&self) -> &RevealSet {
        &self.revealed
    }

    pub fn is_revealed(&self, id: SectionId) -> bool {
        self.revealed.is_revealed(id)
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Recompute state for the page at `scroll_y`. Does nothing until the
    /// layout has been measured.
    pub fn observe(&mut self, layout: &SectionLayout, scroll_y: f32) -> Observation {
        let mut observation = Observation::default();
        if !layout.is_measured() {
            return observation;
        }

        let viewport_height = layout.viewport_height();
        for bounds in layout.sections() {
            if self.revealed.is_revealed(bounds.id) {
                continue;
            }
            let visible = bounds.intersects_viewport(scroll_y, viewport_height)
                && bounds.visible_fraction(scroll_y, viewport_height)
                    >= self.settings.reveal_threshold;
            if visible && self.revealed.reveal(bounds.id) {
                observation.newly_revealed.push(bounds.id);
            }
        }

        let scrolled = scroll_y > self.settings.scrolled_threshold;
        if scrolled != self.scrolled {
            self.scrolled = scrolled;
            observation.scrolled_changed = true;
        }

        if let Some(active) = probe_active(layout, scroll_y, self.settings.active_probe) {
            if active != self.active {
                self.active = active;
                observation.active_changed = Some(active);
            }
        }

        observation
    }
}

/// First section, in document order, whose viewport rect straddles `probe`.
pub fn probe_active(layout: &SectionLayout, scroll_y: f32, probe: f32) -> Option<SectionId> {
    SectionId::ALL
        .into_iter()
        .filter_map(|id| layout.get(id))
        .find(|bounds| {
            let top = bounds.viewport_top(scroll_y);
            top <= probe && top + bounds.height >= probe
        })
        .map(|bounds| bounds.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> SectionLayout {
        SectionLayout::stacked(
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
        )
    }

    #[test]
    fn test_initial_state() {
        let observer = ScrollObserver::default();
        assert_eq!(observer.active(), SectionId::Landing);
        assert!(!observer.scrolled());
        assert_eq!(observer.revealed().count(), 0);
    }

    #[test]
    fn test_reveal_needs_threshold_fraction() {
        let layout = page();
        let mut observer = ScrollObserver::default();

        let first = observer.observe(&layout, 0.0);
        assert_eq!(first.newly_revealed, [SectionId::Landing]);

        // About is 50px into view: 50/900 < 0.1
        let second = observer.observe(&layout, 50.0);
        assert!(second.newly_revealed.is_empty());

        // 90px of 900 is exactly 10%
        let third = observer.observe(&layout, 90.0);
        assert_eq!(third.newly_revealed, [SectionId::About]);
    }

    #[test]
    fn test_reveal_flips_once_and_never_reverts() {
        let layout = page();
        let mut observer = ScrollObserver::default();
        let offsets = [0.0, 3000.0, 120.0, 4000.0, 0.0, 1500.0, 10.0, 4100.0];
        let mut flips = Vec::new();
        let mut previous = RevealSet::default();

        for offset in offsets {
            let observation = observer.observe(&layout, offset);
            flips.extend(observation.newly_revealed);

            for id in SectionId::ALL {
                if previous.is_revealed(id) {
                    assert!(observer.is_revealed(id), "{id} reverted at {offset}");
                }
            }
            previous = *observer.revealed();
        }

        let mut unique = flips.clone();
        unique.sort_by_key(|id| id.index());
        unique.dedup();
        assert_eq!(unique.len(), flips.len());
        assert_eq!(observer.revealed().count(), 6);
    }

    #[test]
    fn test_scrolled_toggles_at_threshold() {
        let layout = page();
        let mut observer = ScrollObserver::default();
        let mut toggles = Vec::new();

        for offset in [0.0, 50.0, 51.0, 400.0, 50.0, 49.0, 80.0] {
            if observer.observe(&layout, offset).scrolled_changed {
                toggles.push((offset, observer.scrolled()));
            }
        }

        assert_eq!(toggles, [(51.0, true), (50.0, false), (80.0, true)]);
    }

    #[test]
    fn test_active_first_match_wins() {
        let layout = page();
        // Landing bottom and About top both sit on the probe line.
        assert_eq!(probe_active(&layout, 700.0, 100.0), Some(SectionId::Landing));
        assert_eq!(probe_active(&layout, 701.0, 100.0), Some(SectionId::About));
    }

    #[test]
    fn test_active_is_retained_when_nothing_matches() {
        let layout = SectionLayout::stacked(
            [(SectionId::Landing, 800.0), (SectionId::About, 600.0)],
            2000.0,
            800.0,
        );
        let mut observer = ScrollObserver::default();

        let moved = observer.observe(&layout, 900.0);
        assert_eq!(moved.active_changed, Some(SectionId::About));

        // Probe is inside the footer; no section matches.
        let past = observer.observe(&layout, 1800.0);
        assert_eq!(past.active_changed, None);
        assert_eq!(observer.active(), SectionId::About);
    }

    #[test]
    fn test_unmeasured_layout_is_ignored() {
        let layout = SectionLayout::stacked(
            SectionId::ALL.into_iter().map(|id| (id, 0.0)),
            0.0,
            800.0,
        );
        let mut observer = ScrollObserver::default();
        assert!(observer.observe(&layout, 0.0).is_empty());
        assert_eq!(observer.revealed().count(), 0);
    }
}
