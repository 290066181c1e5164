use bevy::prelude::*;

use super::layout::SectionLayout;
use super::section::SectionId;

pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Eased scroll from one offset to another over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
}

impl SmoothScroll {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_finished(&self) -> bool {
        self.duration <= 0.0 || self.elapsed >= self.duration
    }

    /// Step by `delta` seconds and return the new offset. Lands exactly on
    /// the target once finished.
    pub fn advance(&mut self, delta: f32) -> f32 {
        self.elapsed += delta.max(0.0);
        if self.is_finished() {
            return self.to;
        }
        let eased = ease_in_out_cubic(self.elapsed / self.duration);
        self.from + (self.to - self.from) * eased
    }
}

/// Vertical page scroll offset.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct PageScroll {
    offset: f32,
    max: f32,
    animation: Option<SmoothScroll>,
}

impl PageScroll {
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn max_offset(&self) -> f32 {
        self.max
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Update the scrollable range, pulling the offset back inside it.
    pub fn set_max(&mut self, max: f32) {
        self.max = max.max(0.0);
        self.offset = self.offset.clamp(0.0, self.max);
    }

    /// Relative user scroll. Interrupts any running animation.
    pub fn scroll_by(&mut self, delta: f32) {
        self.animation = None;
        self.offset = (self.offset + delta).clamp(0.0, self.max);
    }

    /// Immediate absolute scroll. Interrupts any running animation.
    pub fn jump_to(&mut self, offset: f32) {
        self.animation = None;
        self.offset = offset.clamp(0.0, self.max);
    }

    /// Start an eased scroll towards `target`, replacing any running one.
    pub fn scroll_to(&mut self, target: f32, duration: f32) {
        let target = target.clamp(0.0, self.max);
        if duration <= 0.0 {
            self.jump_to(target);
            return;
        }
        self.animation = Some(SmoothScroll::new(self.offset, target, duration));
    }

    pub fn advance(&mut self, delta: f32) {
        let Some(animation) = self.animation.as_mut() else {
            return;
        };
        self.offset = animation.advance(delta).clamp(0.0, self.max);
        if animation.is_finished() {
            self.animation = None;
        }
    }
}

/// Offset that brings `id` to the top of the viewport, limited to the
/// reachable range. `None` when the section is not mounted.
pub fn scroll_target(layout: &SectionLayout, id: SectionId) -> Option<f32> {
    layout
        .get(id)
        .map(|bounds| bounds.top.min(layout.max_scroll()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scroll(max: f32) -> PageScroll {
        let mut scroll = PageScroll::default();
        scroll.set_max(max);
        scroll
    }

    #[test]
    fn test_easing_endpoints_and_midpoint() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
        assert!(ease_in_out_cubic(0.25) < 0.25);
        assert!(ease_in_out_cubic(0.75) > 0.75);
    }

    #[test]
    fn test_smooth_scroll_lands_on_target() {
        let mut page = scroll(5000.0);
        page.scroll_to(1234.0, 0.6);

        let mut previous = page.offset();
        for _ in 0..40 {
            page.advance(1.0 / 60.0);
            assert!(page.offset() >= previous);
            previous = page.offset();
        }

        assert!(!page.is_animating());
        assert_eq!(page.offset(), 1234.0);
    }

    #[test]
    fn test_user_input_cancels_animation() {
        let mut page = scroll(5000.0);
        page.scroll_to(3000.0, 0.6);
        page.advance(0.1);
        let mid = page.offset();

        page.scroll_by(-40.0);
        assert!(!page.is_animating());
        assert_eq!(page.offset(), (mid - 40.0).max(0.0));

        page.advance(1.0);
        assert_eq!(page.offset(), (mid - 40.0).max(0.0));
    }

    #[test]
    fn test_offsets_clamp_to_range() {
        let mut page = scroll(1000.0);
        page.scroll_by(-50.0);
        assert_eq!(page.offset(), 0.0);
        page.scroll_by(5000.0);
        assert_eq!(page.offset(), 1000.0);

        page.set_max(400.0);
        assert_eq!(page.offset(), 400.0);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let mut page = scroll(1000.0);
        page.scroll_to(700.0, 0.0);
        assert_eq!(page.offset(), 700.0);
        assert!(!page.is_animating());
    }

    #[test]
    fn test_scroll_target_limits_to_reachable_range() {
        let layout = SectionLayout::stacked(
            [
                (SectionId::Landing, 800.0),
                (SectionId::About, 900.0),
                (SectionId::Contact, 300.0),
            ],
            100.0,
            800.0,
        );
        assert_eq!(scroll_target(&layout, SectionId::About), Some(800.0));
        // Contact starts at 1700 but the page only scrolls to 1300.
        assert_eq!(scroll_target(&layout, SectionId::Contact), Some(1300.0));
        assert_eq!(scroll_target(&layout, SectionId::Skills), None);
    }
}
