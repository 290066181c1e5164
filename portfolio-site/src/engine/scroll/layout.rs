use bevy::prelude::*;

use super::section::SectionId;

/// Scrollable page container; its `ScrollPosition` mirrors `PageScroll`.
#[derive(Component)]
pub struct PageRoot;

/// Content below the last section (the footer). Adds to the scrollable height
/// without being a section itself.
#[derive(Component)]
pub struct ScrollTrailer;

/// Document-space extent of one section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub id: SectionId,
    pub top: f32,
    pub height: f32,
}

impl SectionBounds {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Top edge relative to the viewport at the given scroll offset.
    pub fn viewport_top(&self, scroll_y: f32) -> f32 {
        self.top - scroll_y
    }

    pub fn intersects_viewport(&self, scroll_y: f32, viewport_height: f32) -> bool {
        let top = self.viewport_top(scroll_y);
        top <= viewport_height && top + self.height >= 0.0
    }

    /// Share of the section inside the viewport, in `[0, 1]`.
    ///
    /// A zero-height section is either wholly inside (1) or wholly outside (0).
    pub fn visible_fraction(&self, scroll_y: f32, viewport_height: f32) -> f32 {
        let top = self.viewport_top(scroll_y);
        if self.height <= 0.0 {
            return if (0.0..=viewport_height).contains(&top) { 1.0 } else { 0.0 };
        }
        let visible = (top + self.height).min(viewport_height) - top.max(0.0);
        (visible.max(0.0) / self.height).min(1.0)
    }
}

/// Measured section layout of the page column.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct SectionLayout {
    sections: Vec<SectionBounds>,
    content_height: f32,
    viewport_height: f32,
}

impl SectionLayout {
    /// Stack sections top to bottom without gaps, followed by `trailer_height`
    /// of non-section content.
    pub fn stacked(
        heights: impl IntoIterator<Item = (SectionId, f32)>,
        trailer_height: f32,
        viewport_height: f32,
    ) -> Self {
        let mut top = 0.0;
        let sections = heights
            .into_iter()
            .map(|(id, height)| {
                let bounds = SectionBounds {
                    id,
                    top,
                    height: height.max(0.0),
                };
                top = bounds.bottom();
                bounds
            })
            .collect();

        Self {
            sections,
            content_height: top + trailer_height.max(0.0),
            viewport_height,
        }
    }

    pub fn sections(&self) -> &[SectionBounds] {
        &self.sections
    }

    pub fn get(&self, id: SectionId) -> Option<&SectionBounds> {
        self.sections.iter().find(|bounds| bounds.id == id)
    }

    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    /// Largest reachable scroll offset.
    pub fn max_scroll(&self) -> f32 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    /// `false` until layout has produced real sizes.
    pub fn is_measured(&self) -> bool {
        self.content_height > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> SectionLayout {
        SectionLayout::stacked(
            [
                (SectionId::Landing, 800.0),
                (SectionId::About, 600.0),
                (SectionId::Contact, 400.0),
            ],
            100.0,
            800.0,
        )
    }

    #[test]
    fn test_sections_stack_without_gaps() {
        let layout = layout();
        let tops: Vec<_> = layout.sections().iter().map(|s| s.top).collect();
        assert_eq!(tops, [0.0, 800.0, 1400.0]);
        assert_eq!(layout.content_height(), 1900.0);
        assert_eq!(layout.max_scroll(), 1100.0);
    }

    #[test]
    fn test_short_page_cannot_scroll() {
        let layout = SectionLayout::stacked([(SectionId::Landing, 300.0)], 0.0, 800.0);
        assert_eq!(layout.max_scroll(), 0.0);
    }

    #[test]
    fn test_visible_fraction() {
        let layout = layout();
        let about = *layout.get(SectionId::About).unwrap();

        assert_eq!(about.visible_fraction(0.0, 800.0), 0.0);
        assert!((about.visible_fraction(60.0, 800.0) - 0.1).abs() < 1e-6);
        assert_eq!(about.visible_fraction(800.0, 800.0), 1.0);
        assert!((about.visible_fraction(1100.0, 800.0) - 0.5).abs() < 1e-6);
        assert_eq!(about.visible_fraction(1500.0, 800.0), 0.0);
    }

    #[test]
    fn test_zero_height_section_fraction() {
        let bounds = SectionBounds {
            id: SectionId::Skills,
            top: 500.0,
            height: 0.0,
        };
        assert_eq!(bounds.visible_fraction(0.0, 800.0), 1.0);
        assert_eq!(bounds.visible_fraction(600.0, 800.0), 0.0);
    }

    #[test]
    fn test_unmeasured_layout() {
        let layout = SectionLayout::stacked(
            SectionId::ALL.into_iter().map(|id| (id, 0.0)),
            0.0,
            800.0,
        );
        assert!(!layout.is_measured());
        assert!(layout.get(SectionId::Contact).is_some());
        assert!(SectionLayout::default().get(SectionId::Landing).is_none());
    }
}
