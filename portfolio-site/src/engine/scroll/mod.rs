//! Scroll and visibility tracking for the page column.
//!
//! `PageScroll` owns the scroll offset. Each frame the measured
//! `SectionLayout` and that offset feed the `ScrollObserver`, which derives
//! one-way reveal flags, the scrolled header flag and the active section.

/// Document-space section bounds and page container markers.
pub mod layout;

/// Reveal, scrolled and active-section state.
pub mod observer;

/// Section identifiers in document order.
pub mod section;

/// Eased programmatic scrolling and the page scroll offset.
pub mod smooth;

/// Bevy plugin, events and systems.
pub mod systems;

pub use layout::{PageRoot, ScrollTrailer, SectionLayout};
pub use observer::ScrollObserver;
pub use section::{PageSection, SectionId};
pub use smooth::PageScroll;
pub use systems::{ActiveSectionChanged, ScrollObserverPlugin, ScrollToSection, SectionRevealed};
