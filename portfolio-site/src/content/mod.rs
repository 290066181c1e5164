//! Immutable portfolio content.
//!
//! The page text lives in `assets/portfolio.json`, embedded at compile time,
//! parsed and validated once at startup, then injected as the
//! [`PortfolioContent`] resource. Nothing mutates it afterwards.

/// Field references linking spawned text back to its source string.
pub mod content_ref;

/// Parse and validation failures.
pub mod error;

/// Record types deserialized from the content document.
pub mod records;

pub use content_ref::ContentRef;
pub use error::ContentError;
pub use records::PortfolioContent;
