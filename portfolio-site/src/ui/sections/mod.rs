//! Page sections, one spawn function per section in document order.
//!
//! Each function takes the page root's child spawner and the content resource
//! and builds the full subtree for its section. Every text node sourced from
//! [`PortfolioContent`](crate::content::PortfolioContent) carries a
//! [`ContentRef`](crate::content::ContentRef).

pub mod about;
pub mod contact;
pub mod experience;
pub mod footer;
pub mod landing;
pub mod projects;
pub mod skills;
