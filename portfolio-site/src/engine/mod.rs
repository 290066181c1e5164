pub mod background;
pub mod core;
pub mod scroll;
