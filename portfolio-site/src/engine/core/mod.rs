//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, the loading gate and
//! runtime configuration for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with the background, scroll observer, page UI and
/// host bridge plugins registered.
pub mod app_setup;

/// Loading gate state machine.
///
/// Holds the app in `Loading` behind a one-shot timer, then mounts the page.
pub mod app_state;

/// Runtime-tunable settings injected at startup.
pub mod config;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;

/// Logical viewport size tracked from window resize events.
pub mod viewport;
