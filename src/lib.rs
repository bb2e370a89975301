// Domain layer - the world, its rules, seeds and text rendering
pub mod domain;

// Application layer - drives a world at the host's cadence
pub mod application;

pub mod config;

// Boundary layer - bindings for a JavaScript host
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-exports for convenience
pub use application::Simulation;
pub use config::{ConfigError, EngineConfig};
pub use domain::{Cell, Glyphs, Pattern, Seed, World, WorldError, presets};
