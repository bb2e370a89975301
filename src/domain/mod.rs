mod cell;
mod error;
mod patterns;
mod seed;
mod world;
pub mod render;

pub use cell::Cell;
pub use error::{Result, WorldError};
pub use patterns::{Pattern, presets};
pub use render::Glyphs;
pub use seed::{DEFAULT_DENSITY, Seed};
pub use world::{DEFAULT_HEIGHT, DEFAULT_WIDTH, World};
