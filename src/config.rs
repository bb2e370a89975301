//! Configuration for a driven simulation, loadable from JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::application::Simulation;
use crate::domain::{DEFAULT_HEIGHT, DEFAULT_WIDTH, Glyphs, Seed, World, WorldError};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    World(#[from] WorldError),

    #[error("updates per second must be a positive number, got {0}")]
    InvalidSpeed(f32),
}

/// Engine configuration parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Width of the world grid
    pub width: u32,
    /// Height of the world grid
    pub height: u32,
    /// Initial pattern
    pub seed: Seed,
    /// Render with `#`/`-` instead of box glyphs
    pub ascii: bool,
    /// Steps per second when driven by a host loop
    pub updates_per_second: f32,
    /// Stop after this many frames; run forever when absent
    pub generations: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: Seed::Classic,
            ascii: false,
            updates_per_second: 10.0,
            generations: None,
        }
    }
}

impl EngineConfig {
    /// Read and validate a JSON config file; missing fields take defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(WorldError::InvalidDimensions { width: self.width, height: self.height }.into());
        }
        self.seed.validate()?;
        if !(self.updates_per_second.is_finite() && self.updates_per_second > 0.0) {
            return Err(ConfigError::InvalidSpeed(self.updates_per_second));
        }
        Ok(())
    }

    pub fn glyphs(&self) -> Glyphs {
        if self.ascii { Glyphs::ASCII } else { Glyphs::BOXES }
    }

    pub fn build_world(&self) -> Result<World, ConfigError> {
        self.validate()?;
        Ok(World::seeded(self.width, self.height, &self.seed)?)
    }

    pub fn simulation(&self) -> Result<Simulation, ConfigError> {
        Ok(Simulation::new(self.build_world()?)
            .with_speed(self.updates_per_second)
            .with_glyphs(self.glyphs()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("torus_life_{}_{}.json", name, std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_default_builds_classic_world() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.build_world().unwrap(), World::default());
        assert_eq!(config.glyphs(), Glyphs::BOXES);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"width": 20, "ascii": true, "generations": 5}"#).unwrap();
        assert_eq!(config.width, 20);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert_eq!(config.seed, Seed::Classic);
        assert_eq!(config.glyphs(), Glyphs::ASCII);
        assert_eq!(config.generations, Some(5));
    }

    #[test]
    fn test_load_from_file() {
        let path = write_temp(
            "load",
            r#"{"width": 8, "height": 6, "seed": {"kind": "pattern", "name": "glider", "row": 1, "col": 1}}"#,
        );
        let config = EngineConfig::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        let world = config.build_world().unwrap();
        assert_eq!(world.dimensions(), (8, 6));
        assert_eq!(world.population(), 5);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let path = write_temp("zero", r#"{"width": 0}"#);
        let result = EngineConfig::load(&path);
        fs::remove_file(&path).unwrap();
        assert!(matches!(
            result,
            Err(ConfigError::World(WorldError::InvalidDimensions { width: 0, .. }))
        ));

        let path = write_temp("speed", r#"{"updates_per_second": -2.0}"#);
        let result = EngineConfig::load(&path);
        fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(ConfigError::InvalidSpeed(_))));

        let path = write_temp("json", "{ not json");
        let result = EngineConfig::load(&path);
        fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = EngineConfig::load("/nonexistent/torus_life.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_simulation_takes_speed_and_glyphs() {
        let config = EngineConfig {
            width: 3,
            height: 1,
            seed: Seed::Empty,
            ascii: true,
            updates_per_second: 4.0,
            generations: None,
        };
        let mut sim = config.simulation().unwrap();
        assert_eq!(sim.updates_per_second(), 4.0);
        assert_eq!(sim.frame(), "---");
    }
}
