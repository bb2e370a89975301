//! Initial patterns for a freshly built world.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::error::{Result, WorldError};
use super::world::classic_cell;
use super::{Cell, World, presets};

/// Fraction of cells alive in a random seed when none is given
pub const DEFAULT_DENSITY: f64 = 0.25;

/// How a world's cells are filled at construction.
/// Every variant is deterministic for fixed dimensions.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Seed {
    /// Cell `i` alive when `i` is even or a multiple of seven
    #[default]
    Classic,
    /// Every cell dead
    Empty,
    /// Each cell alive with probability `density`, drawn from an RNG seeded with `seed`
    Random {
        seed: u64,
        #[serde(default = "default_density")]
        density: f64,
    },
    /// A named preset placed with its top-left corner at (row, col)
    Pattern {
        name: String,
        #[serde(default)]
        row: u32,
        #[serde(default)]
        col: u32,
    },
}

fn default_density() -> f64 {
    DEFAULT_DENSITY
}

impl Seed {
    /// Check the seed without touching a world
    pub fn validate(&self) -> Result<()> {
        match self {
            Seed::Random { density, .. } if !(0.0..=1.0).contains(density) => {
                Err(WorldError::InvalidDensity(*density))
            }
            Seed::Pattern { name, .. } if presets::by_name(name).is_none() => {
                Err(WorldError::UnknownPattern(name.clone()))
            }
            _ => Ok(()),
        }
    }

    /// Overwrite every cell of `world`
    pub(crate) fn apply(&self, world: &mut World) -> Result<()> {
        self.validate()?;

        match self {
            Seed::Classic => world
                .cells_mut()
                .iter_mut()
                .enumerate()
                .for_each(|(idx, cell)| *cell = classic_cell(idx)),
            Seed::Empty => world.clear(),
            Seed::Random { seed, density } => {
                let mut rng = StdRng::seed_from_u64(*seed);
                world
                    .cells_mut()
                    .iter_mut()
                    .for_each(|cell| *cell = Cell::from_alive(rng.random_bool(*density)));
            }
            Seed::Pattern { name, row, col } => {
                let pattern = presets::by_name(name)
                    .ok_or_else(|| WorldError::UnknownPattern(name.clone()))?;
                world.clear();
                pattern.place_on(world, *row, *col);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_matches_default_world() {
        let world = World::seeded(64, 64, &Seed::Classic).unwrap();
        assert_eq!(world, World::default());
    }

    #[test]
    fn test_classic_rule() {
        let world = World::seeded(8, 2, &Seed::Classic).unwrap();
        let alive: Vec<_> = world
            .cells()
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(idx, _)| idx)
            .collect();
        assert_eq!(alive, vec![0, 2, 4, 6, 7, 8, 10, 12, 14]);
    }

    #[test]
    fn test_random_is_reproducible() {
        let seed = Seed::Random { seed: 42, density: 0.3 };
        let a = World::seeded(32, 32, &seed).unwrap();
        let b = World::seeded(32, 32, &seed).unwrap();
        assert_eq!(a, b);

        let other = World::seeded(32, 32, &Seed::Random { seed: 43, density: 0.3 }).unwrap();
        assert_ne!(a, other);
    }

    #[test]
    fn test_random_density_extremes() {
        let full = World::seeded(10, 10, &Seed::Random { seed: 1, density: 1.0 }).unwrap();
        assert_eq!(full.population(), 100);
        let empty = World::seeded(10, 10, &Seed::Random { seed: 1, density: 0.0 }).unwrap();
        assert_eq!(empty.population(), 0);
    }

    #[test]
    fn test_invalid_density_rejected() {
        for density in [-0.1, 1.5, f64::NAN] {
            let result = World::seeded(4, 4, &Seed::Random { seed: 0, density });
            assert!(matches!(result, Err(WorldError::InvalidDensity(_))));
        }
    }

    #[test]
    fn test_pattern_seed() {
        let seed = Seed::Pattern { name: "block".into(), row: 1, col: 2 };
        let world = World::seeded(6, 6, &seed).unwrap();
        assert_eq!(world.population(), 4);
        assert_eq!(world.get(1, 2), Some(Cell::Alive));
        assert_eq!(world.get(2, 3), Some(Cell::Alive));

        let unknown = Seed::Pattern { name: "spaceship".into(), row: 0, col: 0 };
        assert_eq!(
            World::seeded(6, 6, &unknown),
            Err(WorldError::UnknownPattern("spaceship".into()))
        );
    }

    #[test]
    fn test_seed_from_json() {
        let seed: Seed = serde_json::from_str(r#"{"kind":"random","seed":7}"#).unwrap();
        assert_eq!(seed, Seed::Random { seed: 7, density: DEFAULT_DENSITY });

        let seed: Seed = serde_json::from_str(r#"{"kind":"pattern","name":"glider"}"#).unwrap();
        assert_eq!(seed, Seed::Pattern { name: "glider".into(), row: 0, col: 0 });

        let seed: Seed = serde_json::from_str(r#"{"kind":"empty"}"#).unwrap();
        assert_eq!(seed, Seed::Empty);
    }
}
