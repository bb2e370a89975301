use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::thread;

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;
use torus_life::{EngineConfig, Seed, domain::DEFAULT_DENSITY, presets};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SeedKind {
    Classic,
    Empty,
    Random,
}

#[derive(Parser, Debug)]
#[command(name = "torus_life", about = "Run a toroidal Game of Life in the terminal")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON config file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    /// Initial pattern
    #[arg(long, value_enum)]
    seed_kind: Option<SeedKind>,

    /// RNG seed for a random world (implies --seed-kind random)
    #[arg(long)]
    seed: Option<u64>,

    /// Fraction of cells alive in a random world
    #[arg(long)]
    density: Option<f64>,

    /// Start from a named preset centered on the grid, e.g. "glider-gun"
    #[arg(short, long, conflicts_with_all = ["seed_kind", "seed", "density"])]
    pattern: Option<String>,

    /// Draw with '#' and '-' instead of box glyphs
    #[arg(long)]
    ascii: bool,

    /// Frames per second
    #[arg(long)]
    fps: Option<f32>,

    /// Stop after this many frames
    #[arg(short = 'n', long)]
    generations: Option<u64>,
}

impl Cli {
    /// Layer command-line flags over the config file (or defaults)
    fn resolve(&self) -> anyhow::Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => EngineConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(fps) = self.fps {
            config.updates_per_second = fps;
        }
        if self.generations.is_some() {
            config.generations = self.generations;
        }
        config.ascii |= self.ascii;

        if let Some(seed) = self.seed_override(&config)? {
            config.seed = seed;
        }

        config.validate()?;
        Ok(config)
    }

    fn seed_override(&self, config: &EngineConfig) -> anyhow::Result<Option<Seed>> {
        if let Some(name) = &self.pattern {
            let (row, col) = presets::by_name(name)
                .map(|p| {
                    (
                        config.height.saturating_sub(p.height) / 2,
                        config.width.saturating_sub(p.width) / 2,
                    )
                })
                .unwrap_or((0, 0));
            return Ok(Some(Seed::Pattern { name: name.clone(), row, col }));
        }

        let random = || Seed::Random {
            seed: self.seed.unwrap_or(0),
            density: self.density.unwrap_or(DEFAULT_DENSITY),
        };
        let random_flags = self.seed.is_some() || self.density.is_some();
        Ok(match self.seed_kind {
            Some(kind @ (SeedKind::Classic | SeedKind::Empty)) if random_flags => {
                bail!("--seed and --density only apply to --seed-kind random, not {kind:?}")
            }
            Some(SeedKind::Classic) => Some(Seed::Classic),
            Some(SeedKind::Empty) => Some(Seed::Empty),
            Some(SeedKind::Random) => Some(random()),
            None if random_flags => Some(random()),
            None => None,
        })
    }
}

/// Whether the loop waits between frames. Output to a terminal is always
/// paced; piped output runs flat out only when it has a frame limit.
fn paced(interactive: bool, generations: Option<u64>) -> bool {
    interactive || generations.is_none()
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(io::stderr)
        .init();

    let config = cli.resolve()?;
    info!(
        width = config.width,
        height = config.height,
        seed = ?config.seed,
        fps = config.updates_per_second,
        "starting simulation"
    );

    let mut sim = config.simulation()?;
    let interval = sim.update_interval();
    let stdout = io::stdout();
    let interactive = stdout.is_terminal();
    let wait_between_frames = paced(interactive, config.generations);
    let mut out = stdout.lock();

    let mut frames = 0u64;
    while config.generations.is_none_or(|limit| frames < limit) {
        let frame = sim.frame();
        if interactive {
            // Clear the screen and home the cursor so frames overwrite each other
            writeln!(out, "\x1b[2J\x1b[H{frame}")?;
        } else {
            writeln!(out, "{frame}\n")?;
        }
        out.flush()?;
        frames += 1;

        if wait_between_frames {
            thread::sleep(interval);
        }
    }

    info!(
        frames,
        generation = sim.world.generation(),
        population = sim.world.population(),
        "simulation finished"
    );
    Ok(())
}
