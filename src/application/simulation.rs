use std::time::{Duration, Instant};

use tracing::debug;

use crate::domain::{Glyphs, Result, Seed, World, render};

pub const MIN_SPEED: f32 = 1.0;
pub const MAX_SPEED: f32 = 60.0;

/// Simulation drives a world at a fixed update cadence.
/// This is the application layer the host loop talks to: it renders
/// before it steps, so the first frame shown is the seeded pattern.
pub struct Simulation {
    pub world: World,
    pub glyphs: Glyphs,
    pub is_running: bool,
    pub update_timer: f32,
    updates_per_second: f32,
    pub last_step_time_ms: f32,
}

impl Simulation {
    /// Wrap a world, running at 10 updates per second
    pub fn new(world: World) -> Self {
        Self {
            world,
            glyphs: Glyphs::BOXES,
            is_running: true,
            update_timer: 0.0,
            updates_per_second: 10.0,
            last_step_time_ms: 0.0,
        }
    }

    /// Set running state (builder pattern)
    pub fn with_running(mut self, running: bool) -> Self {
        self.is_running = running;
        self
    }

    /// Set the update rate, clamped to a sane range (builder pattern)
    pub fn with_speed(mut self, updates_per_second: f32) -> Self {
        self.updates_per_second = clamp_speed(updates_per_second);
        self
    }

    pub fn with_glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = clamp_speed(self.updates_per_second + delta);
        self
    }

    /// Steps per second, always within [`MIN_SPEED`, `MAX_SPEED`]
    pub fn updates_per_second(&self) -> f32 {
        self.updates_per_second
    }

    /// Clear the world and pause
    pub fn clear(mut self) -> Self {
        self.world.clear();
        self.is_running = false;
        self
    }

    /// Rebuild the world with the same dimensions from `seed` and pause.
    /// The generation counter starts over.
    pub fn reseed(mut self, seed: &Seed) -> Result<Self> {
        let (width, height) = self.world.dimensions();
        self.world = World::seeded(width, height, seed)?;
        self.is_running = false;
        Ok(self)
    }

    /// Time between two steps at the current speed
    pub fn update_interval(&self) -> Duration {
        Duration::from_secs_f32(1.0 / self.updates_per_second)
    }

    /// Current frame as text
    pub fn render(&self) -> String {
        render::render(&self.world, self.glyphs)
    }

    /// Render the current generation, then advance one step
    pub fn frame(&mut self) -> String {
        let frame = self.render();
        self.step();
        frame
    }

    fn step(&mut self) {
        let start = Instant::now();
        self.world.step();
        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
    }

    /// Update simulation by one host frame of `delta_time` seconds.
    /// Steps once the accumulated time reaches the update interval.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            self.step();
            self.update_timer = 0.0;
            debug!(
                generation = self.world.generation(),
                step_ms = self.last_step_time_ms,
                "advanced simulation"
            );
        }

        self
    }
}

/// Keep a speed inside the supported range; NaN falls back to the slowest
fn clamp_speed(updates_per_second: f32) -> f32 {
    if updates_per_second.is_nan() {
        MIN_SPEED
    } else {
        updates_per_second.clamp(MIN_SPEED, MAX_SPEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;

    fn blinker_sim() -> Simulation {
        let mut world = World::new(5, 5).unwrap();
        presets::blinker().place_on(&mut world, 2, 1);
        Simulation::new(world)
    }

    #[test]
    fn test_first_frame_is_the_seed() {
        let mut sim = Simulation::new(World::default());
        let seeded = World::default().render();

        assert_eq!(sim.frame(), seeded);
        assert_eq!(sim.world.generation(), 1);
        assert_ne!(sim.frame(), seeded);
    }

    #[test]
    fn test_frames_follow_the_world() {
        let mut sim = blinker_sim().with_glyphs(Glyphs::ASCII);
        let horizontal = "-----\n-----\n-###-\n-----\n-----";
        let vertical = "-----\n--#--\n--#--\n--#--\n-----";

        assert_eq!(sim.frame(), horizontal);
        assert_eq!(sim.frame(), vertical);
        assert_eq!(sim.frame(), horizontal);
    }

    #[test]
    fn test_tick_waits_for_interval() {
        let sim = blinker_sim().with_speed(10.0);

        let sim = sim.tick(0.05);
        assert_eq!(sim.world.generation(), 0);

        let sim = sim.tick(0.06);
        assert_eq!(sim.world.generation(), 1);
        assert_eq!(sim.update_timer, 0.0);
    }

    #[test]
    fn test_paused_does_not_step() {
        let sim = blinker_sim().with_running(false).tick(10.0);
        assert_eq!(sim.world.generation(), 0);

        let sim = sim.toggle_running().tick(10.0);
        assert_eq!(sim.world.generation(), 1);
    }

    #[test]
    fn test_speed_is_clamped() {
        let sim = blinker_sim().with_speed(500.0);
        assert_eq!(sim.updates_per_second(), MAX_SPEED);

        let sim = sim.adjust_speed(-100.0);
        assert_eq!(sim.updates_per_second(), MIN_SPEED);
        assert_eq!(sim.update_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_degenerate_speeds_keep_a_finite_interval() {
        for speed in [0.0, -3.0, f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let sim = blinker_sim().with_speed(speed);
            let ups = sim.updates_per_second();
            assert!((MIN_SPEED..=MAX_SPEED).contains(&ups), "{speed} became {ups}");
            assert!(sim.update_interval() <= Duration::from_secs(1));

            let sim = sim.adjust_speed(f32::NAN);
            assert_eq!(sim.updates_per_second(), MIN_SPEED);
            assert_eq!(sim.update_interval(), Duration::from_secs(1));
        }
    }

    #[test]
    fn test_reseed_and_clear() {
        let mut sim = blinker_sim();
        sim.frame();

        let sim = sim.reseed(&Seed::Classic).unwrap();
        assert_eq!(sim.world.generation(), 0);
        assert_eq!(sim.world.dimensions(), (5, 5));
        assert!(!sim.is_running);

        let sim = sim.clear();
        assert_eq!(sim.world.population(), 0);

        let err = blinker_sim().reseed(&Seed::Random { seed: 1, density: 2.0 });
        assert!(err.is_err());
    }
}
