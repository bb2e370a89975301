//! Step and render throughput across grid sizes

use std::hint::black_box;
use std::time::Instant;
use torus_life::{Seed, World, WorldError};

fn seeded(size: u32) -> Result<World, WorldError> {
    World::seeded(size, size, &Seed::Random { seed: 42, density: 0.25 })
}

fn benchmark_step(mut world: World, iterations: u32) -> f64 {
    let start = Instant::now();
    for _ in 0..iterations {
        world.step();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_render(world: &World, iterations: u32) -> f64 {
    let start = Instant::now();
    for _ in 0..iterations {
        black_box(world.render());
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() -> Result<(), WorldError> {
    println!("=== Toroidal Life Benchmark ===\n");

    let sizes = [64, 128, 256, 512, 1024, 2048];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>16}", "Size", "Step ms", "Render ms", "Mcells/sec");
    println!("{:-<54}", "");

    for size in sizes {
        let world = seeded(size)?;
        let render_ms = benchmark_render(&world, iterations);
        let step_ms = benchmark_step(world, iterations);
        let cells = f64::from(size) * f64::from(size);

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>16.1}",
            format!("{}x{}", size, size),
            step_ms,
            render_ms,
            cells / (step_ms / 1000.0) / 1_000_000.0
        );
    }

    Ok(())
}
