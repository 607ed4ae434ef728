//! Headless driver: runs a scene for a number of ticks with a slowly circling tilt and logs what
//! the particles are doing.

use clap::Parser;
use driftbox::prelude::*;
use glam::DVec2;
use rand::{rngs::StdRng, SeedableRng};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Number of ticks to run.
    #[arg(long, default_value_t = 600)]
    ticks: usize,

    /// Number of particles.
    #[arg(long, default_value_t = 1000)]
    particles: usize,

    /// Fraction of velocity kept after a wall collision.
    #[arg(long, default_value_t = 0.5)]
    wall_damping: f64,

    /// Raster width in pixels.
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Raster height in pixels.
    #[arg(long, default_value_t = 720.0)]
    height: f64,

    /// Seed for the initial positions.
    #[arg(long)]
    seed: Option<u64>,

    /// Log a summary every this many ticks.
    #[arg(long, default_value_t = 60)]
    report_every: usize,
}

fn tilt_at(tick: usize) -> Input {
    let angle = tick as f64 * 0.01;
    Input::Tilt {
        front_back: 8.0 * angle.sin(),
        left_right: 8.0 * angle.cos(),
    }
}

fn report(tick: usize, driver: &Driver) {
    let simulation = driver.simulation();
    let len = simulation.len().max(1) as f64;

    let centroid = simulation.positions().sum::<DVec2>() / len;
    let mean_speed = simulation.bodies().iter().map(Body::speed).sum::<f64>() / len;
    let centroid_pixel = driver.viewport().world_to_pixel(centroid, driver.raster());

    log::info!(
        "tick {tick}: centroid {centroid:.3} ({centroid_pixel:.1} px), speed {mean_speed:.5}"
    );
}

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let scene = Scene {
        particle_count: args.particles,
        wall_damping: args.wall_damping,
        ..Scene::default()
    };
    let raster = Raster::new(args.width, args.height)?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut driver = scene.build_with_rng(raster, &mut rng)?;

    log::info!("Running {scene:?} on a {} × {} raster", args.width, args.height);

    for tick in 0..args.ticks {
        driver.tick(&tilt_at(tick))?;

        if args.report_every > 0 && (tick + 1) % args.report_every == 0 {
            report(tick + 1, &driver);
        }
    }

    Ok(())
}
