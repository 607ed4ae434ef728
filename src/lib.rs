//! # Driftbox
//!
//! Driftbox is a crate providing a small real-time particle simulation: a box of equal-mass
//! particles pulled around by a single attractor, and the coordinate transforms needed to draw
//! them on a pixel surface.
//!
//! ## Goals
//!
//! The simulation core is meant to be driven by an existing windowing or animation loop. It does
//! not create windows, read input devices or draw anything; it exposes synchronous operations that
//! the loop calls once per frame, and hands back positions to draw.
//!
//! The attractor pulls every particle with the same force magnitude whatever its distance. Particles
//! bounce off the walls of the box, keeping a configurable fraction of their velocity.
//!
//! Per-particle updates are independent of each other and can run on multiple threads thanks to
//! [rayon](https://github.com/rayon-rs/rayon). Enable the "parallel" feature to access the relevant
//! [`ComputeMethod`](compute_method::ComputeMethod).
//!
//! # Using Driftbox
//!
//! ## Setting up the simulation
//!
//! Create [`Bounds`](bounds::Bounds) for the box, then a
//! [`ParticleSimulation`](simulation::ParticleSimulation) with the number of particles, their mass
//! and the wall damping.
//!
//! ```
//! # use driftbox::prelude::*;
//! let bounds = Bounds::new(-10.0, 10.0, -7.5, 7.5)?;
//! let mut simulation = ParticleSimulation::new(1000, 1e5, 0.5, bounds)?;
//! # Ok::<(), driftbox::Error>(())
//! ```
//!
//! ## Stepping and drawing
//!
//! Every frame, advance the simulation, set the attraction for the next step and convert the
//! positions to pixels with a [`ViewportTransform`](viewport::ViewportTransform).
//!
//! ```
//! # use driftbox::prelude::*;
//! # use glam::DVec2;
//! # const DT: f64 = 2.0;
//! # let bounds = Bounds::new(-10.0, 10.0, -7.5, 7.5)?;
//! # let mut simulation = ParticleSimulation::new(1000, 1e5, 0.5, bounds)?;
//! let viewport = ViewportTransform::fitting(&bounds);
//! let raster = Raster::new(800.0, 600.0)?;
//!
//! simulation.step(DT)?;
//! simulation.apply_attractor(100.0, DVec2::new(3.0, -1.0))?;
//!
//! for position in simulation.positions() {
//!     let pixel = viewport.world_to_pixel(position, &raster);
//!     // draw a circle at `pixel`...
//! #   assert!(pixel.x >= 0.0 && pixel.x <= 800.0 + 1e-9);
//! }
//! # Ok::<(), driftbox::Error>(())
//! ```
//!
//! ## Driving a whole scene
//!
//! [`Scene`](driver::Scene) bundles the usual parameters and builds a [`Driver`](driver::Driver)
//! that steps the simulation from per-frame [`Input`](driver::Input).
//!
//! ```
//! # use driftbox::prelude::*;
//! let mut driver = Scene::default().build(Raster::new(800.0, 600.0)?)?;
//!
//! driver.tick(&Input::Tilt {
//!     front_back: 10.0,
//!     left_right: -5.0,
//! })?;
//! let pixels: Vec<_> = driver.pixel_positions().collect();
//! # assert_eq!(pixels.len(), 1000);
//! # Ok::<(), driftbox::Error>(())
//! ```

#![warn(missing_docs)]

/// Per-particle kinematic state.
pub mod body;

/// Rectangular regions of world space.
pub mod bounds;

/// Trait for applying per-particle updates and types implementing it for the user to choose from.
pub mod compute_method;

pub mod driver;

mod error;

pub mod force;

/// The particle simulation itself.
pub mod simulation;

pub mod viewport;

pub use error::{Error, Result};

/// Everything needed to use the crate.
pub mod prelude {
    pub use crate::body::Body;
    pub use crate::bounds::Bounds;
    pub use crate::compute_method::*;
    pub use crate::driver::{Driver, Input, PointerButton, Scene};
    pub use crate::force::Attractor;
    pub use crate::simulation::ParticleSimulation;
    pub use crate::viewport::{Raster, ViewportTransform};
    pub use crate::Error;
}
