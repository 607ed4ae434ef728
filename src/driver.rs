//! Per-frame wiring of a [`ParticleSimulation`] to its input and its [`ViewportTransform`].
//!
//! The [`Driver`] is what a windowing loop calls once per frame: it has no notion of time or
//! scheduling, it just advances the simulation by the [`Scene`]'s fixed time step.

use glam::DVec2;
use rand::Rng;

use crate::{
    bounds::Bounds,
    error::Result,
    simulation::ParticleSimulation,
    viewport::{Raster, ViewportTransform},
};

/// Construction-time parameters of a scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scene {
    /// Number of particles.
    pub particle_count: usize,
    /// Mass of each particle.
    pub particle_mass: f64,
    /// Left edge of the box in world units.
    pub x_low: f64,
    /// Right edge of the box in world units.
    pub x_high: f64,
    /// Magnitude of the force exerted by the attractor.
    pub attractor_force: f64,
    /// Fraction of velocity kept after a wall collision.
    pub wall_damping: f64,
    /// Simulated time elapsed per tick.
    pub time_step: f64,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            particle_count: 1000,
            particle_mass: 1e5,
            x_low: -10.0,
            x_high: 10.0,
            attractor_force: 100.0,
            wall_damping: 0.5,
            time_step: 2.0,
        }
    }
}

impl Scene {
    /// Bounds spanning `[x_low, x_high]` horizontally, centered vertically on zero with the aspect ratio of `raster`.
    ///
    /// ```
    /// # use driftbox::prelude::*;
    /// let scene = Scene::default();
    /// let bounds = scene.bounds_for(&Raster::new(800.0, 600.0)?)?;
    ///
    /// assert_eq!(bounds.min().y, -7.5);
    /// assert_eq!(bounds.max().y, 7.5);
    /// # Ok::<(), driftbox::Error>(())
    /// ```
    pub fn bounds_for(&self, raster: &Raster) -> Result<Bounds> {
        let y_high = raster.height() / (2.0 * raster.width()) * (self.x_high - self.x_low);
        Bounds::new(self.x_low, self.x_high, -y_high, y_high)
    }

    /// Builds a [`Driver`] for `raster`, sampling positions with [`rand::thread_rng`].
    pub fn build(&self, raster: Raster) -> Result<Driver> {
        self.build_with_rng(raster, &mut rand::thread_rng())
    }

    /// Builds a [`Driver`] for `raster`: a simulation inside [`bounds_for`](Scene::bounds_for) and a
    /// viewport showing exactly those bounds.
    pub fn build_with_rng<R: Rng + ?Sized>(&self, raster: Raster, rng: &mut R) -> Result<Driver> {
        let bounds = self.bounds_for(&raster)?;
        let simulation = ParticleSimulation::with_rng(
            self.particle_count,
            self.particle_mass,
            self.wall_damping,
            bounds,
            rng,
        )?;
        let viewport = ViewportTransform::fitting(&bounds);

        log::debug!("Built {self:?} for {raster:?}");

        Ok(Driver {
            scene: *self,
            simulation,
            viewport,
            raster,
        })
    }
}

/// Pointer button held down over the raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Attracts particles toward the pointer.
    Primary,
    /// Pushes particles away from the pointer.
    Secondary,
}

/// Input sampled once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    /// Nothing is steering the particles; they coast.
    Idle,
    /// Device orientation in degrees.
    ///
    /// The attractor sits at world point `(left_right, -front_back)`: tilting the device to the
    /// right pulls particles right, tilting its top edge down pulls them down.
    Tilt {
        /// Front-to-back tilt, positive when the top edge tips toward the user.
        front_back: f64,
        /// Left-to-right tilt, positive when the right edge tips down.
        left_right: f64,
    },
    /// A pointer button held at a pixel of the raster.
    Pointer {
        /// Pointer location in pixel space.
        pixel: DVec2,
        /// Button held down.
        button: PointerButton,
    },
}

/// A [`ParticleSimulation`] together with the view it is drawn through.
#[derive(Debug, Clone)]
pub struct Driver {
    scene: Scene,
    simulation: ParticleSimulation,
    viewport: ViewportTransform,
    raster: Raster,
}

impl Driver {
    /// Scene this driver was built from.
    #[inline]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Simulation being driven.
    #[inline]
    pub fn simulation(&self) -> &ParticleSimulation {
        &self.simulation
    }

    /// Mutable access to the simulation being driven.
    #[inline]
    pub fn simulation_mut(&mut self) -> &mut ParticleSimulation {
        &mut self.simulation
    }

    /// Current viewport.
    #[inline]
    pub fn viewport(&self) -> &ViewportTransform {
        &self.viewport
    }

    /// Current raster.
    #[inline]
    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    /// Advances the simulation by one time step, then sets the accelerations for the next one from `input`.
    pub fn tick(&mut self, input: &Input) -> Result<()> {
        self.simulation.step(self.scene.time_step)?;

        let force = self.scene.attractor_force;
        match *input {
            Input::Idle => self.simulation.reset_acceleration(),
            Input::Tilt {
                front_back,
                left_right,
            } => {
                let attractor = DVec2::new(left_right, -front_back);
                self.simulation.apply_attractor(force, attractor)?
            }
            Input::Pointer { pixel, button } => {
                let world = self.viewport.pixel_to_world(pixel, &self.raster);
                let force = match button {
                    PointerButton::Primary => force,
                    PointerButton::Secondary => -force,
                };
                self.simulation.apply_attractor(force, world)?
            }
        }

        Ok(())
    }

    /// Switches to a new raster, resizing the viewport to its aspect ratio.
    pub fn resize(&mut self, raster: Raster) {
        self.raster = raster;
        self.viewport.resize(&raster);
    }

    /// Iterates over the position of every particle in pixel space, in index order.
    pub fn pixel_positions(&self) -> impl ExactSizeIterator<Item = DVec2> + '_ {
        self.simulation
            .positions()
            .map(|position| self.viewport.world_to_pixel(position, &self.raster))
    }
}
