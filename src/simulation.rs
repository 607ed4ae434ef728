use glam::DVec2;
use rand::Rng;

use crate::{
    body::Body,
    bounds::Bounds,
    compute_method::{sequential, ComputeMethod},
    error::{ensure_finite, Error, Result},
    force::Attractor,
};

/// A fixed set of equal-mass particles moving inside rectangular [`Bounds`].
///
/// Every tick, the driver calls [`step`](ParticleSimulation::step) then one of
/// [`apply_attractor`](ParticleSimulation::apply_attractor) or
/// [`reset_acceleration`](ParticleSimulation::reset_acceleration), and reads the
/// [`positions`](ParticleSimulation::positions) back to draw them.
///
/// Positions are always inside the [`Bounds`], edges included.
///
/// ```
/// # use driftbox::prelude::*;
/// # use glam::DVec2;
/// let bounds = Bounds::new(-10.0, 10.0, -10.0, 10.0)?;
/// let mut simulation = ParticleSimulation::new(500, 1.0, 0.5, bounds)?;
///
/// for _ in 0..60 {
///     simulation.step(1.0 / 60.0)?;
///     simulation.apply_attractor(100.0, DVec2::new(2.0, -3.0))?;
/// }
///
/// assert!(simulation.positions().all(|position| bounds.contains(position)));
/// # Ok::<(), driftbox::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ParticleSimulation {
    bodies: Vec<Body>,
    mass: f64,
    wall_damping: f64,
    bounds: Bounds,
}

impl ParticleSimulation {
    /// Creates a new [`ParticleSimulation`] with positions sampled using [`rand::thread_rng`].
    ///
    /// See [`with_rng`](ParticleSimulation::with_rng).
    pub fn new(count: usize, mass: f64, wall_damping: f64, bounds: Bounds) -> Result<Self> {
        Self::with_rng(count, mass, wall_damping, bounds, &mut rand::thread_rng())
    }

    /// Creates a new [`ParticleSimulation`] of `count` particles at rest, placed uniformly at random inside `bounds`.
    ///
    /// `wall_damping` is the fraction of velocity kept, reversed, by a particle hitting a wall.
    ///
    /// Fails with [`Error::InvalidArgument`] if `mass` is not strictly positive and finite or if
    /// `wall_damping` is not in `[0, 1]`.
    pub fn with_rng<R: Rng + ?Sized>(
        count: usize,
        mass: f64,
        wall_damping: f64,
        bounds: Bounds,
        rng: &mut R,
    ) -> Result<Self> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "mass must be positive and finite, got {mass}"
            )));
        }

        if !(0.0..=1.0).contains(&wall_damping) {
            return Err(Error::InvalidArgument(format!(
                "wall damping must be in [0, 1], got {wall_damping}"
            )));
        }

        let bodies = (0..count)
            .map(|_| Body::at_rest(bounds.sample(rng)))
            .collect();

        log::debug!(
            "Created simulation of {count} particles (mass {mass}, damping {wall_damping})"
        );

        Ok(Self {
            bodies,
            mass,
            wall_damping,
            bounds,
        })
    }

    /// Number of particles.
    #[inline]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the simulation has no particles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Mass shared by every particle.
    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Fraction of velocity kept after a wall collision.
    #[inline]
    pub fn wall_damping(&self) -> f64 {
        self.wall_damping
    }

    /// Region the particles are confined to.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// State of every particle, in index order.
    #[inline]
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// State of the particle at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    /// Iterates over the world position of every particle, in index order.
    #[inline]
    pub fn positions(&self) -> impl ExactSizeIterator<Item = DVec2> + '_ {
        self.bodies.iter().map(|body| body.position)
    }

    /// Overwrites the position and velocity of the particle at `index`, leaving its acceleration untouched.
    ///
    /// Fails with [`Error::InvalidArgument`] if `index` is out of range, if `position` lies outside
    /// the [`Bounds`] or if a value is not finite.
    pub fn set_state(&mut self, index: usize, position: DVec2, velocity: DVec2) -> Result<()> {
        let len = self.bodies.len();
        let bounds = self.bounds;

        let body = self.bodies.get_mut(index).ok_or_else(|| {
            Error::InvalidArgument(format!("particle index {index} out of range for {len}"))
        })?;

        ensure_finite("velocity x", velocity.x)?;
        ensure_finite("velocity y", velocity.y)?;
        if !bounds.contains(position) {
            return Err(Error::InvalidArgument(format!(
                "position {position} lies outside {bounds:?}"
            )));
        }

        body.position = position;
        body.velocity = velocity;

        Ok(())
    }

    /// Sets the acceleration of every particle to zero.
    #[inline]
    pub fn reset_acceleration(&mut self) {
        self.reset_acceleration_with(sequential::PerParticle)
    }

    /// Sets the acceleration of every particle to zero using the provided [`ComputeMethod`].
    pub fn reset_acceleration_with<C: ComputeMethod>(&mut self, mut cm: C) {
        cm.for_each(&mut self.bodies, |body| body.acceleration = DVec2::ZERO);
    }

    /// Replaces the acceleration of every particle with a pull of constant magnitude `force` toward `attractor`.
    ///
    /// Each particle gets `force / mass` along the unit vector pointing from it to the attractor,
    /// whatever its distance. A particle sitting exactly on the attractor has no defined direction;
    /// it is given a zero acceleration rather than a NaN one.
    ///
    /// Fails with [`Error::InvalidArgument`] if a value is not finite, in which case no particle is updated.
    #[inline]
    pub fn apply_attractor(&mut self, force: f64, attractor: DVec2) -> Result<()> {
        self.apply_attractor_with(force, attractor, sequential::PerParticle)
    }

    /// [`apply_attractor`](ParticleSimulation::apply_attractor) using the provided [`ComputeMethod`].
    pub fn apply_attractor_with<C: ComputeMethod>(
        &mut self,
        force: f64,
        attractor: DVec2,
        mut cm: C,
    ) -> Result<()> {
        let attractor = Attractor::new(force, attractor)?;
        let mass = self.mass;

        if log::log_enabled!(log::Level::Trace) {
            let coincident = self
                .positions()
                .filter(|&position| attractor.coincides_with(position))
                .count();
            log::trace!("Attracting toward {attractor:?}, {coincident} coincident particle(s)");
        }

        cm.for_each(&mut self.bodies, |body| {
            body.acceleration = attractor.acceleration_at(body.position, mass);
        });

        Ok(())
    }

    /// Advances every particle by `dt` using semi-implicit Euler integration.
    ///
    /// See [`step_with`](ParticleSimulation::step_with).
    #[inline]
    pub fn step(&mut self, dt: f64) -> Result<()> {
        self.step_with(dt, sequential::PerParticle)
    }

    /// Advances every particle by `dt` using the provided [`ComputeMethod`].
    ///
    /// The velocity is updated from the current acceleration first, then the position from the new
    /// velocity. Walls are handled per axis against that tentative position: a particle that would
    /// leave the [`Bounds`] is placed exactly on the wall instead and its velocity on that axis is
    /// reversed and scaled by the wall damping. The opposite wall is not checked again in the same
    /// step.
    ///
    /// Floating-point overflow never moves a particle out of the [`Bounds`]: a velocity that overflows
    /// sends the particle to the wall it was heading for and is then zeroed on that axis.
    ///
    /// Fails with [`Error::InvalidArgument`] if `dt` is not finite, in which case no particle is updated.
    pub fn step_with<C: ComputeMethod>(&mut self, dt: f64, mut cm: C) -> Result<()> {
        ensure_finite("time step", dt)?;

        let (min, max) = (self.bounds.min(), self.bounds.max());
        let wall_damping = self.wall_damping;

        cm.for_each(&mut self.bodies, |body| {
            body.velocity += body.acceleration * dt;
            let tentative = body.position + body.velocity * dt;

            for axis in 0..2 {
                if tentative[axis] < min[axis] {
                    body.position[axis] = min[axis];
                    body.velocity[axis] *= -wall_damping;
                } else if tentative[axis] > max[axis] {
                    body.position[axis] = max[axis];
                    body.velocity[axis] *= -wall_damping;
                } else if tentative[axis].is_nan() {
                    body.velocity[axis] = 0.0;
                } else {
                    body.position[axis] = tentative[axis];
                }

                // An overflowed velocity cannot be reflected; the particle stops on that axis.
                if !body.velocity[axis].is_finite() {
                    body.velocity[axis] = 0.0;
                }
            }
        });

        log::trace!("Stepped {} particles by {dt}", self.bodies.len());

        Ok(())
    }
}
