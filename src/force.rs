//! The attractor force law.
//!
//! The attraction has a constant magnitude: a particle one unit away from the attractor is pulled
//! exactly as hard as one a thousand units away. It is not an inverse-square law.

use glam::DVec2;

use crate::error::{ensure_finite, Result};

/// A single point pulling every particle toward it with the same force magnitude.
///
/// A negative [`force`](Attractor::force) pushes particles away instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attractor {
    /// Magnitude of the force exerted on each particle.
    pub force: f64,
    /// Location of the attractor in world space.
    pub position: DVec2,
}

impl Attractor {
    /// Creates a new [`Attractor`], failing if any value is not finite.
    pub fn new(force: f64, position: DVec2) -> Result<Self> {
        ensure_finite("attractor force", force)?;
        ensure_finite("attractor x", position.x)?;
        ensure_finite("attractor y", position.y)?;

        Ok(Self { force, position })
    }

    /// Acceleration of a particle of the given mass located at `particle`.
    ///
    /// A particle sitting exactly on the attractor has no defined direction and gets a zero acceleration.
    ///
    /// ```
    /// # use driftbox::prelude::*;
    /// # use glam::DVec2;
    /// let attractor = Attractor::new(100.0, DVec2::ZERO)?;
    /// let acceleration = attractor.acceleration_at(DVec2::new(3.0, 4.0), 1.0);
    ///
    /// assert!(acceleration.abs_diff_eq(DVec2::new(-60.0, -80.0), 1e-9));
    /// assert_eq!(attractor.acceleration_at(DVec2::ZERO, 1.0), DVec2::ZERO);
    /// # Ok::<(), driftbox::Error>(())
    /// ```
    #[inline]
    pub fn acceleration_at(&self, particle: DVec2, mass: f64) -> DVec2 {
        self.direction_from(particle) * self.force / mass
    }

    /// Unit vector from `particle` toward the attractor, zero only when they coincide.
    ///
    /// The displacement is rescaled to a largest component of one before normalizing, so that
    /// squaring it can neither overflow nor underflow.
    fn direction_from(&self, particle: DVec2) -> DVec2 {
        let mut dir = self.position - particle;
        if !dir.is_finite() {
            dir = self.position * 0.5 - particle * 0.5;
        }

        let scale = dir.abs().max_element();
        if scale == 0.0 {
            return DVec2::ZERO;
        }

        (dir / scale).normalize_or_zero()
    }

    /// Whether `particle` sits exactly on the attractor.
    #[inline]
    pub fn coincides_with(&self, particle: DVec2) -> bool {
        self.position == particle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn pulls_toward_the_attractor() {
        let attractor = Attractor::new(100.0, DVec2::ZERO).unwrap();
        let acceleration = attractor.acceleration_at(DVec2::new(3.0, 4.0), 1.0);

        assert!(acceleration.abs_diff_eq(DVec2::new(-60.0, -80.0), EPSILON));
    }

    #[test]
    fn magnitude_does_not_depend_on_distance() {
        let attractor = Attractor::new(7.5, DVec2::new(1.0, -2.0)).unwrap();
        let mass = 3.0;

        let near = attractor.acceleration_at(DVec2::new(1.5, -2.0), mass);
        let far = attractor.acceleration_at(DVec2::new(-400.0, 900.0), mass);

        assert!((near.length() - far.length()).abs() < EPSILON);
        assert!((near.length() - 7.5 / mass).abs() < EPSILON);
    }

    #[test]
    fn negative_force_repels() {
        let attractor = Attractor::new(-2.0, DVec2::ZERO).unwrap();
        let acceleration = attractor.acceleration_at(DVec2::new(0.0, 5.0), 1.0);

        assert!(acceleration.abs_diff_eq(DVec2::new(0.0, 2.0), EPSILON));
    }

    #[test]
    fn coincident_particle_gets_no_acceleration() {
        let position = DVec2::new(0.25, 0.5);
        let attractor = Attractor::new(100.0, position).unwrap();

        assert!(attractor.coincides_with(position));
        assert_eq!(attractor.acceleration_at(position, 2.0), DVec2::ZERO);
    }

    #[test]
    fn far_and_near_particles_feel_the_full_force() {
        let far = Attractor::new(100.0, DVec2::new(1e200, 0.0)).unwrap();
        assert!(far
            .acceleration_at(DVec2::ZERO, 1.0)
            .abs_diff_eq(DVec2::new(100.0, 0.0), EPSILON));

        let near = Attractor::new(100.0, DVec2::ZERO).unwrap();
        assert!(near
            .acceleration_at(DVec2::new(1e-300, 0.0), 1.0)
            .abs_diff_eq(DVec2::new(-100.0, 0.0), EPSILON));
        assert!(near
            .acceleration_at(DVec2::new(0.0, -f64::MIN_POSITIVE / 4.0), 1.0)
            .abs_diff_eq(DVec2::new(0.0, 100.0), EPSILON));
    }

    #[test]
    fn overflowing_displacement_keeps_its_direction() {
        let attractor = Attractor::new(2.0, DVec2::new(f64::MAX, f64::MAX)).unwrap();
        let acceleration = attractor.acceleration_at(DVec2::new(-f64::MAX, -f64::MAX), 1.0);

        let expected = DVec2::new(1.0, 1.0).normalize() * 2.0;
        assert!(acceleration.abs_diff_eq(expected, EPSILON));
    }

    #[test]
    fn rejects_non_finite_inputs() {
        assert!(Attractor::new(f64::NAN, DVec2::ZERO).is_err());
        assert!(Attractor::new(1.0, DVec2::new(f64::INFINITY, 0.0)).is_err());
        assert!(Attractor::new(1.0, DVec2::new(0.0, f64::NAN)).is_err());
    }
}
