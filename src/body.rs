use glam::DVec2;

/// Kinematic state of a single particle.
///
/// Particles of a [`ParticleSimulation`](crate::simulation::ParticleSimulation) share their mass,
/// so a [`Body`] only carries what changes every tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Body {
    /// Position in world space.
    pub position: DVec2,
    /// Velocity in world units per time unit.
    pub velocity: DVec2,
    /// Acceleration applied on the next [`step`](crate::simulation::ParticleSimulation::step).
    pub acceleration: DVec2,
}

impl Body {
    /// A [`Body`] at rest at the given position.
    #[inline]
    pub fn at_rest(position: DVec2) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Speed of the [`Body`].
    #[inline]
    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }
}
