use crate::body::Body;

/// A [`ComputeMethod`](super::ComputeMethod) visiting bodies in order on the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerParticle;

impl super::ComputeMethod for PerParticle {
    #[inline]
    fn for_each<F>(&mut self, bodies: &mut [Body], update: F)
    where
        F: Fn(&mut Body) + Send + Sync,
    {
        bodies.iter_mut().for_each(update)
    }
}
