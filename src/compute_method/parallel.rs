use crate::body::Body;

/// A [`ComputeMethod`](super::ComputeMethod) using the CPU with [rayon](https://github.com/rayon-rs/rayon).
///
/// Returns once rayon has joined every task, so the tick is complete when the call returns.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerParticle;

impl super::ComputeMethod for PerParticle {
    #[inline]
    fn for_each<F>(&mut self, bodies: &mut [Body], update: F)
    where
        F: Fn(&mut Body) + Send + Sync,
    {
        use rayon::iter::{IntoParallelRefMutIterator, ParallelIterator};

        bodies.par_iter_mut().for_each(update)
    }
}
