#[cfg(feature = "parallel")]
/// Compute methods that use multiple CPU threads.
pub mod parallel;

/// Compute methods that use one CPU thread.
pub mod sequential;

use crate::body::Body;

/// Trait for strategies applying an independent update to every [`Body`] of a simulation.
///
/// Updates never read another body, so an implementation is free to visit them in any order or
/// concurrently. It must not return before every body has been updated.
///
/// # Example
///
/// ```
/// # use driftbox::prelude::*;
/// struct EveryOther;
///
/// impl ComputeMethod for EveryOther {
///     fn for_each<F>(&mut self, bodies: &mut [Body], update: F)
///     where
///         F: Fn(&mut Body) + Send + Sync,
///     {
///         bodies.iter_mut().step_by(2).for_each(update)
///     }
/// }
/// ```
pub trait ComputeMethod {
    /// Calls `update` once on each body.
    fn for_each<F>(&mut self, bodies: &mut [Body], update: F)
    where
        F: Fn(&mut Body) + Send + Sync;
}

impl<C> ComputeMethod for &mut C
where
    C: ComputeMethod,
{
    #[inline]
    fn for_each<F>(&mut self, bodies: &mut [Body], update: F)
    where
        F: Fn(&mut Body) + Send + Sync,
    {
        (**self).for_each(bodies, update)
    }
}
