use glam::DVec2;
use rand::Rng;

use crate::error::{Error, Result};

/// An axis-aligned rectangle of world space that particles are confined to.
///
/// Both axes are strictly increasing and finite: `min.x < max.x` and `min.y < max.y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    min: DVec2,
    max: DVec2,
}

impl Bounds {
    /// Creates new [`Bounds`] spanning `[x_low, x_high] × [y_low, y_high]`.
    ///
    /// Fails with [`Error::InvalidArgument`] if a pair is non-increasing or a value is not finite.
    ///
    /// ```
    /// # use driftbox::prelude::*;
    /// let bounds = Bounds::new(-10.0, 10.0, -5.0, 5.0)?;
    /// assert_eq!(bounds.size(), glam::DVec2::new(20.0, 10.0));
    ///
    /// assert!(Bounds::new(1.0, 1.0, 0.0, 1.0).is_err());
    /// # Ok::<(), driftbox::Error>(())
    /// ```
    pub fn new(x_low: f64, x_high: f64, y_low: f64, y_high: f64) -> Result<Self> {
        for (axis, low, high) in [("x", x_low, x_high), ("y", y_low, y_high)] {
            if !(low.is_finite() && high.is_finite() && low < high) {
                return Err(Error::InvalidArgument(format!(
                    "{axis} bounds must be finite and increasing, got [{low}, {high}]"
                )));
            }
        }

        Ok(Self {
            min: DVec2::new(x_low, y_low),
            max: DVec2::new(x_high, y_high),
        })
    }

    /// Lower corner `(x_low, y_low)`.
    #[inline]
    pub fn min(&self) -> DVec2 {
        self.min
    }

    /// Upper corner `(x_high, y_high)`.
    #[inline]
    pub fn max(&self) -> DVec2 {
        self.max
    }

    /// Top-left corner in world space (world Y points up), `(x_low, y_high)`.
    #[inline]
    pub fn top_left(&self) -> DVec2 {
        DVec2::new(self.min.x, self.max.y)
    }

    /// Width and height of the [`Bounds`].
    #[inline]
    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }

    /// Center of the [`Bounds`].
    #[inline]
    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }

    /// Whether the point lies inside the [`Bounds`], edges included.
    #[inline]
    pub fn contains(&self, point: DVec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Samples a point uniformly, each axis independently.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> DVec2 {
        DVec2::new(
            rng.gen_range(self.min.x..=self.max.x),
            rng.gen_range(self.min.y..=self.max.y),
        )
    }
}
