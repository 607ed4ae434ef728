//! Conversions between world, view and pixel space.
//!
//! * World space is where particles live, Y pointing up.
//! * View space is world space translated so the viewport's top-left corner is the origin, Y pointing down.
//! * Pixel space is view space scaled to the dimensions of a [`Raster`].

use glam::DVec2;

use crate::{
    bounds::Bounds,
    error::{Error, Result},
};

fn ensure_extent(what: &str, width: f64, height: f64) -> Result<()> {
    if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        Ok(())
    } else {
        Err(Error::DegenerateGeometry(format!(
            "{what} extent must be positive and finite, got {width} × {height}"
        )))
    }
}

/// Pixel dimensions of the surface particles are drawn on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Raster {
    size: DVec2,
}

impl Raster {
    /// Creates a new [`Raster`], failing with [`Error::DegenerateGeometry`] unless both dimensions
    /// are positive and finite.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        ensure_extent("raster", width, height)?;
        Ok(Self {
            size: DVec2::new(width, height),
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> f64 {
        self.size.x
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> f64 {
        self.size.y
    }

    /// Width and height in pixels.
    #[inline]
    pub fn size(&self) -> DVec2 {
        self.size
    }
}

/// A rectangular window onto world space, mapped onto a [`Raster`] when drawing.
///
/// ```
/// # use driftbox::prelude::*;
/// # use glam::DVec2;
/// // Shows [-10, 10] × [-5, 5] on an 800 × 400 surface.
/// let viewport = ViewportTransform::new(DVec2::new(-10.0, 5.0), 20.0, 10.0)?;
/// let raster = Raster::new(800.0, 400.0)?;
///
/// assert_eq!(viewport.world_to_pixel(DVec2::new(-10.0, 5.0), &raster), DVec2::ZERO);
/// assert_eq!(viewport.world_to_pixel(DVec2::ZERO, &raster), DVec2::new(400.0, 200.0));
/// assert_eq!(viewport.pixel_to_world(DVec2::new(800.0, 400.0), &raster), DVec2::new(10.0, -5.0));
/// # Ok::<(), driftbox::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportTransform {
    origin: DVec2,
    extent: DVec2,
}

impl ViewportTransform {
    /// Creates a new [`ViewportTransform`] whose top-left corner is the world point `origin`.
    ///
    /// Fails with [`Error::DegenerateGeometry`] unless both extents are positive and finite.
    pub fn new(origin: DVec2, world_width: f64, world_height: f64) -> Result<Self> {
        ensure_extent("viewport", world_width, world_height)?;
        Ok(Self {
            origin,
            extent: DVec2::new(world_width, world_height),
        })
    }

    /// Creates a new [`ViewportTransform`] showing exactly the given [`Bounds`].
    pub fn fitting(bounds: &Bounds) -> Self {
        Self {
            origin: bounds.top_left(),
            extent: bounds.size(),
        }
    }

    /// World point at the top-left corner of the view.
    #[inline]
    pub fn origin(&self) -> DVec2 {
        self.origin
    }

    /// Width of the view in world units.
    #[inline]
    pub fn world_width(&self) -> f64 {
        self.extent.x
    }

    /// Height of the view in world units.
    #[inline]
    pub fn world_height(&self) -> f64 {
        self.extent.y
    }

    /// Recomputes the world height so the view keeps the aspect ratio of `raster`.
    ///
    /// The origin and world width are unchanged.
    pub fn resize(&mut self, raster: &Raster) {
        self.extent.y = self.extent.x * raster.height() / raster.width();
        log::debug!(
            "Resized viewport to {} × {} for {} × {} raster",
            self.extent.x,
            self.extent.y,
            raster.width(),
            raster.height()
        );
    }

    /// Converts a world point to view space.
    #[inline]
    pub fn world_to_view(&self, world: DVec2) -> DVec2 {
        DVec2::new(world.x - self.origin.x, self.origin.y - world.y)
    }

    /// Converts a view point to world space.
    #[inline]
    pub fn view_to_world(&self, view: DVec2) -> DVec2 {
        DVec2::new(view.x + self.origin.x, self.origin.y - view.y)
    }

    /// Converts a view point to pixel space on `raster`.
    #[inline]
    pub fn view_to_pixel(&self, view: DVec2, raster: &Raster) -> DVec2 {
        view * self.pixels_per_unit(raster)
    }

    /// Converts a pixel on `raster` to view space.
    #[inline]
    pub fn pixel_to_view(&self, pixel: DVec2, raster: &Raster) -> DVec2 {
        pixel / self.pixels_per_unit(raster)
    }

    /// Converts a world point to pixel space on `raster`.
    #[inline]
    pub fn world_to_pixel(&self, world: DVec2, raster: &Raster) -> DVec2 {
        self.view_to_pixel(self.world_to_view(world), raster)
    }

    /// Converts a pixel on `raster` to world space.
    #[inline]
    pub fn pixel_to_world(&self, pixel: DVec2, raster: &Raster) -> DVec2 {
        self.view_to_world(self.pixel_to_view(pixel, raster))
    }

    #[inline]
    fn pixels_per_unit(&self, raster: &Raster) -> DVec2 {
        raster.size() / self.extent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn rejects_degenerate_extents() {
        let extents = [
            (0.0, 1.0),
            (1.0, 0.0),
            (-1.0, 1.0),
            (f64::NAN, 1.0),
            (1.0, f64::INFINITY),
        ];

        for (width, height) in extents {
            assert!(matches!(
                ViewportTransform::new(DVec2::ZERO, width, height),
                Err(Error::DegenerateGeometry(_))
            ));
            assert!(matches!(
                Raster::new(width, height),
                Err(Error::DegenerateGeometry(_))
            ));
        }
    }

    #[test]
    fn world_to_view_flips_y() {
        let viewport = ViewportTransform::new(DVec2::new(-10.0, 5.0), 20.0, 10.0).unwrap();

        assert_eq!(viewport.world_to_view(DVec2::new(-10.0, 5.0)), DVec2::ZERO);
        assert_eq!(viewport.world_to_view(DVec2::new(0.0, 4.0)), DVec2::new(10.0, 1.0));
        assert_eq!(viewport.world_to_view(DVec2::new(0.0, -5.0)), DVec2::new(10.0, 10.0));
        assert_eq!(viewport.view_to_world(DVec2::new(10.0, 1.0)), DVec2::new(0.0, 4.0));
    }

    #[test]
    fn view_to_pixel_scales_each_axis() {
        let viewport = ViewportTransform::new(DVec2::ZERO, 20.0, 10.0).unwrap();
        let raster = Raster::new(400.0, 300.0).unwrap();

        let view = DVec2::new(1.0, 1.0);
        let pixel = DVec2::new(20.0, 30.0);

        assert_eq!(viewport.view_to_pixel(view, &raster), pixel);
        assert_eq!(viewport.pixel_to_view(pixel, &raster), view);
    }

    #[test]
    fn pixel_y_grows_downward() {
        let viewport = ViewportTransform::new(DVec2::new(0.0, 10.0), 10.0, 10.0).unwrap();
        let raster = Raster::new(100.0, 100.0).unwrap();

        let high = viewport.world_to_pixel(DVec2::new(5.0, 9.0), &raster);
        let low = viewport.world_to_pixel(DVec2::new(5.0, 1.0), &raster);
        assert!(high.y < low.y);
    }

    #[test]
    fn round_trips_through_pixel_space() {
        let configurations = [
            (DVec2::new(-10.0, 5.0), 20.0, 10.0, 800.0, 400.0),
            (DVec2::new(3.25, -7.5), 0.001, 1e4, 1920.0, 1080.0),
            (DVec2::new(1e6, 1e6), 123.4, 56.7, 17.0, 3.0),
        ];
        let points = [
            DVec2::ZERO,
            DVec2::new(-3.5, 8.25),
            DVec2::new(1e3, -1e3),
            DVec2::new(1e6 + 0.5, 1e6 - 0.5),
        ];

        for (origin, width, height, pixel_width, pixel_height) in configurations {
            let viewport = ViewportTransform::new(origin, width, height).unwrap();
            let raster = Raster::new(pixel_width, pixel_height).unwrap();

            for world in points {
                let pixel = viewport.world_to_pixel(world, &raster);
                let back = viewport.pixel_to_world(pixel, &raster);
                let magnitude = world.abs().max_element().max(origin.abs().max_element());
                let tolerance = EPSILON * magnitude.max(1.0);
                assert!(back.abs_diff_eq(world, tolerance), "{world} came back as {back}");
            }
        }
    }

    #[test]
    fn fitting_shows_the_whole_bounds() {
        let bounds = Bounds::new(-10.0, 10.0, -6.0, 6.0).unwrap();
        let viewport = ViewportTransform::fitting(&bounds);
        let raster = Raster::new(1000.0, 600.0).unwrap();

        assert_eq!(viewport.origin(), DVec2::new(-10.0, 6.0));
        assert_eq!(viewport.world_to_pixel(bounds.top_left(), &raster), DVec2::ZERO);
        assert!(viewport
            .world_to_pixel(DVec2::new(10.0, -6.0), &raster)
            .abs_diff_eq(DVec2::new(1000.0, 600.0), EPSILON));
    }

    #[test]
    fn resize_tracks_aspect_ratio() {
        let mut viewport = ViewportTransform::new(DVec2::new(-10.0, 5.0), 20.0, 10.0).unwrap();

        viewport.resize(&Raster::new(400.0, 400.0).unwrap());

        assert_eq!(viewport.origin(), DVec2::new(-10.0, 5.0));
        assert_eq!(viewport.world_width(), 20.0);
        assert_eq!(viewport.world_height(), 20.0);
    }
}
