//! Surfaces with distinct reflectance on their two sides.
use crate::{coord::CoordinateSystem, grid::SampleGrid, interp::Interpolator, sampler::Sampler};
use base::math::Vec3;
use std::sync::Arc;

/// Pair of shared grids describing the front and the back side of a
/// surface. Both sides may share the same grid.
///
/// Directions are expressed in the frame of the front side. Queries whose
/// incident direction lies below the surface are mirrored through the
/// surface plane and answered by the back grid.
#[derive(Debug, Clone)]
pub struct TwoSidedGrid<C: CoordinateSystem> {
    front: Arc<SampleGrid<C>>,
    back: Arc<SampleGrid<C>>,
}

static_assertions::assert_impl_all!(
    TwoSidedGrid<crate::coord::SphericalCoordSys>: Send, Sync
);

impl<C: CoordinateSystem> TwoSidedGrid<C> {
    /// Creates a two-sided surface from the grids of its sides.
    pub fn new(front: Arc<SampleGrid<C>>, back: Arc<SampleGrid<C>>) -> Self {
        if !crate::grid::has_same_color(front.as_ref(), back.as_ref()) {
            log::warn!("Front and back grids have different colour layouts");
        }
        Self { front, back }
    }

    /// Creates a surface looking the same from both sides.
    pub fn symmetric(grid: Arc<SampleGrid<C>>) -> Self {
        Self {
            back: grid.clone(),
            front: grid,
        }
    }

    /// Returns the grid of the front side.
    pub fn front(&self) -> &Arc<SampleGrid<C>> { &self.front }

    /// Returns the grid of the back side.
    pub fn back(&self) -> &Arc<SampleGrid<C>> { &self.back }

    /// Selects the side seen from `wi` and expresses both directions in its
    /// frame.
    fn side(&self, wi: Vec3, wo: Vec3) -> (&SampleGrid<C>, Vec3, Vec3) {
        if wi.z < 0.0 {
            let flip = Vec3::new(1.0, 1.0, -1.0);
            (&*self.back, wi * flip, wo * flip)
        } else {
            (&*self.front, wi, wo)
        }
    }

    /// Returns the spectrum of the side seen from `wi`.
    pub fn spectrum<I: Interpolator>(&self, wi: Vec3, wo: Vec3) -> Box<[f32]> {
        let (grid, wi, wo) = self.side(wi, wo);
        Sampler::spectrum::<I, C>(grid, wi, wo)
    }

    /// Returns the value of the `wavelength`-th wavelength of the side seen
    /// from `wi`.
    pub fn value<I: Interpolator>(&self, wi: Vec3, wo: Vec3, wavelength: usize) -> f32 {
        let (grid, wi, wo) = self.side(wi, wo);
        Sampler::value::<I, C>(grid, wi, wo, wavelength)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        coord::SphericalCoordSys,
        interp::LinearInterpolator,
        model::{fill_from_model, Lambertian},
    };
    use base::{ColorModel, Symmetry};
    use std::f32::consts::FRAC_1_PI;

    fn lambertian_grid(albedo: f32) -> Arc<SampleGrid<SphericalCoordSys>> {
        let mut grid = SampleGrid::<SphericalCoordSys>::new(
            [4, 1, 4, 5],
            ColorModel::Monochromatic,
            1,
            Symmetry::Isotropic,
            true,
        );
        fill_from_model(&mut grid, &Lambertian::new(albedo));
        Arc::new(grid)
    }

    #[test]
    fn back_side_below_the_surface() {
        let _ = env_logger::try_init();
        let surface = TwoSidedGrid::new(lambertian_grid(0.5), lambertian_grid(0.2));
        let wo = Vec3::new(0.0, 0.6, 0.8);
        let front = surface.value::<LinearInterpolator>(Vec3::Z, wo, 0);
        assert!((front - 0.5 * FRAC_1_PI).abs() < 1e-6);
        let back = surface.value::<LinearInterpolator>(Vec3::NEG_Z, -wo, 0);
        assert!((back - 0.2 * FRAC_1_PI).abs() < 1e-6);
        let spectrum =
            surface.spectrum::<LinearInterpolator>(Vec3::new(0.6, 0.0, -0.8), Vec3::NEG_Z);
        assert_eq!(spectrum.len(), 1);
        assert!((spectrum[0] - 0.2 * FRAC_1_PI).abs() < 1e-6);
    }

    #[test]
    fn shared_grid() {
        let surface = TwoSidedGrid::symmetric(lambertian_grid(0.7));
        assert!(Arc::ptr_eq(surface.front(), surface.back()));
        assert_eq!(Arc::strong_count(surface.front()), 2);
        let up = surface.value::<LinearInterpolator>(Vec3::Z, Vec3::X, 0);
        let down = surface.value::<LinearInterpolator>(Vec3::NEG_Z, Vec3::X, 0);
        assert_eq!(up, down);
    }
}
