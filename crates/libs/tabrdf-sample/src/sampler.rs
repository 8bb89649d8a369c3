//! Queries of tabulated spectra by direction.
use crate::{
    coord::{self, CoordinateSystem},
    grid::{SampleGrid, SampleGrid2},
    interp::{InterpolationMethod, Interpolator},
};
use base::{
    math::{clamp, is_downward_dir, phi, Vec3},
    Symmetry,
};

/// Entry point of the queries: converts directions to the angles of a grid
/// and delegates to an interpolation strategy.
///
/// Directions are unit vectors in the local shading frame (normal along +z)
/// pointing away from the surface; the incident direction must lie on the
/// upper hemisphere. Queries never modify the grid.
#[derive(Debug, Copy, Clone, Default)]
pub struct Sampler;

impl Sampler {
    /// Returns the four angles of a direction pair in the coordinate system
    /// `C`, reduced to the isotropic overload (angle 1 is zero) when the
    /// data is isotropic.
    #[track_caller]
    pub fn angles<C: CoordinateSystem>(symmetry: Symmetry, wi: Vec3, wo: Vec3) -> [f32; 4] {
        debug_assert!(!is_downward_dir(&wi), "incident direction below the surface: {}", wi);
        coord::angles_from_xyz::<C>(symmetry, wi, wo)
    }

    /// Returns the spectrum of the grid for a direction pair.
    pub fn spectrum<I, C>(grid: &SampleGrid<C>, wi: Vec3, wo: Vec3) -> Box<[f32]>
    where
        I: Interpolator,
        C: CoordinateSystem,
    {
        let angles = Self::angles::<C>(grid.symmetry(), wi, wo);
        I::spectrum(grid, &angles)
    }

    /// Returns the value of the `wavelength`-th wavelength of the grid for a
    /// direction pair.
    ///
    /// # Panics
    ///
    /// Panics if `wavelength` is out of range.
    pub fn value<I, C>(grid: &SampleGrid<C>, wi: Vec3, wo: Vec3, wavelength: usize) -> f32
    where
        I: Interpolator,
        C: CoordinateSystem,
    {
        assert!(
            wavelength < grid.n_wavelengths(),
            "wavelength index {} out of range (0..{})",
            wavelength,
            grid.n_wavelengths()
        );
        let angles = Self::angles::<C>(grid.symmetry(), wi, wo);
        I::value(grid, &angles, wavelength)
    }

    /// Same as [`Sampler::spectrum`] with the interpolation strategy chosen
    /// at runtime.
    pub fn spectrum_with<C: CoordinateSystem>(
        method: InterpolationMethod,
        grid: &SampleGrid<C>,
        wi: Vec3,
        wo: Vec3,
    ) -> Box<[f32]> {
        let angles = Self::angles::<C>(grid.symmetry(), wi, wo);
        method.spectrum(grid, &angles)
    }

    /// Same as [`Sampler::value`] with the interpolation strategy chosen at
    /// runtime.
    pub fn value_with<C: CoordinateSystem>(
        method: InterpolationMethod,
        grid: &SampleGrid<C>,
        wi: Vec3,
        wo: Vec3,
        wavelength: usize,
    ) -> f32 {
        assert!(
            wavelength < grid.n_wavelengths(),
            "wavelength index {} out of range (0..{})",
            wavelength,
            grid.n_wavelengths()
        );
        let angles = Self::angles::<C>(grid.symmetry(), wi, wo);
        method.value(grid, &angles, wavelength)
    }

    /// Returns the polar and azimuthal angles of a direction for a
    /// directional grid; the azimuth is zero for isotropic grids.
    #[track_caller]
    pub fn angles_2d(grid: &SampleGrid2, wi: Vec3) -> [f32; 2] {
        debug_assert!(!is_downward_dir(&wi), "incident direction below the surface: {}", wi);
        let theta = clamp(wi.z, -1.0, 1.0).acos();
        if grid.is_isotropic() {
            [theta, 0.0]
        } else {
            [theta, phi(&wi).value()]
        }
    }

    /// Returns the spectrum of a directional grid for a direction.
    pub fn spectrum_2d<I: Interpolator>(grid: &SampleGrid2, wi: Vec3) -> Box<[f32]> {
        I::spectrum(grid, &Self::angles_2d(grid, wi))
    }

    /// Returns the value of the `wavelength`-th wavelength of a directional
    /// grid for a direction.
    ///
    /// # Panics
    ///
    /// Panics if `wavelength` is out of range.
    pub fn value_2d<I: Interpolator>(grid: &SampleGrid2, wi: Vec3, wavelength: usize) -> f32 {
        assert!(
            wavelength < grid.n_wavelengths(),
            "wavelength index {} out of range (0..{})",
            wavelength,
            grid.n_wavelengths()
        );
        I::value(grid, &Self::angles_2d(grid, wi), wavelength)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        coord::{HalfDiffCoordSys, SpecularCoordSys, SphericalCoordSys},
        interp::{LinearInterpolator, SplineInterpolator},
    };
    use base::{
        math::{sph_to_cart, Mat3},
        units::rad,
        ColorModel,
    };
    use std::f32::consts::{FRAC_PI_2, TAU};

    fn isotropic_grid<C: CoordinateSystem>() -> SampleGrid<C> {
        let mut grid = SampleGrid::<C>::new(
            [7, 1, 7, 13],
            ColorModel::Rgb,
            3,
            Symmetry::Isotropic,
            true,
        );
        grid.fill_spectra_with(|[a, _, c, d], spectrum| {
            spectrum[0] = a.cos() + c.sin();
            spectrum[1] = (1.0 + d.cos()) * a;
            spectrum[2] = 0.5;
        });
        grid
    }

    #[test]
    fn isotropic_queries_are_rotation_invariant() {
        let _ = env_logger::try_init();
        let wi = sph_to_cart(rad!(0.4), rad!(0.3));
        let wo = sph_to_cart(rad!(0.9), rad!(2.5));

        fn check<C: CoordinateSystem>(wi: Vec3, wo: Vec3) {
            let grid = isotropic_grid::<C>();
            let reference = Sampler::spectrum::<LinearInterpolator, C>(&grid, wi, wo);
            for alpha in [0.7f32, 2.0, 5.5] {
                let rot = Mat3::from_rotation_z(alpha);
                let rotated = Sampler::spectrum::<LinearInterpolator, C>(&grid, rot * wi, rot * wo);
                for (a, b) in reference.iter().zip(rotated.iter()) {
                    assert!((a - b).abs() < 1e-3, "{} {:?} != {:?}", C::NAME, reference, rotated);
                }
            }
        }

        check::<SphericalCoordSys>(wi, wo);
        check::<HalfDiffCoordSys>(wi, wo);
        check::<SpecularCoordSys>(wi, wo);
    }

    #[test]
    fn value_matches_spectrum() {
        let grid = isotropic_grid::<SphericalCoordSys>();
        let wi = sph_to_cart(rad!(0.2), rad!(1.0));
        let wo = sph_to_cart(rad!(1.1), rad!(4.0));
        let spectrum = Sampler::spectrum::<SplineInterpolator, _>(&grid, wi, wo);
        for wl in 0..3 {
            let value = Sampler::value::<SplineInterpolator, _>(&grid, wi, wo, wl);
            assert!((value - spectrum[wl]).abs() < 1e-6);
        }
        let dynamic = Sampler::spectrum_with(InterpolationMethod::Spline, &grid, wi, wo);
        assert_eq!(dynamic, spectrum);
        assert_eq!(
            Sampler::value_with(InterpolationMethod::Linear, &grid, wi, wo, 2),
            Sampler::value::<LinearInterpolator, _>(&grid, wi, wo, 2)
        );
    }

    #[test]
    fn exact_at_grid_directions() {
        let grid = isotropic_grid::<SphericalCoordSys>();
        let (i0, i2, i3) = (2, 5, 4);
        let angles = [grid.angle(0, i0), 0.0, grid.angle(2, i2), grid.angle(3, i3)];
        let (wi, wo) = SphericalCoordSys::to_xyz(angles);
        let spectrum = Sampler::spectrum::<LinearInterpolator, _>(&grid, wi, wo);
        let expected = grid.spectrum([i0, 0, i2, i3]);
        for (s, e) in spectrum.iter().zip(expected) {
            assert!((s - e).abs() < 1e-4, "{:?} != {:?}", spectrum, expected);
        }
    }

    #[test]
    #[should_panic]
    fn wavelength_out_of_range_panics() {
        let grid = isotropic_grid::<SphericalCoordSys>();
        let _ = Sampler::value::<LinearInterpolator, _>(&grid, Vec3::Z, Vec3::Z, 3);
    }

    #[test]
    fn five_polar_angles_scenario() {
        let mut grid = SampleGrid2::new(5, 1, ColorModel::Monochromatic, 1, true);
        let stored = [0.1, 0.4, 0.8, 0.3, 0.2];
        for (i, v) in stored.iter().enumerate() {
            grid.spectrum_mut(i, 0)[0] = *v;
        }
        let at = |theta: f32| sph_to_cart(rad!(theta), rad!(1.3));
        let third = Sampler::value_2d::<LinearInterpolator>(&grid, at(grid.theta(2)), 0);
        assert!((third - 0.8).abs() < 1e-5);
        let mid = 0.5 * (grid.theta(1) + grid.theta(2));
        let blended = Sampler::value_2d::<LinearInterpolator>(&grid, at(mid), 0);
        assert!((blended - 0.6).abs() < 1e-5);
        assert_eq!(
            Sampler::spectrum_2d::<LinearInterpolator>(&grid, at(mid)).len(),
            1
        );
    }

    #[test]
    fn anisotropic_directional_grid_uses_azimuth() {
        let mut grid = SampleGrid2::new(3, 5, ColorModel::Monochromatic, 1, true);
        grid.fill_spectra_with(|[theta, phi], spectrum| spectrum[0] = theta + phi);
        assert!(!grid.is_isotropic());
        let wi = sph_to_cart(rad!(FRAC_PI_2 * 0.5), rad!(TAU * 0.25));
        let [theta, phi] = Sampler::angles_2d(&grid, wi);
        assert!((phi - TAU * 0.25).abs() < 1e-5);
        let value = Sampler::value_2d::<LinearInterpolator>(&grid, wi, 0);
        assert!((value - (theta + phi)).abs() < 1e-4);
    }
}
