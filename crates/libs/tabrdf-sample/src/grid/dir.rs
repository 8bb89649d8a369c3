use crate::{
    axis::AngleAxis,
    grid::{AngleGrid, GridData},
};
use base::{ColorModel, GridError, Origin};
use std::f32::consts::{FRAC_PI_2, TAU};

/// Spectra tabulated over the polar and azimuthal angles of a single
/// direction, e.g. the incident direction of a specular reflectance table.
///
/// The grid is isotropic when it holds a single azimuthal angle.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid2 {
    data: GridData<2>,
}

impl SampleGrid2 {
    /// Upper bounds of the polar and the azimuthal angles.
    pub const MAX_ANGLES: [f32; 2] = [FRAC_PI_2, TAU];

    /// Creates a grid of zeroed spectra.
    ///
    /// # Panics
    ///
    /// Panics if any count is zero.
    pub fn new(
        n_theta: usize,
        n_phi: usize,
        color_model: ColorModel,
        n_wavelengths: usize,
        equal_interval: bool,
    ) -> Self {
        log::trace!("Creating directional sample grid");
        Self {
            data: GridData::new(
                [n_theta, n_phi],
                Self::MAX_ANGLES,
                color_model,
                n_wavelengths,
                equal_interval,
            ),
        }
    }

    /// Reallocates axes and spectra with new angle counts. Angles and
    /// spectra are reset to zero.
    pub fn resize_angles(&mut self, n_theta: usize, n_phi: usize) {
        self.data.resize_angles([n_theta, n_phi]);
    }

    /// Resizes every spectrum to `n` wavelengths. Spectra and wavelengths are
    /// reset to zero.
    pub fn resize_wavelengths(&mut self, n: usize) { self.data.resize_wavelengths(n); }

    /// Clamps polar angles into [0, π/2] and azimuthal angles into [0, 2π].
    pub fn clamp_angles(&mut self) { self.data.clamp_angles(Self::MAX_ANGLES); }

    /// Recomputes whether the axes are evenly spaced.
    pub fn update_angle_attributes(&mut self) { self.data.update_angle_attributes(); }

    /// Returns whether the polar angles are evenly spaced.
    pub fn is_equal_interval_theta(&self) -> bool { self.data.axes[0].is_equal_interval() }

    /// Returns whether the azimuthal angles are evenly spaced.
    pub fn is_equal_interval_phi(&self) -> bool { self.data.axes[1].is_equal_interval() }

    /// Returns the polar angles.
    pub fn thetas(&self) -> &[f32] { self.data.axes[0].values() }

    /// Returns the azimuthal angles.
    pub fn phis(&self) -> &[f32] { self.data.axes[1].values() }

    /// Returns the `index`-th polar angle.
    pub fn theta(&self, index: usize) -> f32 { self.data.axes[0][index] }

    /// Returns the `index`-th azimuthal angle.
    pub fn phi(&self, index: usize) -> f32 { self.data.axes[1][index] }

    /// Sets the `index`-th polar angle.
    pub fn set_theta(&mut self, index: usize, value: f32) { self.data.axes[0].set(index, value); }

    /// Sets the `index`-th azimuthal angle.
    pub fn set_phi(&mut self, index: usize, value: f32) { self.data.axes[1].set(index, value); }

    /// Returns the spectrum at the given polar and azimuthal indices.
    pub fn spectrum(&self, i_theta: usize, i_phi: usize) -> &[f32] {
        self.data.spectrum([i_theta, i_phi])
    }

    /// Returns the spectrum at the given indices for modification.
    pub fn spectrum_mut(&mut self, i_theta: usize, i_phi: usize) -> &mut [f32] {
        self.data.spectrum_mut([i_theta, i_phi])
    }

    /// Returns the wavelengths in nanometres.
    pub fn wavelengths(&self) -> &[f32] { &self.data.wavelengths }

    /// Sets the `index`-th wavelength.
    pub fn set_wavelength(&mut self, index: usize, wavelength: f32) {
        self.data.wavelengths[index] = wavelength;
    }

    /// Returns the colour model.
    pub fn color_model(&self) -> ColorModel { self.data.color_model }

    /// Returns whether the data is invariant under rotation about the normal.
    pub fn is_isotropic(&self) -> bool { self.data.axes[1].len() == 1 }

    /// Returns where the data comes from.
    pub fn origin(&self) -> Origin { self.data.origin }

    /// Sets where the data comes from.
    pub fn set_origin(&mut self, origin: Origin) { self.data.origin = origin; }

    /// Returns the number of polar angles.
    pub fn n_theta(&self) -> usize { self.data.axes[0].len() }

    /// Returns the number of azimuthal angles.
    pub fn n_phi(&self) -> usize { self.data.axes[1].len() }

    /// Returns the number of wavelengths.
    pub fn n_wavelengths(&self) -> usize { self.data.n_wavelengths() }

    /// Checks that the grid satisfies the layout expected by the queries.
    pub fn validate(&self) -> Result<(), GridError> { self.data.validate(Self::MAX_ANGLES) }

    /// Computes every spectrum from the polar and azimuthal angles of its
    /// cell, in parallel.
    pub fn fill_spectra_with<F>(&mut self, f: F)
    where
        F: Fn([f32; 2], &mut [f32]) + Send + Sync,
    {
        self.data.fill_with(f);
    }
}

impl AngleGrid for SampleGrid2 {
    fn axes(&self) -> &[AngleAxis] { &self.data.axes }

    fn samples(&self) -> &[f32] { &self.data.samples }

    fn wavelengths(&self) -> &[f32] { &self.data.wavelengths }

    fn color_model(&self) -> ColorModel { self.data.color_model }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_equal_interval() {
        let grid = SampleGrid2::new(5, 1, ColorModel::Xyz, 8, true);
        assert!(grid.is_isotropic());
        assert_eq!(grid.n_wavelengths(), 3);
        assert_eq!(grid.thetas().len(), 5);
        assert_eq!(grid.theta(4), FRAC_PI_2);
        assert_eq!(grid.phis(), &[0.0]);
        assert!(grid.is_equal_interval_theta());

        let grid = SampleGrid2::new(5, 13, ColorModel::Spectral, 8, true);
        assert!(!grid.is_isotropic());
        assert_eq!(grid.n_wavelengths(), 8);
        assert_eq!(grid.phi(12), TAU);
    }

    #[test]
    fn resize_and_clamp() {
        let mut grid = SampleGrid2::new(3, 3, ColorModel::Monochromatic, 1, true);
        grid.resize_wavelengths(4);
        assert_eq!(grid.wavelengths().len(), 4);
        assert_eq!(grid.spectrum(2, 2).len(), 4);

        grid.resize_angles(4, 1);
        assert!(grid.is_isotropic());
        assert_eq!(grid.samples().len(), 4 * 4);

        for (i, v) in [-0.1, 0.5, 1.0, 1.7].into_iter().enumerate() {
            grid.set_theta(i, v);
        }
        grid.clamp_angles();
        assert_eq!(grid.thetas(), &[0.0, 0.5, 1.0, FRAC_PI_2]);
        grid.update_angle_attributes();
        assert!(!grid.is_equal_interval_theta());
        // Four wavelengths contradict the monochromatic colour model.
        assert!(matches!(
            grid.validate(),
            Err(GridError::WavelengthCountMismatch { expected: 1, actual: 4, .. })
        ));
    }
}
