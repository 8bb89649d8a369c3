use crate::{
    axis::AngleAxis,
    coord::CoordinateSystem,
    grid::{AngleGrid, GridData},
};
use base::{ColorModel, GridError, Origin, Symmetry};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// Parameters describing the construction of a [`SampleGrid`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridParams {
    /// Number of angles of each axis. Axis 1 is ignored for isotropic grids.
    pub n_angles: [usize; 4],
    /// Colour model of the spectra.
    pub color_model: ColorModel,
    /// Number of wavelengths, only honoured by the spectral colour model.
    #[serde(default = "GridParams::default_n_wavelengths")]
    pub n_wavelengths: usize,
    /// Symmetry of the tabulated data.
    pub symmetry: Symmetry,
    /// Whether the axes are filled with evenly spaced angles.
    #[serde(default)]
    pub equal_interval: bool,
}

impl GridParams {
    const fn default_n_wavelengths() -> usize { 1 }
}

/// Spectra tabulated over four angles of the coordinate system `C`.
///
/// Isotropic grids hold a single angle (zero) on axis 1.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid<C: CoordinateSystem> {
    data: GridData<4>,
    symmetry: Symmetry,
    _coord: PhantomData<fn() -> C>,
}

static_assertions::assert_impl_all!(SampleGrid<crate::coord::SphericalCoordSys>: Send, Sync);

impl<C: CoordinateSystem> SampleGrid<C> {
    /// Creates a grid of zeroed spectra.
    ///
    /// # Arguments
    ///
    /// * `n_angles` - Number of angles of each axis; axis 1 is forced to a
    ///   single angle for isotropic grids.
    /// * `color_model` - Colour model of the spectra; it decides the number
    ///   of wavelengths unless it is spectral.
    /// * `n_wavelengths` - Number of wavelengths of spectral data.
    /// * `symmetry` - Symmetry of the data.
    /// * `equal_interval` - Whether the axes are filled with angles evenly
    ///   spaced over the domain of the coordinate system.
    ///
    /// # Panics
    ///
    /// Panics if any count is zero.
    pub fn new(
        n_angles: [usize; 4],
        color_model: ColorModel,
        n_wavelengths: usize,
        symmetry: Symmetry,
        equal_interval: bool,
    ) -> Self {
        let n_angles = Self::effective_n_angles(n_angles, symmetry);
        log::trace!("Creating {} {} sample grid", symmetry, C::NAME);
        Self {
            data: GridData::new(
                n_angles,
                C::MAX_ANGLES,
                color_model,
                n_wavelengths,
                equal_interval,
            ),
            symmetry,
            _coord: PhantomData,
        }
    }

    /// Creates a grid from its parameters.
    pub fn from_params(params: &GridParams) -> Self {
        Self::new(
            params.n_angles,
            params.color_model,
            params.n_wavelengths,
            params.symmetry,
            params.equal_interval,
        )
    }

    fn effective_n_angles(mut n_angles: [usize; 4], symmetry: Symmetry) -> [usize; 4] {
        if symmetry.is_isotropic() {
            n_angles[1] = 1;
        }
        n_angles
    }

    /// Reallocates axes and spectra with new angle counts. Angles and
    /// spectra are reset to zero.
    pub fn resize_angles(&mut self, n_angles: [usize; 4]) {
        self.data
            .resize_angles(Self::effective_n_angles(n_angles, self.symmetry));
    }

    /// Resizes every spectrum to `n` wavelengths. Spectra and wavelengths are
    /// reset to zero.
    pub fn resize_wavelengths(&mut self, n: usize) { self.data.resize_wavelengths(n); }

    /// Clamps every angle into the domain of the coordinate system.
    pub fn clamp_angles(&mut self) { self.data.clamp_angles(C::MAX_ANGLES); }

    /// Recomputes whether the axes are evenly spaced.
    pub fn update_angle_attributes(&mut self) { self.data.update_angle_attributes(); }

    /// Returns whether the given axis is evenly spaced.
    pub fn is_equal_interval(&self, axis: usize) -> bool { self.data.axes[axis].is_equal_interval() }

    /// Returns the angle axis `axis`.
    pub fn axis(&self, axis: usize) -> &AngleAxis { &self.data.axes[axis] }

    /// Returns the angles of the given axis.
    pub fn angles(&self, axis: usize) -> &[f32] { self.data.axes[axis].values() }

    /// Returns the `index`-th angle of the given axis.
    pub fn angle(&self, axis: usize, index: usize) -> f32 { self.data.axes[axis][index] }

    /// Sets the `index`-th angle of the given axis.
    ///
    /// Call [`SampleGrid::update_angle_attributes`] once all angles are set.
    pub fn set_angle(&mut self, axis: usize, index: usize, value: f32) {
        self.data.axes[axis].set(index, value);
    }

    /// Returns the spectrum at the given axis indices.
    pub fn spectrum(&self, indices: [usize; 4]) -> &[f32] { self.data.spectrum(indices) }

    /// Returns the spectrum at the given axis indices for modification.
    pub fn spectrum_mut(&mut self, indices: [usize; 4]) -> &mut [f32] {
        self.data.spectrum_mut(indices)
    }

    /// Returns the wavelengths in nanometres.
    pub fn wavelengths(&self) -> &[f32] { &self.data.wavelengths }

    /// Sets the `index`-th wavelength.
    pub fn set_wavelength(&mut self, index: usize, wavelength: f32) {
        self.data.wavelengths[index] = wavelength;
    }

    /// Returns the colour model.
    pub fn color_model(&self) -> ColorModel { self.data.color_model }

    /// Returns the symmetry of the data.
    pub fn symmetry(&self) -> Symmetry { self.symmetry }

    /// Returns whether the data is isotropic.
    pub fn is_isotropic(&self) -> bool { self.symmetry.is_isotropic() }

    /// Returns where the data comes from.
    pub fn origin(&self) -> Origin { self.data.origin }

    /// Sets where the data comes from.
    pub fn set_origin(&mut self, origin: Origin) { self.data.origin = origin; }

    /// Returns the number of angles of each axis.
    pub fn n_angles(&self) -> [usize; 4] { self.data.n_angles() }

    /// Returns the number of wavelengths.
    pub fn n_wavelengths(&self) -> usize { self.data.n_wavelengths() }

    /// Returns the number of cells, i.e. spectra.
    pub fn n_cells(&self) -> usize { self.data.n_cells() }

    /// Checks that the grid satisfies the layout expected by the queries.
    ///
    /// Axes must be strictly ascending inside the domain of the coordinate
    /// system, the wavelength count must agree with the colour model and
    /// every sample must be finite.
    pub fn validate(&self) -> Result<(), GridError> { self.data.validate(C::MAX_ANGLES) }

    /// Computes every spectrum from the four angles of its cell.
    ///
    /// Cells are processed in parallel.
    pub fn fill_spectra_with<F>(&mut self, f: F)
    where
        F: Fn([f32; 4], &mut [f32]) + Send + Sync,
    {
        self.data.fill_with(f);
    }
}

impl<C: CoordinateSystem> AngleGrid for SampleGrid<C> {
    fn axes(&self) -> &[AngleAxis] { &self.data.axes }

    fn samples(&self) -> &[f32] { &self.data.samples }

    fn wavelengths(&self) -> &[f32] { &self.data.wavelengths }

    fn color_model(&self) -> ColorModel { self.data.color_model }
}
