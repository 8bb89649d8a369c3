//! Tabulated spectra over angle grids.
//!
//! A grid stores one spectrum per combination of axis angles. Spectra are
//! kept in one flat buffer laid out in row-major order with the wavelength
//! varying fastest: the spectrum of the cell `[i0, i1, .., iN]` starts at
//! `(((i0 * n1 + i1) * n2 + i2) ..) * n_wavelengths`.
use crate::axis::AngleAxis;
use base::{ColorModel, GridError, Origin};
use rayon::prelude::*;

mod dir;
mod full;

pub use dir::*;
pub use full::*;

/// Read-only view of a grid consumed by the interpolators.
pub trait AngleGrid: Sync {
    /// Returns the angle axes, in storage order.
    fn axes(&self) -> &[AngleAxis];

    /// Returns the flat buffer of spectra.
    fn samples(&self) -> &[f32];

    /// Returns the wavelengths of the spectra in nanometres.
    fn wavelengths(&self) -> &[f32];

    /// Returns the colour model of the spectra.
    fn color_model(&self) -> ColorModel;

    /// Returns the number of wavelengths of every spectrum.
    fn n_wavelengths(&self) -> usize { self.wavelengths().len() }

    /// Returns the index of the cell at the given axis indices.
    fn cell_index(&self, indices: &[usize]) -> usize { cell_index(self.axes(), indices) }

    /// Returns the spectrum of the cell at the given axis indices.
    fn cell(&self, indices: &[usize]) -> &[f32] {
        let n_wl = self.n_wavelengths();
        let start = self.cell_index(indices) * n_wl;
        &self.samples()[start..start + n_wl]
    }
}

/// Compares the colour models and the wavelengths of two grids.
///
/// Mismatches are logged at the info level.
pub fn has_same_color(a: &impl AngleGrid, b: &impl AngleGrid) -> bool {
    let mut same = true;
    if a.color_model() != b.color_model() {
        log::info!(
            "Colour models do not match: {}, {}",
            a.color_model(),
            b.color_model()
        );
        same = false;
    }

    let wavelengths_match = a.n_wavelengths() == b.n_wavelengths()
        && a
            .wavelengths()
            .iter()
            .zip(b.wavelengths())
            .all(|(x, y)| (x - y).abs() <= 1.0e-5 * x.abs().max(y.abs()).max(1.0));
    if !wavelengths_match {
        log::info!(
            "Wavelengths do not match: {:?}, {:?}",
            a.wavelengths(),
            b.wavelengths()
        );
        same = false;
    }
    same
}

/// Row-major cell index of the given axis indices.
fn cell_index(axes: &[AngleAxis], indices: &[usize]) -> usize {
    debug_assert_eq!(axes.len(), indices.len());
    axes.iter().zip(indices).fold(0, |acc, (axis, &i)| {
        debug_assert!(i < axis.len(), "index {} out of axis of length {}", i, axis.len());
        acc * axis.len() + i
    })
}

/// Axis indices of the given cell index.
fn cell_indices<const N: usize>(axes: &[AngleAxis; N], mut cell: usize) -> [usize; N] {
    let mut indices = [0; N];
    for d in (0..N).rev() {
        let n = axes[d].len();
        indices[d] = cell % n;
        cell /= n;
    }
    indices
}

/// Storage shared by the grids of any number of axes.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct GridData<const N: usize> {
    pub(crate) axes: [AngleAxis; N],
    pub(crate) samples: Vec<f32>,
    pub(crate) wavelengths: Vec<f32>,
    pub(crate) color_model: ColorModel,
    pub(crate) origin: Origin,
}

impl<const N: usize> GridData<N> {
    /// Allocates zeroed spectra.
    ///
    /// # Panics
    ///
    /// Panics if any count is zero.
    pub(crate) fn new(
        n_angles: [usize; N],
        max_angles: [f32; N],
        color_model: ColorModel,
        n_wavelengths: usize,
        equal_interval: bool,
    ) -> Self {
        assert!(
            n_angles.iter().all(|&n| n > 0),
            "angle counts must be positive, got {:?}",
            n_angles
        );
        assert!(n_wavelengths > 0, "wavelength count must be positive");
        let n_wavelengths = color_model.n_wavelengths(n_wavelengths);
        let axes = std::array::from_fn(|i| {
            if equal_interval {
                AngleAxis::linspace(n_angles[i], max_angles[i])
            } else {
                AngleAxis::zeros(n_angles[i])
            }
        });
        let n_cells = n_angles.iter().product::<usize>();
        log::trace!(
            "Allocating grid of {:?} angles, {} cells and {} wavelengths ({})",
            n_angles,
            n_cells,
            n_wavelengths,
            color_model
        );
        Self {
            axes,
            samples: vec![0.0; n_cells * n_wavelengths],
            wavelengths: vec![0.0; n_wavelengths],
            color_model,
            origin: Origin::Unknown,
        }
    }

    pub(crate) fn n_angles(&self) -> [usize; N] { std::array::from_fn(|i| self.axes[i].len()) }

    pub(crate) fn n_cells(&self) -> usize { self.axes.iter().map(AngleAxis::len).product() }

    pub(crate) fn n_wavelengths(&self) -> usize { self.wavelengths.len() }

    pub(crate) fn spectrum(&self, indices: [usize; N]) -> &[f32] {
        let n_wl = self.n_wavelengths();
        let start = cell_index(&self.axes, &indices) * n_wl;
        &self.samples[start..start + n_wl]
    }

    pub(crate) fn spectrum_mut(&mut self, indices: [usize; N]) -> &mut [f32] {
        let n_wl = self.n_wavelengths();
        let start = cell_index(&self.axes, &indices) * n_wl;
        &mut self.samples[start..start + n_wl]
    }

    /// Reallocates axes and spectra; existing data is discarded.
    pub(crate) fn resize_angles(&mut self, n_angles: [usize; N]) {
        assert!(
            n_angles.iter().all(|&n| n > 0),
            "angle counts must be positive, got {:?}",
            n_angles
        );
        log::trace!("Resizing angles to {:?}", n_angles);
        self.axes = std::array::from_fn(|i| AngleAxis::zeros(n_angles[i]));
        self.samples = vec![0.0; n_angles.iter().product::<usize>() * self.n_wavelengths()];
    }

    /// Every spectrum becomes `n` zeros, wavelengths as well.
    pub(crate) fn resize_wavelengths(&mut self, n: usize) {
        assert!(n > 0, "wavelength count must be positive");
        log::trace!("Resizing wavelengths to {}", n);
        self.wavelengths = vec![0.0; n];
        self.samples = vec![0.0; self.n_cells() * n];
    }

    pub(crate) fn clamp_angles(&mut self, max_angles: [f32; N]) {
        for (axis, max) in self.axes.iter_mut().zip(max_angles) {
            axis.clamp(max);
        }
    }

    pub(crate) fn update_angle_attributes(&mut self) {
        for (i, axis) in self.axes.iter_mut().enumerate() {
            let equal = axis.update_equal_interval();
            log::info!("Angle axis {}: equal interval: {}", i, equal);
        }
    }

    /// Checks the population contract.
    pub(crate) fn validate(&self, max_angles: [f32; N]) -> Result<(), GridError> {
        let result = self.check().and_then(|_| self.check_domain(max_angles));
        if let Err(err) = &result {
            log::warn!("Invalid grid: {}", err);
        }
        result
    }

    fn check(&self) -> Result<(), GridError> {
        for (axis_idx, axis) in self.axes.iter().enumerate() {
            if axis.is_empty() {
                return Err(GridError::EmptyAxis { axis: axis_idx });
            }
            if let Some(index) = axis.values().windows(2).position(|w| w[0] >= w[1]) {
                return Err(GridError::NonAscendingAxis {
                    axis: axis_idx,
                    index: index + 1,
                    prev: axis[index],
                    next: axis[index + 1],
                });
            }
        }

        let n_wl = self.n_wavelengths();
        let expected_wl = self.color_model.n_wavelengths(n_wl);
        if n_wl != expected_wl {
            return Err(GridError::WavelengthCountMismatch {
                color_model: self.color_model,
                expected: expected_wl,
                actual: n_wl,
            });
        }

        let expected = self.n_cells() * n_wl;
        if self.samples.len() != expected {
            return Err(GridError::SampleCountMismatch {
                expected,
                actual: self.samples.len(),
            });
        }

        if let Some(pos) = self.samples.iter().position(|v| !v.is_finite()) {
            return Err(GridError::NonFiniteSample {
                cell: pos / n_wl,
                wavelength: pos % n_wl,
            });
        }
        Ok(())
    }

    fn check_domain(&self, max_angles: [f32; N]) -> Result<(), GridError> {
        for (axis_idx, (axis, max)) in self.axes.iter().zip(max_angles).enumerate() {
            if let Some(index) = axis.values().iter().position(|&v| !(0.0..=max).contains(&v)) {
                return Err(GridError::AngleOutOfDomain {
                    axis: axis_idx,
                    index,
                    value: axis[index],
                    max,
                });
            }
        }
        Ok(())
    }

    /// Computes every spectrum from the angles of its cell, in parallel.
    pub(crate) fn fill_with<F>(&mut self, f: F)
    where
        F: Fn([f32; N], &mut [f32]) + Send + Sync,
    {
        let n_wl = self.n_wavelengths();
        let axes = &self.axes;
        self.samples
            .par_chunks_mut(n_wl)
            .enumerate()
            .for_each(|(cell, spectrum)| {
                let indices = cell_indices(axes, cell);
                let angles = std::array::from_fn(|d| axes[d][indices[d]]);
                f(angles, spectrum);
            });
    }
}
