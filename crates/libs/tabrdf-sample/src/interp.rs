//! Interpolation of tabulated spectra between grid points.
use crate::grid::AngleGrid;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

mod linear;
mod spline;

pub use linear::*;
pub use spline::*;

/// Maximum number of angle axes of a grid.
pub(crate) const MAX_AXES: usize = 4;

/// Strategy estimating the spectrum of a grid at arbitrary angles.
///
/// `angles` holds one angle per axis of the grid, in storage order. Axes
/// holding a single angle do not take part in the interpolation. Angles
/// outside of an axis are clamped to its range.
pub trait Interpolator {
    /// Returns the interpolated value of the `wavelength`-th wavelength.
    fn value(grid: &impl AngleGrid, angles: &[f32], wavelength: usize) -> f32;

    /// Returns the interpolated spectrum.
    fn spectrum(grid: &impl AngleGrid, angles: &[f32]) -> Box<[f32]>;
}

/// Interpolation strategy selected at runtime.
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationMethod {
    /// Tensor product linear interpolation.
    #[cfg_attr(feature = "cli", clap(alias = "lin"))]
    #[default]
    Linear,
    /// Tensor product centripetal Catmull-Rom interpolation.
    #[cfg_attr(feature = "cli", clap(alias = "cr"))]
    Spline,
}

impl InterpolationMethod {
    /// Returns the interpolated value of the `wavelength`-th wavelength.
    pub fn value(&self, grid: &impl AngleGrid, angles: &[f32], wavelength: usize) -> f32 {
        match self {
            Self::Linear => LinearInterpolator::value(grid, angles, wavelength),
            Self::Spline => SplineInterpolator::value(grid, angles, wavelength),
        }
    }

    /// Returns the interpolated spectrum.
    pub fn spectrum(&self, grid: &impl AngleGrid, angles: &[f32]) -> Box<[f32]> {
        match self {
            Self::Linear => LinearInterpolator::spectrum(grid, angles),
            Self::Spline => SplineInterpolator::spectrum(grid, angles),
        }
    }
}

impl Display for InterpolationMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::Spline => write!(f, "spline"),
        }
    }
}
