//! Errors reported when checking tabulated data.

use crate::ColorModel;

/// Violation of the layout contract a sample grid must satisfy before it can
/// be queried.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(missing_docs)]
pub enum GridError {
    /// An angle axis has no sample.
    #[error("Angle axis {axis} is empty")]
    EmptyAxis { axis: usize },

    /// Angles of an axis must be strictly increasing.
    #[error("Angle axis {axis} is not strictly ascending at index {index} ({prev} >= {next})")]
    NonAscendingAxis {
        axis: usize,
        index: usize,
        prev: f32,
        next: f32,
    },

    /// An angle lies outside of the domain of the coordinate system.
    #[error("Angle {value} at index {index} of axis {axis} is outside of [0, {max}]")]
    AngleOutOfDomain {
        axis: usize,
        index: usize,
        value: f32,
        max: f32,
    },

    /// The sample storage does not match the axis lengths.
    #[error("Sample count mismatch: expected {expected}, got {actual}")]
    SampleCountMismatch { expected: usize, actual: usize },

    /// The wavelength count contradicts the colour model.
    #[error("The {color_model} colour model expects {expected} wavelengths, got {actual}")]
    WavelengthCountMismatch {
        color_model: ColorModel,
        expected: usize,
        actual: usize,
    },

    /// A sample is NaN or infinite.
    #[error("Non-finite sample in cell {cell} at wavelength index {wavelength}")]
    NonFiniteSample { cell: usize, wavelength: usize },
}
