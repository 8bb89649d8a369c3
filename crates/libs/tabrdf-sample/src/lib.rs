//! # tabrdf-sample
//! Directional sampling of tabulated reflectance data.
//!
//! Spectra are tabulated over up to four angles describing a pair of
//! directions. A [`CoordinateSystem`] maps the incident and outgoing
//! directions to these angles, and an [`Interpolator`] estimates the
//! spectrum between the tabulated angles. [`Sampler`] ties both together:
//!
//! ```
//! use base::{math::Vec3, ColorModel, Symmetry};
//! use tabrdf_sample::{LinearInterpolator, SampleGrid, Sampler, SphericalCoordSys};
//!
//! let mut grid = SampleGrid::<SphericalCoordSys>::new(
//!     [10, 1, 10, 37],
//!     ColorModel::Monochromatic,
//!     1,
//!     Symmetry::Isotropic,
//!     true,
//! );
//! grid.fill_spectra_with(|[theta_i, _, theta_o, _], spectrum| {
//!     spectrum[0] = theta_i.cos() * theta_o.cos();
//! });
//! let wo = Vec3::new(0.0, 0.6, 0.8);
//! let value = Sampler::value::<LinearInterpolator, _>(&grid, Vec3::Z, wo, 0);
//! assert!((value - 0.8).abs() < 0.01);
//! ```
//!
//! Grids are populated once, either by hand through their accessors or from
//! an analytical [`ReflectanceModel`], and then only read; they can be shared
//! between threads freely.
#![warn(missing_docs)]

pub mod axis;
pub mod coord;
pub mod grid;
pub mod interp;
pub mod model;
pub mod sampler;
pub mod two_sided;

pub use axis::AngleAxis;
pub use coord::{CoordinateSystem, HalfDiffCoordSys, SpecularCoordSys, SphericalCoordSys};
pub use grid::{AngleGrid, GridParams, SampleGrid, SampleGrid2};
pub use interp::{InterpolationMethod, Interpolator, LinearInterpolator, SplineInterpolator};
pub use model::{fill_from_model, Lambertian, ReflectanceModel, WardAnisotropic};
pub use sampler::Sampler;
pub use two_sided::TwoSidedGrid;
