//! # tabrdf-base
//! Basic types shared by the tabrdf crates.
//! Contains the math helpers, the angle units and the enums describing how
//! tabulated reflectance data is organised.
#![warn(missing_docs)]

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub mod error;
pub mod math;
pub mod units;

pub use error::GridError;

/// Indicates whether something is uniform in all directions or not.
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symmetry {
    /// Uniformity in all directions.
    #[cfg_attr(feature = "cli", clap(alias = "iso"))]
    #[serde(alias = "iso")]
    Isotropic,
    /// Non-uniformity in some directions.
    #[cfg_attr(feature = "cli", clap(alias = "aniso"))]
    #[serde(alias = "aniso")]
    Anisotropic,
}

impl Symmetry {
    /// Returns whether it's isotropic.
    pub const fn is_isotropic(&self) -> bool { matches!(self, Self::Isotropic) }

    /// Returns whether it's anisotropic.
    pub const fn is_anisotropic(&self) -> bool { matches!(self, Self::Anisotropic) }
}

impl Display for Symmetry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Symmetry::Isotropic => "Isotropic",
                Symmetry::Anisotropic => "Anisotropic",
            }
        )
    }
}

/// How the wavelengths of a spectrum are represented.
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorModel {
    /// A single intensity.
    Monochromatic,
    /// Three channels in the sRGB primaries.
    Rgb,
    /// Three channels in the CIE XYZ colour space.
    Xyz,
    /// An arbitrary number of wavelengths.
    Spectral,
}

impl ColorModel {
    /// Returns the number of wavelengths the colour model stores.
    ///
    /// `requested` is only honoured by [`ColorModel::Spectral`]; the other
    /// models have a fixed channel count.
    pub const fn n_wavelengths(&self, requested: usize) -> usize {
        match self {
            ColorModel::Monochromatic => 1,
            ColorModel::Rgb | ColorModel::Xyz => 3,
            ColorModel::Spectral => requested,
        }
    }

    /// Returns whether the colour model stores actual wavelengths.
    pub const fn is_spectral(&self) -> bool { matches!(self, Self::Spectral) }
}

impl Display for ColorModel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorModel::Monochromatic => write!(f, "monochromatic"),
            ColorModel::Rgb => write!(f, "RGB"),
            ColorModel::Xyz => write!(f, "XYZ"),
            ColorModel::Spectral => write!(f, "spectral"),
        }
    }
}

/// Where the samples of a data set come from.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Measured in the real world.
    Measured,
    /// Modified after being measured or generated.
    Edited,
    /// Generated from an analytical model or a simulation.
    Generated,
    /// Unknown origin.
    #[default]
    Unknown,
}
