//! Parameterisations of a pair of directions by angles.
//!
//! Every coordinate system maps an incident direction `wi` and an outgoing
//! direction `wo` (both unit vectors in the local shading frame, pointing
//! away from the surface, with the normal along +z) to four angles, and back.
//! Isotropic data is invariant under a rotation about the normal; the
//! isotropic overloads drop the angle describing that rotation (angle 1).
use base::{math::Vec3, Symmetry};

mod half_diff;
mod specular;
mod spherical;

pub use half_diff::*;
pub use specular::*;
pub use spherical::*;

/// Stateless bidirectional mapping between a direction pair and an angle
/// tuple.
pub trait CoordinateSystem: Copy + Send + Sync + 'static {
    /// Name of the coordinate system.
    const NAME: &'static str;

    /// Upper bound of each angle; the lower bound is always zero.
    const MAX_ANGLES: [f32; 4];

    /// Converts four angles to the incident and outgoing directions.
    fn to_xyz(angles: [f32; 4]) -> (Vec3, Vec3);

    /// Converts the incident and outgoing directions to four angles.
    ///
    /// Azimuthal angles are returned in `[0, 2π)`.
    fn from_xyz(wi: Vec3, wo: Vec3) -> [f32; 4];

    /// Converts three angles (angle 1 dropped) to the incident and outgoing
    /// directions. The dropped angle is taken as zero.
    fn to_xyz_iso(angles: [f32; 3]) -> (Vec3, Vec3) {
        Self::to_xyz([angles[0], 0.0, angles[1], angles[2]])
    }

    /// Converts the incident and outgoing directions to three angles, the
    /// rotation about the normal being dropped.
    fn from_xyz_iso(wi: Vec3, wo: Vec3) -> [f32; 3] {
        let [a0, _, a2, a3] = Self::from_xyz(wi, wo);
        [a0, a2, a3]
    }
}

/// Converts a direction pair to the four angles of a grid axis layout.
///
/// This is the only place where the symmetry of the data decides which
/// overload is used. For isotropic data angle 1 is always zero, matching the
/// single-valued axis 1 of isotropic grids.
#[inline]
pub fn angles_from_xyz<C: CoordinateSystem>(symmetry: Symmetry, wi: Vec3, wo: Vec3) -> [f32; 4] {
    match symmetry {
        Symmetry::Isotropic => {
            let [a0, a2, a3] = C::from_xyz_iso(wi, wo);
            [a0, 0.0, a2, a3]
        }
        Symmetry::Anisotropic => C::from_xyz(wi, wo),
    }
}

/// Converts the four angles of a grid axis layout to a direction pair.
///
/// Inverse of [`angles_from_xyz`]; angle 1 is ignored for isotropic data.
#[inline]
pub fn xyz_from_angles<C: CoordinateSystem>(symmetry: Symmetry, angles: [f32; 4]) -> (Vec3, Vec3) {
    match symmetry {
        Symmetry::Isotropic => C::to_xyz_iso([angles[0], angles[2], angles[3]]),
        Symmetry::Anisotropic => C::to_xyz(angles),
    }
}

/// Converts an angle tuple of the coordinate system `Src` to the one of the
/// coordinate system `Dst`.
pub fn convert_coordinate_system<Src, Dst>(angles: [f32; 4]) -> [f32; 4]
where
    Src: CoordinateSystem,
    Dst: CoordinateSystem,
{
    let (wi, wo) = Src::to_xyz(angles);
    Dst::from_xyz(wi, wo)
}
