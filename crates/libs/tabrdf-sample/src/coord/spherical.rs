use crate::coord::CoordinateSystem;
use base::{
    math::{phi, sph_to_cart, theta, wrap_two_pi, Vec3},
    units::rad,
};
use std::f32::consts::{FRAC_PI_2, TAU};

/// Spherical coordinates of both directions: (θi, φi, θo, φo).
///
/// The isotropic overload keeps the relative azimuth φo - φi.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct SphericalCoordSys;

impl CoordinateSystem for SphericalCoordSys {
    const NAME: &'static str = "spherical";
    const MAX_ANGLES: [f32; 4] = [FRAC_PI_2, TAU, FRAC_PI_2, TAU];

    fn to_xyz(angles: [f32; 4]) -> (Vec3, Vec3) {
        let wi = sph_to_cart(rad!(angles[0]), rad!(angles[1]));
        let wo = sph_to_cart(rad!(angles[2]), rad!(angles[3]));
        (wi, wo)
    }

    fn from_xyz(wi: Vec3, wo: Vec3) -> [f32; 4] {
        [
            theta(&wi).value(),
            phi(&wi).value(),
            theta(&wo).value(),
            phi(&wo).value(),
        ]
    }

    fn from_xyz_iso(wi: Vec3, wo: Vec3) -> [f32; 3] {
        let phi_i = phi(&wi).value();
        let phi_o = phi(&wo).value();
        [
            theta(&wi).value(),
            theta(&wo).value(),
            wrap_two_pi(phi_o - phi_i),
        ]
    }
}
