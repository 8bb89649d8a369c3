use crate::coord::CoordinateSystem;
use base::{
    math::{phi, sph_to_cart, theta, Mat3, Vec3},
    units::rad,
};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Incident angles and outgoing angles measured around the mirror direction
/// of the incident direction: (θi, φi, θs, φs).
///
/// The outgoing direction is rotated so that the mirror direction of `wi`
/// becomes the pole, thus θs = 0 on the specular peak. The isotropic
/// overload drops φi.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct SpecularCoordSys;

impl SpecularCoordSys {
    /// Rotation bringing the mirror direction of `sph(theta_i, phi_i)` onto
    /// the z axis.
    fn to_specular_frame(theta_i: f32, phi_i: f32) -> Mat3 {
        Mat3::from_rotation_y(theta_i) * Mat3::from_rotation_z(-phi_i)
    }
}

impl CoordinateSystem for SpecularCoordSys {
    const NAME: &'static str = "specular";
    const MAX_ANGLES: [f32; 4] = [FRAC_PI_2, TAU, PI, TAU];

    fn to_xyz(angles: [f32; 4]) -> (Vec3, Vec3) {
        let [theta_i, phi_i, theta_s, phi_s] = angles;
        let wi = sph_to_cart(rad!(theta_i), rad!(phi_i));
        let ws = sph_to_cart(rad!(theta_s), rad!(phi_s));
        let wo = Self::to_specular_frame(theta_i, phi_i).transpose() * ws;
        (wi, wo)
    }

    fn from_xyz(wi: Vec3, wo: Vec3) -> [f32; 4] {
        let theta_i = theta(&wi).value();
        let phi_i = phi(&wi).value();
        let ws = Self::to_specular_frame(theta_i, phi_i) * wo;
        [theta_i, phi_i, theta(&ws).value(), phi(&ws).value()]
    }
}
