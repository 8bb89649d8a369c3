use crate::coord::CoordinateSystem;
use base::{
    math::{cart_to_sph, reflect, Mat3, Sph2, Vec3},
    units::rad,
};
use std::f32::consts::{FRAC_PI_2, TAU};

/// Half-vector and difference-vector angles: (θh, φh, θd, φd).
///
/// The isotropic overload drops φh.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct HalfDiffCoordSys;

/// Squared length of `wi + wo` under which the half vector is taken as the
/// surface normal.
const DEGENERATE_HALF_SQR_LEN: f32 = 1.0e-12;

#[rustfmt::skip]
/// Converts the incident and outgoing direction to the half and difference
/// vector.
///
/// $$
/// \begin{cases}
///   \mathbf{\h} = \frac{\mathbf{\i} + \mathbf{\o}}{||\mathbf{\i} + \mathbf{\o}||} \\\\
///   \mathbf{\d} = Rot_y(-\theta_h) \cdot Rot_z(-\phi_h) \cdot \mathbf{\i}
/// \end{cases}
/// $$
///
/// Opposite directions have no half vector; the normal is used instead.
///
/// # Returns
///
/// (half, difference)
pub fn io2hd(wi: &Vec3, wo: &Vec3) -> (Sph2, Sph2) {
    let sum = *wi + *wo;
    let h = if sum.length_squared() < DEGENERATE_HALF_SQR_LEN {
        Vec3::Z
    } else {
        sum.normalize()
    };
    let wh = cart_to_sph(h);
    let rot_y = Mat3::from_rotation_y(-wh.theta.as_f32());
    let rot_z = Mat3::from_rotation_z(-wh.phi.as_f32());
    let d = rot_y * rot_z * *wi;
    (wh, cart_to_sph(d))
}

#[rustfmt::skip]
/// Converts the half and difference vectors to the incident and outgoing
/// direction.
///
/// $$
/// \begin{cases}
///   \mathbf{\i} = Rot_z(+\phi_h) \cdot Rot_y(+\theta_h) \cdot \mathbf{\d} \\\\
///   \mathbf{\o} = 2 \cdot (\mathbf{\i} \cdot \mathbf{h})\mathbf{\h} - \mathbf{\i}
/// \end{cases}
/// $$
///
/// # Returns
///
/// (incident, outgoing)
pub fn hd2io(wh: &Sph2, wd: &Sph2) -> (Vec3, Vec3) {
    let h = wh.to_cartesian();
    let rot_y = Mat3::from_rotation_y(wh.theta.as_f32());
    let rot_z = Mat3::from_rotation_z(wh.phi.as_f32());
    let wi = rot_z * rot_y * wd.to_cartesian();
    (wi, reflect(wi, h))
}

impl CoordinateSystem for HalfDiffCoordSys {
    const NAME: &'static str = "half-difference";
    const MAX_ANGLES: [f32; 4] = [FRAC_PI_2, TAU, FRAC_PI_2, TAU];

    fn to_xyz(angles: [f32; 4]) -> (Vec3, Vec3) {
        hd2io(
            &Sph2::new(rad!(angles[0]), rad!(angles[1])),
            &Sph2::new(rad!(angles[2]), rad!(angles[3])),
        )
    }

    fn from_xyz(wi: Vec3, wo: Vec3) -> [f32; 4] {
        let (wh, wd) = io2hd(&wi, &wo);
        [
            wh.theta.value(),
            wh.phi.value(),
            wd.theta.value(),
            wd.phi.value(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::tests::{angle_diff, assert_vec3_eq};
    use base::{math::sph_to_cart, units::Radians};
    use proptest::prelude::*;

    #[test]
    fn test_io2hd() {
        let i = Vec3::new(1.0, 0.0, 0.0);
        let o = Vec3::new(0.0, 1.0, 0.0);
        let (h, d) = io2hd(&i, &o);
        assert_vec3_eq(&h.to_cartesian(), &Vec3::new(1.0, 1.0, 0.0).normalize());
        assert_vec3_eq(&d.to_cartesian(), &Vec3::new(0.0, -1.0, 1.0).normalize());

        let (i_converted, o_converted) = hd2io(&h, &d);
        assert_vec3_eq(&i_converted, &i);
        assert_vec3_eq(&o_converted, &o);

        let wi = Sph2::new(Radians::PI / 4.0, Radians::PI / 3.0);
        let wo = Sph2::new(Radians::PI / 3.0, Radians::PI / 2.0);
        let (h, d) = io2hd(&wi.to_cartesian(), &wo.to_cartesian());
        assert_vec3_eq(&h.to_cartesian(), &Vec3::new(0.182143, 0.761639, 0.621876));
        assert_vec3_eq(
            &d.to_cartesian(),
            &Vec3::new(-0.132232527, -0.201426960, 0.970536829),
        );
    }

    #[test]
    fn specular_configuration_has_zero_difference_angle() {
        let wi = Sph2::new(rad!(0.6), rad!(1.0)).to_cartesian();
        let wo = reflect(wi, Vec3::Z);
        let angles = HalfDiffCoordSys::from_xyz(wi, wo);
        assert!(angles[0].abs() < 1e-5);
        assert!((angles[2] - 0.6).abs() < 1e-4);
    }

    #[test]
    fn opposite_directions_fall_back_to_normal() {
        let wi = Vec3::new(1.0, 0.0, 0.0);
        let angles = HalfDiffCoordSys::from_xyz(wi, -wi);
        assert_eq!(angles[0], 0.0);
        assert!(angles.iter().all(|a| a.is_finite()));
    }

    proptest! {
        #[test]
        fn round_trip(
            th in 0.05f32..0.75, ph in 0.0f32..6.28, td in 0.05f32..0.75, pd in 0.0f32..6.28
        ) {
            // θh + θd < π/2 keeps both directions above the surface.
            let angles = [th, ph, td, pd];
            let (wi, wo) = HalfDiffCoordSys::to_xyz(angles);
            let back = HalfDiffCoordSys::from_xyz(wi, wo);
            for i in 0..4 {
                prop_assert!(angle_diff(angles[i], back[i]) < 1e-3, "{:?} != {:?}", angles, back);
            }
        }

        #[test]
        fn directions_round_trip(
            ti in 0.0f32..1.55, pi in 0.0f32..6.28, to in 0.0f32..1.55, po in 0.0f32..6.28
        ) {
            let wi = sph_to_cart(rad!(ti), rad!(pi));
            let wo = sph_to_cart(rad!(to), rad!(po));
            prop_assume!((wi + wo).length() > 1e-2);
            let (wi2, wo2) = HalfDiffCoordSys::to_xyz(HalfDiffCoordSys::from_xyz(wi, wo));
            assert_vec3_eq(&wi, &wi2);
            assert_vec3_eq(&wo, &wo2);
        }
    }
}
