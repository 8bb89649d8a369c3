use crate::model::ReflectanceModel;
use base::math::{rcp_f32, sqr, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Ward anisotropic reflectance model.
///
/// The surface frame has its normal along +z, its tangent along +x and its
/// binormal along -y.
///
/// Gregory J. Ward. Measuring and modeling anisotropic reflection. In
/// Proceedings of SIGGRAPH '92, pages 265-272. ACM, 1992.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct WardAnisotropic {
    /// Roughness along the tangent.
    pub roughness_x: f32,
    /// Roughness along the binormal.
    pub roughness_y: f32,
}

impl WardAnisotropic {
    const NORMAL: Vec3 = Vec3::Z;
    const TANGENT: Vec3 = Vec3::X;
    const BINORMAL: Vec3 = Vec3::NEG_Y;

    /// Creates a Ward model.
    ///
    /// # Panics
    ///
    /// Panics if a roughness is not positive.
    pub fn new(roughness_x: f32, roughness_y: f32) -> Self {
        assert!(
            roughness_x > 0.0 && roughness_y > 0.0,
            "Ward roughness must be positive"
        );
        Self {
            roughness_x,
            roughness_y,
        }
    }
}

impl ReflectanceModel for WardAnisotropic {
    fn name(&self) -> &'static str { "Ward anisotropic" }

    fn is_isotropic(&self) -> bool { false }

    fn eval(&self, wi: &Vec3, wo: &Vec3) -> f32 {
        let cos_i = wi.dot(Self::NORMAL);
        let cos_o = wo.dot(Self::NORMAL);
        if cos_i <= 0.0 || cos_o <= 0.0 {
            return 0.0;
        }
        let h = (*wi + *wo).normalize();
        let cos_h = h.dot(Self::NORMAL);
        let sq_ht = sqr(h.dot(Self::TANGENT) / self.roughness_x);
        let sq_hb = sqr(h.dot(Self::BINORMAL) / self.roughness_y);
        (cos_i * cos_o).sqrt().recip()
            * (-2.0 * (sq_ht + sq_hb) / (1.0 + cos_h)).exp()
            * rcp_f32(4.0 * PI * self.roughness_x * self.roughness_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use base::{math::sph_to_cart, units::rad};
    use proptest::prelude::*;

    #[test]
    fn peak_at_normal_incidence() {
        let model = WardAnisotropic::new(0.25, 0.5);
        assert_relative_eq!(
            model.eval(&Vec3::Z, &Vec3::Z),
            1.0 / (4.0 * PI * 0.25 * 0.5),
            max_relative = 1e-5
        );
    }

    #[test]
    fn zero_below_the_surface() {
        let model = WardAnisotropic::new(0.25, 0.5);
        let horizon = Vec3::X;
        assert_eq!(model.eval(&horizon, &Vec3::Z), 0.0);
        assert_eq!(model.eval(&Vec3::Z, &Vec3::new(0.0, 0.6, -0.8)), 0.0);
    }

    #[test]
    fn anisotropic_highlight() {
        let model = WardAnisotropic::new(0.1, 0.4);
        let theta = rad!(0.4);
        // Mirror configurations along the tangent and along the binormal.
        let along_x = model.eval(&sph_to_cart(theta, rad!(0.0)), &sph_to_cart(theta, rad!(PI)));
        let along_y = model.eval(
            &sph_to_cart(theta, rad!(0.5 * PI)),
            &sph_to_cart(theta, rad!(1.5 * PI)),
        );
        assert_relative_eq!(along_x, along_y, max_relative = 1e-4);
        // The lobe falls off faster along the smoother tangent.
        let off_x = model.eval(&sph_to_cart(theta, rad!(0.0)), &sph_to_cart(rad!(0.6), rad!(PI)));
        let off_y = model.eval(
            &sph_to_cart(theta, rad!(0.5 * PI)),
            &sph_to_cart(rad!(0.6), rad!(1.5 * PI)),
        );
        assert!(off_x < off_y);
        assert!(!model.is_isotropic());
    }

    #[test]
    fn serde_params() {
        let model: WardAnisotropic =
            serde_yaml::from_str("roughness_x: 0.2\nroughness_y: 0.3\n").unwrap();
        assert_eq!(model, WardAnisotropic::new(0.2, 0.3));
    }

    proptest! {
        #[test]
        fn reciprocal(
            ti in 0.0f32..1.5, pi in 0.0f32..6.28, to in 0.0f32..1.5, po in 0.0f32..6.28
        ) {
            let model = WardAnisotropic::new(0.3, 0.15);
            let wi = sph_to_cart(rad!(ti), rad!(pi));
            let wo = sph_to_cart(rad!(to), rad!(po));
            let (a, b) = (model.eval(&wi, &wo), model.eval(&wo, &wi));
            prop_assert!(a >= 0.0 && a.is_finite());
            prop_assert!((a - b).abs() <= 1e-4 * a.max(1.0));
        }
    }
}
