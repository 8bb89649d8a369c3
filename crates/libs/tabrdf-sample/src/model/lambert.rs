use crate::model::ReflectanceModel;
use base::math::Vec3;
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_1_PI;

/// Lambertian reflectance model.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lambertian {
    /// Fraction of the incident light that is reflected.
    pub albedo: f32,
}

impl Lambertian {
    /// Creates a Lambertian model.
    pub fn new(albedo: f32) -> Self { Self { albedo } }
}

impl ReflectanceModel for Lambertian {
    fn name(&self) -> &'static str { "Lambertian" }

    fn is_isotropic(&self) -> bool { true }

    fn eval(&self, _wi: &Vec3, _wo: &Vec3) -> f32 { self.albedo * FRAC_1_PI }
}
