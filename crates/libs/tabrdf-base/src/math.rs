//! Math utilities.
//!
//! Besides the vector and spherical helpers used by the samplers, the scalar
//! kernels ([`lerp`], [`smoothstep`], [`smootherstep`], the hermite and
//! uniform Catmull-Rom curves) are exported for callers building their own
//! one dimensional interpolants. The samplers themselves only rely on
//! [`catmull_rom_centripetal`].

use crate::units::{rad, Radians};
use cfg_if::cfg_if;
use num_traits::Float;
use std::fmt::{Debug, Display, Formatter};

pub use glam::{Mat3, Vec2, Vec3};

/// Machine epsilon for single precision floating point numbers.
pub const MACHINE_EPSILON_F32: f32 = f32::EPSILON * 0.5;

/// Z component below which a direction is considered to point under the
/// surface.
pub const DOWNWARD_DIR_THRESHOLD: f32 = -1.0e-5;

/// Checks if two floating point numbers are equal within one ULP.
pub fn ulp_eq(a: f32, b: f32) -> bool {
    let diff = (a - b).abs();
    let a_abs = a.abs();
    let b_abs = b.abs();
    if a == b {
        true
    } else if a == 0.0 || b == 0.0 || a_abs < f32::MIN_POSITIVE || b_abs < f32::MIN_POSITIVE {
        diff < (f32::MIN_POSITIVE * f32::EPSILON)
    } else {
        (diff / f32::min(a_abs + b_abs, f32::MAX)) < f32::EPSILON
    }
}

/// Checks if two values are equal within a tolerance of two epsilons scaled
/// by the larger magnitude (at least one).
///
/// Looser than [`ulp_eq`]; suited to values produced by a few arithmetic
/// operations such as angles computed from directions.
pub fn is_equal<F: Float>(lhs: F, rhs: F) -> bool {
    let two = F::one() + F::one();
    let tolerance = F::epsilon() * lhs.abs().max(rhs.abs()).max(F::one()) * two;
    (lhs - rhs).abs() <= tolerance
}

/// Returns the accurate reciprocal of the single precision floating point.
pub fn rcp_f32(x: f32) -> f32 {
    // Intel's intrinsic gives NaN if x is 0.0 or -0.0
    if x == 0.0 {
        return f32::INFINITY * x.signum();
    }

    cfg_if! {
        if #[cfg(target_arch = "x86_64")] {
            use std::arch::x86_64::{_mm_cvtss_f32, _mm_mul_ss, _mm_rcp_ss, _mm_set_ss, _mm_sub_ss};
            unsafe {
                let a = _mm_set_ss(x);
                let r = _mm_rcp_ss(a); // error is less than 1.5 * 2^-12
                // One Newton-Raphson step.
                _mm_cvtss_f32(_mm_mul_ss(r, _mm_sub_ss(_mm_set_ss(2.0), _mm_mul_ss(r, a))))
            }
        } else {
            1.0 / x
        }
    }
}

/// Returns the square of the given value.
#[inline(always)]
pub fn sqr<F: Float>(x: F) -> F { x * x }

/// Clamps `x` into `[min, max]`.
#[inline(always)]
pub fn clamp<F: Float>(x: F, min: F, max: F) -> F { x.max(min).min(max) }

/// Linear interpolation between `v0` and `v1`.
#[inline(always)]
pub fn lerp(v0: f32, v1: f32, t: f32) -> f32 { v0 + (v1 - v0) * t }

/// Hermite step of `t` mapped from `[e0, e1]`, clamped to `[0, 1]`.
pub fn smoothstep(e0: f32, e1: f32, t: f32) -> f32 {
    let c = clamp((t - e0) / (e1 - e0), 0.0, 1.0);
    c * c * (3.0 - 2.0 * c)
}

/// Fifth order version of [`smoothstep`] with zero first and second
/// derivatives at both edges.
pub fn smootherstep(e0: f32, e1: f32, t: f32) -> f32 {
    let c = clamp((t - e0) / (e1 - e0), 0.0, 1.0);
    c * c * c * (c * (c * 6.0 - 15.0) + 10.0)
}

/// Interpolates between `v0` and `v1` along a cubic hermite curve.
pub fn hermite_interpolation3(v0: f32, v1: f32, t: f32) -> f32 {
    lerp(v0, v1, smoothstep(0.0, 1.0, t))
}

/// Interpolates between `v0` and `v1` along a quintic hermite curve.
pub fn hermite_interpolation5(v0: f32, v1: f32, t: f32) -> f32 {
    lerp(v0, v1, smootherstep(0.0, 1.0, t))
}

/// Uniform Catmull-Rom spline through `v1` (t = 0) and `v2` (t = 1).
pub fn catmull_rom_uniform(v0: f32, v1: f32, v2: f32, v3: f32, t: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * ((2.0 * v1)
        + (-v0 + v2) * t
        + (2.0 * v0 - 5.0 * v1 + 4.0 * v2 - v3) * t2
        + (-v0 + 3.0 * v1 - 3.0 * v2 + v3) * t3)
}

/// Centripetal Catmull-Rom spline segment between the second and the third
/// of four 2D control points.
///
/// The knot spacing is the square root of the chord length between control
/// points which avoids cusps and self-intersections within a segment.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CentripetalCatmullRom {
    points: [Vec2; 4],
    knots: [f32; 4],
}

impl CentripetalCatmullRom {
    /// Exponent of the chord length used to space the knots.
    pub const ALPHA: f32 = 0.5;

    /// Smallest knot increment; keeps coincident control points usable.
    const MIN_KNOT_STEP: f32 = 1.0e-6;

    /// Creates the segment from its four control points.
    pub fn new(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Self {
        let points = [p0, p1, p2, p3];
        let mut knots = [0.0f32; 4];
        for i in 1..4 {
            let step = points[i]
                .distance(points[i - 1])
                .powf(Self::ALPHA)
                .max(Self::MIN_KNOT_STEP);
            knots[i] = knots[i - 1] + step;
        }
        Self { points, knots }
    }

    /// Evaluates the curve at the knot parameter `t` in `[t1, t2]`.
    pub fn point(&self, t: f32) -> Vec2 {
        let [p0, p1, p2, p3] = self.points;
        let [t0, t1, t2, t3] = self.knots;
        let a1 = p0 * ((t1 - t) / (t1 - t0)) + p1 * ((t - t0) / (t1 - t0));
        let a2 = p1 * ((t2 - t) / (t2 - t1)) + p2 * ((t - t1) / (t2 - t1));
        let a3 = p2 * ((t3 - t) / (t3 - t2)) + p3 * ((t - t2) / (t3 - t2));
        let b1 = a1 * ((t2 - t) / (t2 - t0)) + a2 * ((t - t0) / (t2 - t0));
        let b2 = a2 * ((t3 - t) / (t3 - t1)) + a3 * ((t - t1) / (t3 - t1));
        b1 * ((t2 - t) / (t2 - t1)) + b2 * ((t - t1) / (t2 - t1))
    }

    /// Returns the y coordinate of the curve where its x coordinate equals
    /// `x`. The x coordinates of the two middle control points must enclose
    /// `x` and be increasing.
    pub fn interpolate_y(&self, x: f32) -> f32 {
        let (p1, p2) = (self.points[1], self.points[2]);
        if x <= p1.x {
            return p1.y;
        }
        if x >= p2.x {
            return p2.y;
        }
        let mut lo = self.knots[1];
        let mut hi = self.knots[2];
        let mut mid = 0.5 * (lo + hi);
        for _ in 0..32 {
            mid = 0.5 * (lo + hi);
            let p = self.point(mid);
            if p.x < x {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        self.point(mid).y
    }
}

/// Interpolates `val` at `x` along a centripetal Catmull-Rom spline whose
/// control points are `(pos[i], val[i])`.
pub fn catmull_rom_centripetal(pos: [f32; 4], val: [f32; 4], x: f32) -> f32 {
    CentripetalCatmullRom::new(
        Vec2::new(pos[0], val[0]),
        Vec2::new(pos[1], val[1]),
        Vec2::new(pos[2], val[2]),
        Vec2::new(pos[3], val[3]),
    )
    .interpolate_y(x)
}

/// Spherical coordinate in radians.
///
/// Radius is fixed to 1.
#[derive(Copy, Clone, PartialEq)]
pub struct Sph2 {
    /// Zenith angle (polar angle) in radians.
    pub theta: Radians,
    /// Azimuth angle (azimuthal angle) in radians.
    pub phi: Radians,
}

impl Sph2 {
    /// Create a new spherical coordinate.
    pub const fn new(zenith: Radians, azimuth: Radians) -> Self {
        Self {
            theta: zenith,
            phi: azimuth,
        }
    }

    /// Create a new coordinate with zenith and azimuth angles set to 0.
    pub const fn zero() -> Self {
        Self {
            theta: Radians::ZERO,
            phi: Radians::ZERO,
        }
    }

    /// Test if the two spherical coordinates are approximately equal.
    pub fn approx_eq(&self, other: &Self) -> bool {
        approx::abs_diff_eq!(self.theta.value, other.theta.value, epsilon = 1.0e-5)
            && approx::abs_diff_eq!(self.phi.value, other.phi.value, epsilon = 1.0e-5)
    }

    /// Convert to a cartesian coordinate.
    pub fn to_cartesian(&self) -> Vec3 { sph_to_cart(self.theta, self.phi) }

    /// Convert from a cartesian coordinate.
    #[track_caller]
    pub fn from_cartesian(cartesian: Vec3) -> Self {
        debug_assert!(
            approx::ulps_eq!(cartesian.length(), 1.0, epsilon = 1.0e-5),
            "expected 1.0, got {}",
            cartesian.length()
        );
        Self {
            theta: theta(&cartesian),
            phi: phi(&cartesian),
        }
    }
}

impl Debug for Sph2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{ θ: {}, φ: {} }}", self.theta, self.phi)
    }
}

impl Display for Sph2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ θ: {}, φ: {} }}",
            self.theta.in_degrees(),
            self.phi.in_degrees()
        )
    }
}

/// Conversion from spherical coordinate system to cartesian coordinate system.
///
/// # Arguments
///
/// * `zenith` - polar angle
/// * `azimuth` - azimuthal angle
pub fn sph_to_cart(zenith: Radians, azimuth: Radians) -> Vec3 {
    Vec3::new(
        zenith.sin() * azimuth.cos(),
        zenith.sin() * azimuth.sin(),
        zenith.cos(),
    )
}

/// Returns the zenith angle of the given vector in radians in the range
/// [0, pi].
///
/// Computed from the ratio of the in-plane length to the z component which
/// stays accurate close to the poles, where `acos` loses precision.
pub fn theta(v: &Vec3) -> Radians { rad!(v.x.hypot(v.y).atan2(v.z)) }

/// Returns the azimuth angle of the given vector in radians in the range
/// [0, 2pi). Vectors along the z axis have an azimuth of zero.
pub fn phi(v: &Vec3) -> Radians {
    if v.x == 0.0 && v.y == 0.0 {
        return Radians::ZERO;
    }
    rad!(wrap_two_pi(v.y.atan2(v.x)))
}

/// Conversion from cartesian coordinate system to spherical coordinate
/// system, the length of the vector is discarded.
pub fn cart_to_sph(v: Vec3) -> Sph2 { Sph2::new(theta(&v), phi(&v)) }

/// Wraps an angle in radians into [0, 2pi).
pub fn wrap_two_pi(angle: f32) -> f32 { rad!(angle).wrap_full_turn().value() }

/// Reflects `dir` about `normal`; both point away from the surface.
pub fn reflect(dir: Vec3, normal: Vec3) -> Vec3 { 2.0 * normal.dot(dir) * normal - dir }

/// Returns whether the direction points below the surface.
pub fn is_downward_dir(dir: &Vec3) -> bool { dir.z < DOWNWARD_DIR_THRESHOLD }

/// Projects a direction pointing below the surface onto the surface plane.
///
/// A direction pointing straight down becomes the x axis.
pub fn fix_downward_dir(dir: Vec3) -> Vec3 {
    if dir.z >= 0.0 {
        return dir;
    }
    if dir.x == 0.0 && dir.y == 0.0 {
        Vec3::X
    } else {
        Vec3::new(dir.x, dir.y, 0.0).normalize()
    }
}

/// Generates `n` evenly spaced values over `[start, end]`, both included.
pub fn linspace(start: f32, end: f32, n: usize) -> Vec<f32> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f32;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f32 })
                .collect()
        }
    }
}

/// Returns whether the values are evenly spaced.
///
/// Sequences with fewer than three values are trivially evenly spaced.
pub fn is_equal_interval(values: &[f32]) -> bool {
    let n = values.len();
    if n < 3 {
        return true;
    }
    let first = values[0];
    let step = (values[n - 1] - first) / (n - 1) as f32;
    let tolerance = step.abs() * 1.0e-4 + MACHINE_EPSILON_F32;
    values
        .iter()
        .enumerate()
        .all(|(i, &v)| (v - (first + step * i as f32)).abs() <= tolerance)
}
