use crate::math::ulp_eq;
use core::{
    fmt::{Debug, Display, Formatter},
    marker::PhantomData,
};

/// Radian unit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct URadian;

/// Degree unit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct UDegree;

/// Unit of an [`Angle`].
pub trait AngleUnit: Debug + Copy + Clone {
    /// Symbol printed after the value.
    const SYMBOL: &'static str;

    /// Value of one radian in this unit.
    const PER_RADIAN: f32;

    /// One full turn expressed in this unit.
    const FULL_TURN: f32;
}

impl AngleUnit for URadian {
    const SYMBOL: &'static str = "rad";
    const PER_RADIAN: f32 = 1.0;
    const FULL_TURN: f32 = std::f32::consts::TAU;
}

impl AngleUnit for UDegree {
    const SYMBOL: &'static str = "deg";
    const PER_RADIAN: f32 = 180.0 / std::f32::consts::PI;
    const FULL_TURN: f32 = 360.0;
}

/// Angle tagged with its unit.
#[derive(Copy, Clone)]
pub struct Angle<A: AngleUnit> {
    pub(crate) value: f32,
    unit: PhantomData<A>,
}

/// Angle in radians.
pub type Radians = Angle<URadian>;

/// Angle in degrees.
pub type Degrees = Angle<UDegree>;

impl<A: AngleUnit> Angle<A> {
    /// Zero angle.
    pub const ZERO: Self = Self::new(0.0);

    /// Creates an angle from its value in the unit `A`.
    pub const fn new(value: f32) -> Self {
        Self {
            value,
            unit: PhantomData,
        }
    }

    /// Returns the value in the unit `A`.
    pub const fn value(&self) -> f32 { self.value }

    /// Same as [`Angle::value`], reads better at rotation call sites.
    pub const fn as_f32(&self) -> f32 { self.value }

    /// Returns the value in radians.
    fn radians(&self) -> f32 { self.value / A::PER_RADIAN }

    /// Wraps the angle into `[0, full turn)`.
    pub fn wrap_full_turn(self) -> Self {
        let turn = A::FULL_TURN;
        let wrapped = self.value.rem_euclid(turn);
        // `rem_euclid` may round up to the modulus for tiny negative inputs.
        Self::new(if wrapped >= turn { 0.0 } else { wrapped })
    }

    /// Sine of the angle.
    pub fn sin(&self) -> f32 { self.radians().sin() }

    /// Cosine of the angle.
    pub fn cos(&self) -> f32 { self.radians().cos() }

    /// Tangent of the angle.
    pub fn tan(&self) -> f32 { self.radians().tan() }
}

impl Radians {
    /// π radians.
    pub const PI: Self = Self::new(std::f32::consts::PI);
    /// π/2 radians.
    pub const HALF_PI: Self = Self::new(std::f32::consts::FRAC_PI_2);
    /// 2π radians.
    pub const TWO_PI: Self = Self::new(std::f32::consts::TAU);

    /// Converts to degrees.
    pub fn in_degrees(&self) -> Degrees { Degrees::new(self.value * UDegree::PER_RADIAN) }
}

impl Degrees {
    /// Converts to radians.
    pub fn in_radians(&self) -> Radians { Radians::new(self.radians()) }
}

impl From<Degrees> for Radians {
    fn from(angle: Degrees) -> Self { angle.in_radians() }
}

impl From<Radians> for Degrees {
    fn from(angle: Radians) -> Self { angle.in_degrees() }
}

impl<A: AngleUnit> Debug for Angle<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Angle({} {})", self.value, A::SYMBOL)
    }
}

impl<A: AngleUnit> Display for Angle<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, A::SYMBOL)
    }
}

/// Angles of different units compare equal when they describe the same
/// rotation up to one ulp.
impl<A: AngleUnit, B: AngleUnit> PartialEq<Angle<B>> for Angle<A> {
    fn eq(&self, other: &Angle<B>) -> bool { ulp_eq(self.radians(), other.radians()) }
}

super::impl_ops_with_f32!(Mul::mul, MulAssign::mul_assign; Div::div, DivAssign::div_assign for Angle where AngleUnit);

/// Helper creating a new [`Radians`].
#[macro_export]
macro_rules! rad {
    ($value:expr) => {
        $crate::units::Angle::<$crate::units::URadian>::new($value)
    };
}

/// Helper creating a new [`Degrees`].
#[macro_export]
macro_rules! deg {
    ($value:expr) => {
        $crate::units::Angle::<$crate::units::UDegree>::new($value)
    };
}

pub use crate::{deg, rad};
