//! Units used across tabrdf.
mod angle;

pub use angle::*;

/// Implements scaling by an `f32` (and the assigning version) for a quantity
/// generic over its unit.
macro_rules! impl_ops_with_f32 {
    ($($op:ident::$method:ident, $op_assign:ident::$method_assign:ident);* for $t:ident where $unit_trait:ident) => {
        $(
            impl<A: $unit_trait> core::ops::$op<f32> for $t<A> {
                type Output = $t<A>;

                fn $method(self, rhs: f32) -> Self::Output {
                    $t::new(core::ops::$op::$method(self.value, rhs))
                }
            }

            impl<A: $unit_trait> core::ops::$op_assign<f32> for $t<A> {
                fn $method_assign(&mut self, rhs: f32) {
                    core::ops::$op_assign::$method_assign(&mut self.value, rhs);
                }
            }
        )*
    };
}

pub(crate) use impl_ops_with_f32;
