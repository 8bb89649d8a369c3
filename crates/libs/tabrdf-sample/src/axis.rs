//! Angle axes of sample grids.

use base::math::{clamp, is_equal_interval, linspace};
use std::ops::Index;

/// Strictly increasing angles (in radians) along one dimension of a grid.
///
/// An axis caches whether its angles are evenly spaced so that bracketing a
/// query angle can be done in constant time.
#[derive(Debug, Clone, PartialEq)]
pub struct AngleAxis {
    values: Box<[f32]>,
    equal_interval: bool,
}

/// Position of a query angle relative to an axis.
///
/// The value at the query is `lerp(v[lower], v[upper], t)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bracket {
    /// Index of the lower sample.
    pub lower: usize,
    /// Index of the upper sample.
    pub upper: usize,
    /// Fractional position between the lower and the upper sample in [0, 1].
    pub t: f32,
}

impl AngleAxis {
    /// Creates an axis of `n` zero angles.
    ///
    /// The axis is marked unevenly spaced until
    /// [`AngleAxis::update_equal_interval`] is called.
    pub fn zeros(n: usize) -> Self {
        assert!(n > 0, "an angle axis must hold at least one angle");
        Self {
            values: vec![0.0; n].into_boxed_slice(),
            equal_interval: false,
        }
    }

    /// Creates an axis of `n` angles evenly spaced over `[0, max]`.
    ///
    /// An axis of a single angle holds zero.
    pub fn linspace(n: usize, max: f32) -> Self {
        assert!(n > 0, "an angle axis must hold at least one angle");
        Self {
            values: linspace(0.0, max, n).into_boxed_slice(),
            equal_interval: true,
        }
    }

    /// Creates an axis from the given angles.
    pub fn from_values(values: Vec<f32>) -> Self {
        assert!(!values.is_empty(), "an angle axis must hold at least one angle");
        let equal_interval = is_equal_interval(&values);
        Self {
            values: values.into_boxed_slice(),
            equal_interval,
        }
    }

    /// Returns the number of angles.
    pub fn len(&self) -> usize { self.values.len() }

    /// An axis is never empty; provided for completeness.
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Returns the angles.
    pub fn values(&self) -> &[f32] { &self.values }

    /// Returns the angles for modification. The axis is marked unevenly
    /// spaced until [`AngleAxis::update_equal_interval`] is called.
    pub fn values_mut(&mut self) -> &mut [f32] {
        self.equal_interval = false;
        &mut self.values
    }

    /// Sets the angle at `index`. The axis is marked unevenly spaced until
    /// [`AngleAxis::update_equal_interval`] is called.
    pub fn set(&mut self, index: usize, value: f32) {
        self.equal_interval = false;
        self.values[index] = value;
    }

    /// Returns the first angle.
    pub fn first(&self) -> f32 { self.values[0] }

    /// Returns the last angle.
    pub fn last(&self) -> f32 { self.values[self.values.len() - 1] }

    /// Returns whether the axis is evenly spaced (as cached).
    pub fn is_equal_interval(&self) -> bool { self.equal_interval }

    /// Recomputes the equal interval cache and returns it.
    pub fn update_equal_interval(&mut self) -> bool {
        self.equal_interval = is_equal_interval(&self.values);
        self.equal_interval
    }

    /// Clamps every angle into `[0, max]` and refreshes the equal interval
    /// cache.
    pub fn clamp(&mut self, max: f32) {
        self.values
            .iter_mut()
            .for_each(|v| *v = clamp(*v, 0.0, max));
        self.update_equal_interval();
    }

    /// Returns whether the axis takes part in interpolation, i.e. holds more
    /// than one angle.
    pub fn is_active(&self) -> bool { self.values.len() > 1 }

    /// Brackets `x` between two neighbouring samples.
    ///
    /// Queries outside of the axis range are clamped to the nearest end, an
    /// axis with a single angle always returns index 0.
    pub fn bracket(&self, x: f32) -> Bracket {
        let n = self.values.len();
        if n == 1 {
            return Bracket {
                lower: 0,
                upper: 0,
                t: 0.0,
            };
        }
        let (first, last) = (self.first(), self.last());
        if x.is_nan() || x <= first {
            return Bracket {
                lower: 0,
                upper: 1,
                t: 0.0,
            };
        }
        if x >= last {
            return Bracket {
                lower: n - 2,
                upper: n - 1,
                t: 1.0,
            };
        }
        let lower = if self.equal_interval {
            let step = (last - first) / (n - 1) as f32;
            (((x - first) / step) as usize).min(n - 2)
        } else {
            self.values.partition_point(|&v| v <= x).saturating_sub(1).min(n - 2)
        };
        let (v0, v1) = (self.values[lower], self.values[lower + 1]);
        let width = v1 - v0;
        let t = if width > f32::EPSILON {
            clamp((x - v0) / width, 0.0, 1.0)
        } else {
            0.0
        };
        Bracket {
            lower,
            upper: lower + 1,
            t,
        }
    }

    /// Clamps `x` into the range covered by the axis.
    pub fn clamp_query(&self, x: f32) -> f32 {
        if x.is_nan() {
            return self.first();
        }
        clamp(x, self.first(), self.last())
    }
}

impl Index<usize> for AngleAxis {
    type Output = f32;

    fn index(&self, index: usize) -> &Self::Output { &self.values[index] }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn bracket_equal_interval() {
        let axis = AngleAxis::linspace(5, FRAC_PI_2);
        assert!(axis.is_equal_interval());
        let step = FRAC_PI_2 / 4.0;

        let b = axis.bracket(2.0 * step);
        let at = axis[b.lower] + b.t * (axis[b.upper] - axis[b.lower]);
        assert!((at - 2.0 * step).abs() < 1e-6);
        let b = axis.bracket(2.5 * step);
        assert_eq!((b.lower, b.upper), (2, 3));
        assert!((b.t - 0.5).abs() < 1e-5);

        assert_eq!(
            axis.bracket(-1.0),
            Bracket {
                lower: 0,
                upper: 1,
                t: 0.0
            }
        );
        assert_eq!(
            axis.bracket(10.0),
            Bracket {
                lower: 3,
                upper: 4,
                t: 1.0
            }
        );
    }

    #[test]
    fn bracket_uneven() {
        let axis = AngleAxis::from_values(vec![0.0, 0.1, 0.5, 1.0]);
        assert!(!axis.is_equal_interval());
        let b = axis.bracket(0.3);
        assert_eq!((b.lower, b.upper), (1, 2));
        assert!((b.t - 0.5).abs() < 1e-5);
        let b = axis.bracket(0.5);
        assert_eq!((b.lower, b.upper), (2, 3));
        assert_eq!(b.t, 0.0);
        assert_eq!(axis.bracket(1.0).t, 1.0);
    }

    #[test]
    fn bracket_single() {
        let axis = AngleAxis::zeros(1);
        assert!(!axis.is_active());
        assert_eq!(
            axis.bracket(0.7),
            Bracket {
                lower: 0,
                upper: 0,
                t: 0.0
            }
        );
    }

    #[test]
    fn clamp_into_domain() {
        let mut axis = AngleAxis::from_values(vec![-0.1, 0.5, 2.0]);
        axis.clamp(FRAC_PI_2);
        assert_eq!(axis.values(), &[0.0, 0.5, FRAC_PI_2]);
        assert_eq!(axis.clamp_query(3.0), FRAC_PI_2);
        assert_eq!(axis.clamp_query(-3.0), 0.0);
    }

    #[test]
    #[should_panic]
    fn empty_axis_panics() { let _ = AngleAxis::zeros(0); }
}
