use crate::{
    axis::Bracket,
    grid::AngleGrid,
    interp::{Interpolator, MAX_AXES},
};

/// Tensor product linear interpolation.
///
/// Each active axis brackets the query angle between two neighbouring
/// samples; the spectra of the 2^k corners of the k active axes are blended
/// with the product of the per axis weights. Queries beyond an axis are
/// clamped to its first or last angle.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct LinearInterpolator;

/// Calls `f` with the weight and the spectrum of every corner contributing
/// to the query. Corners of zero weight are skipped so that queries on grid
/// points read a single spectrum.
fn for_each_corner<G, F>(grid: &G, angles: &[f32], mut f: F)
where
    G: AngleGrid,
    F: FnMut(f32, &[f32]),
{
    let axes = grid.axes();
    let n_axes = axes.len();
    debug_assert!(n_axes <= MAX_AXES);
    debug_assert_eq!(angles.len(), n_axes, "one angle per axis expected");

    let mut brackets = [Bracket {
        lower: 0,
        upper: 0,
        t: 0.0,
    }; MAX_AXES];
    let mut active = [0usize; MAX_AXES];
    let mut n_active = 0;
    for (d, axis) in axes.iter().enumerate() {
        brackets[d] = axis.bracket(angles[d]);
        if axis.is_active() {
            active[n_active] = d;
            n_active += 1;
        }
    }

    let mut indices = [0usize; MAX_AXES];
    for corner in 0..(1usize << n_active) {
        let mut weight = 1.0f32;
        for d in 0..n_axes {
            indices[d] = brackets[d].lower;
        }
        for (bit, &d) in active[..n_active].iter().enumerate() {
            let b = brackets[d];
            if corner & (1 << bit) != 0 {
                indices[d] = b.upper;
                weight *= b.t;
            } else {
                weight *= 1.0 - b.t;
            }
        }
        if weight == 0.0 {
            continue;
        }
        f(weight, grid.cell(&indices[..n_axes]));
    }
}

impl Interpolator for LinearInterpolator {
    fn value(grid: &impl AngleGrid, angles: &[f32], wavelength: usize) -> f32 {
        let mut value = 0.0;
        for_each_corner(grid, angles, |weight, spectrum| {
            value += weight * spectrum[wavelength];
        });
        value
    }

    fn spectrum(grid: &impl AngleGrid, angles: &[f32]) -> Box<[f32]> {
        let mut spectrum = vec![0.0; grid.n_wavelengths()].into_boxed_slice();
        for_each_corner(grid, angles, |weight, cell| {
            spectrum
                .iter_mut()
                .zip(cell)
                .for_each(|(s, v)| *s += weight * v);
        });
        spectrum
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{grid::SampleGrid2, interp::tests::affine_grid};
    use base::ColorModel;
    use proptest::prelude::*;
    use std::f32::consts::{FRAC_PI_2, TAU};

    #[test]
    fn exact_at_grid_points() {
        let grid = affine_grid();
        let axes = grid.axes();
        for i0 in 0..4 {
            for i1 in 0..5 {
                for i2 in 0..3 {
                    for i3 in 0..6 {
                        let indices = [i0, i1, i2, i3];
                        let angles: Vec<f32> = (0..4).map(|d| axes[d][indices[d]]).collect();
                        let expected = grid.cell(&indices);
                        let spectrum = LinearInterpolator::spectrum(&grid, &angles);
                        for (s, e) in spectrum.iter().zip(expected) {
                            assert!((s - e).abs() < 1e-5, "{} != {} at {:?}", s, e, indices);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn five_polar_angles_scenario() {
        let mut grid = SampleGrid2::new(5, 1, ColorModel::Monochromatic, 1, true);
        let stored = [0.1, 0.4, 0.8, 0.3, 0.2];
        for (i, v) in stored.iter().enumerate() {
            grid.spectrum_mut(i, 0)[0] = *v;
        }
        // Third grid angle.
        assert_eq!(LinearInterpolator::value(&grid, &[grid.theta(2), 0.0], 0), 0.8);
        // Midpoint between the second and the third grid angles.
        let mid = 0.5 * (grid.theta(1) + grid.theta(2));
        let value = LinearInterpolator::value(&grid, &[mid, 0.0], 0);
        assert!((value - 0.5 * (0.4 + 0.8)).abs() < 1e-6);
    }

    #[test]
    fn clamped_beyond_axes() {
        let grid = affine_grid();
        let below = LinearInterpolator::spectrum(&grid, &[-0.5, -1.0, -0.1, -3.0]);
        let first = LinearInterpolator::spectrum(&grid, &[0.0, 0.0, 0.0, 0.0]);
        assert_eq!(below, first);
        let above = LinearInterpolator::spectrum(&grid, &[2.0, 7.0, 3.0, 7.0]);
        let last = LinearInterpolator::spectrum(&grid, &[FRAC_PI_2, TAU, FRAC_PI_2, TAU]);
        assert_eq!(above, last);
    }

    #[test]
    fn uneven_axis() {
        let thetas = [0.0, 0.05, 0.1, 0.8, 1.2, 1.5707];
        let values = [1000.0, 50.0, 1.0, 0.5, 0.2, 0.0];
        let mut grid = SampleGrid2::new(6, 1, ColorModel::Monochromatic, 1, false);
        for (i, (theta, value)) in thetas.iter().zip(values).enumerate() {
            grid.set_theta(i, *theta);
            grid.spectrum_mut(i, 0)[0] = value;
        }
        assert!(!grid.is_equal_interval_theta());
        for (theta, value) in thetas.iter().zip(values) {
            assert_eq!(LinearInterpolator::value(&grid, &[*theta, 0.0], 0), value);
        }
        // Midpoints of the uneven intervals.
        for i in 0..5 {
            let mid = 0.5 * (thetas[i] + thetas[i + 1]);
            let value = LinearInterpolator::value(&grid, &[mid, 0.0], 0);
            let expected = 0.5 * (values[i] + values[i + 1]);
            assert!((value - expected).abs() <= 1e-4 * expected.max(1.0), "{} != {}", value, expected);
        }
    }

    proptest! {
        #[test]
        fn reproduces_affine_data(
            a in 0.0f32..1.57, b in 0.0f32..6.28, c in 0.0f32..1.57, d in 0.0f32..6.28
        ) {
            let grid = affine_grid();
            let spectrum = LinearInterpolator::spectrum(&grid, &[a, b, c, d]);
            prop_assert!((spectrum[0] - (1.0 + 2.0 * a + 0.5 * b - c + 0.25 * d)).abs() < 1e-4);
            prop_assert!((spectrum[1] - (3.0 - a + b)).abs() < 1e-4);
            let value = LinearInterpolator::value(&grid, &[a, b, c, d], 0);
            prop_assert!((value - spectrum[0]).abs() < 1e-5);
        }

        #[test]
        fn clamping_is_monotonic(x in 1.58f32..10.0) {
            let mut grid = SampleGrid2::new(4, 1, ColorModel::Monochromatic, 1, true);
            for i in 0..4 {
                grid.spectrum_mut(i, 0)[0] = i as f32;
            }
            let edge = LinearInterpolator::value(&grid, &[FRAC_PI_2, 0.0], 0);
            prop_assert_eq!(LinearInterpolator::value(&grid, &[x, 0.0], 0), edge);
            let start = LinearInterpolator::value(&grid, &[0.0, 0.0], 0);
            prop_assert_eq!(LinearInterpolator::value(&grid, &[-x, 0.0], 0), start);
        }
    }
}
