use crate::{
    axis::AngleAxis,
    grid::AngleGrid,
    interp::{Interpolator, MAX_AXES},
};
use base::math::catmull_rom_centripetal;

/// Tensor product interpolation with centripetal Catmull-Rom splines.
///
/// Along every active axis the query is enclosed by two samples and a
/// neighbour on each side; the spline through the four
/// `(angle, value)` points is evaluated at the query angle. Axes are reduced
/// one after another. At the ends of an axis the missing neighbour repeats
/// the value of the edge sample, its angle being mirrored across the edge.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct SplineInterpolator;

/// Four-point neighbourhood of a query along one axis.
#[derive(Debug, Copy, Clone, PartialEq)]
struct Stencil {
    indices: [usize; 4],
    positions: [f32; 4],
    x: f32,
    active: bool,
}

impl Stencil {
    fn new(axis: &AngleAxis, x: f32) -> Self {
        if !axis.is_active() {
            return Self {
                indices: [0; 4],
                positions: [0.0; 4],
                x: 0.0,
                active: false,
            };
        }
        let n = axis.len();
        let b = axis.bracket(x);
        let (i1, i2) = (b.lower, b.upper);
        let (p1, p2) = (axis[i1], axis[i2]);
        // Snap onto the enclosing samples so that grid points are reproduced.
        let x = if b.t <= 0.0 {
            p1
        } else if b.t >= 1.0 {
            p2
        } else {
            axis.clamp_query(x)
        };
        // Missing end neighbours repeat the edge value at a mirrored angle.
        let (i0, p0) = if i1 > 0 {
            (i1 - 1, axis[i1 - 1])
        } else {
            (i1, 2.0 * p1 - p2)
        };
        let (i3, p3) = if i2 + 1 < n {
            (i2 + 1, axis[i2 + 1])
        } else {
            (i2, 2.0 * p2 - p1)
        };
        Self {
            indices: [i0, i1, i2, i3],
            positions: [p0, p1, p2, p3],
            x,
            active: true,
        }
    }
}

/// Reduces the axes from `d` onwards; axes before `d` are fixed in
/// `indices`.
fn reduce<G: AngleGrid>(
    grid: &G,
    stencils: &[Stencil],
    d: usize,
    indices: &mut [usize; MAX_AXES],
    wavelength: usize,
) -> f32 {
    let n_axes = stencils.len();
    if d == n_axes {
        return grid.cell(&indices[..n_axes])[wavelength];
    }
    let stencil = &stencils[d];
    if !stencil.active {
        indices[d] = 0;
        return reduce(grid, stencils, d + 1, indices, wavelength);
    }
    let mut values = [0.0f32; 4];
    for (k, value) in values.iter_mut().enumerate() {
        indices[d] = stencil.indices[k];
        *value = reduce(grid, stencils, d + 1, indices, wavelength);
    }
    catmull_rom_centripetal(stencil.positions, values, stencil.x)
}

fn build_stencils<G: AngleGrid>(grid: &G, angles: &[f32]) -> ([Stencil; MAX_AXES], usize) {
    let axes = grid.axes();
    debug_assert!(axes.len() <= MAX_AXES);
    debug_assert_eq!(angles.len(), axes.len(), "one angle per axis expected");
    let mut stencils = [Stencil {
        indices: [0; 4],
        positions: [0.0; 4],
        x: 0.0,
        active: false,
    }; MAX_AXES];
    for (d, axis) in axes.iter().enumerate() {
        stencils[d] = Stencil::new(axis, angles[d]);
    }
    (stencils, axes.len())
}

impl Interpolator for SplineInterpolator {
    fn value(grid: &impl AngleGrid, angles: &[f32], wavelength: usize) -> f32 {
        let (stencils, n_axes) = build_stencils(grid, angles);
        let mut indices = [0usize; MAX_AXES];
        reduce(grid, &stencils[..n_axes], 0, &mut indices, wavelength)
    }

    fn spectrum(grid: &impl AngleGrid, angles: &[f32]) -> Box<[f32]> {
        let (stencils, n_axes) = build_stencils(grid, angles);
        let mut indices = [0usize; MAX_AXES];
        (0..grid.n_wavelengths())
            .map(|wl| reduce(grid, &stencils[..n_axes], 0, &mut indices, wl))
            .collect()
    }
}
