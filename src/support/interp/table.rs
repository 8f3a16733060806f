use num_traits::Float;

use super::{Axis, OutOfRange, TableError};

/// An immutable `N`-dimensional rectilinear lookup table.
///
/// The table borrows `N` [axes](Axis) and a flattened value array laid out in
/// row-major order with the first axis varying slowest. Construction verifies
/// that the value array covers the grid exactly; after that, every query is
/// infallible.
///
/// Evaluation is the standard multilinear blend: each axis contributes a
/// linear weight for its bracketing segment, and the `2^N` corner values of
/// the enclosing grid cell are combined with the product of those weights.
/// Queries take `&self`, touch no shared state, and are safe to issue
/// concurrently from any number of threads.
///
/// ```
/// use aero_models::support::interp::{Axis, InterpTable, OutOfRange};
///
/// // A 2x2 surface over x in [0, 1], y in [0, 10].
/// let x = Axis::new(&[0.0, 1.0]).unwrap();
/// let y = Axis::new(&[0.0, 10.0]).unwrap();
/// let table = InterpTable::new([x, y], &[0.0, 1.0, 2.0, 3.0]).unwrap();
///
/// let mid = table.interpolate([0.5, 5.0], [OutOfRange::Clamp; 2]);
/// assert_eq!(mid, 1.5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct InterpTable<'a, T, const N: usize> {
    axes: [Axis<'a, T>; N],
    values: &'a [T],
}

impl<'a, T: Float, const N: usize> InterpTable<'a, T, N> {
    /// Creates a table from its axes and flattened value array.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ShapeMismatch`] if `values.len()` differs from
    /// the product of the axis lengths.
    pub fn new(axes: [Axis<'a, T>; N], values: &'a [T]) -> Result<Self, TableError> {
        let expected: usize = axes.iter().map(Axis::len).product();
        if values.len() != expected {
            return Err(TableError::ShapeMismatch {
                expected,
                actual: values.len(),
            });
        }
        Ok(Self { axes, values })
    }

    /// The table's axes, in storage order (first axis slowest).
    #[must_use]
    pub fn axes(&self) -> &[Axis<'a, T>; N] {
        &self.axes
    }

    /// Evaluates the multilinear interpolant at `coords`.
    ///
    /// Coordinates are given in axis order. Each axis resolves out-of-range
    /// coordinates with its own entry in `policy`; in-range coordinates are
    /// unaffected by the policy, and a coordinate exactly on a boundary
    /// sample returns that boundary's value under either policy.
    ///
    /// Coordinates must be finite. This is debug-asserted, not checked in
    /// release builds.
    #[must_use]
    pub fn interpolate(&self, coords: [T; N], policy: [OutOfRange; N]) -> T {
        debug_assert!(
            coords.iter().all(|c| c.is_finite()),
            "query coordinates must be finite"
        );

        let mut lower = [0usize; N];
        let mut weight = [T::zero(); N];
        for i in 0..N {
            let (lo, t) = self.axes[i].bracket(coords[i], policy[i]);
            lower[i] = lo;
            weight[i] = t;
        }

        // Row-major strides, first axis slowest.
        let mut stride = [1usize; N];
        for i in (0..N.saturating_sub(1)).rev() {
            stride[i] = stride[i + 1] * self.axes[i + 1].len();
        }

        // Blend the 2^N cell corners; bit i of `corner` selects the upper
        // sample along axis i.
        let mut acc = T::zero();
        for corner in 0..1usize << N {
            let mut w = T::one();
            let mut index = 0usize;
            for i in 0..N {
                let upper = corner >> i & 1 == 1;
                w = w * if upper { weight[i] } else { T::one() - weight[i] };
                // A length-1 axis has no upper sample; its weight is zero
                // there, so the pinned index never contributes.
                let j = if upper {
                    (lower[i] + 1).min(self.axes[i].len() - 1)
                } else {
                    lower[i]
                };
                index += j * stride[i];
            }
            acc = acc + w * self.values[index];
        }
        acc
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    const ALPHA_DEG: [f64; 5] = [0.0, 4.0, 8.0, 10.0, 12.0];
    const LIFT_LOSS: [f64; 5] = [0.0, -0.03, -0.21, -0.37, -0.39];

    fn lift_loss_table() -> InterpTable<'static, f64, 1> {
        let axis = Axis::new(&ALPHA_DEG).unwrap();
        InterpTable::new([axis], &LIFT_LOSS).unwrap()
    }

    #[test]
    fn rejects_wrong_value_count() {
        let axis = Axis::new(&ALPHA_DEG).unwrap();
        let err = InterpTable::new([axis], &LIFT_LOSS[..4]).unwrap_err();
        assert_eq!(
            err,
            TableError::ShapeMismatch {
                expected: 5,
                actual: 4
            }
        );
    }

    #[test]
    fn linear_blend_between_bracketing_samples() {
        let table = lift_loss_table();

        // 6.0 sits halfway through the [4, 8] segment.
        let expected = -0.03 + 0.5 * (-0.21 - -0.03);
        let got = table.interpolate([6.0], [OutOfRange::Clamp]);
        assert_abs_diff_eq!(got, expected, epsilon = 1e-6);
        assert_abs_diff_eq!(got, -0.12, epsilon = 1e-6);
    }

    #[test]
    fn samples_are_reproduced_exactly() {
        let table = lift_loss_table();
        for (x, y) in ALPHA_DEG.iter().zip(&LIFT_LOSS) {
            assert_eq!(table.interpolate([*x], [OutOfRange::Clamp]), *y);
        }
    }

    #[test]
    fn clamp_pins_to_boundary_samples() {
        let table = lift_loss_table();
        for x in [-100.0, -0.1, 0.0] {
            assert_eq!(table.interpolate([x], [OutOfRange::Clamp]), 0.0);
        }
        for x in [12.0, 12.1, 500.0] {
            assert_eq!(table.interpolate([x], [OutOfRange::Clamp]), -0.39);
        }
    }

    #[test]
    fn extrapolation_continues_the_end_segments() {
        let table = lift_loss_table();

        // Below range: the [0, 4] segment has slope -0.03/4 per degree.
        let low = table.interpolate([-4.0], [OutOfRange::Extrapolate]);
        assert_relative_eq!(low, 0.03, max_relative = 1e-12);

        // Above range: the [10, 12] segment has slope -0.01 per degree.
        let high = table.interpolate([14.0], [OutOfRange::Extrapolate]);
        assert_relative_eq!(high, -0.41, max_relative = 1e-12);
    }

    #[test]
    fn single_sample_axis_ignores_its_coordinate() {
        let only = Axis::new(&[7.0]).unwrap();
        let x = Axis::new(&[0.0, 1.0]).unwrap();
        let table = InterpTable::new([only, x], &[2.0, 4.0]).unwrap();

        for c in [-1e6, 0.0, 7.0, 1e6] {
            let got = table.interpolate([c, 0.5], [OutOfRange::Extrapolate; 2]);
            assert_relative_eq!(got, 3.0);
        }
    }

    #[test]
    fn trilinear_is_exact_at_grid_vertices() {
        let x = Axis::new(&[0.0, 1.0, 2.0]).unwrap();
        let y = Axis::new(&[0.0, 10.0]).unwrap();
        let z = Axis::new(&[-1.0, 1.0]).unwrap();
        let values: Vec<f64> = (0..12).map(|v| f64::from(v) * 0.25 - 1.0).collect();
        let table = InterpTable::new([x, y, z], &values).unwrap();

        for (ix, xv) in x.samples().iter().enumerate() {
            for (iy, yv) in y.samples().iter().enumerate() {
                for (iz, zv) in z.samples().iter().enumerate() {
                    let stored = values[(ix * 2 + iy) * 2 + iz];
                    let got = table.interpolate([*xv, *yv, *zv], [OutOfRange::Clamp; 3]);
                    assert_eq!(got, stored);
                }
            }
        }
    }

    #[test]
    fn trilinear_blends_cell_corners() {
        // f(x, y, z) = x + 2y + 4z is linear, so the interpolant must
        // reproduce it everywhere inside the grid.
        let x = Axis::new(&[0.0, 1.0]).unwrap();
        let y = Axis::new(&[0.0, 1.0]).unwrap();
        let z = Axis::new(&[0.0, 1.0]).unwrap();
        let mut values = [0.0; 8];
        for (i, v) in values.iter_mut().enumerate() {
            let xv = (i >> 2 & 1) as f64;
            let yv = (i >> 1 & 1) as f64;
            let zv = (i & 1) as f64;
            *v = xv + 2.0 * yv + 4.0 * zv;
        }
        let table = InterpTable::new([x, y, z], &values).unwrap();

        let got = table.interpolate([0.25, 0.5, 0.75], [OutOfRange::Clamp; 3]);
        assert_relative_eq!(got, 0.25 + 1.0 + 3.0);
    }
}
