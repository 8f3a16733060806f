use num_traits::Float;

use super::{OutOfRange, TableError};

/// One dimension of a rectilinear grid.
///
/// An axis is a borrowed, validated sequence of sample coordinates: at least
/// one sample, every sample finite, strictly increasing. Validation happens
/// once at construction; queries can then rely on the ordering invariant
/// without rechecking it.
///
/// ```
/// use aero_models::support::interp::Axis;
///
/// assert!(Axis::new(&[0.0, 4.0, 8.0]).is_ok());
/// assert!(Axis::new(&[0.0, 8.0, 4.0]).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Axis<'a, T> {
    samples: &'a [T],
}

impl<'a, T: Float> Axis<'a, T> {
    /// Creates an axis over a sample sequence.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::EmptyAxis`] for an empty sequence, or
    /// [`TableError::NotIncreasing`] if any sample is non-finite or fails to
    /// strictly increase (duplicates included).
    pub fn new(samples: &'a [T]) -> Result<Self, TableError> {
        let first = samples.first().ok_or(TableError::EmptyAxis)?;
        if !first.is_finite() {
            return Err(TableError::NotIncreasing { index: 0 });
        }
        for (i, pair) in samples.windows(2).enumerate() {
            // `<` is false for NaN on either side, so this also rejects
            // non-finite interior samples.
            if !(pair[0] < pair[1]) || !pair[1].is_finite() {
                return Err(TableError::NotIncreasing { index: i + 1 });
            }
        }
        Ok(Self { samples })
    }

    /// Number of samples along this axis.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false: an axis holds at least one sample by construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The underlying sample sequence.
    #[must_use]
    pub fn samples(&self) -> &'a [T] {
        self.samples
    }

    /// Locates the segment bracketing `x` and the fractional position within
    /// it.
    ///
    /// Returns the index of the segment's lower sample and the weight
    /// `t = (x - lo) / (hi - lo)`. Under [`OutOfRange::Clamp`] the weight is
    /// saturated into `[0, 1]`; under [`OutOfRange::Extrapolate`] it is left
    /// outside that range so the caller extends the end segment linearly.
    ///
    /// A single-sample axis has no segment: the weight is 0 and the sole
    /// sample carries the full contribution, so no division occurs.
    pub(super) fn bracket(&self, x: T, policy: OutOfRange) -> (usize, T) {
        let n = self.samples.len();
        if n == 1 {
            return (0, T::zero());
        }

        // First sample >= x, pulled into [1, n-1] so a segment always
        // exists on both sides of the split.
        let hi = self.samples.partition_point(|s| *s < x).clamp(1, n - 1);
        let lo = hi - 1;

        let span = self.samples[hi] - self.samples[lo];
        let mut t = (x - self.samples[lo]) / span;
        if policy == OutOfRange::Clamp {
            t = t.max(T::zero()).min(T::one());
        }
        (lo, t)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn rejects_malformed_sequences() {
        assert_eq!(Axis::<f64>::new(&[]).unwrap_err(), TableError::EmptyAxis);
        assert_eq!(
            Axis::new(&[0.0, 1.0, 1.0]).unwrap_err(),
            TableError::NotIncreasing { index: 2 }
        );
        assert_eq!(
            Axis::new(&[0.0, 2.0, 1.0]).unwrap_err(),
            TableError::NotIncreasing { index: 2 }
        );
        assert_eq!(
            Axis::new(&[f64::NAN, 1.0]).unwrap_err(),
            TableError::NotIncreasing { index: 0 }
        );
        assert_eq!(
            Axis::new(&[0.0, f64::INFINITY]).unwrap_err(),
            TableError::NotIncreasing { index: 1 }
        );
    }

    #[test]
    fn accepts_single_sample() {
        let axis = Axis::new(&[3.0]).unwrap();
        assert_eq!(axis.len(), 1);
        assert_eq!(axis.bracket(99.0, OutOfRange::Clamp), (0, 0.0));
    }

    #[test]
    fn brackets_interior_points() {
        let axis = Axis::new(&[0.0, 4.0, 8.0, 10.0]).unwrap();

        let (lo, t) = axis.bracket(6.0, OutOfRange::Clamp);
        assert_eq!(lo, 1);
        assert_relative_eq!(t, 0.5);

        // Exactly on a sample: weight is exactly 0 or 1, never split.
        assert_eq!(axis.bracket(4.0, OutOfRange::Clamp), (0, 1.0));
        assert_eq!(axis.bracket(0.0, OutOfRange::Clamp), (0, 0.0));
        assert_eq!(axis.bracket(10.0, OutOfRange::Clamp), (2, 1.0));
    }

    #[test]
    fn clamp_saturates_and_extrapolate_extends() {
        let axis = Axis::new(&[0.0, 4.0, 8.0]).unwrap();

        assert_eq!(axis.bracket(-2.0, OutOfRange::Clamp), (0, 0.0));
        assert_eq!(axis.bracket(12.0, OutOfRange::Clamp), (1, 1.0));

        let (lo, t) = axis.bracket(-2.0, OutOfRange::Extrapolate);
        assert_eq!(lo, 0);
        assert_relative_eq!(t, -0.5);

        let (lo, t) = axis.bracket(12.0, OutOfRange::Extrapolate);
        assert_eq!(lo, 1);
        assert_relative_eq!(t, 2.0);
    }
}
