use thiserror::Error;

/// Errors detected while constructing an [`Axis`](super::Axis) or an
/// [`InterpTable`](super::InterpTable).
///
/// Table shape problems are always construction-time failures. A table that
/// constructs successfully can be queried at any point without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    /// An axis was given no samples at all.
    #[error("axis must contain at least one sample")]
    EmptyAxis,

    /// An axis sample is non-finite or does not strictly increase.
    #[error("axis samples must be finite and strictly increasing (violated at sample {index})")]
    NotIncreasing {
        /// Index of the offending sample.
        index: usize,
    },

    /// The flattened value array does not cover the grid exactly.
    #[error("value array holds {actual} entries but the grid has {expected} points")]
    ShapeMismatch {
        /// Product of the axis lengths.
        expected: usize,
        /// Length of the supplied value array.
        actual: usize,
    },
}
