//! Interpolation over rectilinear grids.
//!
//! A rectilinear grid is the cross product of per-axis sample sequences, with
//! one stored value per grid point. [`InterpTable`] evaluates the standard
//! piecewise-multilinear interpolant at an arbitrary query point: linear
//! interpolation for one axis, bilinear for two, trilinear for three, and so
//! on for any `N` fixed at compile time.
//!
//! Tables borrow their axis and value data, so they can be built directly
//! over `static` arrays and shared freely: evaluation never allocates and
//! never mutates the table.
//!
//! Out-of-range queries are not errors. Each axis carries its own
//! [`OutOfRange`] policy, chosen per query: pin to the nearest boundary
//! sample, or extend the nearest segment linearly.
//!
//! ```
//! use aero_models::support::interp::{Axis, InterpTable, OutOfRange};
//!
//! let axis = Axis::new(&[0.0, 10.0]).unwrap();
//! let table = InterpTable::new([axis], &[1.0, 3.0]).unwrap();
//!
//! assert_eq!(table.interpolate([5.0], [OutOfRange::Clamp]), 2.0);
//! // Beyond the range, clamping pins to the boundary sample.
//! assert_eq!(table.interpolate([40.0], [OutOfRange::Clamp]), 3.0);
//! ```

mod axis;
mod error;
mod table;

pub use axis::Axis;
pub use error::TableError;
pub use table::InterpTable;

/// A 1-D lookup table (linear interpolation).
pub type Table1d<'a, T> = InterpTable<'a, T, 1>;

/// A 3-D lookup table (trilinear interpolation).
pub type Table3d<'a, T> = InterpTable<'a, T, 3>;

/// Policy for query coordinates that fall outside an axis's sampled range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutOfRange {
    /// Pin the query to the nearest boundary sample.
    ///
    /// The interpolation weight saturates at 0 or 1, so the result never
    /// drifts beyond the tabulated values. This is the usual choice for
    /// wind-tunnel data, where the flight envelope can legitimately brush
    /// past the tabulated range at its edges.
    #[default]
    Clamp,

    /// Extend the nearest segment linearly beyond the sampled range.
    Extrapolate,
}
