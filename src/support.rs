//! Supporting utilities used by models.
//!
//! These modules are part of the public API because they're useful on their
//! own, but their APIs are less stable than the models that consume them.
//!
//! - [`constraint`]: construction-time numeric invariants.
//! - [`interp`]: interpolation over rectilinear grids.

pub mod constraint;
pub mod interp;
