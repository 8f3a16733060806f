//! Public coefficient models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules. [`aero`] holds the
//! aerodynamic coefficient models along with the shared per-step state they
//! read and the [`Coefficient`](aero::Coefficient) contract they implement.
//!
//! # Model structure
//!
//! Each model lives in its own module and keeps its computation in an
//! internal `core` submodule. The public type is a thin adapter over the
//! core: it owns the model's configuration, delegates the numerics, and
//! retains the last result for read-back.

pub mod aero;
