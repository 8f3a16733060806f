//! # Aero Models
//!
//! Aerodynamic coefficient models and table-interpolation tools for flight
//! dynamics simulation.
//!
//! Each simulation step, a flight model needs one scalar per aerodynamic
//! coefficient (lift, drag, moment, ...). The coefficients here follow a
//! common recipe taken from classic wind-tunnel-based aero packages: look up
//! a "basic" rigid-airframe value in a tabulated grid, add a fixed set of
//! named analytic corrections, and publish the sum for the equations of
//! motion.
//!
//! ## Crate layout
//!
//! - [`models`]: Coefficient models and the per-step contract they share.
//! - [`support`]: Supporting utilities used by models, including the
//!   N-dimensional grid interpolation engine.
//!
//! The integrator, the step scheduler, and the remaining vehicle systems are
//! hosts of this crate, not part of it: models are pure computations over a
//! per-step snapshot passed in by the caller.

pub mod models;
pub mod support;
