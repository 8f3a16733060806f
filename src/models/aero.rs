//! Aerodynamic coefficient models.
//!
//! Every coefficient model follows the same per-step pipeline: read the
//! current [`FlightState`], look up tabulated wind-tunnel data, add a fixed
//! set of analytic correction terms, and publish the aggregate through
//! [`SharedCoefficients`]. The [`Coefficient`] trait captures that contract;
//! [`lift`] is the concrete lift-coefficient model.
//!
//! # Scheduling
//!
//! Coefficient models can depend on each other's published values. The lift
//! model, for example, reads the pitching moment due to elevator that the
//! moment model publishes. The host scheduler owns that ordering: for each
//! step it must call [`Coefficient::compute`] on interdependent models in
//! dependency order, exactly once each, after the step's [`FlightState`] is
//! final. Nothing here checks the ordering; a model invoked before its
//! upstream publishes simply reads the previous step's value.

mod state;

pub mod lift;

pub use state::{FlightState, IceFactor, SharedCoefficients};

/// The per-step contract shared by all aerodynamic coefficient models.
pub trait Coefficient {
    /// Computes this model's coefficient for the current step.
    ///
    /// Called once per simulation step, after every upstream value this
    /// model reads from `shared` has been published for the step. Returns
    /// the aggregate coefficient; implementations also write the `shared`
    /// fields they own and retain their term breakdown for read-back.
    fn compute(&mut self, state: &FlightState, shared: &mut SharedCoefficients) -> f64;
}
