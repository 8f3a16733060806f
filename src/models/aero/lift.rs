//! The lift coefficient model.
//!
//! [`Lift`] composes the total lift coefficient from a trilinear table
//! lookup plus seven analytic correction terms; see [`LiftTerms`] for the
//! full breakdown. The computation itself lives in the internal `core`
//! module; this type is the thin [`Coefficient`] adapter over it.

mod core;

pub use self::core::{LiftConfig, LiftTerms};

use super::{Coefficient, FlightState, SharedCoefficients};

/// The lift coefficient model.
///
/// Stateless per call: each [`compute`](Coefficient::compute) derives every
/// term afresh from the step's [`FlightState`]. The model persists across
/// steps only to carry its configuration and to retain the last breakdown
/// for read-back.
///
/// ```
/// use aero_models::models::aero::{Coefficient, FlightState, SharedCoefficients};
/// use aero_models::models::aero::lift::Lift;
///
/// let mut lift = Lift::default();
/// let mut shared = SharedCoefficients::default();
///
/// let cl = lift.compute(&FlightState::default(), &mut shared);
/// assert_eq!(cl, shared.lift);
/// assert_eq!(lift.lift_star(), shared.lift_star);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Lift {
    config: LiftConfig,
    terms: LiftTerms,
}

impl Lift {
    /// Creates a lift model with the given vehicle constants.
    #[must_use]
    pub fn new(config: LiftConfig) -> Self {
        Self {
            config,
            terms: LiftTerms::default(),
        }
    }

    /// The term breakdown retained from the last [`compute`](Coefficient::compute).
    #[must_use]
    pub fn terms(&self) -> &LiftTerms {
        &self.terms
    }

    /// The aggregate coefficient retained from the last compute.
    #[must_use]
    pub fn coefficient(&self) -> f64 {
        self.terms.total()
    }

    /// Rigid-airframe plus dynamic lift retained from the last compute.
    #[must_use]
    pub fn lift_star(&self) -> f64 {
        self.terms.rigid_dynamic()
    }
}

impl Coefficient for Lift {
    fn compute(&mut self, state: &FlightState, shared: &mut SharedCoefficients) -> f64 {
        self.terms = self::core::compute(&self.config, state, shared);
        shared.lift_star = self.terms.rigid_dynamic();
        shared.lift = self.terms.total();
        shared.lift
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::{
        angle::degree,
        angular_velocity::radian_per_second,
        f64::{Angle, AngularVelocity, Length, Ratio},
        length::foot,
        ratio::percent,
    };

    use super::*;
    use crate::models::aero::IceFactor;

    fn cruise_state() -> FlightState {
        FlightState {
            alpha: Angle::new::<degree>(4.0),
            alpha_rate: AngularVelocity::new::<radian_per_second>(0.01),
            pitch_rate: AngularVelocity::new::<radian_per_second>(0.02),
            flap: Ratio::new::<percent>(40.0),
            flap_commanded: Ratio::new::<percent>(40.0),
            thrust_symmetric: 0.15,
            thrust_differential: 0.05,
            chord_rate_factor: 0.012,
            gear_height: Length::new::<foot>(500.0),
            ice_factor: IceFactor::default(),
        }
    }

    #[test]
    fn publishes_lift_and_lift_star() {
        let mut lift = Lift::default();
        let mut shared = SharedCoefficients {
            cm_elevator: -0.05,
            ..SharedCoefficients::default()
        };

        let cl = lift.compute(&cruise_state(), &mut shared);

        assert_eq!(cl, shared.lift);
        assert_relative_eq!(shared.lift, lift.coefficient());
        assert_relative_eq!(
            shared.lift_star,
            lift.terms().basic + lift.terms().dynamic
        );
        assert_relative_eq!(lift.lift_star(), shared.lift_star);
    }

    #[test]
    fn leaves_fields_it_does_not_own_alone() {
        let mut lift = Lift::default();
        let mut shared = SharedCoefficients {
            cm_elevator: -0.05,
            ..SharedCoefficients::default()
        };

        lift.compute(&cruise_state(), &mut shared);

        assert_eq!(shared.cm_elevator, -0.05);
    }

    #[test]
    fn retains_breakdown_between_steps() {
        let mut lift = Lift::default();
        let mut shared = SharedCoefficients::default();

        let cl = lift.compute(&cruise_state(), &mut shared);

        // Read-back without recomputation.
        assert_eq!(lift.coefficient(), cl);
        assert_relative_eq!(lift.terms().total(), cl);
    }
}
