//! Lift coefficient computation.
//!
//! The total lift coefficient is the sum of a tabulated rigid-airframe value
//! and seven analytic corrections, each retained as a named term in
//! [`LiftTerms`]. Formulas and table data follow the C90 airplane simulation
//! data package conventions: angles in degrees, rates in rad/s, flap travel
//! in percent.

mod config;
mod tables;

pub use config::LiftConfig;

use uom::si::{
    angle::degree,
    angular_velocity::radian_per_second,
    ratio::{percent, ratio},
};

use crate::{
    models::aero::{FlightState, SharedCoefficients},
    support::interp::OutOfRange,
};

/// The named contributions that sum into the lift coefficient.
///
/// One breakdown is produced per [`compute`](super::Lift) call. The aggregate
/// is [`total`](Self::total); [`rigid_dynamic`](Self::rigid_dynamic) is the
/// "lift star" sub-sum other models consume.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LiftTerms {
    /// Basic rigid-airframe lift from the wind-tunnel table.
    pub basic: f64,
    /// Incremental lift due to airplane dynamics (alpha rate and pitch rate).
    pub dynamic: f64,
    /// Incremental lift due to elevator deflection.
    pub elevator: f64,
    /// Incremental lift due to asymmetric thrust.
    pub asymmetric_thrust: f64,
    /// Incremental lift due to ground effect.
    pub ground_effect: f64,
    /// Incremental lift due to a flap malfunction.
    pub flap_failure: f64,
    /// Lift degradation due to ice buildup.
    pub icing: f64,
    /// Constant bias for empirical data matching.
    pub bias: f64,
}

impl LiftTerms {
    /// The aggregate lift coefficient.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.basic
            + self.dynamic
            + self.elevator
            + self.asymmetric_thrust
            + self.ground_effect
            + self.flap_failure
            + self.icing
            + self.bias
    }

    /// Rigid-airframe plus dynamic lift, without the correction terms.
    #[must_use]
    pub fn rigid_dynamic(&self) -> f64 {
        self.basic + self.dynamic
    }
}

/// Computes the full term breakdown for one step.
pub(super) fn compute(
    config: &LiftConfig,
    state: &FlightState,
    shared: &SharedCoefficients,
) -> LiftTerms {
    let alpha_deg = state.alpha.get::<degree>();
    let flap_pct = state.flap.get::<percent>();

    // Basic rigid-airframe lift against angle of attack, symmetric thrust
    // coefficient, and flap deflection, clamped on every axis: the flight
    // envelope can brush past the tabulated range at its edges.
    let basic = tables::BASIC.interpolate(
        [flap_pct, state.thrust_symmetric, alpha_deg],
        [OutOfRange::Clamp; 3],
    );

    let dynamic = (config.cl_alpha_dot * state.alpha_rate.get::<radian_per_second>()
        + config.cl_q * state.pitch_rate.get::<radian_per_second>())
        * state.chord_rate_factor;

    // The tail's lift is the moment the elevator generates, brought forward
    // through the moment arm. Cm due to elevator is published upstream by
    // the pitching-moment model.
    let elevator = -shared.cm_elevator * config.elevator_arm_ratio;

    let asymmetric_thrust = (config.asym_thrust_base
        + config.asym_thrust_per_alpha * alpha_deg
        + config.asym_thrust_per_flap * flap_pct / 100.0)
        * (state.thrust_differential.abs() / config.thrust_differential_reference);

    // Ground effect fades linearly with gear height and vanishes at half the
    // reference span; never negative above that.
    let height_ratio = (state.gear_height / config.reference_span).get::<ratio>();
    let ground_effect = config.ground_effect_base * (1.0 - 2.0 * height_ratio).max(0.0);

    // A split between commanded and actual flap means a surface is stuck;
    // the lift error grows with the split and with alpha.
    let flap_split_pct = state.flap_commanded.get::<percent>() - flap_pct;
    let flap_failure = (config.flap_failure_base + config.flap_failure_per_alpha * alpha_deg)
        * flap_split_pct
        * config.flap_failure_gain;

    let icing =
        tables::ICE.interpolate([alpha_deg], [OutOfRange::Clamp]) * state.ice_factor.get();

    LiftTerms {
        basic,
        dynamic,
        elevator,
        asymmetric_thrust,
        ground_effect,
        flap_failure,
        icing,
        bias: config.bias,
    }
}
