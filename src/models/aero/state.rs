use uom::si::f64::{Angle, AngularVelocity, Length, Ratio};

use crate::support::constraint::{Constrained, ConstraintResult, UnitInterval};

/// Snapshot of the flight state a coefficient model reads.
///
/// The host assembles one of these per simulation step from its own state
/// and passes it by reference to every [`Coefficient`](super::Coefficient)
/// it evaluates. Models never mutate it, so one snapshot can serve any
/// number of models concurrently.
///
/// Thrust coefficients and the chord rate factor are nondimensional and
/// carried as bare floats; quantities with physical dimension use [`uom`]
/// types so the caller states its units explicitly.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlightState {
    /// Body angle of attack.
    pub alpha: Angle,

    /// Rate of change of angle of attack.
    pub alpha_rate: AngularVelocity,

    /// Body-axis pitch rate.
    pub pitch_rate: AngularVelocity,

    /// Actual flap deflection, where full travel is 100 %.
    pub flap: Ratio,

    /// Average commanded flap deflection across the flap surfaces.
    ///
    /// Differs from [`flap`](Self::flap) only when a surface has failed or
    /// stuck; the split drives the flap-failure correction.
    pub flap_commanded: Ratio,

    /// Symmetric thrust coefficient (both engines together).
    pub thrust_symmetric: f64,

    /// Differential thrust coefficient (left minus right).
    pub thrust_differential: f64,

    /// Nondimensional chord rate factor, c̄ / 2V.
    ///
    /// Scales rate-derivative terms so the stability constants stay
    /// dimensionless.
    pub chord_rate_factor: f64,

    /// Height of the landing gear above the surface.
    pub gear_height: Length,

    /// Ice accretion severity.
    pub ice_factor: IceFactor,
}

/// Ice accretion severity in the closed interval `[0, 1]`.
///
/// 0 is a clean airframe, 1 is the full tabulated ice effect. Values in
/// between scale the icing corrections linearly.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct IceFactor(Constrained<f64, UnitInterval>);

impl IceFactor {
    /// Creates an ice factor.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value lies outside `[0, 1]` or is NaN.
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Ok(Self(UnitInterval::new(value)?))
    }

    /// The factor as a plain scalar.
    #[must_use]
    pub fn get(&self) -> f64 {
        self.0.get()
    }
}

/// A clean airframe.
impl Default for IceFactor {
    fn default() -> Self {
        Self::new(0.0).expect("zero is within the unit interval")
    }
}

/// Cross-model coefficient blackboard for the current step.
///
/// Holds the values coefficient models publish for each other and for the
/// equations of motion. Each field has exactly one owning model; every model
/// may read any field, but writes only its own. The host scheduler
/// guarantees that a field is published before a downstream model reads it
/// (see the [module docs](super) on scheduling).
#[derive(Debug, Clone, Copy, Default)]
pub struct SharedCoefficients {
    /// Pitching moment increment due to elevator deflection.
    ///
    /// Owned by the pitching-moment model; the lift model converts it into
    /// the tail's lift contribution.
    pub cm_elevator: f64,

    /// Total lift coefficient. Owned by the lift model.
    pub lift: f64,

    /// Rigid-airframe plus dynamic lift, without the correction terms.
    ///
    /// Owned by the lift model, for consumers that need lift undisturbed by
    /// ground effect, icing, and the other corrections.
    pub lift_star: f64,
}
