use uom::si::{f64::Length, length::foot};

/// Vehicle constants for the lift model.
///
/// These are airframe data, not engine behavior: the defaults are
/// representative values for a light twin turboprop, and a host simulation
/// supplies its own set from the aircraft's data package. All lift slopes
/// are per degree of angle of attack; rate derivatives are per rad/s and are
/// applied together with the chord rate factor from the flight state.
#[derive(Debug, Clone, Copy)]
pub struct LiftConfig {
    /// Lift due to angle-of-attack rate.
    pub cl_alpha_dot: f64,

    /// Lift due to pitch rate.
    pub cl_q: f64,

    /// Elevator moment arm expressed in reference chords.
    ///
    /// Converts the published pitching moment due to elevator into the
    /// tail's lift contribution.
    pub elevator_arm_ratio: f64,

    /// Asymmetric-thrust lift at zero alpha with flaps up.
    pub asym_thrust_base: f64,

    /// Asymmetric-thrust lift slope with alpha.
    pub asym_thrust_per_alpha: f64,

    /// Asymmetric-thrust lift increment at full flap.
    pub asym_thrust_per_flap: f64,

    /// Differential thrust coefficient the asymmetric term is normalized
    /// against.
    pub thrust_differential_reference: f64,

    /// Ground-effect lift increment with the gear on the surface.
    pub ground_effect_base: f64,

    /// Reference wingspan; ground effect fades to zero at half this height.
    pub reference_span: Length,

    /// Flap-failure lift per percent of flap split at zero alpha.
    pub flap_failure_base: f64,

    /// Flap-failure lift slope with alpha.
    pub flap_failure_per_alpha: f64,

    /// Gain applied to the commanded-minus-actual flap split, per percent.
    pub flap_failure_gain: f64,

    /// Constant bias for empirical data matching.
    pub bias: f64,
}

impl Default for LiftConfig {
    fn default() -> Self {
        Self {
            cl_alpha_dot: 2.7,
            cl_q: 8.1,
            elevator_arm_ratio: 3.9,
            asym_thrust_base: 0.055,
            asym_thrust_per_alpha: 0.004,
            asym_thrust_per_flap: 0.02,
            thrust_differential_reference: 0.4,
            ground_effect_base: 0.12,
            reference_span: Length::new::<foot>(50.25),
            flap_failure_base: 0.01,
            flap_failure_per_alpha: 0.0015,
            flap_failure_gain: 0.04,
            bias: 0.0,
        }
    }
}
