//! Wind-tunnel-derived lift tables.
//!
//! Axis and value data are transcribed from the airplane simulation data
//! package and never change at runtime. The tables are validated once on
//! first use and shared by every model instance.

use std::sync::LazyLock;

use crate::support::interp::{Axis, Table1d, Table3d};

// Lift degradation at full ice accretion vs. angle of attack (deg).

static ICE_ALPHA_DEG: [f64; 5] = [0.0, 4.0, 8.0, 10.0, 12.0];

static ICE_LIFT_LOSS: [f64; 5] = [0.0, -0.03, -0.21, -0.37, -0.39];

pub(super) static ICE: LazyLock<Table1d<'static, f64>> = LazyLock::new(|| {
    let alpha = Axis::new(&ICE_ALPHA_DEG).expect("icing alpha samples are strictly increasing");
    Table1d::new([alpha], &ICE_LIFT_LOSS).expect("icing table covers its axis")
});

// Basic rigid-airframe lift vs. flap deflection (%), symmetric thrust
// coefficient, and angle of attack (deg). Axes are declared slowest-first to
// match the value block: one row per (flap, Tcx) pair, alpha varying along
// the row.

static BASIC_FLAP_PCT: [f64; 2] = [0.0, 100.0];

static BASIC_TCX: [f64; 4] = [0.0, 0.1, 0.2, 0.6];

static BASIC_ALPHA_DEG: [f64; 10] = [-8.0, -4.0, 0.0, 4.0, 8.0, 10.0, 12.0, 14.0, 16.0, 20.0];

#[rustfmt::skip]
static BASIC_CL: [f64; 80] = [
    -0.52, -0.08, 0.35, 0.70, 1.06, 1.14, 1.20, 1.21, 1.12, 1.04,
    -0.49, -0.04, 0.40, 0.76, 1.13, 1.27, 1.38, 1.39, 1.34, 1.24,
    -0.47, -0.03, 0.42, 0.80, 1.19, 1.35, 1.47, 1.48, 1.44, 1.33,
    -0.46,  0.0,  0.44, 0.86, 1.26, 1.44, 1.58, 1.62, 1.60, 1.50,

     0.07,  0.46, 0.85, 1.24, 1.50, 1.55, 1.53, 1.40, 1.22, 1.05,
     0.14,  0.54, 0.95, 1.34, 1.60, 1.66, 1.67, 1.54, 1.38, 1.24,
     0.17,  0.60, 1.02, 1.42, 1.71, 1.77, 1.80, 1.70, 1.57, 1.38,
     0.32,  0.78, 1.23, 1.62, 1.93, 1.99, 2.02, 1.96, 1.84, 1.61,
];

pub(super) static BASIC: LazyLock<Table3d<'static, f64>> = LazyLock::new(|| {
    let flap = Axis::new(&BASIC_FLAP_PCT).expect("flap samples are strictly increasing");
    let tcx = Axis::new(&BASIC_TCX).expect("thrust samples are strictly increasing");
    let alpha = Axis::new(&BASIC_ALPHA_DEG).expect("alpha samples are strictly increasing");
    Table3d::new([flap, tcx, alpha], &BASIC_CL).expect("basic lift table covers its grid")
});
