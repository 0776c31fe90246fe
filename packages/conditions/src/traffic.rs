//! Synthesized traffic conditions.
//!
//! The dashboard never shipped a live traffic feed for the assistant —
//! congestion values are drawn uniformly within fixed bands. The bands
//! are part of the product contract (replies quote them), so keep them
//! stable if a real provider replaces this module at the registry seam.

use rand::Rng as _;
use urban_pulse_conditions_models::{CongestionLevel, TrafficSnapshot};

/// Lower/upper bounds for the congestion percentage band.
pub const CONGESTION_PERCENT_RANGE: std::ops::Range<f64> = 20.0..100.0;

/// Lower/upper bounds for the average speed band, in mph.
pub const AVERAGE_SPEED_RANGE: std::ops::Range<f64> = 10.0..50.0;

/// Synthesizes a current traffic snapshot.
///
/// Each call draws fresh values: a congestion level uniform over
/// [`CongestionLevel::ALL`], a congestion percentage in `[20, 100)`, and
/// an average speed in `[10, 50)` mph.
#[must_use]
pub fn synthesize() -> TrafficSnapshot {
    let mut rng = rand::thread_rng();

    let congestion = CongestionLevel::ALL[rng.gen_range(0..CongestionLevel::ALL.len())];

    TrafficSnapshot {
        congestion,
        congestion_percent: rng.gen_range(CONGESTION_PERCENT_RANGE),
        average_speed_mph: rng.gen_range(AVERAGE_SPEED_RANGE),
    }
}
