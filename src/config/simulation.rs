use crate::math::GRAVITY;
use crate::physics::IntegrationMethod;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// A frame is only processed once more than this many seconds elapsed.
    pub min_frame_interval: f64,
    pub max_time: f64,
    /// Vertical gravitational acceleration, negative pointing down.
    pub gravity: f64,
    /// Measure `dt` from the wall clock instead of synthesizing it.
    pub real_time: bool,
    /// Relative spread of synthetic frame intervals, `0` for a fixed step.
    pub dt_jitter: f64,
    pub seed: u64,
    pub trail_capacity: usize,
    pub arrow_scale: f64,
    pub status_interval: f64,
    pub integrator: IntegrationMethod,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            min_frame_interval: 0.01,
            max_time: 10.0,
            gravity: GRAVITY,
            real_time: false,
            dt_jitter: 0.0,
            seed: 42,
            trail_capacity: 100,
            arrow_scale: 30.0,
            status_interval: 1.0,
            integrator: IntegrationMethod::AdamsBashforth2,
        }
    }
}

impl SimulationConfig {
    /// Variable-step headless run with reproducible frame timing.
    pub fn jittered(seed: u64) -> Self {
        Self {
            dt_jitter: 0.5,
            seed,
            ..Self::default()
        }
    }

    pub fn balance_bot_v2() -> Self {
        Self {
            gravity: -10.0,
            ..Self::default()
        }
    }
}
