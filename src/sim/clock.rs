use crate::config::SimulationConfig;
use crate::physics::StickError;
use rand::prelude::*;
use std::time::{Duration, Instant};

/// Source of the elapsed time handed to each frame.
pub enum FrameClock {
    /// Measures real elapsed time, releasing a frame only once more than
    /// `min_interval` has passed since the previous one.
    WallClock { min_interval: Duration, last: Instant },
    /// Draws intervals in `(min_interval, min_interval * (1 + jitter)]`. With
    /// zero jitter every interval is exactly `min_interval`.
    Synthetic { min_interval: f64, jitter: f64, rng: StdRng },
}

impl FrameClock {
    pub fn from_config(config: &SimulationConfig) -> Result<Self, StickError> {
        let dt = config.min_frame_interval;
        let invalid = StickError::InvalidTimestep { dt };
        if !(dt.is_finite() && dt > 0.0) {
            return Err(invalid);
        }

        if config.real_time {
            Ok(FrameClock::WallClock {
                min_interval: Duration::try_from_secs_f64(dt).map_err(|_| invalid)?,
                last: Instant::now(),
            })
        } else {
            Ok(FrameClock::Synthetic {
                min_interval: dt,
                jitter: config.dt_jitter.max(0.0),
                rng: StdRng::seed_from_u64(config.seed),
            })
        }
    }

    pub fn reset(&mut self) {
        if let FrameClock::WallClock { last, .. } = self {
            *last = Instant::now();
        }
    }

    /// Blocks until the next frame is due and returns its `dt` in seconds.
    pub fn next_dt(&mut self) -> f64 {
        match self {
            FrameClock::WallClock { min_interval, last } => loop {
                let elapsed = last.elapsed();
                if elapsed > *min_interval {
                    *last = Instant::now();
                    return elapsed.as_secs_f64();
                }
                std::thread::sleep(*min_interval - elapsed);
            },
            FrameClock::Synthetic { min_interval, jitter, rng } => {
                let u: f64 = 1.0 - rng.gen::<f64>();
                *min_interval * (1.0 + *jitter * u)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_synthetic_interval() {
        let mut clock = FrameClock::from_config(&SimulationConfig::default()).unwrap();
        for _ in 0..10 {
            assert_eq!(clock.next_dt(), 0.01);
        }
    }

    #[test]
    fn test_jittered_intervals_are_bounded_and_seeded() {
        let config = SimulationConfig::jittered(7);
        let mut a = FrameClock::from_config(&config).unwrap();
        let mut b = FrameClock::from_config(&config).unwrap();

        let mut distinct = false;
        let mut previous = None;
        for _ in 0..50 {
            let dt = a.next_dt();
            assert_eq!(dt, b.next_dt());
            assert!(dt > 0.01 && dt <= 0.01 * 1.5);
            if previous.map_or(false, |p| p != dt) {
                distinct = true;
            }
            previous = Some(dt);
        }
        assert!(distinct);
    }

    #[test]
    fn test_wall_clock_waits_past_interval() {
        let config = SimulationConfig {
            real_time: true,
            min_frame_interval: 0.002,
            ..SimulationConfig::default()
        };
        let mut clock = FrameClock::from_config(&config).unwrap();
        clock.reset();
        assert!(clock.next_dt() > 0.002);
    }

    #[test]
    fn test_unrepresentable_interval_is_rejected() {
        for min_frame_interval in [1e20, f64::MAX, f64::NAN, f64::INFINITY, 0.0, -0.01] {
            let config = SimulationConfig {
                real_time: true,
                min_frame_interval,
                ..SimulationConfig::default()
            };
            assert!(matches!(
                FrameClock::from_config(&config),
                Err(StickError::InvalidTimestep { .. })
            ));
        }
    }
}
