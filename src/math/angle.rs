use super::Vec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

/// How a rod orientation is recovered from its two endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnglePolicy {
    /// Principal value of `atan(dy / dx)` over `p1 - p2`. Only angles in
    /// `[-π/2, π/2]` are recoverable; a vertical rod collapses to `±π/2`
    /// by the sign of `dy`, with `dy == 0` mapping to `-π/2`.
    Principal,
    /// `atan2` of the direction from `p1` to `p2`. Endpoints round-trip in
    /// every quadrant.
    #[default]
    QuadrantAware,
}

impl AnglePolicy {
    pub fn orientation(self, p1: Vec2, p2: Vec2) -> f64 {
        match self {
            AnglePolicy::Principal => {
                let d = p1 - p2;
                if d.x != 0.0 {
                    (d.y / d.x).atan()
                } else if d.y > 0.0 {
                    FRAC_PI_2
                } else {
                    -FRAC_PI_2
                }
            }
            AnglePolicy::QuadrantAware => {
                let d = p2 - p1;
                d.y.atan2(d.x)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_4, PI};

    #[test]
    fn test_principal_collapses_quadrants() {
        let policy = AnglePolicy::Principal;
        let a = policy.orientation(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0));
        let b = policy.orientation(Vec2::new(1.0, 1.0), Vec2::new(0.0, 0.0));
        assert_relative_eq!(a, FRAC_PI_4, epsilon = 1e-12);
        assert_relative_eq!(b, FRAC_PI_4, epsilon = 1e-12);
    }

    #[test]
    fn test_principal_vertical_edge_cases() {
        let policy = AnglePolicy::Principal;
        let up = policy.orientation(Vec2::new(0.0, 2.0), Vec2::new(0.0, 0.0));
        let down = policy.orientation(Vec2::new(0.0, 0.0), Vec2::new(0.0, 2.0));
        let same = policy.orientation(Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0));
        assert_eq!(up, FRAC_PI_2);
        assert_eq!(down, -FRAC_PI_2);
        assert_eq!(same, -FRAC_PI_2);
    }

    #[test]
    fn test_quadrant_aware_distinguishes_direction() {
        let policy = AnglePolicy::QuadrantAware;
        let a = policy.orientation(Vec2::new(0.0, 0.0), Vec2::new(-1.0, 0.0));
        let b = policy.orientation(Vec2::new(0.0, 0.0), Vec2::new(0.0, -1.0));
        assert_relative_eq!(a, PI, epsilon = 1e-12);
        assert_relative_eq!(b, -FRAC_PI_2, epsilon = 1e-12);
    }
}
