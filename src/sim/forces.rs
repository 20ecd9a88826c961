use crate::math::Vec2;
use crate::physics::RigidBody;
use serde::{Deserialize, Serialize};

/// Where on the stick a force is applied, resolved every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForceAnchor {
    Center,
    First,
    Second,
}

impl ForceAnchor {
    pub fn resolve(self, body: &RigidBody) -> Vec2 {
        match self {
            ForceAnchor::Center => body.center,
            ForceAnchor::First => body.endpoints().0,
            ForceAnchor::Second => body.endpoints().1,
        }
    }
}

/// A named force switched on from simulation start for `duration` seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedForce {
    pub name: String,
    pub force: Vec2,
    pub anchor: ForceAnchor,
    pub duration: Option<f64>,
}

impl TimedForce {
    pub fn is_active(&self, time: f64) -> bool {
        self.duration.map_or(true, |duration| time < duration)
    }

    /// The force in effect at `time`; zero once the window has closed.
    pub fn force_at(&self, time: f64) -> Vec2 {
        if self.is_active(time) {
            self.force
        } else {
            Vec2::zero()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppliedForce {
    pub name: String,
    pub force: Vec2,
    pub point: Vec2,
}

/// Gravity plus the scenario's timed forces.
#[derive(Debug, Clone)]
pub struct ForceSet {
    pub gravity: f64,
    pub forces: Vec<TimedForce>,
}

impl ForceSet {
    pub fn new(gravity: f64, forces: Vec<TimedForce>) -> Self {
        Self { gravity, forces }
    }

    /// Accumulates every force for the frame starting at `time` and returns
    /// the ones that are switched on.
    pub fn apply(&self, body: &mut RigidBody, time: f64) -> Vec<AppliedForce> {
        let mut applied = Vec::with_capacity(self.forces.len() + 1);

        let weight = Vec2::new(0.0, body.mass() * self.gravity);
        let center = body.center;
        body.apply_force(weight, center);
        applied.push(AppliedForce {
            name: "G".to_string(),
            force: weight,
            point: center,
        });

        for timed in &self.forces {
            let point = timed.anchor.resolve(body);
            let force = timed.force_at(time);
            body.apply_force(force, point);

            if timed.is_active(time) {
                applied.push(AppliedForce {
                    name: timed.name.clone(),
                    force,
                    point,
                });
            }
        }

        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn stick() -> RigidBody {
        RigidBody::new(Vec2::new(0.0, 0.0), Vec2::new(2.0, 0.0), 3.0).unwrap()
    }

    fn kick(duration: Option<f64>) -> TimedForce {
        TimedForce {
            name: "kick".to_string(),
            force: Vec2::new(0.0, 6.0),
            anchor: ForceAnchor::Second,
            duration,
        }
    }

    #[test]
    fn test_window_closes_at_duration() {
        let force = kick(Some(1.0));
        assert!(force.is_active(0.0));
        assert!(force.is_active(0.999));
        assert!(!force.is_active(1.0));
        assert_eq!(force.force_at(2.0), Vec2::zero());
        assert!(kick(None).is_active(1e9));
    }

    #[test]
    fn test_anchor_resolution() {
        let body = stick();
        assert_eq!(ForceAnchor::Center.resolve(&body), Vec2::new(1.0, 0.0));
        let first = ForceAnchor::First.resolve(&body);
        let second = ForceAnchor::Second.resolve(&body);
        assert_relative_eq!(first.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(first.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(second.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(second.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_gravity_scales_with_mass() {
        let mut body = stick();
        let set = ForceSet::new(-10.0, Vec::new());
        let applied = set.apply(&mut body, 0.0);

        assert_eq!(applied.len(), 1);
        assert_eq!(applied[0].force, Vec2::new(0.0, -30.0));
        assert_eq!(body.acceleration, Vec2::new(0.0, -10.0));
        assert_eq!(body.angular_acceleration, 0.0);
    }

    #[test]
    fn test_expired_force_is_applied_as_zero() {
        let set = ForceSet::new(0.0, vec![kick(Some(0.5))]);

        let mut during = stick();
        let applied = set.apply(&mut during, 0.25);
        assert_eq!(applied.len(), 2);
        // arm = (-1, 0): torque = -(-1) * 6
        assert_relative_eq!(
            during.angular_acceleration,
            6.0 / during.moment_of_inertia(),
            epsilon = 1e-9
        );

        let mut after = stick();
        let applied = set.apply(&mut after, 0.75);
        assert_eq!(applied.len(), 1);
        assert_eq!(after.angular_acceleration, 0.0);
        assert_eq!(after.acceleration, Vec2::zero());
    }
}
