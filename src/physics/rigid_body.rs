use crate::math::{AnglePolicy, Pose, Vec2};
use crate::physics::error::StickError;
use crate::physics::integrator::{AdamsBashforth2, AxisState, Integrator};

/// A uniform thin rod moving in the plane.
///
/// `acceleration` and `angular_acceleration` accumulate the forces applied
/// during the current frame and must be cleared before the next frame's
/// applications. The `previous_*` fields hold the last frame's resolved
/// accelerations and are the only integration history.
#[derive(Debug, Clone)]
pub struct RigidBody {
    mass: f64,
    length: f64,
    moment_of_inertia: f64,

    pub center: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub previous_acceleration: Vec2,

    pub angle: f64,
    pub angular_velocity: f64,
    pub angular_acceleration: f64,
    pub previous_angular_acceleration: f64,
}

impl RigidBody {
    /// Builds a rod spanning `p1`..`p2`. A non-positive mass is replaced by 1.
    pub fn new(p1: Vec2, p2: Vec2, mass: f64) -> Result<Self, StickError> {
        Self::with_policy(p1, p2, mass, AnglePolicy::default())
    }

    pub fn with_policy(
        p1: Vec2,
        p2: Vec2,
        mass: f64,
        policy: AnglePolicy,
    ) -> Result<Self, StickError> {
        let mass = if mass > 0.0 { mass } else { 1.0 };

        let delta = p1 - p2;
        let length = delta.magnitude();
        if !(p1.is_finite() && p2.is_finite()) || length == 0.0 {
            return Err(StickError::InvalidGeometry { length });
        }

        Ok(Self {
            mass,
            length,
            moment_of_inertia: mass * length * length / 12.0,
            center: p2 + delta / 2.0,
            velocity: Vec2::zero(),
            acceleration: Vec2::zero(),
            previous_acceleration: Vec2::zero(),
            angle: policy.orientation(p1, p2),
            angular_velocity: 0.0,
            angular_acceleration: 0.0,
            previous_angular_acceleration: 0.0,
        })
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_angular_velocity(mut self, angular_velocity: f64) -> Self {
        self.angular_velocity = angular_velocity;
        self
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn moment_of_inertia(&self) -> f64 {
        self.moment_of_inertia
    }

    pub fn pose(&self) -> Pose {
        Pose::new(self.center, self.angle)
    }

    pub fn clear_accumulators(&mut self) {
        self.acceleration = Vec2::zero();
        self.angular_acceleration = 0.0;
    }

    /// Accumulates `force` applied at world point `point`.
    pub fn apply_force(&mut self, force: Vec2, point: Vec2) {
        self.acceleration += force / self.mass;

        let arm = self.center - point;
        let torque = force.cross(&arm);
        self.angular_acceleration += torque / self.moment_of_inertia;
    }

    pub fn apply_force_at_center(&mut self, force: Vec2) {
        self.apply_force(force, self.center);
    }

    pub fn step(&mut self, dt: f64) {
        self.step_with(&AdamsBashforth2, dt);
    }

    /// Advances both position axes and the orientation by `dt`, then rolls the
    /// current accelerations into history.
    pub fn step_with(&mut self, integrator: &dyn Integrator, dt: f64) {
        let x = integrator.advance(
            &AxisState {
                position: self.center.x,
                velocity: self.velocity.x,
                acceleration: self.acceleration.x,
                previous_acceleration: self.previous_acceleration.x,
            },
            dt,
        );
        let y = integrator.advance(
            &AxisState {
                position: self.center.y,
                velocity: self.velocity.y,
                acceleration: self.acceleration.y,
                previous_acceleration: self.previous_acceleration.y,
            },
            dt,
        );
        let theta = integrator.advance(
            &AxisState {
                position: self.angle,
                velocity: self.angular_velocity,
                acceleration: self.angular_acceleration,
                previous_acceleration: self.previous_angular_acceleration,
            },
            dt,
        );

        self.center = Vec2::new(x.position, y.position);
        self.velocity = Vec2::new(x.velocity, y.velocity);
        self.previous_acceleration = Vec2::new(x.previous_acceleration, y.previous_acceleration);

        self.angle = theta.position;
        self.angular_velocity = theta.velocity;
        self.previous_angular_acceleration = theta.previous_acceleration;
    }

    pub fn endpoints(&self) -> (Vec2, Vec2) {
        let pose = self.pose();
        let half = self.length / 2.0;
        (
            pose.transform_point(&Vec2::new(-half, 0.0)),
            pose.transform_point(&Vec2::new(half, 0.0)),
        )
    }
}
