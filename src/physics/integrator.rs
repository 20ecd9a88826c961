use serde::{Deserialize, Serialize};

/// One scalar degree of freedom together with its acceleration history.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisState {
    pub position: f64,
    pub velocity: f64,
    /// Acceleration resolved for the current frame.
    pub acceleration: f64,
    /// Acceleration resolved for the previous frame.
    pub previous_acceleration: f64,
}

pub trait Integrator {
    /// Advances a single axis by `dt` and shifts the acceleration history.
    fn advance(&self, axis: &AxisState, dt: f64) -> AxisState;
}

/// Two-step Adams-Bashforth velocity predictor with a trapezoidal position
/// corrector.
///
/// ```text
/// v' = v + (3a - a_prev) / 2 * dt
/// x' = x + (v' + v) / 2 * dt
/// ```
///
/// With zero history the first step weights the current acceleration by 3/2.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdamsBashforth2;

impl AdamsBashforth2 {
    pub fn new() -> Self {
        Self
    }
}

impl Integrator for AdamsBashforth2 {
    fn advance(&self, axis: &AxisState, dt: f64) -> AxisState {
        let velocity = axis.velocity
            + ((3.0 * axis.acceleration - axis.previous_acceleration) / 2.0) * dt;
        let position = axis.position + ((velocity + axis.velocity) / 2.0) * dt;

        AxisState {
            position,
            velocity,
            acceleration: axis.acceleration,
            previous_acceleration: axis.acceleration,
        }
    }
}

/// Forward Euler, kept as a first-order baseline.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplicitEuler;

impl ExplicitEuler {
    pub fn new() -> Self {
        Self
    }
}

impl Integrator for ExplicitEuler {
    fn advance(&self, axis: &AxisState, dt: f64) -> AxisState {
        AxisState {
            position: axis.position + axis.velocity * dt,
            velocity: axis.velocity + axis.acceleration * dt,
            acceleration: axis.acceleration,
            previous_acceleration: axis.acceleration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IntegrationMethod {
    #[default]
    AdamsBashforth2,
    ExplicitEuler,
}

impl IntegrationMethod {
    pub fn integrator(self) -> Box<dyn Integrator> {
        match self {
            IntegrationMethod::AdamsBashforth2 => Box::new(AdamsBashforth2::new()),
            IntegrationMethod::ExplicitEuler => Box::new(ExplicitEuler::new()),
        }
    }
}
