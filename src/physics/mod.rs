pub mod rigid_body;
pub mod integrator;
pub mod error;

pub use rigid_body::RigidBody;
pub use integrator::{AdamsBashforth2, AxisState, ExplicitEuler, IntegrationMethod, Integrator};
pub use error::StickError;
