pub mod vector;
pub mod angle;
pub mod frame;

pub use vector::Vec2;
pub use angle::AnglePolicy;
pub use frame::Pose;

pub const GRAVITY: f64 = -9.81;
