pub mod simulator;
pub mod forces;
pub mod clock;
pub mod render;

pub use simulator::{Simulator, StickTelemetry};
pub use forces::{AppliedForce, ForceAnchor, ForceSet, TimedForce};
pub use clock::FrameClock;
pub use render::{ConsoleSink, ForceArrow, Frame, FrameSink, Trail};
