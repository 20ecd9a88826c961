//! Planar dynamics of a single rigid stick.
//!
//! A [`physics::RigidBody`] accumulates forces applied at arbitrary points and
//! is advanced with a two-step Adams-Bashforth predictor and trapezoidal
//! position corrector. The [`sim`] layer drives it frame by frame from a
//! wall-clock or synthetic clock and hands endpoint geometry to a
//! [`sim::FrameSink`].

pub mod math;
pub mod physics;
pub mod config;
pub mod sim;
