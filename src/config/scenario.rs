use crate::config::ConfigError;
use crate::math::{AnglePolicy, Vec2};
use crate::physics::{RigidBody, StickError};
use crate::sim::forces::{ForceAnchor, TimedForce};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForceConfig {
    pub name: String,
    pub force: [f64; 2],
    pub anchor: ForceAnchor,
    /// Seconds from simulation start during which the force is active.
    /// `None` keeps it on for the whole run.
    #[serde(default)]
    pub duration: Option<f64>,
}

impl ForceConfig {
    pub fn to_timed_force(&self) -> TimedForce {
        TimedForce {
            name: self.name.clone(),
            force: Vec2::from_array(self.force),
            anchor: self.anchor,
            duration: self.duration,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub name: String,
    pub p1: [f64; 2],
    pub p2: [f64; 2],
    pub mass: f64,
    #[serde(default)]
    pub initial_velocity: [f64; 2],
    #[serde(default)]
    pub initial_angular_velocity: f64,
    #[serde(default)]
    pub angle_policy: AnglePolicy,
    #[serde(default)]
    pub forces: Vec<ForceConfig>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self::balance_bot()
    }
}

impl ScenarioConfig {
    /// Diagonal stick pushed at its first endpoint for one second.
    pub fn balance_bot() -> Self {
        Self {
            name: "Balance Bot".to_string(),
            p1: [50.0, 50.0],
            p2: [150.0, 150.0],
            mass: 0.1,
            initial_velocity: [0.0, 0.0],
            initial_angular_velocity: 0.0,
            angle_policy: AnglePolicy::QuadrantAware,
            forces: vec![ForceConfig {
                name: "N".to_string(),
                force: [3.0, 5.0],
                anchor: ForceAnchor::First,
                duration: Some(1.0),
            }],
        }
    }

    pub fn balance_bot_v2() -> Self {
        Self {
            name: "Balance Bot v2".to_string(),
            p1: [50.0, 200.0],
            p2: [150.0, 300.0],
            mass: 0.11,
            initial_velocity: [0.0, 0.0],
            initial_angular_velocity: 0.0,
            angle_policy: AnglePolicy::QuadrantAware,
            forces: vec![ForceConfig {
                name: "N_1".to_string(),
                force: [3.0, 2.7],
                anchor: ForceAnchor::First,
                duration: Some(1.0),
            }],
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_rigid_body(&self) -> Result<RigidBody, StickError> {
        let body = RigidBody::with_policy(
            Vec2::from_array(self.p1),
            Vec2::from_array(self.p2),
            self.mass,
            self.angle_policy,
        )?;

        Ok(body
            .with_velocity(Vec2::from_array(self.initial_velocity))
            .with_angular_velocity(self.initial_angular_velocity))
    }

    pub fn timed_forces(&self) -> Vec<TimedForce> {
        self.forces.iter().map(ForceConfig::to_timed_force).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_json_uses_defaults() {
        let json = r#"{ "name": "bare", "p1": [0.0, 0.0], "p2": [2.0, 0.0], "mass": 1.0 }"#;
        let scenario = ScenarioConfig::from_json_str(json).unwrap();
        assert_eq!(scenario.angle_policy, AnglePolicy::QuadrantAware);
        assert!(scenario.forces.is_empty());
        assert_eq!(scenario.initial_velocity, [0.0, 0.0]);

        let body = scenario.to_rigid_body().unwrap();
        assert_eq!(body.length(), 2.0);
        assert_eq!(body.center, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_json_forces_and_policy() {
        let json = r#"{
            "name": "pushed",
            "p1": [0.0, 0.0],
            "p2": [0.0, 4.0],
            "mass": -2.0,
            "initial_angular_velocity": 0.3,
            "angle_policy": "Principal",
            "forces": [
                { "name": "kick", "force": [1.0, 0.0], "anchor": "Second", "duration": 0.5 },
                { "name": "wind", "force": [0.2, 0.0], "anchor": "Center" }
            ]
        }"#;
        let scenario = ScenarioConfig::from_json_str(json).unwrap();
        let forces = scenario.timed_forces();
        assert_eq!(forces.len(), 2);
        assert_eq!(forces[0].anchor, ForceAnchor::Second);
        assert_eq!(forces[1].duration, None);

        let body = scenario.to_rigid_body().unwrap();
        assert_eq!(body.mass(), 1.0);
        assert_eq!(body.angular_velocity, 0.3);
        assert_eq!(body.angle, -std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = ScenarioConfig::from_json_str("{ \"name\": 3 }").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ScenarioConfig::from_json_file("/nonexistent/scenario.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_degenerate_scenario_is_rejected() {
        let mut scenario = ScenarioConfig::balance_bot();
        scenario.p2 = scenario.p1;
        assert!(scenario.to_rigid_body().is_err());
    }
}
