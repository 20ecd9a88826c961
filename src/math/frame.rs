use super::Vec2;
use nalgebra as na;

/// Planar position plus orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec2,
    pub angle: f64,
}

impl Pose {
    pub fn new(position: Vec2, angle: f64) -> Self {
        Self { position, angle }
    }

    pub fn transform_vector(&self, vector: &Vec2) -> Vec2 {
        let rotation = na::Rotation2::new(self.angle);
        Vec2::from_na(&(rotation * vector.to_na()))
    }

    pub fn transform_point(&self, point: &Vec2) -> Vec2 {
        self.transform_vector(point) + self.position
    }
}
