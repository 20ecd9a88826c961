use crate::math::Vec2;
use crate::sim::forces::AppliedForce;
use std::collections::VecDeque;

/// Bounded history of the center of mass, oldest first.
#[derive(Debug, Clone)]
pub struct Trail {
    capacity: usize,
    points: VecDeque<Vec2>,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            points: VecDeque::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, point: Vec2) {
        if self.capacity == 0 {
            return;
        }
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> Vec<Vec2> {
        self.points.iter().copied().collect()
    }
}

/// Arrow drawn so that its head sits on the application point.
#[derive(Debug, Clone, PartialEq)]
pub struct ForceArrow {
    pub name: String,
    pub tail: Vec2,
    pub head: Vec2,
}

impl ForceArrow {
    pub fn new(applied: &AppliedForce, scale: f64) -> Self {
        Self {
            name: applied.name.clone(),
            tail: applied.point - applied.force * scale,
            head: applied.point,
        }
    }
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone)]
pub struct Frame {
    pub time: f64,
    pub dt: f64,
    pub endpoints: (Vec2, Vec2),
    pub center: Vec2,
    pub angle: f64,
    pub trail: Vec<Vec2>,
    pub arrows: Vec<ForceArrow>,
}

pub trait FrameSink {
    fn present(&mut self, frame: &Frame);
}

/// Prints a status line every `interval` seconds of simulated time.
pub struct ConsoleSink {
    interval: f64,
    next_report: f64,
}

impl ConsoleSink {
    /// A non-positive or non-finite `interval` reports every frame.
    pub fn new(interval: f64) -> Self {
        Self {
            interval: if interval.is_finite() && interval > 0.0 { interval } else { 0.0 },
            next_report: 0.0,
        }
    }

    fn should_report(&mut self, time: f64) -> bool {
        if time < self.next_report {
            return false;
        }
        let next = if self.interval > 0.0 {
            ((time / self.interval).floor() + 1.0) * self.interval
        } else {
            time
        };
        // Intervals below the float spacing at `time` degrade to every frame.
        self.next_report = if next > time { next } else { time };
        true
    }
}

impl FrameSink for ConsoleSink {
    fn present(&mut self, frame: &Frame) {
        if !self.should_report(frame.time) {
            return;
        }

        let (p1, p2) = frame.endpoints;
        println!(
            "t={:6.2}s | Center=({:7.2},{:7.2}) | Angle={:7.2}° | P1=({:7.2},{:7.2}) P2=({:7.2},{:7.2})",
            frame.time,
            frame.center.x,
            frame.center.y,
            frame.angle.to_degrees(),
            p1.x,
            p1.y,
            p2.x,
            p2.y
        );
        for arrow in &frame.arrows {
            println!(
                "         | Force {}: ({:.2},{:.2}) -> ({:.2},{:.2})",
                arrow.name, arrow.tail.x, arrow.tail.y, arrow.head.x, arrow.head.y
            );
        }
    }
}
