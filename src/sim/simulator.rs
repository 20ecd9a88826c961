use crate::config::{ScenarioConfig, SimulationConfig};
use crate::math::Vec2;
use crate::physics::{Integrator, RigidBody, StickError};
use crate::sim::clock::FrameClock;
use crate::sim::forces::ForceSet;
use crate::sim::render::{ForceArrow, Frame, FrameSink, Trail};

#[derive(Debug, Clone)]
pub struct StickTelemetry {
    pub time: f64,
    pub center: Vec2,
    pub velocity: Vec2,
    pub angle: f64,
    pub angular_velocity: f64,
    pub p1: Vec2,
    pub p2: Vec2,
}

impl StickTelemetry {
    pub fn capture(time: f64, body: &RigidBody) -> Self {
        let (p1, p2) = body.endpoints();
        Self {
            time,
            center: body.center,
            velocity: body.velocity,
            angle: body.angle,
            angular_velocity: body.angular_velocity,
            p1,
            p2,
        }
    }
}

/// Drives one stick: per frame it clears the accumulators, applies gravity
/// and the scenario forces, advances by the measured `dt` and reports the
/// resulting geometry.
pub struct Simulator {
    pub scenario: ScenarioConfig,
    pub config: SimulationConfig,
    pub body: RigidBody,
    pub forces: ForceSet,
    pub trail: Trail,
    pub time: f64,
    pub running: bool,
    pub telemetry_log: Vec<StickTelemetry>,
    initial_body: RigidBody,
    clock: FrameClock,
    integrator: Box<dyn Integrator>,
}

impl Simulator {
    pub fn new(scenario: ScenarioConfig, config: SimulationConfig) -> Result<Self, StickError> {
        if config.max_time.is_nan() {
            return Err(StickError::InvalidSetting {
                name: "max_time",
                value: config.max_time,
            });
        }
        let clock = FrameClock::from_config(&config)?;

        let body = scenario.to_rigid_body()?;
        let forces = ForceSet::new(config.gravity, scenario.timed_forces());
        let mut trail = Trail::new(config.trail_capacity);
        trail.push(body.center);

        Ok(Self {
            forces,
            trail,
            time: 0.0,
            running: false,
            telemetry_log: Vec::new(),
            initial_body: body.clone(),
            body,
            clock,
            integrator: config.integrator.integrator(),
            scenario,
            config,
        })
    }

    pub fn start(&mut self) {
        self.running = true;
        self.time = 0.0;
        self.body = self.initial_body.clone();
        self.telemetry_log.clear();
        self.trail.clear();
        self.trail.push(self.body.center);
        self.clock.reset();

        println!("Simulation started");
        println!("Scenario: {}", self.scenario.name);
        println!(
            "Mass: {:.3} kg | Length: {:.2} | Inertia: {:.4}",
            self.body.mass(),
            self.body.length(),
            self.body.moment_of_inertia()
        );
        println!("Integrator: {:?}", self.config.integrator);
    }

    /// Processes one frame, returning `None` once the run is over.
    pub fn step(&mut self) -> Option<Frame> {
        if !self.running || self.time >= self.config.max_time {
            return None;
        }

        let dt = self.clock.next_dt();

        self.body.clear_accumulators();
        let applied = self.forces.apply(&mut self.body, self.time);
        self.body.step_with(self.integrator.as_ref(), dt);
        self.time += dt;

        let telemetry = StickTelemetry::capture(self.time, &self.body);
        self.trail.push(telemetry.center);

        let frame = Frame {
            time: self.time,
            dt,
            endpoints: (telemetry.p1, telemetry.p2),
            center: telemetry.center,
            angle: telemetry.angle,
            trail: self.trail.points(),
            arrows: applied
                .iter()
                .map(|force| ForceArrow::new(force, self.config.arrow_scale))
                .collect(),
        };
        self.telemetry_log.push(telemetry);

        Some(frame)
    }

    pub fn run(&mut self, sink: &mut dyn FrameSink) {
        self.start();

        while let Some(frame) = self.step() {
            sink.present(&frame);
        }

        self.finish();
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn finish(&mut self) {
        self.running = false;

        println!("\nSimulation completed");
        println!("Total time: {:.2} s", self.time);
        println!("Total telemetry points: {}", self.telemetry_log.len());

        if let Some(last) = self.telemetry_log.last() {
            println!("Final state:");
            println!("  Center: ({:.2}, {:.2})", last.center.x, last.center.y);
            println!("  Angle: {:.2}°", last.angle.to_degrees());
            println!("  Angular velocity: {:.4} rad/s", last.angular_velocity);
        }
    }

    pub fn export_telemetry(&self, filename: &str) -> Result<(), Box<dyn std::error::Error>> {
        use std::fs::File;
        use std::io::{BufWriter, Write};

        let mut file = BufWriter::new(File::create(filename)?);
        writeln!(file, "time,x,y,vx,vy,angle,omega,p1x,p1y,p2x,p2y")?;

        for t in &self.telemetry_log {
            writeln!(
                file,
                "{},{},{},{},{},{},{},{},{},{},{}",
                t.time,
                t.center.x, t.center.y,
                t.velocity.x, t.velocity.y,
                t.angle, t.angular_velocity,
                t.p1.x, t.p1.y,
                t.p2.x, t.p2.y
            )?;
        }
        file.flush()?;

        println!("Telemetry exported to {}", filename);
        Ok(())
    }
}
