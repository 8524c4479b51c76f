//! World - the tilt sandbox session
//!
//! `WorldCore` is the explicit simulation context: it owns the sensor mapper,
//! the camera frame, the enclosure, the spawn scheduler and (once the scene is
//! set up) the physics world. Sensor samples and timer ticks arrive through an
//! [`EventChannel`] and are applied in order by a single dispatcher, so no
//! field has two writers.
//!
//! Lifecycle:
//! - `new` → no physics yet; gravity updates and spawn ticks are absorbed
//! - `setup_scene` → frame fitted, walls registered, spawning started
//! - `step` per rendered frame (host frame clock)
//! - `teardown` → physics dropped; every later event is absorbed

use crate::core::utils::XorShift32;
use crate::domain::config::SandboxConfig;
use crate::domain::enclosure::{Enclosure, EnclosureBuilder};
use crate::domain::orientation::{MotionSample, OrientationGravityMapper, OrientationSample};
use crate::domain::spawn::{MaterialHandle, SpawnScheduler, SpawnState};
use crate::domain::viewport::{OrthoFrame, ViewportFitter};
use crate::physics_adapter::PhysicsWorldAdapter;
use crate::rigid_body::Vec3;
use crate::rigid_body_system::RigidBodySystem;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "events/events.rs"]
mod events;
#[path = "timer/timer.rs"]
mod timer;
#[path = "commands/commands.rs"]
mod commands;
#[path = "rigid/rigid.rs"]
mod rigid;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use events::{EventChannel, SimEvent};
pub use facade::World;
pub use perf_stats::PerfStats;
pub use rigid::{BodyArena, BodyRecord};
pub use timer::{SpawnTimer, MAX_CATCH_UP_TICKS};

use perf_timer::PerfTimer;

/// Floats per body in the render transform buffer: x, y, z, radius
pub const TRANSFORM_STRIDE: usize = 4;

/// The simulation context
pub struct WorldCore<P: PhysicsWorldAdapter = RigidBodySystem> {
    config: SandboxConfig,
    mapper: OrientationGravityMapper,
    fitter: ViewportFitter,
    enclosure_builder: EnclosureBuilder,
    scheduler: SpawnScheduler,

    // Scene (set once by setup_scene)
    physics: Option<P>,
    frame: Option<OrthoFrame>,
    enclosure: Option<Enclosure>,
    bodies: BodyArena,

    // Event sources
    events: EventChannel,
    timer: SpawnTimer,

    // State
    gravity: Vec3,
    rng: XorShift32,
    torn_down: bool,
    frame_count: u64,

    // Render extraction
    transforms: Vec<f32>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore<RigidBodySystem> {
    /// Create a world with the built-in physics engine
    pub fn new(config: SandboxConfig) -> Self {
        init::create_world_core(config)
    }

    pub fn from_config_json(json: &str) -> Result<Self, String> {
        let config = SandboxConfig::from_json(json)?;
        Ok(Self::new(config))
    }

    /// Fit the camera to a `width` x `height` surface, build the enclosure and
    /// create the physics world.
    pub fn setup_scene(&mut self, width: f32, height: f32) -> Result<(), String> {
        let physics = RigidBodySystem::from_config(&self.config.physics);
        self.setup_scene_with(width, height, physics)
    }
}

impl<P: PhysicsWorldAdapter> WorldCore<P> {
    /// Create a world that will drive a caller-supplied physics engine
    pub fn with_physics_engine(config: SandboxConfig) -> Self {
        init::create_world_core(config)
    }

    /// Same as `setup_scene`, with a caller-supplied physics world.
    pub fn setup_scene_with(&mut self, width: f32, height: f32, physics: P) -> Result<(), String> {
        init::setup_scene(self, width, height, physics)
    }

    pub fn config(&self) -> &SandboxConfig {
        &self.config
    }

    /// Sender side of the event channel, for sensor and timer callbacks
    pub fn events(&self) -> EventChannel {
        self.events.clone()
    }

    // === SENSOR INPUT ===

    /// Replace gravity from a device orientation sample (degrees)
    pub fn handle_orientation(&mut self, sample: OrientationSample) {
        self.events.push(SimEvent::Orientation(sample));
        self.dispatch();
    }

    /// Replace gravity from a device motion sample (m/s²)
    pub fn handle_motion(&mut self, sample: MotionSample) {
        self.events.push(SimEvent::Motion(sample));
        self.dispatch();
    }

    // === SPAWNING ===

    /// Start the spawn scheduler with the configured count and interval.
    /// Returns false if spawning already started or the session ended.
    pub fn start_spawning(&mut self) -> bool {
        commands::start_spawning(self)
    }

    /// Deliver one spawn timer tick
    pub fn spawn_tick(&mut self) {
        self.events.push(SimEvent::SpawnTick);
        self.dispatch();
    }

    /// Advance the frame-driven spawn timer by `dt_ms` and apply due ticks
    pub fn advance(&mut self, dt_ms: f64) {
        commands::advance(self, dt_ms);
    }

    pub fn set_spawn_material(&mut self, material: Option<MaterialHandle>) {
        self.scheduler.set_material(material);
    }

    /// Apply every queued event in arrival order
    pub fn dispatch(&mut self) -> usize {
        commands::dispatch(self)
    }

    // === FRAME ===

    /// One rendered frame: drain events, step physics, refresh transforms
    pub fn step(&mut self, dt_seconds: f32) {
        step::step(self, dt_seconds);
    }

    /// End the session: drop physics, cancel the timer, absorb later events
    pub fn teardown(&mut self) {
        commands::teardown(self);
    }

    // === STATE ===

    pub fn is_initialized(&self) -> bool {
        self.physics.is_some()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Gravity last pushed into the physics world
    pub fn gravity(&self) -> Vec3 {
        self.gravity
    }

    pub fn physics(&self) -> Option<&P> {
        self.physics.as_ref()
    }

    pub fn frame(&self) -> Option<&OrthoFrame> {
        self.frame.as_ref()
    }

    pub fn enclosure(&self) -> Option<&Enclosure> {
        self.enclosure.as_ref()
    }

    pub fn bodies(&self) -> &BodyArena {
        &self.bodies
    }

    pub fn spawned_count(&self) -> u32 {
        self.bodies.len() as u32
    }

    pub fn spawn_state(&self) -> SpawnState {
        self.scheduler.state()
    }

    pub fn spawn_timer(&self) -> &SpawnTimer {
        &self.timer
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn dynamic_body_count(&self) -> usize {
        self.physics.as_ref().map_or(0, |p| p.dynamic_body_count())
    }

    pub fn static_body_count(&self) -> usize {
        self.physics.as_ref().map_or(0, |p| p.static_body_count())
    }

    // === RENDER EXTRACTION ===

    /// Packed `[x, y, z, radius]` per spawned body, in id order
    pub fn transforms(&self) -> &[f32] {
        &self.transforms
    }

    pub fn transforms_ptr(&self) -> *const f32 {
        self.transforms.as_ptr()
    }

    pub fn transforms_len(&self) -> usize {
        self.transforms.len()
    }

    pub fn enclosure_json(&self) -> String {
        render_extract::enclosure_json(self)
    }

    pub fn frame_json(&self) -> String {
        render_extract::frame_json(self)
    }

    pub fn bodies_json(&self) -> String {
        render_extract::bodies_json(self)
    }

    // === PERF ===

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (timings zero when perf disabled; event counters always run)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
