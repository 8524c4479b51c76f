//! SpawnScheduler - drops one sphere per timer tick until the target count
//!
//! State machine: `Idle -> Running -> Completed`. Only `Running` creates
//! bodies; a tick that lands after completion (a timer that was not cancelled
//! in time) is a no-op.

use serde::Serialize;

use crate::core::utils::XorShift32;
use crate::domain::config::SpawnConfig;
use crate::rigid_body::{BodyShape, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SpawnState {
    Idle,
    Running,
    Completed,
}

impl SpawnState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpawnState::Idle => "idle",
            SpawnState::Running => "running",
            SpawnState::Completed => "completed",
        }
    }
}

/// Region spawned bodies are dropped into
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpawnBounds {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

/// Renderer-side material reference; the core only passes it through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct MaterialHandle(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpawnedBody {
    pub id: u32,
    pub shape: BodyShape,
    pub diameter: f32,
    /// Tessellation hint for the sphere mesh
    pub segments: u32,
    pub mass: f32,
    pub restitution: f32,
    pub position: Vec3,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<MaterialHandle>,
}

#[derive(Clone, Debug)]
pub struct SpawnScheduler {
    state: SpawnState,
    target_count: u32,
    interval_ms: u32,
    next_id: u32,
    template: SpawnConfig,
    material: Option<MaterialHandle>,
}

impl SpawnScheduler {
    pub fn new(template: SpawnConfig) -> Self {
        Self {
            state: SpawnState::Idle,
            target_count: template.target_count,
            interval_ms: template.interval_ms,
            next_id: 0,
            template,
            material: None,
        }
    }

    /// Begin spawning. Returns false if the scheduler already left `Idle`.
    pub fn start(&mut self, target_count: u32, interval_ms: u32) -> bool {
        if self.state != SpawnState::Idle {
            return false;
        }
        self.target_count = target_count;
        self.interval_ms = interval_ms.max(1);
        self.state = if target_count == 0 {
            SpawnState::Completed
        } else {
            SpawnState::Running
        };
        true
    }

    /// Stop for good (session teardown). Already spawned bodies stay.
    pub fn cancel(&mut self) {
        self.state = SpawnState::Completed;
    }

    pub fn set_material(&mut self, material: Option<MaterialHandle>) {
        self.material = material;
    }

    /// Create the next body, or `None` unless running.
    pub fn tick(&mut self, bounds: &SpawnBounds, rng: &mut XorShift32) -> Option<SpawnedBody> {
        if self.state != SpawnState::Running {
            return None;
        }

        let x = rng.uniform(bounds.x_min, bounds.x_max);
        let y = rng.uniform(bounds.y_min, bounds.y_max);
        let body = SpawnedBody {
            id: self.next_id,
            shape: BodyShape::sphere(self.template.diameter),
            diameter: self.template.diameter,
            segments: self.template.segments,
            mass: self.template.mass,
            restitution: self.template.restitution,
            position: Vec3::new(x, y, 0.0),
            material: self.material,
        };

        self.next_id += 1;
        if self.next_id >= self.target_count {
            self.state = SpawnState::Completed;
        }
        Some(body)
    }

    pub fn state(&self) -> SpawnState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SpawnState::Running
    }

    pub fn is_completed(&self) -> bool {
        self.state == SpawnState::Completed
    }

    pub fn spawned_count(&self) -> u32 {
        self.next_id
    }

    pub fn target_count(&self) -> u32 {
        self.target_count
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> SpawnBounds {
        SpawnBounds { x_min: -4.0, x_max: 4.0, y_min: 37.5, y_max: 47.5 }
    }

    #[test]
    fn idle_scheduler_spawns_nothing() {
        let mut scheduler = SpawnScheduler::new(SpawnConfig::default());
        let mut rng = XorShift32::new(1);
        assert!(scheduler.tick(&bounds(), &mut rng).is_none());
        assert_eq!(scheduler.spawned_count(), 0);
    }

    #[test]
    fn runs_to_completion_with_sequential_ids() {
        let mut scheduler = SpawnScheduler::new(SpawnConfig::default());
        let mut rng = XorShift32::new(99);
        assert!(scheduler.start(25, 100));

        let mut ids = Vec::new();
        while let Some(body) = scheduler.tick(&bounds(), &mut rng) {
            assert!(body.position.y >= 37.5);
            assert!(body.position.x >= -4.0 && body.position.x <= 4.0);
            assert_eq!(body.position.z, 0.0);
            assert_eq!(body.mass, 1.0);
            assert_eq!(body.restitution, 0.2);
            assert_eq!(body.shape, BodyShape::Sphere { radius: 1.0 });
            ids.push(body.id);
        }

        assert_eq!(ids, (0..25).collect::<Vec<_>>());
        assert_eq!(scheduler.state(), SpawnState::Completed);
    }

    #[test]
    fn completed_gate_blocks_late_ticks() {
        let mut scheduler = SpawnScheduler::new(SpawnConfig::default());
        let mut rng = XorShift32::new(3);
        scheduler.start(2, 100);
        assert!(scheduler.tick(&bounds(), &mut rng).is_some());
        assert!(scheduler.tick(&bounds(), &mut rng).is_some());
        for _ in 0..10 {
            assert!(scheduler.tick(&bounds(), &mut rng).is_none());
        }
        assert_eq!(scheduler.spawned_count(), 2);
    }

    #[test]
    fn start_only_from_idle() {
        let mut scheduler = SpawnScheduler::new(SpawnConfig::default());
        assert!(scheduler.start(5, 100));
        assert!(!scheduler.start(50, 10));
        assert_eq!(scheduler.target_count(), 5);
        assert_eq!(scheduler.interval_ms(), 100);
    }

    #[test]
    fn zero_target_completes_immediately() {
        let mut scheduler = SpawnScheduler::new(SpawnConfig::default());
        scheduler.start(0, 100);
        assert!(scheduler.is_completed());
        assert!(scheduler.tick(&bounds(), &mut XorShift32::new(1)).is_none());
    }

    #[test]
    fn cancel_stops_running_scheduler() {
        let mut scheduler = SpawnScheduler::new(SpawnConfig::default());
        let mut rng = XorShift32::new(5);
        scheduler.start(10, 100);
        scheduler.tick(&bounds(), &mut rng);
        scheduler.cancel();
        assert!(scheduler.tick(&bounds(), &mut rng).is_none());
        assert_eq!(scheduler.spawned_count(), 1);
    }

    #[test]
    fn material_is_passed_through() {
        let mut scheduler = SpawnScheduler::new(SpawnConfig::default());
        scheduler.set_material(Some(MaterialHandle(4)));
        scheduler.start(1, 100);
        let body = scheduler.tick(&bounds(), &mut XorShift32::new(8)).expect("one body");
        assert_eq!(body.material, Some(MaterialHandle(4)));
    }
}
