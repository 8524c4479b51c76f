#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::config::PhysicsConfig;
use crate::physics_adapter::{BodyHandle, PhysicsWorldAdapter};
use crate::rigid_body::{BodyShape, RigidBody, Vec3};

use super::collision::{contact, resolve, resolve_against_static};

/// Earth gravity pointing down the screen
pub const DEFAULT_GRAVITY: Vec3 = Vec3::new(0.0, -9.81, 0.0);

/// Longest frame the system will simulate; a longer hitch runs in slow motion.
pub const MAX_FRAME_SECONDS: f32 = 0.1;
/// Substep length ceiling (seconds)
pub const MAX_SUBSTEP_SECONDS: f32 = 1.0 / 120.0;
/// Most substeps one `update` may run
pub const MAX_SUBSTEPS: u32 = 32;
/// Farthest a body may travel in one substep. Half the thinnest wall plus a
/// body radius must stay above this or bodies tunnel.
const MAX_TRAVEL_PER_SUBSTEP: f32 = 0.5;

/// Manages all rigid bodies in the simulation
pub struct RigidBodySystem {
    statics: Vec<RigidBody>,
    dynamics: Vec<RigidBody>,
    gravity: Vec3,
    max_speed: f32,
    substeps: u32,
    contacts_last_step: u32,
}

impl RigidBodySystem {
    pub fn new() -> Self {
        Self::with_settings(60.0, 2)
    }

    pub fn with_settings(max_speed: f32, substeps: u32) -> Self {
        Self {
            statics: Vec::new(),
            dynamics: Vec::new(),
            gravity: DEFAULT_GRAVITY,
            max_speed: max_speed.max(0.1),
            substeps: substeps.max(1),
            contacts_last_step: 0,
        }
    }

    pub fn from_config(config: &PhysicsConfig) -> Self {
        Self::with_settings(config.max_speed, config.substeps)
    }

    /// Add a body; static or dynamic is decided by its mass.
    pub fn add_body(&mut self, mut body: RigidBody) -> BodyHandle {
        body.active = true;
        if body.is_static() {
            let idx = self.statics.len() as u32;
            body.id = idx;
            self.statics.push(body);
            BodyHandle::Static(idx)
        } else {
            let idx = self.dynamics.len() as u32;
            body.id = idx;
            self.dynamics.push(body);
            BodyHandle::Dynamic(idx)
        }
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&RigidBody> {
        match handle {
            BodyHandle::Static(i) => self.statics.get(i as usize),
            BodyHandle::Dynamic(i) => self.dynamics.get(i as usize),
        }
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut RigidBody> {
        match handle {
            BodyHandle::Static(i) => self.statics.get_mut(i as usize),
            BodyHandle::Dynamic(i) => self.dynamics.get_mut(i as usize),
        }
    }

    /// Remove all bodies. Handles issued before this call become invalid.
    pub fn clear(&mut self) {
        self.statics.clear();
        self.dynamics.clear();
        self.contacts_last_step = 0;
    }

    pub fn body_count(&self) -> usize {
        self.statics.len() + self.dynamics.len()
    }

    /// Substep count and length for a frame of `dt` seconds.
    ///
    /// `dt` is clamped to [`MAX_FRAME_SECONDS`]; each substep is short enough
    /// that a body at `max_speed` moves at most half a unit.
    pub fn substep_plan(&self, dt: f32) -> (u32, f32) {
        let max_h = MAX_SUBSTEP_SECONDS.min(MAX_TRAVEL_PER_SUBSTEP / self.max_speed);
        let dt = dt.min(MAX_FRAME_SECONDS).min(max_h * MAX_SUBSTEPS as f32);
        // Slack keeps float noise from adding a substep when dt is an exact multiple.
        let count = ((dt / max_h - 1e-4).ceil() as u32).clamp(self.substeps, MAX_SUBSTEPS.max(self.substeps));
        (count, dt / count as f32)
    }

    /// Main update loop, called once per rendered frame.
    pub fn update(&mut self, dt: f32) {
        self.contacts_last_step = 0;
        if !(dt > 0.0) || !dt.is_finite() {
            return;
        }

        let (count, h) = self.substep_plan(dt);
        for _ in 0..count {
            self.integrate(h);
            self.contacts_last_step += self.solve_contacts();
        }
    }

    fn integrate(&mut self, h: f32) {
        let gravity = self.gravity;
        let max_speed = self.max_speed;

        #[cfg(feature = "parallel")]
        {
            self.dynamics
                .par_iter_mut()
                .for_each(|body| integrate_body(body, gravity, max_speed, h));
        }
        #[cfg(not(feature = "parallel"))]
        {
            for body in self.dynamics.iter_mut() {
                integrate_body(body, gravity, max_speed, h);
            }
        }
    }

    fn solve_contacts(&mut self) -> u32 {
        let mut count = 0;

        for body in self.dynamics.iter_mut().filter(|b| b.active) {
            for wall in self.statics.iter() {
                if let Some(c) = contact(body, wall) {
                    resolve_against_static(body, wall, &c);
                    count += 1;
                }
            }
        }

        // Pairwise sphere contacts; body counts stay in the low hundreds.
        let n = self.dynamics.len();
        for i in 0..n {
            let (head, tail) = self.dynamics.split_at_mut(i + 1);
            let a = &mut head[i];
            if !a.active {
                continue;
            }
            for b in tail.iter_mut().filter(|b| b.active) {
                if let Some(c) = contact(a, b) {
                    resolve(a, b, &c);
                    count += 1;
                }
            }
        }

        count
    }
}

#[inline]
fn integrate_body(body: &mut RigidBody, gravity: Vec3, max_speed: f32, h: f32) {
    if !body.active {
        return;
    }
    body.velocity += gravity * h;
    body.velocity = body.velocity.clamp_length(max_speed);
    body.pos += body.velocity * h;
}

impl Default for RigidBodySystem {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsWorldAdapter for RigidBodySystem {
    fn set_gravity(&mut self, gravity: Vec3) {
        self.gravity = gravity;
    }

    fn gravity(&self) -> Vec3 {
        self.gravity
    }

    fn create_body(&mut self, shape: BodyShape, mass: f32, restitution: f32, position: Vec3) -> BodyHandle {
        self.add_body(RigidBody::new_dynamic(position, shape, mass, restitution, 0))
    }

    fn create_static_body(&mut self, shape: BodyShape, restitution: f32, position: Vec3) -> BodyHandle {
        self.add_body(RigidBody::new_static(position, shape, restitution, 0))
    }

    fn step(&mut self, dt: f32) {
        self.update(dt);
    }

    fn position(&self, handle: BodyHandle) -> Option<Vec3> {
        self.body(handle).map(|b| b.pos)
    }

    fn dynamic_body_count(&self) -> usize {
        self.dynamics.len()
    }

    fn static_body_count(&self) -> usize {
        self.statics.len()
    }

    fn last_contact_count(&self) -> u32 {
        self.contacts_last_step
    }
}
