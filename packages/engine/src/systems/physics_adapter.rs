//! PhysicsWorldAdapter - the contract between the sandbox core and a physics engine
//!
//! The core only ever sets gravity and registers bodies. Stepping belongs to the
//! host's frame loop, which calls [`PhysicsWorldAdapter::step`] once per rendered frame.

use serde::Serialize;

use crate::rigid_body::{BodyShape, Vec3};

/// Opaque reference to a body registered with a physics world
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "index", rename_all = "camelCase")]
pub enum BodyHandle {
    Static(u32),
    Dynamic(u32),
}

pub trait PhysicsWorldAdapter {
    /// Replace the world gravity (m/s²). Takes effect on the next step.
    fn set_gravity(&mut self, gravity: Vec3);

    fn gravity(&self) -> Vec3;

    /// Register a mass-driven body
    fn create_body(&mut self, shape: BodyShape, mass: f32, restitution: f32, position: Vec3) -> BodyHandle;

    /// Register an immovable body (infinite mass)
    fn create_static_body(&mut self, shape: BodyShape, restitution: f32, position: Vec3) -> BodyHandle;

    /// Advance the simulation by `dt` seconds
    fn step(&mut self, dt: f32);

    /// Current world position of a body, `None` for unknown handles
    fn position(&self, handle: BodyHandle) -> Option<Vec3>;

    fn dynamic_body_count(&self) -> usize;

    fn static_body_count(&self) -> usize;

    /// Contacts resolved during the last step (0 if the engine does not track them)
    fn last_contact_count(&self) -> u32 {
        0
    }
}
