//! RigidBodySystem - Minimal impulse-based rigid bodies for the tilt sandbox
//!
//! Current behavior:
//! - Dynamic spheres integrate gravity with semi-implicit Euler. Frames are clamped
//!   and split into substeps short enough that nothing tunnels through a wall.
//! - Contacts: sphere vs static box, sphere vs sphere (no rotation, no friction).
//! - Restitution is averaged between the two bodies; slow impacts do not bounce.

mod collision;
mod system;

pub use system::{RigidBodySystem, DEFAULT_GRAVITY, MAX_FRAME_SECONDS, MAX_SUBSTEPS, MAX_SUBSTEP_SECONDS};
