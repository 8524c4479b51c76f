//! RigidBody - A solid body that moves as a unit
//!
//! Bodies are either dynamic spheres (spawned into the enclosure) or
//! static boxes (the enclosure walls). Positions are body centers in world units.

mod vec3;
mod body;

pub use vec3::Vec3;
pub use body::{BodyShape, RigidBody};
