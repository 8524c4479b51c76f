//! Domain logic of the tilt sandbox, independent of any physics engine:
//! sensor-to-gravity mapping, camera fitting, enclosure geometry and spawning.

pub mod config;
pub mod enclosure;
pub mod orientation;
pub mod spawn;
pub mod viewport;

pub use config::SandboxConfig;
pub use enclosure::{Enclosure, EnclosureBuilder, Wall, WallKind};
pub use orientation::{MotionSample, OrientationGravityMapper, OrientationSample, DEG_TO_PHYSIC};
pub use spawn::{MaterialHandle, SpawnBounds, SpawnScheduler, SpawnState, SpawnedBody};
pub use viewport::{OrthoFrame, ViewportFitter};
