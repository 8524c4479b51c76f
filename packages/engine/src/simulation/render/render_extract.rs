use serde::Serialize;

use crate::domain::enclosure::Wall;
use crate::domain::viewport::OrthoFrame;
use crate::physics_adapter::PhysicsWorldAdapter;

use super::{BodyRecord, WorldCore, TRANSFORM_STRIDE};

/// Repack `[x, y, z, radius]` for every spawned body (id order).
/// The buffer keeps its allocation between frames.
pub(super) fn extract_transforms<P: PhysicsWorldAdapter>(world: &mut WorldCore<P>) {
    world.transforms.clear();
    let Some(physics) = world.physics.as_ref() else {
        return;
    };

    world.transforms.reserve(world.bodies.len() * TRANSFORM_STRIDE);

    for record in world.bodies.records() {
        let pos = physics.position(record.handle).unwrap_or(record.body.position);
        world.transforms.extend_from_slice(&[pos.x, pos.y, pos.z, record.body.diameter * 0.5]);
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EnclosureExport<'a> {
    frame: &'a OrthoFrame,
    walls: &'a [Wall],
}

/// Walls for the renderer to build meshes from; `null` before setup.
pub(super) fn enclosure_json<P: PhysicsWorldAdapter>(world: &WorldCore<P>) -> String {
    let Some(enclosure) = world.enclosure.as_ref() else {
        return "null".to_string();
    };
    let out = EnclosureExport {
        frame: enclosure.frame(),
        walls: enclosure.walls(),
    };
    serde_json::to_string(&out).unwrap_or_else(|_| "null".to_string())
}

/// Camera extents for the renderer's orthographic camera; `null` before setup.
pub(super) fn frame_json<P: PhysicsWorldAdapter>(world: &WorldCore<P>) -> String {
    match world.frame.as_ref() {
        Some(frame) => serde_json::to_string(frame).unwrap_or_else(|_| "null".to_string()),
        None => "null".to_string(),
    }
}

/// Spawn records (id, size, mass, material, physics handle) for mesh creation.
pub(super) fn bodies_json<P: PhysicsWorldAdapter>(world: &WorldCore<P>) -> String {
    let records: Vec<&BodyRecord> = world.bodies.iter().collect();
    serde_json::to_string(&records).unwrap_or_else(|_| "[]".to_string())
}
