use serde::Serialize;

use crate::domain::spawn::SpawnedBody;
use crate::physics_adapter::{BodyHandle, PhysicsWorldAdapter};

/// A spawned body and where the physics world keeps it
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyRecord {
    pub body: SpawnedBody,
    pub handle: BodyHandle,
}

/// Spawned bodies indexed by their id. Grows only; ids are dense from 0.
#[derive(Clone, Debug, Default)]
pub struct BodyArena {
    records: Vec<BodyRecord>,
}

impl BodyArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) fn push(&mut self, record: BodyRecord) {
        debug_assert_eq!(record.body.id as usize, self.records.len());
        self.records.push(record);
    }

    pub fn get(&self, id: u32) -> Option<&BodyRecord> {
        self.records.get(id as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BodyRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(super) fn records(&self) -> &[BodyRecord] {
        &self.records
    }
}

/// Hand a freshly scheduled body to the physics world and remember it.
pub(super) fn register_spawned_body<P: PhysicsWorldAdapter>(
    physics: &mut P,
    bodies: &mut BodyArena,
    body: SpawnedBody,
) -> BodyHandle {
    let handle = physics.create_body(body.shape, body.mass, body.restitution, body.position);
    bodies.push(BodyRecord { body, handle });
    handle
}
