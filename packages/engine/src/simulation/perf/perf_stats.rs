use wasm_bindgen::prelude::*;

/// Per-session counters and last-step timings
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) rigid_ms: f64,
    pub(super) dynamic_bodies: u32,
    pub(super) static_bodies: u32,
    pub(super) contacts: u32,
    pub(super) spawned: u32,
    pub(super) events_dispatched: u32,
    pub(super) gravity_updates: u32,
    pub(super) dropped_events: u32,
}

impl PerfStats {
    /// Zero the timings and gauges. Event counters run whether or not perf
    /// metrics are enabled and are kept.
    pub(crate) fn reset_gauges(&mut self) {
        self.step_ms = 0.0;
        self.rigid_ms = 0.0;
        self.dynamic_bodies = 0;
        self.static_bodies = 0;
        self.contacts = 0;
        self.spawned = 0;
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn rigid_ms(&self) -> f64 { self.rigid_ms }
    #[wasm_bindgen(getter)]
    pub fn dynamic_bodies(&self) -> u32 { self.dynamic_bodies }
    #[wasm_bindgen(getter)]
    pub fn static_bodies(&self) -> u32 { self.static_bodies }
    #[wasm_bindgen(getter)]
    pub fn contacts(&self) -> u32 { self.contacts }
    #[wasm_bindgen(getter)]
    pub fn spawned(&self) -> u32 { self.spawned }
    /// Sensor samples and timer ticks applied, including absorbed ones
    #[wasm_bindgen(getter)]
    pub fn events_dispatched(&self) -> u32 { self.events_dispatched }
    #[wasm_bindgen(getter)]
    pub fn gravity_updates(&self) -> u32 { self.gravity_updates }
    /// Events that arrived with no physics world to apply them to
    #[wasm_bindgen(getter)]
    pub fn dropped_events(&self) -> u32 { self.dropped_events }
}
