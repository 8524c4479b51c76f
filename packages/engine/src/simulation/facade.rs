use wasm_bindgen::prelude::*;

use crate::domain::orientation::{MotionSample, OrientationSample};
use crate::domain::spawn::MaterialHandle;

#[cfg(target_arch = "wasm32")]
use crate::api::{IntervalTimer, SensorKind, SensorSubscription};
#[cfg(target_arch = "wasm32")]
use crate::domain::spawn::SpawnState;

use super::perf_stats::PerfStats;
use super::{WorldCore, TRANSFORM_STRIDE};

/// Where the renderer finds the transform buffer in wasm memory.
/// Re-read after every `step`: the buffer may move when it grows.
#[wasm_bindgen]
pub struct RenderLayout {
    transforms_ptr: u32,
    transforms_len_elements: u32,
    transforms_len_bytes: u32,
    stride: u32,
}

#[wasm_bindgen]
impl RenderLayout {
    #[wasm_bindgen(getter)]
    pub fn transforms_ptr(&self) -> u32 { self.transforms_ptr }
    #[wasm_bindgen(getter)]
    pub fn transforms_len_elements(&self) -> u32 { self.transforms_len_elements }
    #[wasm_bindgen(getter)]
    pub fn transforms_len_bytes(&self) -> u32 { self.transforms_len_bytes }
    #[wasm_bindgen(getter)]
    pub fn stride(&self) -> u32 { self.stride }
}

/// The tilt sandbox, as seen from JavaScript
#[wasm_bindgen]
pub struct World {
    core: WorldCore,
    #[cfg(target_arch = "wasm32")]
    sensors: Vec<SensorSubscription>,
    #[cfg(target_arch = "wasm32")]
    interval: Option<IntervalTimer>,
}

impl World {
    fn from_core(core: WorldCore) -> Self {
        Self {
            core,
            #[cfg(target_arch = "wasm32")]
            sensors: Vec::new(),
            #[cfg(target_arch = "wasm32")]
            interval: None,
        }
    }

    pub fn core(&self) -> &WorldCore {
        &self.core
    }

    /// The browser interval has nothing left to do once spawning completed.
    fn release_finished_timer(&mut self) {
        #[cfg(target_arch = "wasm32")]
        if self.interval.is_some() && self.core.spawn_state() == SpawnState::Completed {
            self.interval = None;
        }
    }
}

#[wasm_bindgen]
impl World {
    /// Create a session with the default configuration
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::from_core(WorldCore::new(Default::default()))
    }

    /// Create a session from a JSON config (camelCase keys, all optional)
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config_json(json: String) -> Result<World, JsValue> {
        let core = WorldCore::from_config_json(&json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self::from_core(core))
    }

    /// Fit the camera to the surface, build the walls, start spawning
    pub fn setup_scene(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        self.core
            .setup_scene(width, height)
            .map_err(|e| JsValue::from_str(&e))
    }

    // === SENSORS ===

    /// Apply a `deviceorientation` reading (degrees)
    pub fn handle_orientation(&mut self, alpha: f32, beta: f32, gamma: f32) {
        self.core.handle_orientation(OrientationSample::new(alpha, beta, gamma));
    }

    /// Apply a `devicemotion` reading (`accelerationIncludingGravity`)
    pub fn handle_motion(&mut self, x: f32, y: f32, z: f32) {
        self.core.handle_motion(MotionSample::new(x, y, z));
    }

    // === SPAWNING ===

    pub fn start_spawning(&mut self) -> bool {
        self.core.start_spawning()
    }

    pub fn spawn_tick(&mut self) {
        self.core.spawn_tick();
        self.release_finished_timer();
    }

    /// Drive the spawn timer from the frame clock instead of `setInterval`
    pub fn advance(&mut self, dt_ms: f64) {
        self.core.advance(dt_ms);
        self.release_finished_timer();
    }

    /// Tag spawned bodies with a renderer material id (negative clears it)
    pub fn set_spawn_material(&mut self, material: i32) {
        let handle = u32::try_from(material).ok().map(MaterialHandle);
        self.core.set_spawn_material(handle);
    }

    // === FRAME ===

    /// One rendered frame
    pub fn step(&mut self, dt_seconds: f32) {
        self.core.step(dt_seconds);
        self.release_finished_timer();
    }

    /// End the session. Listeners and timers are released; later calls are no-ops.
    pub fn teardown(&mut self) {
        #[cfg(target_arch = "wasm32")]
        {
            self.sensors.clear();
            self.interval = None;
        }
        self.core.teardown();
    }

    // === STATE ===

    #[wasm_bindgen(getter)]
    pub fn gravity_x(&self) -> f32 { self.core.gravity().x }

    #[wasm_bindgen(getter)]
    pub fn gravity_y(&self) -> f32 { self.core.gravity().y }

    #[wasm_bindgen(getter)]
    pub fn gravity_z(&self) -> f32 { self.core.gravity().z }

    #[wasm_bindgen(getter)]
    pub fn spawned_count(&self) -> u32 { self.core.spawned_count() }

    #[wasm_bindgen(getter)]
    pub fn spawn_state(&self) -> String { self.core.spawn_state().as_str().to_string() }

    #[wasm_bindgen(getter)]
    pub fn is_initialized(&self) -> bool { self.core.is_initialized() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame_count() }

    pub fn dynamic_body_count(&self) -> usize {
        self.core.dynamic_body_count()
    }

    pub fn static_body_count(&self) -> usize {
        self.core.static_body_count()
    }

    // === RENDER ===

    /// `{ frame, walls }` for building the wall meshes, `null` before setup
    pub fn enclosure_json(&self) -> String {
        self.core.enclosure_json()
    }

    pub fn frame_json(&self) -> String {
        self.core.frame_json()
    }

    /// Spawn records (id, diameter, segments, material) for mesh creation
    pub fn bodies_json(&self) -> String {
        self.core.bodies_json()
    }

    /// Pointer to packed `[x, y, z, radius]` per body
    pub fn transforms_ptr(&self) -> *const f32 {
        self.core.transforms_ptr()
    }

    pub fn transforms_len(&self) -> usize {
        self.core.transforms_len()
    }

    pub fn render_layout(&self) -> RenderLayout {
        let len = self.core.transforms_len();
        RenderLayout {
            transforms_ptr: self.core.transforms_ptr() as u32,
            transforms_len_elements: len as u32,
            transforms_len_bytes: (len * std::mem::size_of::<f32>()) as u32,
            stride: TRANSFORM_STRIDE as u32,
        }
    }

    // === PERF ===

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (timings zero when perf disabled; event counters always run)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl World {
    /// `setup_scene` sized from the canvas client rect
    pub fn setup_from_canvas(&mut self, canvas: &web_sys::HtmlCanvasElement) -> Result<(), JsValue> {
        let (width, height) = crate::api::canvas_client_size(canvas);
        self.setup_scene(width, height)
    }

    /// Subscribe to `deviceorientation` (and `devicemotion` if asked).
    /// Readings are queued and applied on the next `step`.
    pub fn listen_to_sensors(&mut self, include_motion: bool) -> Result<(), JsValue> {
        if self.core.is_torn_down() || !self.sensors.is_empty() {
            return Ok(());
        }
        let events = self.core.events();
        self.sensors.push(SensorSubscription::subscribe(SensorKind::Orientation, events.clone())?);
        if include_motion {
            self.sensors.push(SensorSubscription::subscribe(SensorKind::Motion, events)?);
        }
        Ok(())
    }

    /// Spawn on a browser `setInterval` instead of `advance`
    pub fn start_interval_timer(&mut self) -> Result<(), JsValue> {
        if self.interval.is_some() || self.core.spawn_state() != SpawnState::Running {
            return Ok(());
        }
        let interval_ms = self.core.config().spawn.interval_ms;
        self.interval = Some(IntervalTimer::start(self.core.events(), interval_ms)?);
        Ok(())
    }
}
