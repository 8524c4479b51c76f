//! Tiltbox Engine - tilt-controlled rigid-body sandbox in WASM
//!
//! Spheres rain into an invisible box fitted to the canvas; tilting the
//! device steers gravity.
//!
//! Architecture:
//! - core/          - logging macros, RNG
//! - domain/        - config, sensor mapping, viewport, enclosure, spawning
//! - systems/       - rigid bodies and the physics adapter seam
//! - simulation/    - the session (`WorldCore`) and its JS facade
//! - api/           - browser listeners and timers (wasm32 only)

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;
#[cfg(target_arch = "wasm32")]
pub mod api;

// Short paths used across the crate
pub use systems::physics_adapter;
pub use systems::rigid_body;
pub use systems::rigid_body_system;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(feature = "parallel")]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("tiltbox engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::config::SandboxConfig;
pub use domain::orientation::{MotionSample, OrientationSample};
pub use domain::spawn::SpawnState;
pub use simulation::{World, WorldCore};

/// Calibration constant exposed for the host's debug overlay
#[wasm_bindgen]
pub fn deg_to_physic() -> f32 {
    domain::orientation::DEG_TO_PHYSIC
}
