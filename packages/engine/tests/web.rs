//! Browser smoke tests, run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use tiltbox_engine::World;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn sensors_and_interval_attach_and_release() {
    let mut world = World::new();
    world.setup_scene(800.0, 600.0).expect("scene");
    world.listen_to_sensors(true).expect("listeners");
    world.start_interval_timer().expect("interval");
    world.step(1.0 / 60.0);
    world.teardown();
    assert!(!world.is_initialized());
}

#[wasm_bindgen_test]
fn detached_canvas_is_rejected() {
    let document = web_sys::window().and_then(|w| w.document()).expect("document");
    let canvas = document
        .create_element("canvas")
        .expect("canvas")
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .expect("canvas element");
    let mut world = World::new();
    assert!(world.setup_from_canvas(&canvas).is_err());
}
