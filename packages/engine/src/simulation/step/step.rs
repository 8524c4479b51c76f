use crate::physics_adapter::PhysicsWorldAdapter;

use super::{render_extract, PerfTimer, WorldCore};

pub(super) fn step<P: PhysicsWorldAdapter>(world: &mut WorldCore<P>, dt_seconds: f32) {
    let perf_on = world.perf_enabled;
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // Sensor samples and timer ticks that arrived since the last frame
    super::commands::dispatch(world);

    let Some(physics) = world.physics.as_mut() else {
        return;
    };

    // === RIGID BODY PHYSICS ===
    if perf_on {
        let t0 = PerfTimer::start();
        physics.step(dt_seconds);
        world.perf_stats.rigid_ms = t0.elapsed_ms();
    } else {
        physics.step(dt_seconds);
    }

    render_extract::extract_transforms(world);
    world.frame_count += 1;

    if let Some(t0) = step_start {
        let stats = &mut world.perf_stats;
        stats.step_ms = t0.elapsed_ms();
        if let Some(physics) = world.physics.as_ref() {
            stats.dynamic_bodies = physics.dynamic_body_count() as u32;
            stats.static_bodies = physics.static_body_count() as u32;
            stats.contacts = physics.last_contact_count();
        }
        stats.spawned = world.bodies.len() as u32;
    }
}
