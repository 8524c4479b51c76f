use crate::physics_adapter::PhysicsWorldAdapter;
use crate::rigid_body::Vec3;

use super::rigid::register_spawned_body;
use super::{SimEvent, WorldCore};

pub(super) fn start_spawning<P: PhysicsWorldAdapter>(world: &mut WorldCore<P>) -> bool {
    if world.torn_down {
        return false;
    }
    let target = world.config.spawn.target_count;
    let interval = world.config.spawn.interval_ms;
    if !world.scheduler.start(target, interval) {
        return false;
    }
    if world.scheduler.is_completed() {
        world.timer.cancel();
    } else {
        world.timer.start(interval);
    }
    true
}

pub(super) fn advance<P: PhysicsWorldAdapter>(world: &mut WorldCore<P>, dt_ms: f64) {
    let due = world.timer.advance(dt_ms);
    for _ in 0..due {
        world.events.push(SimEvent::SpawnTick);
    }
    dispatch(world);
}

pub(super) fn dispatch<P: PhysicsWorldAdapter>(world: &mut WorldCore<P>) -> usize {
    let events = world.events.drain();
    let count = events.len();
    for event in events {
        match event {
            SimEvent::Orientation(sample) => {
                let gravity = world.mapper.map(&sample);
                apply_gravity(world, gravity);
            }
            SimEvent::Motion(sample) => {
                let gravity = world.mapper.map_motion(&sample);
                apply_gravity(world, gravity);
            }
            SimEvent::SpawnTick => spawn_one(world),
            SimEvent::Teardown => teardown(world),
        }
    }
    world.perf_stats.events_dispatched = world.perf_stats.events_dispatched.saturating_add(count as u32);
    count
}

/// Replace gravity; absorbed when there is no physics world (yet, or anymore).
fn apply_gravity<P: PhysicsWorldAdapter>(world: &mut WorldCore<P>, gravity: Vec3) {
    let Some(physics) = world.physics.as_mut() else {
        world.perf_stats.dropped_events = world.perf_stats.dropped_events.saturating_add(1);
        return;
    };
    physics.set_gravity(gravity);
    world.gravity = gravity;
    world.perf_stats.gravity_updates = world.perf_stats.gravity_updates.saturating_add(1);
}

fn spawn_one<P: PhysicsWorldAdapter>(world: &mut WorldCore<P>) {
    let (Some(physics), Some(enclosure)) = (world.physics.as_mut(), world.enclosure.as_ref()) else {
        world.perf_stats.dropped_events = world.perf_stats.dropped_events.saturating_add(1);
        return;
    };

    let spawn = &world.config.spawn;
    let bounds = enclosure.spawn_bounds(spawn.x_spread, spawn.y_jitter, spawn.diameter * 0.5);
    if let Some(body) = world.scheduler.tick(&bounds, &mut world.rng) {
        register_spawned_body(physics, &mut world.bodies, body);
    }

    if world.scheduler.is_completed() && world.timer.is_running() {
        world.timer.cancel();
        crate::console_log!("tiltbox: spawned {} bodies, timer released", world.bodies.len());
    }
}

pub(super) fn teardown<P: PhysicsWorldAdapter>(world: &mut WorldCore<P>) {
    if world.torn_down {
        return;
    }
    world.torn_down = true;
    world.scheduler.cancel();
    world.timer.cancel();
    world.physics = None;
    world.transforms.clear();
    // Anything still queued targets a world that no longer exists.
    world.events.clear();
    crate::console_log!("tiltbox: session torn down after {} frames", world.frame_count);
}
