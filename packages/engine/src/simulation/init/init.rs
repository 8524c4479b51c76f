use crate::core::utils::XorShift32;
use crate::domain::config::{SandboxConfig, DEFAULT_SEED};
use crate::domain::enclosure::EnclosureBuilder;
use crate::domain::orientation::OrientationGravityMapper;
use crate::domain::spawn::SpawnScheduler;
use crate::domain::viewport::ViewportFitter;
use crate::physics_adapter::PhysicsWorldAdapter;

use super::perf_stats::PerfStats;
use super::{BodyArena, EventChannel, SpawnTimer, WorldCore};

pub(super) fn create_world_core<P: PhysicsWorldAdapter>(config: SandboxConfig) -> WorldCore<P> {
    WorldCore {
        mapper: OrientationGravityMapper::from_config(&config.gravity),
        fitter: ViewportFitter::new(config.world_width),
        enclosure_builder: EnclosureBuilder::new(config.enclosure.clone()),
        scheduler: SpawnScheduler::new(config.spawn.clone()),
        physics: None,
        frame: None,
        enclosure: None,
        bodies: BodyArena::new(),
        events: EventChannel::new(),
        timer: SpawnTimer::new(config.spawn.interval_ms),
        gravity: config.gravity.initial,
        rng: XorShift32::new(config.seed.unwrap_or(DEFAULT_SEED)),
        torn_down: false,
        frame_count: 0,
        transforms: Vec::with_capacity(config.spawn.target_count as usize * super::TRANSFORM_STRIDE),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        config,
    }
}

pub(super) fn setup_scene<P: PhysicsWorldAdapter>(
    world: &mut WorldCore<P>,
    width: f32,
    height: f32,
    mut physics: P,
) -> Result<(), String> {
    if world.torn_down {
        return Err("session has been torn down".to_string());
    }
    if world.physics.is_some() {
        return Err("scene is already set up".to_string());
    }

    let frame = world.fitter.fit(width, height);
    if frame.is_degenerate() {
        let message = format!(
            "surface is {}x{}; attach the canvas before setting up the scene",
            width, height
        );
        crate::console_warn!("tiltbox: {}", message);
        return Err(message);
    }

    physics.set_gravity(world.config.gravity.initial);
    world.gravity = world.config.gravity.initial;

    let enclosure = world.enclosure_builder.build(&frame);
    for wall in enclosure.walls() {
        physics.create_static_body(wall.shape(), wall.restitution, wall.center);
    }

    crate::console_log!(
        "tiltbox: scene {}x{} px, frame [{:.2}, {:.2}] x [{:.2}, {:.2}], {} walls",
        width,
        height,
        frame.left,
        frame.right,
        frame.bottom,
        frame.top,
        enclosure.walls().len()
    );

    world.frame = Some(frame);
    world.enclosure = Some(enclosure);
    world.physics = Some(physics);

    if world.config.spawn.auto_start {
        super::commands::start_spawning(world);
    }
    Ok(())
}
