use tiltbox_engine::{SandboxConfig, SpawnState, World, WorldCore};

#[test]
fn full_session_through_the_facade() {
    let mut world = World::with_config_json(
        r#"{ "seed": 11, "spawn": { "targetCount": 12, "intervalMs": 50 } }"#.to_string(),
    )
    .expect("config");
    assert!(!world.is_initialized());
    assert_eq!(world.enclosure_json(), "null");

    world.setup_scene(390.0, 844.0).expect("scene");
    assert!(world.is_initialized());
    assert_eq!(world.spawn_state(), "running");
    assert_eq!(world.static_body_count(), 5);

    // One second of frames at 60 Hz is enough for 12 ticks at 50 ms
    for _ in 0..60 {
        world.advance(1000.0 / 60.0);
        world.step(1.0 / 60.0);
    }
    assert_eq!(world.spawned_count(), 12);
    assert_eq!(world.spawn_state(), "completed");
    assert_eq!(world.transforms_len(), 12 * 4);

    let layout = world.render_layout();
    assert_eq!(layout.stride(), 4);
    assert_eq!(layout.transforms_len_bytes(), 12 * 4 * 4);

    world.handle_orientation(0.0, 0.0, 14.348622);
    assert!((world.gravity_x() + 2.0).abs() < 1e-5);
    assert_eq!(world.gravity_z(), 0.0);

    world.teardown();
    assert!(!world.is_initialized());
    world.handle_orientation(0.0, 30.0, 30.0);
    world.step(1.0 / 60.0);
    assert!((world.gravity_x() + 2.0).abs() < 1e-5);
    assert_eq!(world.spawned_count(), 12);
}

#[test]
fn bad_config_is_an_error() {
    assert!(WorldCore::from_config_json("{ \"spawn\": 3 }").is_err());
    assert!(WorldCore::from_config_json("{}").is_ok());
}

#[test]
fn compact_layout_for_small_screens() {
    let mut core = WorldCore::new(SandboxConfig::compact());
    core.setup_scene(390.0, 844.0).expect("scene");
    let frame = *core.frame().expect("frame");
    assert_eq!(frame.visible_width(), 37.0);
    assert!(frame.visible_height() > 37.0);

    for _ in 0..100 {
        core.spawn_tick();
    }
    assert_eq!(core.spawned_count(), 100);
    assert_eq!(core.spawn_state(), SpawnState::Completed);
}

#[test]
fn tilting_moves_the_pile() {
    let mut core = WorldCore::new(SandboxConfig {
        seed: Some(3),
        ..SandboxConfig::default()
    });
    core.setup_scene(800.0, 600.0).expect("scene");
    for _ in 0..20 {
        core.spawn_tick();
    }
    for _ in 0..300 {
        core.step(1.0 / 60.0);
    }
    let mean_x = |core: &WorldCore| {
        let xs: Vec<f32> = core.transforms().chunks(4).map(|c| c[0]).collect();
        xs.iter().sum::<f32>() / xs.len() as f32
    };
    let before = mean_x(&core);

    // Upright and rolled right: bodies keep falling and slide toward +x
    core.handle_orientation(tiltbox_engine::OrientationSample::new(0.0, 90.0, -40.0));
    for _ in 0..300 {
        core.step(1.0 / 60.0);
    }
    assert!(core.gravity().x > 0.0);
    assert!(mean_x(&core) > before + 5.0);
}
