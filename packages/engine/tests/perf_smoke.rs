use tiltbox_engine::World;

#[test]
fn perf_smoke_step() {
    let mut world = World::new();
    world.setup_scene(800.0, 600.0).expect("scene");
    world.enable_perf_metrics(true);
    for _ in 0..200 {
        world.spawn_tick();
    }
    for _ in 0..120 {
        world.step(1.0 / 60.0);
    }
    let stats = world.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.spawned(), 200);
    assert_eq!(stats.static_bodies(), 5);
    assert!(stats.contacts() > 0);
}
