use crate::physics_adapter::PhysicsWorldAdapter;

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn enable_perf_metrics<P: PhysicsWorldAdapter>(world: &mut WorldCore<P>, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset_gauges();
    }
}

pub(super) fn get_perf_stats<P: PhysicsWorldAdapter>(world: &WorldCore<P>) -> PerfStats {
    world.perf_stats.clone()
}
