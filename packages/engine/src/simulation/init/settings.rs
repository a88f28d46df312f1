use super::perf_stats::PerfStats;
use super::BackdropCore;

pub(super) fn enable_perf_metrics(core: &mut BackdropCore, enabled: bool) {
    core.perf_enabled = enabled;
    if !enabled {
        core.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(core: &BackdropCore) -> PerfStats {
    core.perf_stats.clone()
}

pub(super) fn set_gravity(core: &mut BackdropCore, gravity_y: f32) {
    if !gravity_y.is_finite() {
        return;
    }
    core.config.gravity_y = gravity_y;
    if let Some(world) = core.world.as_mut() {
        world.set_gravity(gravity_y);
    }
}
