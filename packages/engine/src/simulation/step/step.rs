use crate::error::BackdropError;
use crate::spawner::SpawnPlan;

use super::perf_timer::PerfTimer;
use super::BackdropCore;

/// dt used for the very first frame, when there is no previous timestamp
const FIRST_FRAME_DT: f32 = 1.0 / 60.0;

/// One frame: start spawning if the gate just opened, release due batches,
/// push bodies near the pointer, step physics, snapshot for rendering.
pub(super) fn tick(core: &mut BackdropCore, now_ms: f64) -> Result<(), BackdropError> {
    let Some(world) = core.world.as_mut() else {
        log::warn!("tick after destroy ignored");
        return Err(BackdropError::Destroyed);
    };
    if !now_ms.is_finite() {
        return Ok(());
    }

    let dt = match core.last_tick_ms {
        Some(prev) => (((now_ms - prev) / 1000.0).max(0.0)) as f32,
        None => FIRST_FRAME_DT,
    };
    core.last_tick_ms = Some(now_ms);

    let perf_on = core.perf_enabled;
    if perf_on {
        core.perf_stats.reset();
    }
    let frame_timer = PerfTimer::start();

    // Spawning
    let t = PerfTimer::start();
    if core.gate.begin_active() {
        let plan = SpawnPlan::from_config(&core.config.spawn, core.config.spawn_region_width());
        core.spawner.start(plan);
    }
    let spawned = core.spawner.poll(world, &core.palette, now_ms);
    if perf_on {
        core.perf_stats.spawn_ms = t.elapsed_ms();
        core.perf_stats.spawned = spawned;
    }

    // Pointer forces land before the step that resolves them
    let t = PerfTimer::start();
    let pushed = core.force_field.apply(&mut core.pointer, world);
    if perf_on {
        core.perf_stats.force_ms = t.elapsed_ms();
        core.perf_stats.bodies_pushed = pushed;
    }

    let t = PerfTimer::start();
    world.step(dt);
    if perf_on {
        core.perf_stats.physics_ms = t.elapsed_ms();
        core.perf_stats.contacts = world.contacts_last_step();
        core.perf_stats.dt_ms = (dt.min(world.settings().max_dt_ms / 1000.0) * 1000.0) as f64;
    }

    core.frame += 1;
    let t = PerfTimer::start();
    core.render.capture(world, core.frame);
    if perf_on {
        core.perf_stats.snapshot_ms = t.elapsed_ms();
        core.perf_stats.body_count = world.body_count() as u32;
        core.perf_stats.tick_ms = frame_timer.elapsed_ms();
    }

    Ok(())
}
