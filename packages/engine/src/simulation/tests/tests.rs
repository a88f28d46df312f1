use super::*;

const FRAME_MS: f64 = 16.0;

fn config() -> BackdropConfig {
    BackdropConfig {
        seed: Some(42),
        ..BackdropConfig::default()
    }
}

fn core() -> BackdropCore {
    BackdropCore::new(config()).unwrap()
}

/// Tick `frames` times starting at `from`; returns the next timestamp
fn run(core: &mut BackdropCore, from: f64, frames: u32) -> f64 {
    let mut t = from;
    for _ in 0..frames {
        core.tick(t).unwrap();
        t += FRAME_MS;
    }
    t
}

#[test]
fn new_backdrop_has_walls_and_no_bodies() {
    let core = core();
    assert_eq!(core.boundary_count(), 3);
    assert_eq!(core.body_count(), 0);
    assert_eq!(core.gate_state(), GateState::Hidden);
    assert!(core.snapshot().is_empty());
}

#[test]
fn boundaries_frame_the_container() {
    let core = core();
    let world = core.world().unwrap();
    let (w, h) = (core.config().width, core.config().height);
    let b = world.boundaries();

    assert_eq!(b[0].center.x, w * 0.5);
    assert_eq!(b[0].center.y, h + 50.0);
    assert_eq!(b[0].half_extents.x, w * 0.5);
    assert_eq!(b[1].center.x, -50.0);
    assert_eq!(b[1].half_extents.y, h);
    assert_eq!(b[2].center.x, w + 50.0);
}

#[test]
fn nothing_spawns_while_hidden() {
    let mut core = core();
    run(&mut core, 0.0, 120);
    assert_eq!(core.body_count(), 0);
    assert_eq!(core.spawned_count(), 0);
}

#[test]
fn entering_view_pours_exactly_the_target() {
    let mut core = core();
    let mut t = run(&mut core, 0.0, 3);

    core.set_visible(true);
    assert_eq!(core.gate_state(), GateState::Entering);
    assert_eq!(core.body_count(), 0);

    core.tick(t).unwrap();
    t += FRAME_MS;
    assert_eq!(core.gate_state(), GateState::Active);
    assert_eq!(core.body_count(), 8);

    for _ in 0..200 {
        core.tick(t).unwrap();
        t += FRAME_MS;
        assert!(core.body_count() <= 50);
    }
    assert_eq!(core.body_count(), 50);
    assert_eq!(core.spawner().batches_fired(), 7);
    assert!(core.spawner().is_complete());
}

#[test]
fn repeated_visible_signals_do_not_restart_spawning() {
    let mut core = core();
    core.set_visible(true);
    let mut t = run(&mut core, 0.0, 60);
    for _ in 0..5 {
        assert!(core.set_visible(true).is_none());
        t = run(&mut core, t, 10);
    }
    assert_eq!(core.body_count(), 50);
}

#[test]
fn leaving_view_clears_bodies_but_keeps_walls() {
    let mut core = core();
    core.set_visible(true);
    let t = run(&mut core, 0.0, 10);
    assert!(core.body_count() > 0);

    assert_eq!(core.set_visible(false), Some(GateTransition::Left));
    assert_eq!(core.body_count(), 0);
    assert_eq!(core.boundary_count(), 3);
    assert!(core.snapshot().is_empty());
    assert!(!core.spawner().is_spawning());

    run(&mut core, t, 60);
    assert_eq!(core.body_count(), 0);
}

#[test]
fn leaving_mid_pour_then_reentering_starts_over() {
    let mut core = core();
    core.set_visible(true);
    let t = run(&mut core, 0.0, 5);
    let partial = core.body_count();
    assert!(partial > 0 && partial < 50);

    core.set_visible(false);
    core.set_visible(true);
    let t = run(&mut core, t, 1);
    assert_eq!(core.spawned_count(), 8);

    run(&mut core, t, 60);
    assert_eq!(core.body_count(), 50);
}

#[test]
fn each_session_pours_the_same_bodies() {
    let mut core = core();
    let t = run(&mut core, 0.0, 1);
    core.set_visible(true);
    let t = run(&mut core, t, 1);
    let first: Vec<(f32, f32, f32, u16)> = core.snapshot().iter().map(|s| (s.x, s.y, s.size, s.skin)).collect();

    let t = run(&mut core, t, 30);
    core.set_visible(false);
    let t = run(&mut core, t, 3);
    core.set_visible(true);
    run(&mut core, t, 1);
    let second: Vec<(f32, f32, f32, u16)> = core.snapshot().iter().map(|s| (s.x, s.y, s.size, s.skin)).collect();

    assert_eq!(first, second);
}

#[test]
fn bodies_come_to_rest_inside_the_container() {
    let mut core = core();
    core.set_visible(true);
    run(&mut core, 0.0, 400);

    let (w, h) = (core.config().width, core.config().height);
    assert_eq!(core.snapshot().len(), 50);
    for s in core.snapshot() {
        assert!(s.x > -1.0 && s.x < w + 1.0, "x out of bounds: {}", s.x);
        assert!(s.y < h, "below ground: {}", s.y);
        assert!(s.y > -h, "escaped upward: {}", s.y);
        assert!(s.angle.is_finite());
    }
}

#[test]
fn snapshot_ids_are_stable_and_skins_round_robin() {
    let mut core = core();
    core.set_visible(true);
    let t = run(&mut core, 0.0, 40);
    let ids: Vec<u32> = core.snapshot().iter().map(|s| s.id).collect();

    run(&mut core, t, 10);
    let later: Vec<u32> = core.snapshot().iter().map(|s| s.id).collect();
    assert_eq!(ids, later);

    for (i, s) in core.snapshot().iter().enumerate() {
        assert_eq!(s.skin as usize, i % 5);
    }
}

#[test]
fn packed_snapshot_mirrors_states() {
    let mut core = core();
    core.set_visible(true);
    run(&mut core, 0.0, 10);

    let states = core.snapshot();
    let packed = core.render().packed();
    assert_eq!(packed.len(), states.len() * SNAPSHOT_STRIDE);
    for (s, chunk) in states.iter().zip(packed.chunks(SNAPSHOT_STRIDE)) {
        assert_eq!(chunk[0], s.id as f32);
        assert_eq!(chunk[1], s.x);
        assert_eq!(chunk[2], s.y);
        assert_eq!(chunk[4], s.size);
        assert_eq!(chunk[5], s.skin as f32);
    }

    let parsed: serde_json::Value = serde_json::from_str(&core.snapshot_json()).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), states.len());
}

#[test]
fn pointer_sweep_pushes_nearby_bodies() {
    let mut pushed = core();
    let mut control = core();
    pushed.set_visible(true);
    control.set_visible(true);
    let t = run(&mut pushed, 0.0, 300);
    run(&mut control, 0.0, 300);

    let target = pushed.snapshot()[0];
    let control_before = control.snapshot()[0];
    assert_eq!(target.x, control_before.x);

    // Sweep rightward, ending just left of the body
    pushed.pointer_moved(target.x - 60.0, target.y);
    pushed.tick(t).unwrap();
    control.tick(t).unwrap();
    pushed.pointer_moved(target.x - 20.0, target.y);
    pushed.tick(t + FRAME_MS).unwrap();
    control.tick(t + FRAME_MS).unwrap();

    let after = pushed.world().unwrap().body(target.id).unwrap().velocity.x;
    let control_after = control.world().unwrap().body(target.id).unwrap().velocity.x;
    assert!(after > control_after + 1.0, "pushed {after}, control {control_after}");
}

#[test]
fn pointer_left_silences_the_field() {
    let mut core = core();
    core.pointer_moved(100.0, 100.0);
    core.pointer_left();
    core.set_visible(true);
    core.enable_perf_metrics(true);
    core.tick(0.0).unwrap();
    assert_eq!(core.get_perf_stats().bodies_pushed(), 0);
}

#[test]
fn resize_rebuilds_world_and_respawns_in_view() {
    let mut core = core();
    core.set_visible(true);
    let t = run(&mut core, 0.0, 60);
    assert_eq!(core.body_count(), 50);

    core.resize(800.0, 400.0).unwrap();
    assert_eq!(core.body_count(), 0);
    assert_eq!(core.boundary_count(), 3);
    assert_eq!(core.gate_state(), GateState::Entering);
    assert_eq!(core.config().width, 800.0);

    run(&mut core, t, 60);
    assert_eq!(core.body_count(), 50);
}

#[test]
fn invalid_resize_keeps_the_old_world() {
    let mut core = core();
    core.set_visible(true);
    run(&mut core, 0.0, 60);

    assert!(matches!(core.resize(0.0, 400.0), Err(BackdropError::InvalidConfig(_))));
    assert_eq!(core.body_count(), 50);
    assert_eq!(core.config().width, 1280.0);
}

#[test]
fn destroy_stops_everything() {
    let mut core = core();
    core.set_visible(true);
    run(&mut core, 0.0, 10);

    core.destroy();
    assert!(core.is_destroyed());
    assert_eq!(core.body_count(), 0);
    assert_eq!(core.boundary_count(), 0);
    assert!(core.snapshot().is_empty());
    assert!(matches!(core.tick(1000.0), Err(BackdropError::Destroyed)));
    assert!(matches!(core.resize(100.0, 100.0), Err(BackdropError::Destroyed)));

    core.destroy();
    core.pointer_moved(1.0, 1.0);
    core.set_visible(true);
    assert!(core.is_destroyed());
}

#[test]
fn long_frame_gap_is_clamped() {
    let mut core = core();
    core.set_visible(true);
    core.enable_perf_metrics(true);
    core.tick(0.0).unwrap();
    core.tick(5000.0).unwrap();

    let stats = core.get_perf_stats();
    assert!((stats.dt_ms() - 50.0).abs() < 1e-3);
    assert_eq!(stats.body_count() as usize, core.body_count());
    assert!(core.snapshot().iter().all(|s| s.y.is_finite()));
}

#[test]
fn bad_config_is_rejected() {
    assert!(BackdropCore::from_json(r#"{"spawn": {"skins": []}}"#).is_err());
    assert!(BackdropCore::from_json("not json").is_err());
}

#[test]
fn unsampleable_or_runaway_spawn_settings_never_reach_tick() {
    for json in [
        r#"{"seed": 1, "spawn": {"drop_height": [0, 1e39]}}"#,
        r#"{"seed": 1, "spawn": {"lateral_speed": 1e39}}"#,
        r#"{"seed": 1, "spawn": {"interval_ms": 1e-12}}"#,
    ] {
        assert!(
            matches!(BackdropCore::from_json(json), Err(BackdropError::InvalidConfig(_))),
            "accepted {json}"
        );
    }
}

#[test]
fn perf_stats_are_zero_when_disabled() {
    let mut core = core();
    core.set_visible(true);
    run(&mut core, 0.0, 5);
    let stats = core.get_perf_stats();
    assert_eq!(stats.body_count(), 0);
    assert_eq!(stats.tick_ms(), 0.0);
}

#[test]
fn fit_to_ignores_unchanged_and_collapsed_layouts() {
    let mut core = core();
    core.set_visible(true);
    let t = run(&mut core, 0.0, 60);

    assert!(!core.fit_to(1280.2, 639.9).unwrap());
    assert!(!core.fit_to(0.0, 0.0).unwrap());
    assert_eq!(core.body_count(), 50);

    assert!(core.fit_to(900.0, 500.0).unwrap());
    assert_eq!(core.config().width, 900.0);
    assert_eq!(core.body_count(), 0);
    run(&mut core, t, 60);
    assert_eq!(core.body_count(), 50);
}

#[test]
fn reentry_restarts_snapshot_ids_after_boundaries() {
    let mut core = core();
    for _ in 0..3 {
        core.set_visible(true);
        run(&mut core, 0.0, 1);
        core.set_visible(false);
    }
    core.set_visible(true);
    run(&mut core, 0.0, 1);
    let ids: Vec<u32> = core.snapshot().iter().map(|s| s.id).collect();
    assert_eq!(ids, (4..12).collect::<Vec<u32>>());
}
