use crate::core::random::mount_seed;
use crate::domain::config::BackdropConfig;
use crate::domain::skins::SkinPalette;
use crate::error::BackdropError;
use crate::force_field::{ForceField, PointerState};
use crate::rigid_body::{BoundaryShape, Vec2};
use crate::rigid_body_system::PhysicsWorld;
use crate::spawner::Spawner;

use super::gate::VisibilityGate;
use super::perf_stats::PerfStats;
use super::render_bridge::RenderBridge;
use super::BackdropCore;

pub(super) fn create_backdrop_core(config: BackdropConfig) -> Result<BackdropCore, BackdropError> {
    config.validate()?;
    let palette = SkinPalette::build(&config.spawn.skins, &config.spawn.themes)?;
    let seed = config.seed.unwrap_or_else(mount_seed);
    let world = build_world(&config);

    log::info!(
        "backdrop {}x{} ready: {} skins, target {} bodies, seed {:#x}",
        config.width,
        config.height,
        palette.len(),
        config.spawn.target_count,
        seed
    );

    Ok(BackdropCore {
        force_field: ForceField::new(config.force_field),
        spawner: Spawner::new(seed),
        pointer: PointerState::new(),
        gate: VisibilityGate::new(),
        render: RenderBridge::new(),
        world: Some(world),
        palette,
        config,
        last_tick_ms: None,
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    })
}

/// Fresh world with the ground and both side walls.
///
/// The ground sits just below the container; the walls sit just outside its
/// left/right edges and are twice its height so a high bounce can't clear them.
pub(super) fn build_world(config: &BackdropConfig) -> PhysicsWorld {
    let (w, h, t) = (config.width, config.height, config.wall_thickness);
    let mut world = PhysicsWorld::with_settings(config.gravity_y, config.solver);

    world.add_boundary(
        BoundaryShape::Rectangle,
        Vec2::new(w * 0.5, h + t * 0.5),
        Vec2::new(w, t),
        config.walls,
    );
    world.add_boundary(
        BoundaryShape::Rectangle,
        Vec2::new(-t * 0.5, h * 0.5),
        Vec2::new(t, h * 2.0),
        config.walls,
    );
    world.add_boundary(
        BoundaryShape::Rectangle,
        Vec2::new(w + t * 0.5, h * 0.5),
        Vec2::new(t, h * 2.0),
        config.walls,
    );

    world
}
