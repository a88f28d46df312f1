use crate::error::BackdropError;
use crate::rigid_body::Vec2;

use super::gate::{GateState, GateTransition};
use super::init::build_world;
use super::BackdropCore;

pub(super) fn pointer_moved(core: &mut BackdropCore, x: f32, y: f32) {
    core.pointer.record(Vec2::new(x, y));
}

pub(super) fn pointer_left(core: &mut BackdropCore) {
    core.pointer.clear();
}

pub(super) fn set_visible(core: &mut BackdropCore, visible: bool) -> Option<GateTransition> {
    let transition = core.gate.observe(visible)?;
    match transition {
        GateTransition::Entered => {
            log::debug!("backdrop entered view (entry #{})", core.gate.entries());
        }
        GateTransition::Left => {
            core.spawner.cancel();
            let removed = core
                .world
                .as_mut()
                .map(|world| world.remove_bodies(|_| true))
                .unwrap_or(0);
            core.render.clear();
            core.pointer.clear();
            log::debug!("backdrop left view, removed {removed} bodies");
        }
    }
    Some(transition)
}

/// Rebuild the world for a new container size. Bodies are dropped; if the
/// backdrop is in view spawning starts over on the next frame.
pub(super) fn resize(core: &mut BackdropCore, width: f32, height: f32) -> Result<(), BackdropError> {
    let Some(old) = core.world.take() else {
        return Err(BackdropError::Destroyed);
    };

    let config = core.config.with_size(width, height);
    if let Err(e) = config.validate() {
        core.world = Some(old);
        return Err(e);
    }

    old.destroy();
    core.spawner.cancel();
    core.render.clear();
    core.pointer.clear();
    core.world = Some(build_world(&config));
    core.config = config;
    core.gate.restart();

    log::debug!(
        "backdrop resized to {width}x{height}, gate {}",
        core.gate.state().as_str()
    );
    Ok(())
}

/// Resize only if the container really changed. Collapsed (zero-size)
/// layouts are skipped so a hidden element doesn't wipe the pile.
pub(super) fn fit_to(core: &mut BackdropCore, width: f32, height: f32) -> Result<bool, BackdropError> {
    if !(width > 0.0 && height > 0.0) {
        return Ok(false);
    }
    let (w, h) = (core.config.width, core.config.height);
    if (w - width).abs() < 0.5 && (h - height).abs() < 0.5 {
        return Ok(false);
    }
    resize(core, width, height)?;
    Ok(true)
}

pub(super) fn destroy(core: &mut BackdropCore) {
    let Some(world) = core.world.take() else {
        return;
    };
    core.spawner.cancel();
    core.pointer.clear();
    core.render.clear();
    if core.gate.state() != GateState::Hidden {
        core.gate.observe(false);
    }
    world.destroy();
    log::info!("backdrop destroyed after {} frames", core.frame);
}
