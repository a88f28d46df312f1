//! Backdrop - one mounted interactive particle backdrop
//!
//! `BackdropCore` owns the physics world and wires the other systems around
//! it. It never reads a clock or touches the DOM: the host feeds it frame
//! timestamps, pointer positions and visibility changes.
//!
//! Per frame, in order:
//! - spawner (starts on the first frame after entering view, then batches)
//! - force field (impulses from the pointer)
//! - physics step
//! - render snapshot

use crate::domain::config::BackdropConfig;
use crate::domain::skins::SkinPalette;
use crate::error::BackdropError;
use crate::force_field::{ForceField, PointerState};
use crate::rigid_body_system::PhysicsWorld;
use crate::spawner::Spawner;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "gate/visibility.rs"]
pub mod gate;
#[path = "render/render_bridge.rs"]
pub mod render_bridge;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::Backdrop;
pub use gate::{GateState, GateTransition, VisibilityGate};
pub use perf_stats::PerfStats;
pub use render_bridge::{BodyState, RenderBridge, SNAPSHOT_STRIDE};

/// The backdrop controller
pub struct BackdropCore {
    config: BackdropConfig,
    palette: SkinPalette,
    /// `None` once destroyed
    world: Option<PhysicsWorld>,
    spawner: Spawner,
    force_field: ForceField,
    pointer: PointerState,
    gate: VisibilityGate,
    render: RenderBridge,

    last_tick_ms: Option<f64>,
    frame: u64,

    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl BackdropCore {
    /// Build the world and its boundaries. Nothing spawns until the backdrop
    /// is reported visible.
    pub fn new(config: BackdropConfig) -> Result<Self, BackdropError> {
        init::create_backdrop_core(config)
    }

    pub fn from_json(json: &str) -> Result<Self, BackdropError> {
        Self::new(BackdropConfig::from_json(json)?)
    }

    pub fn config(&self) -> &BackdropConfig {
        &self.config
    }

    pub fn palette(&self) -> &SkinPalette {
        &self.palette
    }

    pub fn world(&self) -> Option<&PhysicsWorld> {
        self.world.as_ref()
    }

    pub fn spawner(&self) -> &Spawner {
        &self.spawner
    }

    pub fn seed(&self) -> u64 {
        self.spawner.seed()
    }

    pub fn gate_state(&self) -> GateState {
        self.gate.state()
    }

    pub fn is_destroyed(&self) -> bool {
        self.world.is_none()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn body_count(&self) -> usize {
        self.world.as_ref().map_or(0, |w| w.body_count())
    }

    pub fn boundary_count(&self) -> usize {
        self.world.as_ref().map_or(0, |w| w.boundary_count())
    }

    /// Bodies spawned in the current visibility session
    pub fn spawned_count(&self) -> u32 {
        self.spawner.spawned_count()
    }

    /// Record the pointer in backdrop-local px
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        commands::pointer_moved(self, x, y)
    }

    /// Forget the pointer; the force field goes quiet until the next move
    pub fn pointer_left(&mut self) {
        commands::pointer_left(self)
    }

    /// Report whether the backdrop is past its entry threshold.
    ///
    /// Leaving view cancels spawning and removes every body; the boundaries stay.
    pub fn set_visible(&mut self, visible: bool) -> Option<GateTransition> {
        commands::set_visible(self, visible)
    }

    /// Advance one frame to host time `now_ms`
    pub fn tick(&mut self, now_ms: f64) -> Result<(), BackdropError> {
        step::tick(self, now_ms)
    }

    /// Body states captured at the end of the last tick
    pub fn snapshot(&self) -> &[BodyState] {
        self.render.states()
    }

    pub fn snapshot_json(&self) -> String {
        self.render.to_json()
    }

    pub fn render(&self) -> &RenderBridge {
        &self.render
    }

    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), BackdropError> {
        commands::resize(self, width, height)
    }

    /// Follow a container layout change. Returns whether the world was rebuilt.
    pub fn fit_to(&mut self, width: f32, height: f32) -> Result<bool, BackdropError> {
        commands::fit_to(self, width, height)
    }

    pub fn set_gravity(&mut self, gravity_y: f32) {
        settings::set_gravity(self, gravity_y)
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last tick's perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Tear down the world. Later ticks fail with `Destroyed`; repeat calls are no-ops.
    pub fn destroy(&mut self) {
        commands::destroy(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
