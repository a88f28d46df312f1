use serde::Serialize;

use crate::domain::skins::SkinId;
use crate::rigid_body::BodyId;
use crate::rigid_body_system::PhysicsWorld;

/// Floats per body in the packed snapshot: id, x, y, angle, size, skin.
///
/// `id` is exact as an `f32` up to 2^24. The world restarts numbering whenever
/// it is emptied, so ids only grow within one visibility session.
pub const SNAPSHOT_STRIDE: usize = 6;

/// Read-only view of one body for the presentation layer
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BodyState {
    /// Stable across frames; use as the render key
    pub id: BodyId,
    /// Centre, backdrop-local px
    pub x: f32,
    pub y: f32,
    /// Radians
    pub angle: f32,
    /// Diameter in px
    pub size: f32,
    pub skin: SkinId,
}

/// Per-frame snapshot of the world, captured after `step`.
///
/// Nothing here is ever fed back into the simulation.
#[derive(Debug, Default)]
pub struct RenderBridge {
    states: Vec<BodyState>,
    packed: Vec<f32>,
    frame: u64,
}

impl RenderBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot with the world's current state
    pub fn capture(&mut self, world: &PhysicsWorld, frame: u64) {
        self.states.clear();
        self.states.extend(world.bodies().iter().map(|b| BodyState {
            id: b.id,
            x: b.pos.x,
            y: b.pos.y,
            angle: b.angle,
            size: b.size(),
            skin: b.skin,
        }));

        self.packed.clear();
        self.packed.reserve(self.states.len() * SNAPSHOT_STRIDE);
        for s in self.states.iter() {
            self.packed
                .extend_from_slice(&[s.id as f32, s.x, s.y, s.angle, s.size, s.skin as f32]);
        }

        self.frame = frame;
    }

    pub fn clear(&mut self) {
        self.states.clear();
        self.packed.clear();
    }

    pub fn states(&self) -> &[BodyState] {
        &self.states
    }

    /// Flat `[id, x, y, angle, size, skin, ...]` for zero-copy reads from JS
    pub fn packed(&self) -> &[f32] {
        &self.packed
    }

    pub fn packed_ptr(&self) -> *const f32 {
        self.packed.as_ptr()
    }

    /// Frame number the snapshot was taken on
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.states).unwrap_or_else(|_| "[]".to_string())
    }
}
