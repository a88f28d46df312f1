use wasm_bindgen::prelude::*;

/// Timings and counters for the last frame
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) tick_ms: f64,
    pub(super) spawn_ms: f64,
    pub(super) force_ms: f64,
    pub(super) physics_ms: f64,
    pub(super) snapshot_ms: f64,
    pub(super) dt_ms: f64,
    pub(super) body_count: u32,
    pub(super) spawned: u32,
    pub(super) bodies_pushed: u32,
    pub(super) contacts: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn tick_ms(&self) -> f64 { self.tick_ms }
    #[wasm_bindgen(getter)]
    pub fn spawn_ms(&self) -> f64 { self.spawn_ms }
    #[wasm_bindgen(getter)]
    pub fn force_ms(&self) -> f64 { self.force_ms }
    #[wasm_bindgen(getter)]
    pub fn physics_ms(&self) -> f64 { self.physics_ms }
    #[wasm_bindgen(getter)]
    pub fn snapshot_ms(&self) -> f64 { self.snapshot_ms }
    /// Simulated step length after clamping
    #[wasm_bindgen(getter)]
    pub fn dt_ms(&self) -> f64 { self.dt_ms }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    /// Bodies added this frame
    #[wasm_bindgen(getter)]
    pub fn spawned(&self) -> u32 { self.spawned }
    #[wasm_bindgen(getter)]
    pub fn bodies_pushed(&self) -> u32 { self.bodies_pushed }
    #[wasm_bindgen(getter)]
    pub fn contacts(&self) -> u32 { self.contacts }
}
