use wasm_bindgen::prelude::*;

use crate::domain::config::BackdropConfig;

use super::perf_stats::PerfStats;
use super::render_bridge::SNAPSHOT_STRIDE;
use super::BackdropCore;

/// JS handle to a host-driven backdrop.
///
/// The host owns the frame loop: call `tick` from `requestAnimationFrame`,
/// then read the packed snapshot through `snapshot_ptr`/`snapshot_len`.
#[wasm_bindgen]
pub struct Backdrop {
    core: BackdropCore,
}

impl Backdrop {
    pub fn core(&self) -> &BackdropCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut BackdropCore {
        &mut self.core
    }
}

#[wasm_bindgen]
impl Backdrop {
    /// Create from a JSON config; missing fields take their defaults
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<Backdrop, JsValue> {
        let core = BackdropCore::from_json(config_json)?;
        Ok(Self { core })
    }

    /// Default config for a container of the given size
    #[wasm_bindgen(js_name = withSize)]
    pub fn with_size(width: f32, height: f32) -> Result<Backdrop, JsValue> {
        let config = BackdropConfig::default().with_size(width, height);
        let core = BackdropCore::new(config)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.config().width }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.core.config().height }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.body_count() }

    #[wasm_bindgen(getter)]
    pub fn boundary_count(&self) -> usize { self.core.boundary_count() }

    #[wasm_bindgen(getter)]
    pub fn spawned_count(&self) -> u32 { self.core.spawned_count() }

    /// "hidden", "entering" or "active"
    #[wasm_bindgen(getter)]
    pub fn gate_state(&self) -> String { self.core.gate_state().as_str().to_string() }

    #[wasm_bindgen(getter)]
    pub fn is_destroyed(&self) -> bool { self.core.is_destroyed() }

    /// Seed as a decimal string; u64 doesn't fit a JS number
    pub fn seed(&self) -> String {
        self.core.seed().to_string()
    }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    /// Visual table for the `skin` field of each body
    pub fn skin_manifest_json(&self) -> String {
        self.core.palette().manifest_json()
    }

    /// `IntersectionObserver` rootMargin matching the configured entry threshold
    pub fn root_margin(&self) -> String {
        self.core.config().visibility.root_margin()
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.core.pointer_moved(x, y);
    }

    pub fn pointer_left(&mut self) {
        self.core.pointer_left();
    }

    /// Returns true if this call changed the gate
    pub fn set_visible(&mut self, visible: bool) -> bool {
        self.core.set_visible(visible).is_some()
    }

    pub fn tick(&mut self, now_ms: f64) -> Result<(), JsValue> {
        self.core.tick(now_ms)?;
        Ok(())
    }

    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        self.core.resize(width, height)?;
        Ok(())
    }

    /// Resize only if the container changed; returns whether the world was rebuilt
    pub fn fit_to(&mut self, width: f32, height: f32) -> Result<bool, JsValue> {
        Ok(self.core.fit_to(width, height)?)
    }

    pub fn set_gravity(&mut self, gravity_y: f32) {
        self.core.set_gravity(gravity_y);
    }

    /// Array of `{id, x, y, angle, size, skin}` from the last tick
    pub fn snapshot_json(&self) -> String {
        self.core.snapshot_json()
    }

    /// Pointer to the packed snapshot (`f32` x `snapshot_len`)
    pub fn snapshot_ptr(&self) -> *const f32 {
        self.core.render().packed_ptr()
    }

    /// Packed snapshot length in f32 elements
    pub fn snapshot_len(&self) -> usize {
        self.core.render().packed().len()
    }

    pub fn snapshot_stride(&self) -> usize {
        SNAPSHOT_STRIDE
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn destroy(&mut self) {
        self.core.destroy();
    }
}
