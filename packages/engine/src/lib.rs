//! Gravity Backdrop - interactive falling-logo backdrop in WASM
//!
//! A pile of logo discs pours into a section when it scrolls into view,
//! settles under gravity and scatters away from the mouse.
//!
//! Architecture:
//! - core/          - Randomness helpers
//! - domain/        - Config and skins
//! - systems/       - Physics world, spawner, force field
//! - simulation/    - Backdrop controller (visibility gate, per-frame order, snapshots)
//! - host/          - Browser glue: frame loop, pointer, IntersectionObserver (wasm32 only)
//! - api/           - Public API

pub mod core;
pub mod domain;
pub mod error;
pub mod logging;
pub mod systems;
pub mod simulation;
#[cfg(target_arch = "wasm32")]
pub mod host;
pub mod api;

// Compatibility re-exports (keeps short internal/external paths working)
pub use systems::force_field;
pub use systems::rigid_body;
pub use systems::rigid_body_system;
pub use systems::spawner;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine. `log_level` is one of error/warn/info/debug/trace/off.
#[wasm_bindgen]
pub fn init(log_level: Option<String>) {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    let level = log_level
        .as_deref()
        .and_then(logging::parse_level)
        .unwrap_or(log::LevelFilter::Info);
    logging::init_logger(level);

    log::info!("gravity backdrop {} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Default config as JSON, handy as a starting point for overrides
#[wasm_bindgen]
pub fn default_config_json() -> String {
    domain::config::BackdropConfig::default().to_json()
}

// Re-export main types
pub use api::wasm::Backdrop;
#[cfg(target_arch = "wasm32")]
pub use api::wasm::BackdropMount;
pub use domain::config::BackdropConfig;
pub use error::BackdropError;
pub use simulation::{BackdropCore, BodyState, GateState};
