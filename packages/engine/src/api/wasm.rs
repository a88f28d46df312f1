//! Types exported to JS

pub use crate::simulation::{Backdrop, PerfStats};

#[cfg(target_arch = "wasm32")]
pub use crate::host::BackdropMount;
