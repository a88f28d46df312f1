//! Browser glue for a self-driving backdrop (wasm32 only)
//!
//! `BackdropMount` owns the frame loop, the window pointer listener and the
//! intersection observer, and feeds them into a `BackdropCore`.

mod frame_loop;
mod listener;
mod mount;
mod observer;

pub use mount::BackdropMount;

use crate::error::BackdropError;

pub(crate) fn window() -> Result<web_sys::Window, BackdropError> {
    web_sys::window().ok_or_else(|| BackdropError::Host("no global window".to_string()))
}
