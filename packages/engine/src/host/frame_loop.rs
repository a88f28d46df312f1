use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::BackdropError;

use super::window;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame` loop. The callback returns `false` to stop.
pub(crate) struct AnimationFrameLoop {
    window: web_sys::Window,
    running: Rc<Cell<bool>>,
    handle: Rc<Cell<i32>>,
    callback: FrameCallback,
}

impl AnimationFrameLoop {
    pub(crate) fn start<F>(mut on_frame: F) -> Result<Self, BackdropError>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let window = window()?;
        let running = Rc::new(Cell::new(true));
        let handle = Rc::new(Cell::new(0));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        let next = callback.clone();
        let (win, live, id) = (window.clone(), running.clone(), handle.clone());
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            if !live.get() {
                return;
            }
            if !on_frame(timestamp) {
                live.set(false);
                return;
            }
            if let Some(cb) = next.borrow().as_ref() {
                match win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(h) => id.set(h),
                    Err(e) => {
                        log::warn!("requestAnimationFrame failed: {e:?}");
                        live.set(false);
                    }
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let first = match callback.borrow().as_ref() {
            Some(cb) => window.request_animation_frame(cb.as_ref().unchecked_ref()),
            None => Ok(0),
        };
        handle.set(first.map_err(|e| BackdropError::host("requestAnimationFrame", e))?);

        Ok(Self {
            window,
            running,
            handle,
            callback,
        })
    }

    pub(crate) fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Cancel the pending frame and release the closure
    pub(crate) fn stop(&mut self) {
        if self.running.replace(false) {
            let _ = self.window.cancel_animation_frame(self.handle.get());
        }
        // Breaks the closure -> Rc -> closure cycle
        self.callback.borrow_mut().take();
    }
}

impl Drop for AnimationFrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
