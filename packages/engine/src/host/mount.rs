use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::domain::config::BackdropConfig;
use crate::error::BackdropError;
use crate::simulation::{BackdropCore, PerfStats};

use super::frame_loop::AnimationFrameLoop;
use super::listener::EventListener;
use super::observer::VisibilityObserver;
use super::window;

struct Mounted {
    core: Rc<RefCell<BackdropCore>>,
    frame_loop: AnimationFrameLoop,
    _pointer: EventListener,
    _resize: EventListener,
    _visibility: VisibilityObserver,
}

/// Self-driving backdrop attached to a DOM element.
///
/// `on_frame` is called after every tick with the snapshot JSON. Window
/// resizes re-measure the element and rebuild the world if its size changed.
#[wasm_bindgen]
pub struct BackdropMount {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl BackdropMount {
    /// Size the world from `element`, then start observing and animating
    pub fn mount(element: web_sys::Element, config_json: &str, on_frame: Option<js_sys::Function>) -> Result<BackdropMount, JsValue> {
        Ok(Self {
            mounted: Some(Mounted::attach(element, config_json, on_frame)?),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    #[wasm_bindgen(getter)]
    pub fn is_running(&self) -> bool {
        self.mounted.as_ref().is_some_and(|m| m.frame_loop.is_running())
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 {
        self.with_core(|c| c.config().width).unwrap_or(0.0)
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 {
        self.with_core(|c| c.config().height).unwrap_or(0.0)
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize {
        self.with_core(|c| c.body_count()).unwrap_or(0)
    }

    #[wasm_bindgen(getter)]
    pub fn gate_state(&self) -> String {
        self.with_core(|c| c.gate_state().as_str().to_string())
            .unwrap_or_else(|| "hidden".to_string())
    }

    pub fn snapshot_json(&self) -> String {
        self.with_core(|c| c.snapshot_json()).unwrap_or_else(|| "[]".to_string())
    }

    pub fn skin_manifest_json(&self) -> String {
        self.with_core(|c| c.palette().manifest_json()).unwrap_or_else(|| "[]".to_string())
    }

    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        if let Some(m) = self.mounted.as_ref() {
            if let Ok(mut core) = m.core.try_borrow_mut() {
                core.enable_perf_metrics(enabled);
            }
        }
    }

    pub fn get_perf_stats(&self) -> PerfStats {
        self.with_core(|c| c.get_perf_stats()).unwrap_or_default()
    }

    /// Stop the loop, drop listeners and the observer, destroy the world.
    /// Safe to call more than once.
    pub fn unmount(&mut self) {
        if let Some(mounted) = self.mounted.take() {
            mounted.detach();
        }
    }
}

impl BackdropMount {
    fn with_core<T>(&self, f: impl FnOnce(&BackdropCore) -> T) -> Option<T> {
        let mounted = self.mounted.as_ref()?;
        let core = mounted.core.try_borrow().ok()?;
        Some(f(&core))
    }
}

impl Drop for BackdropMount {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl Mounted {
    fn attach(element: web_sys::Element, config_json: &str, on_frame: Option<js_sys::Function>) -> Result<Self, BackdropError> {
        let window = window()?;
        let mut config = BackdropConfig::from_json(config_json)?;

        let rect = element.get_bounding_client_rect();
        if rect.width() > 0.0 && rect.height() > 0.0 {
            config = config.with_size(rect.width() as f32, rect.height() as f32);
        } else {
            log::warn!("backdrop element has no size yet, using {}x{}", config.width, config.height);
        }
        let root_margin = config.visibility.root_margin();

        let core = Rc::new(RefCell::new(BackdropCore::new(config)?));

        let pointer = {
            let core = core.clone();
            let element = element.clone();
            EventListener::new(window.as_ref(), "mousemove", move |event| {
                let Some(mouse) = event.dyn_ref::<web_sys::MouseEvent>() else {
                    return;
                };
                let rect = element.get_bounding_client_rect();
                let x = mouse.client_x() as f64 - rect.left();
                let y = mouse.client_y() as f64 - rect.top();
                if let Ok(mut core) = core.try_borrow_mut() {
                    core.pointer_moved(x as f32, y as f32);
                }
            })?
        };

        let resize = {
            let core = core.clone();
            let element = element.clone();
            EventListener::new(window.as_ref(), "resize", move |_| {
                let rect = element.get_bounding_client_rect();
                let Ok(mut core) = core.try_borrow_mut() else {
                    return;
                };
                match core.fit_to(rect.width() as f32, rect.height() as f32) {
                    Ok(true) => log::debug!("backdrop refit to {}x{}", rect.width(), rect.height()),
                    Ok(false) => {}
                    Err(e) => log::warn!("backdrop resize ignored: {e}"),
                }
            })?
        };

        let visibility = {
            let core = core.clone();
            VisibilityObserver::observe(&element, &root_margin, move |visible| {
                if let Ok(mut core) = core.try_borrow_mut() {
                    core.set_visible(visible);
                }
            })?
        };

        let frame_loop = {
            let core = core.clone();
            AnimationFrameLoop::start(move |now_ms| {
                let Ok(mut core) = core.try_borrow_mut() else {
                    return true;
                };
                match core.tick(now_ms) {
                    Ok(()) => {}
                    Err(BackdropError::Destroyed) => return false,
                    Err(e) => {
                        log::error!("backdrop tick failed: {e}");
                        return false;
                    }
                }
                if let Some(cb) = on_frame.as_ref() {
                    let json = JsValue::from_str(&core.snapshot_json());
                    drop(core);
                    if let Err(e) = cb.call1(&JsValue::NULL, &json) {
                        log::warn!("on_frame callback threw: {e:?}");
                    }
                }
                true
            })?
        };

        log::info!("backdrop mounted, entry margin {root_margin}");
        Ok(Self {
            core,
            frame_loop,
            _pointer: pointer,
            _resize: resize,
            _visibility: visibility,
        })
    }

    fn detach(self) {
        let Mounted {
            core,
            mut frame_loop,
            _pointer: pointer,
            _resize: resize,
            _visibility: visibility,
        } = self;
        frame_loop.stop();
        drop(pointer);
        drop(resize);
        drop(visibility);
        match core.try_borrow_mut() {
            Ok(mut core) => core.destroy(),
            Err(_) => log::warn!("backdrop busy during unmount, world left for drop"),
        }
        log::info!("backdrop unmounted");
    }
}
