/// Milliseconds on a monotonic-enough clock; only differences are meaningful
#[cfg(target_arch = "wasm32")]
pub(crate) fn clock_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn clock_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static ORIGIN: OnceLock<Instant> = OnceLock::new();
    ORIGIN.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Stage timer for `PerfStats`
#[derive(Clone, Copy, Debug)]
pub(crate) struct PerfTimer {
    start_ms: f64,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        PerfTimer { start_ms: clock_ms() }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        (clock_ms() - self.start_ms).max(0.0)
    }
}
