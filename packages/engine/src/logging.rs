//! Log backend: the browser console on wasm32, `env_logger` natively

use log::LevelFilter;

#[cfg(target_arch = "wasm32")]
mod console {
    use log::{Level, Log, Metadata, Record};

    pub(super) struct ConsoleLogger;

    pub(super) static LOGGER: ConsoleLogger = ConsoleLogger;

    impl Log for ConsoleLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= log::max_level()
        }

        fn log(&self, record: &Record) {
            if !self.enabled(record.metadata()) {
                return;
            }
            let msg = wasm_bindgen::JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
            match record.level() {
                Level::Error => web_sys::console::error_1(&msg),
                Level::Warn => web_sys::console::warn_1(&msg),
                Level::Info => web_sys::console::info_1(&msg),
                Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
            }
        }

        fn flush(&self) {}
    }
}

/// Install the logger. Later calls only change the level.
pub fn init_logger(level: LevelFilter) {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = log::set_logger(&console::LOGGER);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = env_logger::Builder::from_default_env().filter_level(level).try_init();
    }
    log::set_max_level(level);
}

/// Parse "error" / "warn" / "info" / "debug" / "trace" / "off"
pub fn parse_level(level: &str) -> Option<LevelFilter> {
    level.parse().ok()
}
