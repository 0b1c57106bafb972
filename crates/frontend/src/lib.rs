pub mod app;
pub mod dashboards;
pub mod domain;
pub mod projections;
pub mod shared;

use shared::config::ClientConfig;

/// Install logging and the panic hook
pub fn init_runtime(config: &ClientConfig) {
    // initializes logging using the `log` crate
    #[cfg(target_arch = "wasm32")]
    {
        _ = console_log::init_with_level(config.level());
        console_error_panic_hook::set_once();
    }
    log::debug!("client runtime ready (log level {})", config.level());
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    init_runtime(&ClientConfig::embedded());
}
