//! Browser Logging
//!
//! Routes `tracing` events from the app and the API client to the browser
//! console. Debug builds log at DEBUG, release builds at INFO.

use tracing::Level;
use tracing_wasm::WASMLayerConfigBuilder;

pub fn init() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let config = WASMLayerConfigBuilder::new().set_max_level(level).build();
    tracing_wasm::set_as_global_default_with_config(config);
}
