//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system from the `RUST_LOG` environment variable
pub fn init() {
    env_logger::init();
}

/// Initialize the logging system with a default filter
///
/// `RUST_LOG` still wins when it is set; `level` is only the fallback
/// (e.g. `"info"` or `"polygon_collider=trace"`).
pub fn init_with_level(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    // A second init (e.g. from tests) is harmless, so the error is ignored
    let _ = env_logger::Builder::from_env(env).try_init();
}
