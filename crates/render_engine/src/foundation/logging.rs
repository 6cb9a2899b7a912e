//! Logging setup for the library and its binaries

pub use log::{debug, error, info, trace, warn};

/// Initialize the process-wide logger
///
/// Reads the level filter from `RUST_LOG`. Later calls are ignored rather
/// than panicking, so tests and binaries can share one entry point.
pub fn init() {
    let _ = env_logger::Builder::from_default_env().try_init();
}
