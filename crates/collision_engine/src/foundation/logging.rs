//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
///
/// Returns `false` if a logger was already installed. Safe to call from
/// every test and from the host game.
pub fn init() -> bool {
    env_logger::try_init().is_ok()
}
