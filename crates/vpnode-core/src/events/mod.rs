//! Process-level lifecycle events shared by every command.

use tracing::{error, info, warn};

use crate::config::ConfigError;
use crate::errors::NodeError;

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

/// Code and user-error flag for errors that carry them.
fn classify(error: &(dyn std::error::Error + 'static)) -> Option<(&'static str, bool)> {
    error
        .downcast_ref::<ConfigError>()
        .map(|e| (e.error_code(), e.is_user_error()))
}

/// Log the error that ended the process.
///
/// Config errors caused by user input (missing file, bad key or value) are
/// logged at `warn`; environment failures and unclassified errors at `error`.
pub fn log_app_error(error: &(dyn std::error::Error + 'static)) {
    match classify(error) {
        Some((code, true)) => warn!(
            event = "core.app.error_occurred",
            error = %error,
            error_code = code,
            user_error = true
        ),
        Some((code, false)) => error!(
            event = "core.app.error_occurred",
            error = %error,
            error_code = code,
            user_error = false
        ),
        None => error!(
            event = "core.app.error_occurred",
            error = %error,
            error_code = "UNCLASSIFIED"
        ),
    }
}
