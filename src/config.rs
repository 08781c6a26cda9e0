//! Build Configuration
//!
//! Settings fixed at compile time. `PORTFOLIO_LOG` picks the console log level.

use std::str::FromStr;

use tracing::Level;

/// Reveal threshold shared by every tracked section
pub const REVEAL_THRESHOLD: f64 = scroll_reveal::DEFAULT_THRESHOLD;

/// Console log level for this build
pub fn log_level() -> Level {
    resolve_log_level(option_env!("PORTFOLIO_LOG"), cfg!(debug_assertions))
}

/// Parse an explicit level, falling back to debug/info by build profile
pub fn resolve_log_level(requested: Option<&str>, debug_build: bool) -> Level {
    requested
        .and_then(|raw| Level::from_str(raw.trim()).ok())
        .unwrap_or(if debug_build { Level::DEBUG } else { Level::INFO })
}
