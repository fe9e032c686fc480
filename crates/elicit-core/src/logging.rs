//! Structured logging for the elicitation crates.
//!
//! Built on the standard [`log`] facade. No log implementation is
//! bundled; applications initialize their preferred backend.
//!
//! # Log Levels
//!
//! - **error**: validation rejections, transport failures, hook failures
//! - **debug**: session flow, schema compilation, response dispatch
//! - **trace**: compiled schema contents, raw response content
//!
//! # Log Targets
//!
//! Hierarchical targets allow per-component filtering:
//!
//! Example filter: `RUST_LOG=elicit::session=debug,elicit::validate=trace`

// Re-export log macros for ergonomic use
pub use log::{debug, error, info, trace, warn};

// Re-export log level types for programmatic use
pub use log::{Level, LevelFilter};

/// Log targets used by the elicitation components.
///
/// Use these constants with the `target:` argument to log macros
/// for consistent filtering.
pub mod targets {
    /// Root target for all elicitation logs.
    pub const ELICIT: &str = "elicit";

    /// Session lifecycle and outcome dispatch.
    pub const SESSION: &str = "elicit::session";

    /// Schema compilation.
    pub const SCHEMA: &str = "elicit::schema";

    /// Field validation pipeline.
    pub const VALIDATE: &str = "elicit::validate";

    /// Transport collaborator exchanges.
    pub const TRANSPORT: &str = "elicit::transport";
}

/// Returns whether logging is enabled at the given level for the given target.
///
/// Useful for conditionally computing expensive log message data.
#[inline]
#[must_use]
pub fn is_enabled(level: Level, target: &str) -> bool {
    log::log_enabled!(target: target, level)
}
