//! Logging facilities for Horizon Suggest.
//!
//! Horizon Suggest uses the `tracing` crate for instrumentation. Nothing is
//! printed unless the application installs a subscriber:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("info,horizon_suggest=debug")
//!     .init();
//! ```
//!
//! The constants in [`targets`] are the `target:` values used by every
//! `tracing` call in the workspace, so they can be used in filter directives.

/// Target names for log filtering.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_suggest_core::signal";
    /// Property system target.
    pub const PROPERTY: &str = "horizon_suggest_core::property";
    /// Text variable target.
    pub const VARIABLE: &str = "horizon_suggest_core::variable";
    /// Candidate filtering and highlight navigation.
    pub const COMPLETER: &str = "horizon_suggest::completer";
    /// Popup surface placement and visibility.
    pub const POPUP: &str = "horizon_suggest::popup";
    /// Demo application.
    pub const DEMO: &str = "horizon_suggest_demo";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_share_crate_prefix() {
        for target in [targets::SIGNAL, targets::PROPERTY, targets::VARIABLE] {
            assert!(target.starts_with("horizon_suggest_core::"));
        }
        for target in [targets::COMPLETER, targets::POPUP] {
            assert!(target.starts_with("horizon_suggest::"));
        }
    }
}
