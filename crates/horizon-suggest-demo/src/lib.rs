//! Demo application for the Horizon Suggest autocomplete field.
//!
//! Opens one window with an autocomplete field, a label and a button. The
//! field's candidates, initial value and text style come from an optional
//! TOML file (see [`config`]).

pub mod app;
pub mod config;
pub mod error;
pub mod raster;
pub mod scene;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use horizon_suggest::core::logging::targets;

pub use app::DemoApp;
pub use config::{CONFIG_ENV, DemoConfig};
pub use error::{ConfigError, ConfigResult, DemoError, DemoResult};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,horizon_suggest=debug";

/// Install the global tracing subscriber.
///
/// Honors `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`].
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Run the demo until its window is closed.
pub fn run(config: DemoConfig) -> DemoResult<()> {
    let event_loop = EventLoop::new()?;
    let mut app = DemoApp::new(config)?;
    event_loop.run_app(&mut app)?;
    tracing::debug!(target: targets::DEMO, "event loop finished");
    app.finish()
}
