//! Error types for the demo application.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading the demo configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for the expected schema.
    #[error("failed to parse config {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    /// A color value is not `#rrggbb` or `#rrggbbaa`.
    #[error("invalid color for style.{key}: {value:?}")]
    InvalidColor { key: &'static str, value: String },

    /// The justification is not `left`, `center` or `right`.
    #[error("invalid justify value: {0:?}")]
    InvalidJustify(String),

    /// The font size is not a positive number.
    #[error("invalid font size: {0}")]
    InvalidFontSize(f32),

    /// Zero window width or height.
    #[error("invalid window dimensions: {width}x{height}")]
    InvalidWindowSize { width: u32, height: u32 },
}

/// Errors that can stop the demo application.
#[derive(Error, Debug)]
pub enum DemoError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The event loop could not be created or failed while running.
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    /// The window could not be created.
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    /// The software presentation surface failed.
    #[error("surface error: {0}")]
    Surface(#[from] softbuffer::SoftBufferError),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for the demo application.
pub type DemoResult<T> = Result<T, DemoError>;
