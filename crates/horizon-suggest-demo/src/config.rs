//! Demo configuration.
//!
//! The demo reads an optional TOML file. Every section and key is optional;
//! anything missing falls back to the defaults below.
//!
//! ```toml
//! [window]
//! title = "Autocomplete Entry Example"
//! width = 420
//! height = 240
//!
//! [field]
//! candidates = ["Apple", "Banana", "Cherry"]
//! initial_value = ""
//!
//! [style]
//! font_family = "sans-serif"
//! font_size = 14.0
//! foreground = "#202020"
//! background = "#ffffff"
//! justify = "left"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use horizon_suggest::core::logging::targets;
use horizon_suggest::style::{Color, Font, FontFamily, Justify, TextStyle};

use crate::error::{ConfigError, ConfigResult};

/// Environment variable naming the config file when no argument is given.
pub const CONFIG_ENV: &str = "HORIZON_SUGGEST_CONFIG";

/// Candidates shown when the config does not list any.
pub const DEFAULT_CANDIDATES: [&str; 7] = [
    "Apple",
    "Banana",
    "Cherry",
    "Date",
    "Elderberry",
    "Fig",
    "Grape",
];

/// Top-level demo configuration.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub window: WindowConfig,
    pub field: FieldConfig,
    pub style: StyleConfig,
}

/// `[window]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub title: String,
    /// Inner width in logical pixels.
    pub width: u32,
    /// Inner height in logical pixels.
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Autocomplete Entry Example".to_string(),
            width: 420,
            height: 240,
        }
    }
}

/// `[field]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldConfig {
    pub candidates: Vec<String>,
    pub initial_value: String,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            candidates: DEFAULT_CANDIDATES.iter().map(|s| s.to_string()).collect(),
            initial_value: String::new(),
        }
    }
}

/// `[style]` section, forwarded to the field's entry and popup list.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    pub font_family: Option<String>,
    pub font_size: Option<f32>,
    pub foreground: Option<String>,
    pub background: Option<String>,
    pub justify: Option<String>,
}

impl DemoConfig {
    /// Resolve the config from the command line and environment.
    ///
    /// The first argument after the program name wins over `env_path`.
    /// With neither, the defaults are used.
    pub fn resolve(
        mut args: impl Iterator<Item = String>,
        env_path: Option<String>,
    ) -> ConfigResult<Self> {
        let _program = args.next();
        match args.next().or(env_path).filter(|p| !p.is_empty()) {
            Some(path) => Self::load(Path::new(&path)),
            None => {
                tracing::debug!(target: targets::DEMO, "no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load and validate a config file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: PathBuf::from(path),
            source,
        })?;
        let config = Self::parse(&text, &path.display().to_string())?;
        tracing::info!(target: targets::DEMO, path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate config text. `origin` names the source in errors.
    pub fn parse(text: &str, origin: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Parse {
            origin: origin.to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot check.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::InvalidWindowSize {
                width: self.window.width,
                height: self.window.height,
            });
        }
        self.text_style().map(|_| ())
    }

    /// Build the text style for the autocomplete field.
    pub fn text_style(&self) -> ConfigResult<TextStyle> {
        let style = &self.style;
        let mut text_style = TextStyle::new();

        if style.font_family.is_some() || style.font_size.is_some() {
            let default = Font::default();
            let family = style
                .font_family
                .as_deref()
                .map(FontFamily::parse)
                .unwrap_or_else(|| default.family().clone());
            let size = match style.font_size {
                Some(size) if size.is_finite() && size > 0.0 => size,
                Some(size) => return Err(ConfigError::InvalidFontSize(size)),
                None => default.size(),
            };
            text_style = text_style.with_font(Font::new(family, size));
        }

        if let Some(value) = &style.foreground {
            text_style = text_style.with_foreground(parse_color("foreground", value)?);
        }
        if let Some(value) = &style.background {
            text_style = text_style.with_background(parse_color("background", value)?);
        }
        if let Some(value) = &style.justify {
            let justify =
                Justify::parse(value).ok_or_else(|| ConfigError::InvalidJustify(value.clone()))?;
            text_style = text_style.with_justify(justify);
        }

        Ok(text_style)
    }
}

fn parse_color(key: &'static str, value: &str) -> ConfigResult<Color> {
    Color::from_hex(value).ok_or_else(|| ConfigError::InvalidColor {
        key,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = DemoConfig::default();
        assert_eq!(config.window.title, "Autocomplete Entry Example");
        assert_eq!(config.field.candidates.len(), 7);
        assert_eq!(config.field.candidates[4], "Elderberry");
        assert_eq!(config.text_style().unwrap(), TextStyle::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = DemoConfig::parse("[window]\ntitle = \"Fruit\"\n", "<test>").unwrap();
        assert_eq!(config.window.title, "Fruit");
        assert_eq!(config.window.width, 420);
        assert_eq!(config.field, FieldConfig::default());
    }

    #[test]
    fn test_style_section() {
        let text = r##"
            [style]
            font_family = "monospace"
            font_size = 16.0
            foreground = "#ff0000"
            justify = "center"
        "##;
        let style = DemoConfig::parse(text, "<test>").unwrap().text_style().unwrap();
        assert_eq!(style.font, Some(Font::new(FontFamily::Monospace, 16.0)));
        assert_eq!(style.foreground, Some(Color::from_rgb8(255, 0, 0)));
        assert_eq!(style.background, None);
        assert_eq!(style.justify, Some(Justify::Center));
    }

    #[test]
    fn test_invalid_values() {
        let err = DemoConfig::parse("[style]\nforeground = \"red\"\n", "<test>").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidColor { key: "foreground", .. }));

        let err = DemoConfig::parse("[style]\njustify = \"middle\"\n", "<test>").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidJustify(_)));

        let err = DemoConfig::parse("[style]\nfont_size = -2.0\n", "<test>").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFontSize(_)));

        let err = DemoConfig::parse("[window]\nwidth = 0\n", "<test>").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidWindowSize { width: 0, .. }));

        let err = DemoConfig::parse("[windw]\n", "<test>").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[field]\ncandidates = [\"Kiwi\", \"Lime\"]\ninitial_value = \"Ki\""
        )
        .unwrap();

        let config = DemoConfig::load(file.path()).unwrap();
        assert_eq!(config.field.candidates, ["Kiwi", "Lime"]);
        assert_eq!(config.field.initial_value, "Ki");
    }

    #[test]
    fn test_resolve_prefers_argument() {
        let dir = tempfile::tempdir().unwrap();
        let arg_path = dir.path().join("arg.toml");
        let env_path = dir.path().join("env.toml");
        std::fs::write(&arg_path, "[window]\ntitle = \"arg\"\n").unwrap();
        std::fs::write(&env_path, "[window]\ntitle = \"env\"\n").unwrap();

        let args = vec!["demo".to_string(), arg_path.display().to_string()];
        let env = Some(env_path.display().to_string());
        let config = DemoConfig::resolve(args.into_iter(), env.clone()).unwrap();
        assert_eq!(config.window.title, "arg");

        let config = DemoConfig::resolve(vec!["demo".to_string()].into_iter(), env).unwrap();
        assert_eq!(config.window.title, "env");

        let config = DemoConfig::resolve(vec!["demo".to_string()].into_iter(), None).unwrap();
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DemoConfig::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
