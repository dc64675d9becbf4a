//! Colors, fonts and the pass-through text style shared by composite widgets.
//!
//! A [`TextStyle`] is the bundle of options a composite widget forwards to
//! each of its text-bearing children: font, foreground, background and
//! justification. Any option left unset falls back to the child's default.

/// An RGBA color with straight (non-premultiplied) alpha, components 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self::from_rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::from_rgb(1.0, 1.0, 1.0);
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a color from RGBA components.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from RGB components.
    #[inline]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from 8-bit RGBA components.
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Create an opaque color from 8-bit RGB components.
    #[inline]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA`. The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        let len = hex.len();

        if (len != 6 && len != 8) || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        let a = if len == 8 {
            u8::from_str_radix(&hex[6..8], 16).ok()?
        } else {
            255
        };

        Some(Self::from_rgba8(r, g, b, a))
    }

    /// Convert to 8-bit RGBA components.
    pub fn to_rgba8(self) -> [u8; 4] {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [channel(self.r), channel(self.g), channel(self.b), channel(self.a)]
    }

    /// Return a new color with modified alpha.
    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }
}

/// A font family.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    /// A specific font family by name.
    Name(String),
    Serif,
    #[default]
    SansSerif,
    Monospace,
}

impl FontFamily {
    /// Create a named font family.
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Parse a family name, mapping the generic CSS names to their variants.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "serif" => Self::Serif,
            "sans-serif" | "sans" | "sansserif" => Self::SansSerif,
            "monospace" | "mono" => Self::Monospace,
            _ => Self::Name(name.trim().to_string()),
        }
    }
}

/// A font: family and pixel size.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    family: FontFamily,
    size: f32,
}

/// Ratio of line height to font size used for row and entry metrics.
pub const LINE_HEIGHT_FACTOR: f32 = 1.25;

impl Font {
    /// Smallest font size accepted.
    pub const MIN_SIZE: f32 = 4.0;

    /// Create a new font. Sizes below [`Font::MIN_SIZE`] are raised to it.
    pub fn new(family: FontFamily, size: f32) -> Self {
        Self {
            family,
            size: size.max(Self::MIN_SIZE),
        }
    }

    /// The font family.
    pub fn family(&self) -> &FontFamily {
        &self.family
    }

    /// The font size in pixels.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// The height of one line of text in pixels.
    pub fn line_height(&self) -> f32 {
        (self.size * LINE_HEIGHT_FACTOR).ceil()
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(FontFamily::SansSerif, 14.0)
    }
}

/// Horizontal text justification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Justify {
    #[default]
    Left,
    Center,
    Right,
}

impl Justify {
    /// Parse `left`, `center`/`centre` or `right`, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "left" => Some(Self::Left),
            "center" | "centre" => Some(Self::Center),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    /// The x offset of a run of `text_width` inside `available` width.
    pub fn offset(self, available: f32, text_width: f32) -> f32 {
        let slack = (available - text_width).max(0.0);
        match self {
            Self::Left => 0.0,
            Self::Center => slack / 2.0,
            Self::Right => slack,
        }
    }
}

/// Style options forwarded unchanged to the entry and the popup list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextStyle {
    pub font: Option<Font>,
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub justify: Option<Justify>,
}

impl TextStyle {
    /// Create an empty style; every option falls back to the widget default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font using builder pattern.
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    /// Set the foreground (text) color using builder pattern.
    pub fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    /// Set the background color using builder pattern.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Set the justification using builder pattern.
    pub fn with_justify(mut self, justify: Justify) -> Self {
        self.justify = Some(justify);
        self
    }

    /// The effective font.
    pub fn font_or_default(&self) -> Font {
        self.font.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from_hex("#ff0000"), Some(Color::from_rgb8(255, 0, 0)));
        assert_eq!(
            Color::from_hex("00ff0080").map(Color::to_rgba8),
            Some([0, 255, 0, 128])
        );
        assert_eq!(Color::from_hex("#fff"), None);
        assert_eq!(Color::from_hex("#gg0000"), None);
    }

    #[test]
    fn test_font_minimum_size() {
        let font = Font::new(FontFamily::Monospace, 1.0);
        assert_eq!(font.size(), Font::MIN_SIZE);
        assert_eq!(Font::default().line_height(), 18.0);
    }

    #[test]
    fn test_font_family_parse() {
        assert_eq!(FontFamily::parse("Serif"), FontFamily::Serif);
        assert_eq!(FontFamily::parse("mono"), FontFamily::Monospace);
        assert_eq!(FontFamily::parse(" Inter "), FontFamily::name("Inter"));
    }

    #[test]
    fn test_justify_offset() {
        assert_eq!(Justify::Left.offset(100.0, 40.0), 0.0);
        assert_eq!(Justify::Center.offset(100.0, 40.0), 30.0);
        assert_eq!(Justify::Right.offset(100.0, 40.0), 60.0);
        assert_eq!(Justify::Right.offset(10.0, 40.0), 0.0);
        assert_eq!(Justify::parse("CENTRE"), Some(Justify::Center));
        assert_eq!(Justify::parse("middle"), None);
    }
}
