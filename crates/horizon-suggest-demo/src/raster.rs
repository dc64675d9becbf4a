//! CPU rasterizer implementing [`Painter`] over a softbuffer frame.
//!
//! Pixels are `0x00RRGGBB`, the layout softbuffer presents. Widget
//! coordinates are logical; the painter scales them by the window's scale
//! factor. Text is shaped and rasterized with cosmic-text.

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, SwashCache};

use horizon_suggest::geometry::{Point, Rect};
use horizon_suggest::style::{Color, Font, FontFamily};
use horizon_suggest::widget::Painter;

/// Font database and glyph cache shared across frames.
pub struct TextRaster {
    font_system: FontSystem,
    swash_cache: SwashCache,
}

impl TextRaster {
    /// Load system fonts.
    pub fn new() -> Self {
        Self {
            font_system: FontSystem::new(),
            swash_cache: SwashCache::new(),
        }
    }

    /// Shape one line of text at the given scale.
    fn shape(&mut self, text: &str, font: &Font, scale: f32) -> Buffer {
        let metrics = Metrics::new(font.size() * scale, font.line_height() * scale);
        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        buffer.set_size(&mut self.font_system, None, None);
        let attrs = Attrs::new().family(to_cosmic_family(font.family()));
        buffer.set_text(&mut self.font_system, text, attrs, Shaping::Advanced);
        buffer.shape_until_scroll(&mut self.font_system, false);
        buffer
    }

    /// Width of one line of text in physical pixels.
    fn measure(&mut self, text: &str, font: &Font, scale: f32) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        self.shape(text, font, scale)
            .layout_runs()
            .map(|run| run.line_w)
            .fold(0.0, f32::max)
    }
}

impl Default for TextRaster {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TextRaster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextRaster").finish_non_exhaustive()
    }
}

fn to_cosmic_family(family: &FontFamily) -> Family<'_> {
    match family {
        FontFamily::Name(name) => Family::Name(name.as_str()),
        FontFamily::Serif => Family::Serif,
        FontFamily::SansSerif => Family::SansSerif,
        FontFamily::Monospace => Family::Monospace,
    }
}

/// A painter drawing into one frame.
pub struct FramePainter<'a> {
    pixels: &'a mut [u32],
    width: u32,
    height: u32,
    scale: f32,
    text: &'a mut TextRaster,
}

impl<'a> FramePainter<'a> {
    /// Wrap a `width * height` pixel buffer.
    pub fn new(
        pixels: &'a mut [u32],
        width: u32,
        height: u32,
        scale: f32,
        text: &'a mut TextRaster,
    ) -> Self {
        debug_assert_eq!(pixels.len(), (width * height) as usize);
        Self {
            pixels,
            width,
            height,
            scale,
            text,
        }
    }

    /// Fill the whole frame.
    pub fn clear(&mut self, color: Color) {
        let [r, g, b, _] = color.to_rgba8();
        self.pixels.fill(pack(r, g, b));
    }

    fn to_physical(&self, rect: Rect) -> (i32, i32, i32, i32) {
        let x0 = (rect.left() * self.scale).round() as i32;
        let y0 = (rect.top() * self.scale).round() as i32;
        let x1 = (rect.right() * self.scale).round() as i32;
        let y1 = (rect.bottom() * self.scale).round() as i32;
        (x0, y0, x1, y1)
    }
}

impl Painter for FramePainter<'_> {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let (x0, y0, x1, y1) = self.to_physical(rect);
        let rgba = color.to_rgba8();
        for y in y0.max(0)..y1.min(self.height as i32) {
            for x in x0.max(0)..x1.min(self.width as i32) {
                blend(self.pixels, self.width, self.height, x, y, rgba);
            }
        }
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        let w = width.max(0.0).min(rect.width() / 2.0).min(rect.height() / 2.0);
        if w <= 0.0 {
            return;
        }
        let top = Rect::new(rect.left(), rect.top(), rect.width(), w);
        let bottom = Rect::new(rect.left(), rect.bottom() - w, rect.width(), w);
        let left = Rect::new(rect.left(), rect.top() + w, w, rect.height() - 2.0 * w);
        let right = Rect::new(rect.right() - w, rect.top() + w, w, rect.height() - 2.0 * w);
        for edge in [top, bottom, left, right] {
            self.fill_rect(edge, color);
        }
    }

    fn draw_text(&mut self, text: &str, origin: Point, font: &Font, color: Color) {
        if text.is_empty() {
            return;
        }
        let buffer = self.text.shape(text, font, self.scale);
        let ox = (origin.x * self.scale).round() as i32;
        let oy = (origin.y * self.scale).round() as i32;
        let [r, g, b, a] = color.to_rgba8();

        let (width, height) = (self.width, self.height);
        let pixels = &mut *self.pixels;
        let text_raster = &mut *self.text;
        buffer.draw(
            &mut text_raster.font_system,
            &mut text_raster.swash_cache,
            cosmic_text::Color::rgba(r, g, b, a),
            |x, y, w, h, glyph_color| {
                let rgba = [glyph_color.r(), glyph_color.g(), glyph_color.b(), glyph_color.a()];
                for dy in 0..h as i32 {
                    for dx in 0..w as i32 {
                        blend(pixels, width, height, ox + x + dx, oy + y + dy, rgba);
                    }
                }
            },
        );
    }

    fn text_width(&mut self, text: &str, font: &Font) -> f32 {
        self.text.measure(text, font, self.scale) / self.scale
    }
}

fn pack(r: u8, g: u8, b: u8) -> u32 {
    (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
}

/// Source-over blend of one straight-alpha pixel.
fn blend(pixels: &mut [u32], width: u32, height: u32, x: i32, y: i32, [r, g, b, a]: [u8; 4]) {
    if x < 0 || y < 0 || x >= width as i32 || y >= height as i32 || a == 0 {
        return;
    }
    let index = y as usize * width as usize + x as usize;
    let Some(dst) = pixels.get_mut(index) else {
        return;
    };
    if a == 255 {
        *dst = pack(r, g, b);
        return;
    }
    let mix = |src: u8, dst: u32| -> u8 {
        let alpha = u32::from(a);
        ((u32::from(src) * alpha + dst * (255 - alpha) + 127) / 255) as u8
    };
    let (dr, dg, db) = ((*dst >> 16) & 0xff, (*dst >> 8) & 0xff, *dst & 0xff);
    *dst = pack(mix(r, dr), mix(g, dg), mix(b, db));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_opaque_and_half() {
        let mut pixels = vec![0u32; 4];
        blend(&mut pixels, 2, 2, 1, 0, [255, 0, 0, 255]);
        assert_eq!(pixels[1], 0x00ff_0000);

        let mut pixels = vec![0x00ff_ffff; 1];
        blend(&mut pixels, 1, 1, 0, 0, [0, 0, 0, 128]);
        assert_eq!(pixels[0], 0x007f_7f7f);
    }

    #[test]
    fn test_blend_ignores_out_of_bounds() {
        let mut pixels = vec![0u32; 4];
        blend(&mut pixels, 2, 2, -1, 0, [255, 255, 255, 255]);
        blend(&mut pixels, 2, 2, 2, 1, [255, 255, 255, 255]);
        assert!(pixels.iter().all(|&p| p == 0));
    }

    #[test]
    fn test_fill_rect_scaled_and_clipped() {
        let mut text = TextRaster::new();
        let mut pixels = vec![0u32; 16];
        {
            let mut painter = FramePainter::new(&mut pixels, 4, 4, 2.0, &mut text);
            painter.fill_rect(Rect::new(1.0, 1.0, 5.0, 5.0), Color::WHITE);
        }
        // Logical (1,1) is physical (2,2); the rest is clipped.
        let lit: Vec<usize> = (0..16).filter(|&i| pixels[i] != 0).collect();
        assert_eq!(lit, [10, 11, 14, 15]);
    }

    #[test]
    fn test_stroke_leaves_interior() {
        let mut text = TextRaster::new();
        let mut pixels = vec![0u32; 25];
        {
            let mut painter = FramePainter::new(&mut pixels, 5, 5, 1.0, &mut text);
            painter.stroke_rect(Rect::new(0.0, 0.0, 5.0, 5.0), Color::WHITE, 1.0);
        }
        assert_eq!(pixels[12], 0);
        assert_eq!(pixels.iter().filter(|&&p| p != 0).count(), 16);
    }
}
