//! Text rendering over ab_glyph with an embedded monospace font.

use ab_glyph::{Font, FontRef, PxScale};
use std::sync::OnceLock;

const FONT_DATA: &[u8] = include_bytes!("../assets/DejaVuSansMono.ttf");
const BASE_SIZE: f32 = 14.0;

pub struct FontRenderer {
    font: FontRef<'static>,
}

static FONT_RENDERER: OnceLock<FontRenderer> = OnceLock::new();

pub fn get_font() -> &'static FontRenderer {
    FONT_RENDERER.get_or_init(FontRenderer::new)
}

impl FontRenderer {
    fn new() -> Self {
        let font = FontRef::try_from_slice(FONT_DATA)
            .expect("embedded DejaVuSansMono.ttf is not a valid font");
        Self { font }
    }

    /// Advance width and glyph height in pixels at the given scale.
    /// The font is monospace, so one advance fits every character.
    pub fn char_dimensions(&self, scale: f32) -> (usize, usize) {
        let px_scale = PxScale::from(BASE_SIZE * scale);
        let units = self.font.units_per_em().unwrap_or(1000.0);
        let glyph_id = self.font.glyph_id('M');
        let h_advance = self.font.h_advance_unscaled(glyph_id) * px_scale.x / units;
        let v_height = self.font.height_unscaled() * px_scale.y / units;
        (h_advance as usize, v_height as usize)
    }

    pub fn line_height(&self, scale: f32) -> usize {
        let (_, height) = self.char_dimensions(scale);
        // 20% leading between lines.
        (height as f32 * 1.2) as usize
    }

    pub fn text_width(&self, text: &str, scale: f32) -> usize {
        let (char_width, _) = self.char_dimensions(scale);
        text.chars().count() * char_width
    }

    pub fn draw_char(
        &self,
        frame: &mut [u8],
        ch: char,
        x: usize,
        y: usize,
        color: [u8; 4],
        frame_width: usize,
        scale: f32,
    ) {
        let px_scale = PxScale::from(BASE_SIZE * scale);
        let glyph = self.font.glyph_id(ch).with_scale(px_scale);
        let Some(outlined) = self.font.outline_glyph(glyph) else {
            return;
        };
        let bounds = outlined.px_bounds();
        let frame_height = frame.len() / (frame_width * 4);

        outlined.draw(|gx, gy, coverage| {
            if coverage <= 0.0 {
                return;
            }
            let px = x as i32 + gx as i32 + bounds.min.x as i32;
            let py = y as i32 + gy as i32 + bounds.min.y as i32;
            if px < 0 || py < 0 {
                return;
            }
            let (px, py) = (px as usize, py as usize);
            if px >= frame_width || py >= frame_height {
                return;
            }
            let idx = (py * frame_width + px) * 4;
            let alpha = (coverage * 255.0) as u16;
            let inv = 255 - alpha;
            for channel in 0..3 {
                let blended =
                    (frame[idx + channel] as u16 * inv + color[channel] as u16 * alpha) / 255;
                frame[idx + channel] = blended as u8;
            }
            frame[idx + 3] = 255;
        });
    }

    /// Draws `text` left-aligned at (x, y) where y is the top of the
    /// line box. Stops at the right edge of the frame.
    pub fn draw_text(
        &self,
        frame: &mut [u8],
        text: &str,
        x: usize,
        y: usize,
        color: [u8; 4],
        frame_width: usize,
        scale: f32,
    ) {
        let (char_width, _) = self.char_dimensions(scale);
        let mut current_x = x;
        for ch in text.chars() {
            if current_x + char_width > frame_width {
                break;
            }
            self.draw_char(frame, ch, current_x, y, color, frame_width, scale);
            current_x += char_width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_font_loads() {
        let (width, height) = get_font().char_dimensions(1.0);
        assert!(width > 0);
        assert!(height > 0);
    }

    #[test]
    fn monospace_width_scales_with_length() {
        let font = get_font();
        assert_eq!(font.text_width("ab", 1.0), 2 * font.text_width("a", 1.0));
    }

    #[test]
    fn drawing_stays_inside_the_frame() {
        let width = 20usize;
        let mut frame = vec![0u8; width * 20 * 4];
        // Off the right edge: must not touch the buffer.
        get_font().draw_text(
            &mut frame,
            "xyz",
            width - 1,
            0,
            [255, 255, 255, 255],
            width,
            1.0,
        );
        assert!(frame.iter().all(|&b| b == 0));
    }
}
