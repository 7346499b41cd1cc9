//! Text rasterization service over rusttype.
//!
//! Strings are measured and baked into coverage textures at group-rebuild
//! time; the retained scene owns the result, so per-frame replay and value
//! updates never touch the font.

use rusttype::{point, Font, PositionedGlyph, Scale};

use crate::scene::{TextSource, TextTexture};

/// A loaded font implementing [`TextSource`].
pub struct FontBook {
    font: Font<'static>,
}

impl FontBook {
    /// `None` when the bytes are not a parseable font.
    pub fn new(data: Vec<u8>) -> Option<Self> {
        Font::try_from_vec(data).map(|font| Self { font })
    }
}

impl TextSource for FontBook {
    fn rasterize(&self, text: &str, px: f32) -> Option<TextTexture> {
        if text.is_empty() {
            return None;
        }
        let scale = Scale::uniform(px);
        let v_metrics = self.font.v_metrics(scale);
        let glyphs: Vec<PositionedGlyph> = self
            .font
            .layout(text, scale, point(0.0, v_metrics.ascent))
            .collect();

        let (min_x, max_x, min_y, max_y) = glyphs
            .iter()
            .filter_map(|g| g.pixel_bounding_box())
            .fold(
                (i32::MAX, i32::MIN, i32::MAX, i32::MIN),
                |(min_x, max_x, min_y, max_y), bb| {
                    (
                        min_x.min(bb.min.x),
                        max_x.max(bb.max.x),
                        min_y.min(bb.min.y),
                        max_y.max(bb.max.y),
                    )
                },
            );
        if min_x >= max_x || min_y >= max_y {
            return None;
        }

        let width = (max_x - min_x) as u32;
        let height = (max_y - min_y) as u32;
        let mut coverage = vec![0u8; width as usize * height as usize];
        for glyph in glyphs {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, v| {
                    let x = gx as i32 + bb.min.x - min_x;
                    let y = gy as i32 + bb.min.y - min_y;
                    if x >= 0 && x < width as i32 && y >= 0 && y < height as i32 {
                        let idx = y as usize * width as usize + x as usize;
                        let c = (v * 255.0).round() as u8;
                        coverage[idx] = coverage[idx].max(c);
                    }
                });
            }
        }
        Some(TextTexture {
            width,
            height,
            coverage,
        })
    }
}
