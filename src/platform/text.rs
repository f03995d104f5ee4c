//=========================================================================
// Text Rendering
//=========================================================================
//
// Glyph layout and coverage blending for the software rasterizer.
//
// Architecture:
//   fontdb (locate system face) → ab_glyph FontVec → outline per glyph
//         ↓
//   coverage(x, y) ──blend──> tiny-skia Pixmap (premultiplied RGBA)
//
// Line wrapping is a pure function over a width measure, so it is tested
// without any font present.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::path::Path;

//=== External Crates =====================================================

use ab_glyph::{point, Font, FontVec, GlyphId, PxScale, ScaleFont};
use log::{debug, info};
use tiny_skia::{Pixmap, PremultipliedColorU8};

//=== Internal Dependencies ===============================================

use super::PlatformError;
use crate::core::render::Color;

//=== Line Wrapping =======================================================

/// Greedy word wrap.
///
/// Breaks on whitespace; a word wider than `max_width` on its own is split
/// between characters (this also covers scripts written without spaces).
/// Explicit newlines always start a new line.
pub(crate) fn wrap_text(text: &str, max_width: f32, measure: impl Fn(&str) -> f32) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();

        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };

            if measure(&candidate) <= max_width {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }

            // Word alone may still be too wide: split by character
            for ch in word.chars() {
                current.push(ch);
                if measure(&current) > max_width && current.chars().count() > 1 {
                    current.pop();
                    lines.push(std::mem::take(&mut current));
                    current.push(ch);
                }
            }
        }

        lines.push(current);
    }

    lines
}

//=== TextRenderer ========================================================

/// A single loaded font face used for every label.
pub(crate) struct TextRenderer {
    font: FontVec,
}

impl TextRenderer {
    //--- Construction -----------------------------------------------------

    /// Loads a font file from disk (TTF/OTF; first face of a collection).
    pub(crate) fn from_path(path: &Path) -> Result<Self, PlatformError> {
        let data = std::fs::read(path).map_err(|source| PlatformError::FontRead {
            path: path.to_path_buf(),
            source,
        })?;
        let font = FontVec::try_from_vec(data).map_err(|_| PlatformError::FontParse)?;

        info!(target: "platform", "Using font {}", path.display());
        Ok(Self { font })
    }

    /// Picks a sans-serif face from the installed system fonts, falling
    /// back to any face when no sans-serif family resolves.
    pub(crate) fn from_system() -> Result<Self, PlatformError> {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        debug!(target: "platform", "Font database holds {} faces", db.len());

        let query = fontdb::Query {
            families: &[fontdb::Family::SansSerif],
            ..fontdb::Query::default()
        };

        let id = db
            .query(&query)
            .or_else(|| db.faces().next().map(|face| face.id))
            .ok_or(PlatformError::FontNotFound)?;

        let font = db
            .with_face_data(id, |data, index| {
                FontVec::try_from_vec_and_index(data.to_vec(), index)
            })
            .ok_or(PlatformError::FontNotFound)?
            .map_err(|_| PlatformError::FontParse)?;

        if let Some(face) = db.face(id) {
            info!(
                target: "platform",
                "Using system font {}",
                face.families.first().map(|(name, _)| name.as_str()).unwrap_or("<unnamed>")
            );
        }
        Ok(Self { font })
    }

    //--- Metrics ----------------------------------------------------------

    /// Advance width of `text` at `size` pixels, including kerning.
    pub(crate) fn measure(&self, text: &str, size: f32) -> f32 {
        let scaled = self.font.as_scaled(PxScale::from(size));
        let mut width = 0.0;
        let mut previous: Option<GlyphId> = None;

        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(prev) = previous {
                width += scaled.kern(prev, id);
            }
            width += scaled.h_advance(id);
            previous = Some(id);
        }
        width
    }

    /// Ascent, descent (negative), and line advance at `size` pixels.
    fn vertical_metrics(&self, size: f32) -> (f32, f32, f32) {
        let scaled = self.font.as_scaled(PxScale::from(size));
        let (ascent, descent) = (scaled.ascent(), scaled.descent());
        (ascent, descent, ascent - descent + scaled.line_gap())
    }

    //--- Drawing ----------------------------------------------------------

    /// Draws one line centered on `center`, horizontally and vertically.
    pub(crate) fn draw_centered(
        &self,
        pixmap: &mut Pixmap,
        text: &str,
        center: (f32, f32),
        size: f32,
        color: Color,
    ) {
        let (ascent, descent, _) = self.vertical_metrics(size);
        let left = center.0 - self.measure(text, size) / 2.0;
        let baseline = center.1 + (ascent + descent) / 2.0;
        self.draw_line(pixmap, text, (left, baseline), size, color);
    }

    /// Draws `text` wrapped into the box starting at (`left`, `top`).
    ///
    /// Each line is centered within `width`; lines whose descent would
    /// pass `top + height` are not drawn.
    pub(crate) fn draw_wrapped(
        &self,
        pixmap: &mut Pixmap,
        text: &str,
        (left, top, width, height): (f32, f32, f32, f32),
        size: f32,
        color: Color,
    ) {
        let (ascent, descent, advance) = self.vertical_metrics(size);
        let lines = wrap_text(text, width, |s| self.measure(s, size));

        let mut baseline = top + ascent;
        for line in lines {
            if baseline - descent > top + height {
                break;
            }
            let x = left + (width - self.measure(&line, size)) / 2.0;
            self.draw_line(pixmap, &line, (x, baseline), size, color);
            baseline += advance;
        }
    }

    fn draw_line(
        &self,
        pixmap: &mut Pixmap,
        text: &str,
        (mut x, baseline): (f32, f32),
        size: f32,
        color: Color,
    ) {
        let scaled = self.font.as_scaled(PxScale::from(size));
        let mut previous: Option<GlyphId> = None;

        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(prev) = previous {
                x += scaled.kern(prev, id);
            }

            let glyph = id.with_scale_and_position(PxScale::from(size), point(x, baseline));
            if let Some(outlined) = self.font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                let (ox, oy) = (bounds.min.x as i32, bounds.min.y as i32);
                outlined.draw(|gx, gy, coverage| {
                    blend_pixel(pixmap, ox + gx as i32, oy + gy as i32, color, coverage);
                });
            }

            x += scaled.h_advance(id);
            previous = Some(id);
        }
    }
}

//=== Pixel Blending ======================================================

/// Source-over blend of `color` at `coverage` into one premultiplied pixel.
///
/// Out-of-bounds coordinates are ignored.
pub(crate) fn blend_pixel(pixmap: &mut Pixmap, x: i32, y: i32, color: Color, coverage: f32) {
    let (width, height) = (pixmap.width() as i32, pixmap.height() as i32);
    if x < 0 || y < 0 || x >= width || y >= height {
        return;
    }

    let alpha = (color.a as f32 / 255.0) * coverage.clamp(0.0, 1.0);
    if alpha <= 0.0 {
        return;
    }

    let index = (y * width + x) as usize;
    let pixels = pixmap.pixels_mut();
    let dst = pixels[index];
    let keep = 1.0 - alpha;

    let out_a = (alpha * 255.0 + dst.alpha() as f32 * keep).round().min(255.0) as u8;
    let channel = |src: u8, dst: u8| -> u8 {
        let value = (src as f32 * alpha + dst as f32 * keep).round();
        (value as u8).min(out_a)
    };

    let blended = PremultipliedColorU8::from_rgba(
        channel(color.r, dst.red()),
        channel(color.g, dst.green()),
        channel(color.b, dst.blue()),
        out_a,
    );
    if let Some(pixel) = blended {
        pixels[index] = pixel;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
