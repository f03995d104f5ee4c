//=========================================================================
// Rasterizer
//=========================================================================
//
// Turns a frame's DisplayList into pixels.
//
// Architecture:
//   DisplayList ──paint()──> tiny-skia Pixmap ──copy_to()──> softbuffer
//                  │            (premultiplied RGBA)          (0RGB u32)
//                  └─ Text / TextBox ──> TextRenderer
//
// The pixmap always matches the window's physical size; `resize()` is
// called before every frame and only reallocates when the size changed.
// Commands arrive in logical pixels and are multiplied by the window's
// scale factor while painting.
//
//=========================================================================

//=== External Crates =====================================================

use log::{debug, trace};
use tiny_skia::{
    FillRule, Paint, Path, PathBuilder, Pixmap, Stroke as SkiaStroke, Transform,
};

//=== Internal Dependencies ===============================================

use super::text::TextRenderer;
use super::PlatformError;
use crate::core::layout::Rect;
use crate::core::render::{Color, DisplayList, DrawCommand, Stroke};

//=== Rasterizer ==========================================================

/// Software canvas plus the font used for labels.
pub(crate) struct Rasterizer {
    pixmap: Pixmap,
    text: TextRenderer,
}

impl Rasterizer {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(text: TextRenderer, width: u32, height: u32) -> Result<Self, PlatformError> {
        Ok(Self {
            pixmap: allocate(width, height)?,
            text,
        })
    }

    //--- Frame ------------------------------------------------------------

    /// Matches the canvas to the surface size. Zero sizes are clamped to
    /// one pixel (minimized windows).
    pub(crate) fn resize(&mut self, width: u32, height: u32) -> Result<(), PlatformError> {
        let (width, height) = (width.max(1), height.max(1));
        if (self.pixmap.width(), self.pixmap.height()) != (width, height) {
            debug!(target: "platform::raster", "Canvas resized to {}x{}", width, height);
            self.pixmap = allocate(width, height)?;
        }
        Ok(())
    }

    /// Paints every command in order, `scale` physical pixels per
    /// logical pixel.
    pub(crate) fn draw(&mut self, list: &DisplayList, scale: f32) {
        for command in list.commands() {
            paint(&mut self.pixmap, command, Some(&self.text), scale);
        }
    }

    /// Copies the canvas into a 0RGB surface buffer of the same size.
    pub(crate) fn copy_to(&self, buffer: &mut [u32]) {
        copy_pixels(&self.pixmap, buffer);
    }
}

fn allocate(width: u32, height: u32) -> Result<Pixmap, PlatformError> {
    Pixmap::new(width.max(1), height.max(1)).ok_or(PlatformError::Canvas { width, height })
}

//=== Painting ============================================================

/// Paints one logical-pixel command at `scale`. Text commands are skipped
/// when no font is given.
pub(crate) fn paint(
    pixmap: &mut Pixmap,
    command: &DrawCommand,
    text: Option<&TextRenderer>,
    scale: f32,
) {
    let transform = Transform::from_scale(scale, scale);

    match command {
        DrawCommand::Clear(color) => pixmap.fill(to_skia(*color)),

        DrawCommand::RoundedRect { rect, radius, fill, stroke } => {
            let Some(path) = rounded_rect_path(rect, *radius) else {
                return;
            };
            fill_path(pixmap, &path, *fill, transform);
            if let Some(stroke) = stroke {
                stroke_path(pixmap, &path, stroke, transform);
            }
        }

        DrawCommand::Ellipse { rect, fill } => {
            let oval = tiny_skia::Rect::from_xywh(rect.left(), rect.top(), rect.w, rect.h)
                .and_then(PathBuilder::from_oval);
            if let Some(path) = oval {
                fill_path(pixmap, &path, *fill, transform);
            }
        }

        DrawCommand::Polyline { points, stroke } => {
            if let Some(path) = polyline_path(points, false) {
                stroke_path(pixmap, &path, stroke, transform);
            }
        }

        DrawCommand::Polygon { points, fill } => {
            if let Some(path) = polyline_path(points, true) {
                fill_path(pixmap, &path, *fill, transform);
            }
        }

        DrawCommand::Text { content, position, size, color } => match text {
            Some(text) => text.draw_centered(
                pixmap,
                content,
                (position.0 * scale, position.1 * scale),
                size * scale,
                *color,
            ),
            None => trace!(target: "platform::raster", "No font, skipping text"),
        },

        DrawCommand::TextBox { content, bounds, size, color } => match text {
            Some(text) => text.draw_wrapped(
                pixmap,
                content,
                (
                    bounds.left() * scale,
                    bounds.top() * scale,
                    bounds.w * scale,
                    bounds.h * scale,
                ),
                size * scale,
                *color,
            ),
            None => trace!(target: "platform::raster", "No font, skipping text box"),
        },
    }
}

fn fill_path(pixmap: &mut Pixmap, path: &Path, color: Color, transform: Transform) {
    pixmap.fill_path(path, &solid(color), FillRule::Winding, transform, None);
}

/// The transform also scales the stroke width.
fn stroke_path(pixmap: &mut Pixmap, path: &Path, stroke: &Stroke, transform: Transform) {
    let style = SkiaStroke {
        width: stroke.width,
        line_join: tiny_skia::LineJoin::Round,
        line_cap: tiny_skia::LineCap::Round,
        ..SkiaStroke::default()
    };
    pixmap.stroke_path(path, &solid(stroke.color), &style, transform, None);
}

fn solid(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}

fn to_skia(color: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a)
}

//=== Paths ===============================================================

/// Rounded rectangle with quadratic corners; the radius is clamped to half
/// the shorter side.
fn rounded_rect_path(rect: &Rect, radius: f32) -> Option<Path> {
    let r = radius.min(rect.w / 2.0).min(rect.h / 2.0).max(0.0);
    let (l, t, rt, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());

    let mut pb = PathBuilder::new();
    pb.move_to(l + r, t);
    pb.line_to(rt - r, t);
    pb.quad_to(rt, t, rt, t + r);
    pb.line_to(rt, b - r);
    pb.quad_to(rt, b, rt - r, b);
    pb.line_to(l + r, b);
    pb.quad_to(l, b, l, b - r);
    pb.line_to(l, t + r);
    pb.quad_to(l, t, l + r, t);
    pb.close();
    pb.finish()
}

fn polyline_path(points: &[(f32, f32)], closed: bool) -> Option<Path> {
    let minimum = if closed { 3 } else { 2 };
    if points.len() < minimum {
        return None;
    }

    let mut pb = PathBuilder::new();
    let (x, y) = points[0];
    pb.move_to(x, y);
    for &(x, y) in &points[1..] {
        pb.line_to(x, y);
    }
    if closed {
        pb.close();
    }
    pb.finish()
}

//=== Presentation ========================================================

/// Writes demultiplied pixels as 0RGB words. Extra buffer entries are left
/// untouched.
pub(crate) fn copy_pixels(pixmap: &Pixmap, buffer: &mut [u32]) {
    for (dst, src) in buffer.iter_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *dst = (c.red() as u32) << 16 | (c.green() as u32) << 8 | c.blue() as u32;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
