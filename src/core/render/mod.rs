//=========================================================================
// Renderer
//=========================================================================
//
// Pure per-frame drawing: (context, frame index, viewport) → DisplayList.
//
// Architecture:
// ```text
//   QuizContext ──> quiz_screen / result_screen ──> DisplayList
//                          │                            │
//                          └─ animation (pure math)     └─> Rasterizer
//                                                            (platform)
// ```
//
// Nothing here touches a window or a pixel buffer. Screens append
// `DrawCommand`s; the platform layer rasterizes the finished list.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod animation;
pub mod quiz_screen;
pub mod result_screen;

//=== Internal Dependencies ===============================================

use crate::core::layout::Rect;

//=== Color ===============================================================

/// Straight (non-premultiplied) RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque gray of the given intensity.
    pub const fn gray(v: u8) -> Self {
        Self::rgb(v, v, v)
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

//=== Stroke ==============================================================

/// Outline style for shapes and polylines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

//=== DrawCommand =========================================================

/// A single drawing instruction, in screen pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fills the whole surface.
    Clear(Color),

    /// Rectangle with rounded corners.
    RoundedRect {
        rect: Rect,
        radius: f32,
        fill: Color,
        stroke: Option<Stroke>,
    },

    /// Filled ellipse inscribed in `rect`.
    Ellipse { rect: Rect, fill: Color },

    /// Open polyline.
    Polyline { points: Vec<(f32, f32)>, stroke: Stroke },

    /// Closed, filled polygon.
    Polygon { points: Vec<(f32, f32)>, fill: Color },

    /// Single line of text centered on `position`.
    Text {
        content: String,
        position: (f32, f32),
        size: f32,
        color: Color,
    },

    /// Text wrapped inside `bounds`, centered horizontally, top aligned.
    /// Lines that do not fit vertically are dropped.
    TextBox {
        content: String,
        bounds: Rect,
        size: f32,
        color: Color,
    },
}

//=== DisplayList =========================================================

/// Ordered drawing commands for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Convenience for a centered single-line label.
    pub fn text(&mut self, content: impl Into<String>, position: (f32, f32), size: f32, color: Color) {
        self.push(DrawCommand::Text {
            content: content.into(),
            position,
            size,
            color,
        });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Contents of every `Text`/`TextBox` command, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { content, .. } | DrawCommand::TextBox { content, .. } => {
                Some(content.as_str())
            }
            _ => None,
        })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
