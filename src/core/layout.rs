//=========================================================================
// Hit-Test Layout
//=========================================================================
//
// Screen-space rectangles for the three option buttons.
//
// Layout (fractions of the viewport):
// ```text
//   ┌──────────────────────────────────────────────┐
//   │                                              │
//   │     ┌────────┐  ┌────────┐  ┌────────┐       │  row center: 0.65 h
//   │     │   A    │  │   B    │  │   C    │       │  height:     0.10 h
//   │     └────────┘  └────────┘  └────────┘       │
//   │       0.25 w  0.02 w                         │
//   └──────────────────────────────────────────────┘
// ```
//
// Recomputed every frame from the current viewport; nothing is cached, so
// a resize between frames only changes geometry.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::quiz::OptionKey;

//=== Layout Constants ====================================================

const BUTTON_WIDTH_RATIO: f32 = 0.25;
const BUTTON_HEIGHT_RATIO: f32 = 0.10;
const GAP_RATIO: f32 = 0.02;
const ROW_CENTER_RATIO: f32 = 0.65;

//=== Viewport ============================================================

/// Drawable surface size in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Shorter of the two sides; used to scale text.
    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }
}

//=== Rect ================================================================

/// Center-anchored rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub cx: f32,
    pub cy: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn from_center(cx: f32, cy: f32, w: f32, h: f32) -> Self {
        Self { cx, cy, w, h }
    }

    pub fn from_top_left(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            cx: x + w / 2.0,
            cy: y + h / 2.0,
            w,
            h,
        }
    }

    pub fn left(&self) -> f32 {
        self.cx - self.w / 2.0
    }

    pub fn right(&self) -> f32 {
        self.cx + self.w / 2.0
    }

    pub fn top(&self) -> f32 {
        self.cy - self.h / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.cy + self.h / 2.0
    }

    /// Strict containment: points on an edge are outside.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x > self.left() && x < self.right() && y > self.top() && y < self.bottom()
    }

    /// Returns `true` if the interiors of the two rectangles intersect.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

//=== OptionLayout ========================================================

/// Per-frame mapping from option key to its clickable rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionLayout {
    rects: [Rect; 3],
}

impl OptionLayout {
    /// Computes the single centered row of equally sized buttons.
    pub fn compute(viewport: Viewport) -> Self {
        let w = viewport.width * BUTTON_WIDTH_RATIO;
        let h = viewport.height * BUTTON_HEIGHT_RATIO;
        let gap = viewport.width * GAP_RATIO;
        let cy = viewport.height * ROW_CENTER_RATIO;

        let total = w * 3.0 + gap * 2.0;
        let start = (viewport.width - total) / 2.0;

        let rect = |slot: usize| {
            let cx = start + (w + gap) * slot as f32 + w / 2.0;
            Rect::from_center(cx, cy, w, h)
        };

        Self {
            rects: [rect(0), rect(1), rect(2)],
        }
    }

    /// Rectangle of the given option.
    pub fn rect(&self, key: OptionKey) -> Rect {
        self.rects[key.index()]
    }

    /// Options with their rectangles, left to right.
    pub fn iter(&self) -> impl Iterator<Item = (OptionKey, Rect)> + '_ {
        OptionKey::ALL.into_iter().map(move |key| (key, self.rect(key)))
    }

    /// Resolves a pointer position to the option under it, if any.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<OptionKey> {
        self.iter()
            .find(|(_, rect)| rect.contains(x, y))
            .map(|(key, _)| key)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
