//=========================================================================
// Input Event Types
//
// Platform-neutral representation of the pointer and window events the
// quiz reacts to.
//
// Responsibilities:
// - Represent mouse buttons and cursor movement in a portable way
// - Carry viewport resizes through the same per-frame batch as input
// - Provide equality and hashing semantics for coalescing
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    StateTracker (processes events)
//         ↓
//    Scenes (hit-test + submit)
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::hash::{Hash, Hasher};

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// The `Other` variant covers side buttons and anything non-standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Any other button.
    Other,
}

//=== InputEvent ==========================================================

/// Low-level event from the platform layer.
///
/// # Equality & Hashing Semantics
///
/// Button events compare by type + button. `MouseMoved` and `Resized`
/// compare equal regardless of payload so that a set keeps only the
/// latest one of each (last position / last size wins).
///
/// ```text
/// MouseButtonDown{Left} == MouseButtonDown{Left}   ✓
/// MouseButtonDown{Left} == MouseButtonUp{Left}     ✗
/// MouseMoved{1,2}       == MouseMoved{3,4}         ✓
/// Resized{800,600}      == Resized{1024,768}       ✓
/// ```
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// Mouse button pressed.
    MouseButtonDown { button: MouseButton },

    /// Mouse button released.
    MouseButtonUp { button: MouseButton },

    /// Cursor moved; screen space pixels, top-left origin.
    MouseMoved { x: f32, y: f32 },

    /// Drawable surface changed size (pixels).
    Resized { width: f32, height: f32 },

}

impl InputEvent {
    /// Returns `true` for events that only the latest instance matters
    /// (cursor position, surface size).
    pub fn is_continuous(&self) -> bool {
        matches!(self, Self::MouseMoved { .. } | Self::Resized { .. })
    }
}

//--- Trait Implementations -----------------------------------------------

impl PartialEq for InputEvent {
    fn eq(&self, other: &Self) -> bool {
        use InputEvent::*;
        match (self, other) {
            (MouseButtonDown { button: a }, MouseButtonDown { button: b }) => a == b,
            (MouseButtonUp { button: a }, MouseButtonUp { button: b }) => a == b,
            // Payload ignored so coalescing keeps only the latest
            (MouseMoved { .. }, MouseMoved { .. }) => true,
            (Resized { .. }, Resized { .. }) => true,
            _ => false,
        }
    }
}

impl Eq for InputEvent {}

/// Hashes discriminant + button. Coordinates and sizes are not hashed
/// (consistent with equality).
impl Hash for InputEvent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);

        if let Self::MouseButtonDown { button } | Self::MouseButtonUp { button } = self {
            button.hash(state);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
