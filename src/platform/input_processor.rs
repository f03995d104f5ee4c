//=========================================================================
// Input Processor
//=========================================================================
//
// Converts Winit window events into engine InputEvents.
//
// Architecture:
//   Winit Events → InputProcessor → InputEvent (engine type) → InputBuffer
//
// Only pointer and resize events are converted; keyboard input is not
// part of the quiz and is dropped before it reaches the buffer.
//
// Positions and sizes leave here in logical pixels. The core lays out
// in logical units and the rasterizer scales back up, so a HiDPI window
// shows the same proportions as a standard one.
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    dpi::{PhysicalPosition, PhysicalSize},
    event::{ElementState, MouseButton as WinitMouseButton},
};

//=== Internal Dependencies ===============================================

use crate::core::input::{InputEvent, MouseButton};

//=== Event Conversion ====================================================

/// Converts a Winit mouse button transition to an InputEvent.
pub(crate) fn process_mouse_button(button: WinitMouseButton, state: ElementState) -> InputEvent {
    let button = MouseButton::from(button);

    match state {
        ElementState::Pressed => InputEvent::MouseButtonDown { button },
        ElementState::Released => InputEvent::MouseButtonUp { button },
    }
}

/// Creates a cursor move event in logical pixels (top-left origin).
pub(crate) fn process_mouse_move(position: PhysicalPosition<f64>, scale_factor: f64) -> InputEvent {
    let position = position.to_logical::<f32>(scale_factor);
    InputEvent::MouseMoved {
        x: position.x,
        y: position.y,
    }
}

/// Creates a resize event from the physical surface size, in logical
/// pixels.
pub(crate) fn process_resize(size: PhysicalSize<u32>, scale_factor: f64) -> InputEvent {
    let size = size.to_logical::<f32>(scale_factor);
    InputEvent::Resized {
        width: size.width,
        height: size.height,
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Maps Winit buttons; back/forward/numbered buttons become `Other`.
impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
