//=========================================================================
// State Tracker
//=========================================================================
//
// Pointer state with per-frame delta tracking.
//
// Architecture:
//   InputEvent → process_events() → HashSet (buttons held) → query
//
// Frame lifecycle: clear() → process_events() → query
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, MouseButton};

//=== StateTracker ========================================================

/// Tracks persistent state (buttons held, cursor position) and the
/// per-frame press delta.
#[derive(Debug, Default)]
pub struct StateTracker {
    //--- Persistent State (survives frame boundary) ----------------------
    mouse_buttons_down: HashSet<MouseButton>,
    mouse_position: (f32, f32),

    //--- Frame Deltas (reset each frame via clear()) --------------------
    mouse_buttons_pressed_this_frame: HashSet<MouseButton>,
}

impl StateTracker {
    /// Creates a tracker with no buttons held and the cursor at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    //--- Frame Processing -------------------------------------------------

    /// Clears frame-specific deltas (pressed flags).
    pub fn clear(&mut self) {
        self.mouse_buttons_pressed_this_frame.clear();
    }

    /// Processes one frame of events, in order.
    pub fn process_events(&mut self, events: &[InputEvent]) {
        for event in events {
            self.process_event(event);
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn process_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::MouseButtonDown { button } => {
                // Only mark as pressed if it wasn't already down
                if self.mouse_buttons_down.insert(*button) {
                    self.mouse_buttons_pressed_this_frame.insert(*button);
                }
            }

            InputEvent::MouseButtonUp { button } => {
                self.mouse_buttons_down.remove(button);
            }

            InputEvent::MouseMoved { x, y } => {
                self.mouse_position = (*x, *y);
            }

            // Viewport changes are applied by the context, not tracked here
            InputEvent::Resized { .. } => {}
        }
    }

    //=====================================================================
    // Query API
    //=====================================================================

    /// Returns `true` if the button transitioned UP → DOWN this frame.
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.mouse_buttons_pressed_this_frame.contains(&button)
    }

    /// Cursor position in screen coordinates (pixels, top-left origin).
    pub fn mouse_position(&self) -> (f32, f32) {
        self.mouse_position
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn down(button: MouseButton) -> InputEvent {
        InputEvent::MouseButtonDown { button }
    }

    fn up(button: MouseButton) -> InputEvent {
        InputEvent::MouseButtonUp { button }
    }

    #[test]
    fn press_is_reported_for_one_frame() {
        let mut tracker = StateTracker::new();

        tracker.clear();
        tracker.process_events(&[down(MouseButton::Left)]);
        assert!(tracker.is_button_pressed(MouseButton::Left));

        tracker.clear();
        tracker.process_events(&[]);
        assert!(!tracker.is_button_pressed(MouseButton::Left), "Pressed lasts one frame");
    }

    #[test]
    fn repeated_down_without_up_is_not_a_new_press() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[down(MouseButton::Left)]);

        tracker.clear();
        tracker.process_events(&[down(MouseButton::Left)]);
        assert!(!tracker.is_button_pressed(MouseButton::Left));
    }

    #[test]
    fn release_rearms_the_button() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[down(MouseButton::Right)]);

        tracker.clear();
        tracker.process_events(&[up(MouseButton::Right)]);
        assert!(!tracker.is_button_pressed(MouseButton::Right));

        tracker.clear();
        tracker.process_events(&[down(MouseButton::Right)]);
        assert!(tracker.is_button_pressed(MouseButton::Right), "Down after up is a new press");
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[up(MouseButton::Left)]);
        assert!(!tracker.is_button_pressed(MouseButton::Left));
    }

    #[test]
    fn press_and_release_in_same_frame_still_counts() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[down(MouseButton::Left), up(MouseButton::Left)]);
        assert!(tracker.is_button_pressed(MouseButton::Left));

        tracker.clear();
        tracker.process_events(&[down(MouseButton::Left)]);
        assert!(tracker.is_button_pressed(MouseButton::Left));
    }

    #[test]
    fn buttons_are_tracked_independently() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[down(MouseButton::Left)]);
        assert!(tracker.is_button_pressed(MouseButton::Left));
        assert!(!tracker.is_button_pressed(MouseButton::Right));
    }

    #[test]
    fn mouse_position_persists_across_frames() {
        let mut tracker = StateTracker::new();
        assert_eq!(tracker.mouse_position(), (0.0, 0.0));

        tracker.process_events(&[InputEvent::MouseMoved { x: 12.5, y: 40.0 }]);
        tracker.clear();
        assert_eq!(tracker.mouse_position(), (12.5, 40.0));
    }

    #[test]
    fn resize_does_not_touch_pointer_state() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[
            InputEvent::MouseMoved { x: 5.0, y: 5.0 },
            InputEvent::Resized { width: 10.0, height: 10.0 },
        ]);
        assert_eq!(tracker.mouse_position(), (5.0, 5.0));
    }
}
