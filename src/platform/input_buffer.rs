//=========================================================================
// Input Buffer
//
// Collects platform events between two frames and splits them into two
// categories: discrete and continuous.
//
// Responsibilities:
// - Store incoming pointer events for the current frame
// - Deduplicate repeated discrete inputs (e.g., a doubled button down)
// - Coalesce continuous inputs (cursor moves, resizes): latest wins
// - Hand the whole frame to the core via `drain()`
//
// Notes:
// Continuous events are drained before discrete ones, so a press in a
// frame is hit-tested against that frame's final cursor position and
// viewport size.
//=========================================================================

//=== Standard Library Imports ============================================
use std::collections::HashSet;

//=== Internal Modules ====================================================
use crate::core::input::InputEvent;

//=== InputBuffer Struct ==================================================
//
// Internally maintains:
// - `discrete`: ordered, one-shot inputs (button down/up)
// - `continuous`: last-known value per continuous kind (move, resize)
//
pub(crate) struct InputBuffer {
    discrete: Vec<InputEvent>,
    continuous: HashSet<InputEvent>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------
    pub(crate) fn new() -> Self {
        const DISCRETE_BASE: usize = 16;
        const CONTINUOUS_BASE: usize = 4;

        Self {
            discrete: Vec::with_capacity(DISCRETE_BASE),
            continuous: HashSet::with_capacity(CONTINUOUS_BASE),
        }
    }

    //--- Event Handling ---------------------------------------------------
    //
    // Routes an event to the matching store. Continuous events replace any
    // previous one of the same kind; consecutive duplicate discrete events
    // are dropped.
    //
    pub(crate) fn push(&mut self, event: InputEvent) {
        if event.is_continuous() {
            self.continuous.replace(event);
        } else if self.discrete.last() != Some(&event) {
            self.discrete.push(event);
        }
    }

    //--- Drain ------------------------------------------------------------
    //
    // Returns this frame's events (continuous first) and clears the buffer.
    //
    pub(crate) fn drain(&mut self) -> Vec<InputEvent> {
        let mut events: Vec<InputEvent> = self.continuous.drain().collect();
        events.append(&mut self.discrete);
        events
    }

    //--- Utilities --------------------------------------------------------
    pub(crate) fn len(&self) -> usize {
        self.discrete.len() + self.continuous.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.discrete.is_empty() && self.continuous.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
