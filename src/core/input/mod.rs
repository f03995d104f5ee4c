//=========================================================================
// Input
//=========================================================================
//
// Platform-neutral pointer events and the per-frame state tracker that
// scenes query for hover position and clicks.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event;
mod state_tracker;

//=== Public API ==========================================================

pub use event::{InputEvent, MouseButton};
pub use state_tracker::StateTracker;
