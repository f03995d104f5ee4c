//=========================================================================
// Scene System
//=========================================================================
//
// One scene per quiz phase; the manager keeps exactly one active.
//
// Architecture:
//   SceneManager
//     ├─ scenes: HashMap<S, Box<dyn Scene>>
//     └─ active: Option<S>
//
// Flow per tick:
//   switch_to(phase) → on_exit/on_enter → update() → draw()
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::time::Instant;

//=== Internal Dependencies ===============================================

use crate::core::render::DisplayList;
use crate::core::QuizContext;

//=== Module Declarations =================================================

mod quiz_scene;
mod result_scene;
mod scene_manager;

//=== Public API ==========================================================

pub use quiz_scene::QuizScene;
pub use result_scene::ResultScene;
pub use scene_manager::{SceneKey, SceneManager};

//=== Scene Trait =========================================================

/// Behavior of one screen: lifecycle hooks, per-tick logic, and drawing.
///
/// Only `draw()` is required:
///
/// ```rust
/// # use canvas_quiz::prelude::*;
/// struct Blank;
///
/// impl Scene for Blank {
///     fn draw(&self, _ctx: &QuizContext, _list: &mut DisplayList) {}
/// }
/// ```
pub trait Scene {
    /// Called when the scene becomes active.
    fn on_enter(&mut self, _ctx: &QuizContext) {}

    /// Called when another scene replaces this one.
    fn on_exit(&mut self, _ctx: &QuizContext) {}

    /// Called once per tick while active, after input is processed.
    fn update(&mut self, _ctx: &mut QuizContext, _now: Instant) {}

    /// Appends this frame's drawing commands.
    fn draw(&self, ctx: &QuizContext, list: &mut DisplayList);
}
