//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use canvas_quiz::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine
pub use crate::engine::{Engine, EngineBuilder, EngineError};

// Application core
pub use crate::core::{QuizApp, QuizContext};

// Quiz model
pub use crate::core::quiz::{OptionKey, Phase, Question, QuestionStore, QuizConfig, QuizError, QuizState};

// Input
pub use crate::core::input::{InputEvent, MouseButton};

// Layout
pub use crate::core::layout::{OptionLayout, Rect, Viewport};

// Rendering
pub use crate::core::render::{Color, DisplayList, DrawCommand};

// Scene system
pub use crate::core::scene::{Scene, SceneKey, SceneManager};
