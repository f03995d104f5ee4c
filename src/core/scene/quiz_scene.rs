//=========================================================================
// Quiz Scene
//=========================================================================
//
// Active while answering. Resolves left-button presses through the
// current frame's hit-test layout and submits the hit option.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::time::Instant;

//=== External Crates =====================================================

use log::trace;

//=== Internal Dependencies ===============================================

use super::Scene;
use crate::core::input::MouseButton;
use crate::core::layout::OptionLayout;
use crate::core::render::quiz_screen::draw_quiz_screen;
use crate::core::render::DisplayList;
use crate::core::QuizContext;

//=== QuizScene ===========================================================

#[derive(Debug, Default)]
pub struct QuizScene;

impl QuizScene {
    pub fn new() -> Self {
        Self
    }
}

impl Scene for QuizScene {
    fn update(&mut self, ctx: &mut QuizContext, now: Instant) {
        if !ctx.input.is_button_pressed(MouseButton::Left) {
            return;
        }

        let (x, y) = ctx.input.mouse_position();
        let Some(option) = OptionLayout::compute(ctx.viewport).hit_test(x, y) else {
            trace!(target: "quiz", "Press at ({x}, {y}) hit no option");
            return;
        };

        ctx.state.submit_answer(&ctx.questions, option, now);
    }

    fn draw(&self, ctx: &QuizContext, list: &mut DisplayList) {
        draw_quiz_screen(list, ctx);
    }
}
