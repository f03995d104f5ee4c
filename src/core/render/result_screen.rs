//=========================================================================
// Result Screen
//=========================================================================

//=== Internal Dependencies ===============================================

use super::animation::{draw_variant, ResultVariant};
use super::{Color, DisplayList};
use crate::core::QuizContext;

const INK: Color = Color::gray(50);

//=== Drawing =============================================================

/// Appends the score summary and the animation for the final score.
pub fn draw_result_screen(list: &mut DisplayList, ctx: &QuizContext) {
    let total = ctx.questions.len();
    let score = ctx.state.score();
    let center_x = ctx.viewport.width / 2.0;

    list.text("Quiz Results", (center_x, 100.0), 40.0, INK);
    list.text(format!("Score: {score} / {total}"), (center_x, 200.0), 60.0, INK);

    draw_variant(
        list,
        ResultVariant::from_score(score, total),
        ctx.viewport,
        ctx.frame,
        score,
        total,
    );
}

//=========================================================================
// Unit Tests
//=========================================================================
