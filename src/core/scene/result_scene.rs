//=========================================================================
// Result Scene
//=========================================================================

//=== External Crates =====================================================

use log::info;

//=== Internal Dependencies ===============================================

use super::Scene;
use crate::core::render::animation::ResultVariant;
use crate::core::render::result_screen::draw_result_screen;
use crate::core::render::DisplayList;
use crate::core::QuizContext;

//=== ResultScene =========================================================

/// Final score screen. Ignores all input; animates until the window closes.
#[derive(Debug, Default)]
pub struct ResultScene;

impl ResultScene {
    pub fn new() -> Self {
        Self
    }
}

impl Scene for ResultScene {
    fn on_enter(&mut self, ctx: &QuizContext) {
        let total = ctx.questions.len();
        let score = ctx.state.score();
        info!(
            target: "scene",
            "Showing results: {} / {} ({:?})",
            score,
            total,
            ResultVariant::from_score(score, total)
        );
    }

    fn draw(&self, ctx: &QuizContext, list: &mut DisplayList) {
        draw_result_screen(list, ctx);
    }
}
