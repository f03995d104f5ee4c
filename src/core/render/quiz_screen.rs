//=========================================================================
// Quiz Screen
//=========================================================================
//
// Answering-phase frame: progress label, wrapped prompt, three option
// buttons, fading feedback, and the pointer effect.
//
// Text sizes scale with the shorter viewport side so the screen reads the
// same on small and large windows.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::animation::draw_cursor_effect;
use super::{Color, DisplayList, DrawCommand, Stroke};
use crate::core::layout::{OptionLayout, Rect};
use crate::core::QuizContext;

//=== Style ===============================================================

const INK: Color = Color::gray(50);
const BUTTON_DEFAULT: Color = Color::gray(220);
const BUTTON_HOVER: Color = Color::gray(200);
const BUTTON_SELECTED: Color = Color::rgb(150, 200, 255);
const BUTTON_RADIUS: f32 = 10.0;
const FEEDBACK_CORRECT: Color = Color::rgb(0, 150, 0);
const FEEDBACK_WRONG: Color = Color::rgb(255, 0, 0);
const FEEDBACK_SIZE: f32 = 30.0;

//=== Button State ========================================================

/// Fill for an option button: selected wins over hover, hover over default.
pub fn button_fill(selected: bool, hovered: bool) -> Color {
    if selected {
        BUTTON_SELECTED
    } else if hovered {
        BUTTON_HOVER
    } else {
        BUTTON_DEFAULT
    }
}

//=== Drawing =============================================================

/// Appends the answering screen for the current question.
///
/// Draws nothing when the index is past the last question.
pub fn draw_quiz_screen(list: &mut DisplayList, ctx: &QuizContext) {
    let state = &ctx.state;
    let Some(question) = ctx.questions.get(state.current_index()) else {
        return;
    };

    let viewport = ctx.viewport;
    let (w, h) = (viewport.width, viewport.height);
    let base = viewport.min_side() * 0.04;

    //--- Progress & Prompt ------------------------------------------------
    list.text(
        format!(
            "Question {} of {}",
            state.current_index() + 1,
            ctx.questions.len()
        ),
        (w / 2.0, h * 0.08),
        base * 0.7,
        INK,
    );

    list.push(DrawCommand::TextBox {
        content: question.prompt.clone(),
        bounds: Rect::from_top_left(w * 0.1, h * 0.15, w * 0.8, h * 0.3),
        size: base,
        color: INK,
    });

    //--- Option Buttons ---------------------------------------------------
    let layout = OptionLayout::compute(viewport);
    let (mx, my) = ctx.input.mouse_position();

    for (key, rect) in layout.iter() {
        let fill = button_fill(state.selected() == Some(key), rect.contains(mx, my));

        list.push(DrawCommand::RoundedRect {
            rect,
            radius: BUTTON_RADIUS,
            fill,
            stroke: Some(Stroke { color: INK, width: 1.0 }),
        });
        list.text(
            format!("{}. {}", key.label(), question.option(key)),
            (rect.cx, rect.cy),
            base * 0.6,
            INK,
        );
    }

    //--- Feedback ---------------------------------------------------------
    if let Some(feedback) = state.feedback() {
        let color = if feedback.is_correct() {
            FEEDBACK_CORRECT
        } else {
            FEEDBACK_WRONG
        };
        list.text(
            feedback.message(),
            (w / 2.0, h - 50.0),
            FEEDBACK_SIZE,
            color.with_alpha(feedback.alpha()),
        );
    }

    draw_cursor_effect(list, (mx, my), ctx.frame);
}

//=========================================================================
// Unit Tests
//=========================================================================
