//=========================================================================
// Core
//
// Everything that is independent of the window system: quiz model,
// input state, layout, scenes, and display-list rendering.
//
// Responsibilities:
// - Own the application context (questions, quiz state, input, viewport)
// - Run one tick per frame: input → advance → scene switch → scene logic
// - Produce the frame's display list from the active scene
//
// Notes:
// The context is an explicit object handed to scenes; there are no
// process-wide singletons. The platform layer owns a `QuizApp` and calls
// `tick()` then `render()` once per frame.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::time::Instant;

//=== Internal Modules ====================================================

pub mod input;
pub mod layout;
pub mod quiz;
pub mod render;
pub mod scene;

use input::{InputEvent, StateTracker};
use layout::Viewport;
use quiz::{Phase, QuestionStore, QuizConfig, QuizState};
use render::{Color, DisplayList, DrawCommand};
use scene::{QuizScene, ResultScene, SceneManager};

const BACKGROUND: Color = Color::gray(240);

//=== QuizContext =========================================================

/// Shared data handed to scenes each tick.
///
/// Scenes receive `&mut QuizContext` during `update()` and
/// `&QuizContext` while drawing.
#[derive(Debug)]
pub struct QuizContext {
    /// Questions in presentation order (read-only).
    pub questions: QuestionStore,

    /// Progress, score, phase, and feedback.
    pub state: QuizState,

    /// Pointer position and per-frame button deltas.
    pub input: StateTracker,

    /// Current drawable size.
    pub viewport: Viewport,

    /// Frames ticked so far; drives every animation.
    pub frame: u64,
}

impl QuizContext {
    pub fn new(questions: QuestionStore, config: QuizConfig, viewport: Viewport) -> Self {
        let state = QuizState::new(&questions, config);
        Self {
            questions,
            state,
            input: StateTracker::new(),
            viewport,
            frame: 0,
        }
    }
}

//=== QuizApp =============================================================

/// Owns the context and the phase-keyed scenes.
pub struct QuizApp {
    context: QuizContext,
    scenes: SceneManager<Phase>,
}

impl QuizApp {
    //--- Construction -----------------------------------------------------

    /// Builds the context and activates the scene for the initial phase.
    pub fn new(questions: QuestionStore, config: QuizConfig, viewport: Viewport) -> Self {
        let context = QuizContext::new(questions, config, viewport);

        let mut scenes = SceneManager::new();
        scenes.register_scene(Phase::Answering, QuizScene::new());
        scenes.register_scene(Phase::Finished, ResultScene::new());
        scenes.switch_to(context.state.phase(), &context);

        Self { context, scenes }
    }

    //--- Frame ------------------------------------------------------------

    /// Runs one frame of logic.
    ///
    /// Order:
    ///  1. Advance the frame counter
    ///  2. Apply resizes and update pointer state
    ///  3. Advance to the next question if its deadline passed
    ///  4. Switch scenes if the phase changed
    ///  5. Let the active scene handle presses
    ///  6. Fade the feedback by one frame
    pub fn tick(&mut self, events: &[InputEvent], now: Instant) {
        let ctx = &mut self.context;
        ctx.frame += 1;

        //--- Step 1: Input ------------------------------------------------
        for event in events {
            if let InputEvent::Resized { width, height } = event {
                ctx.viewport = Viewport::new(*width, *height);
            }
        }
        ctx.input.clear();
        ctx.input.process_events(events);

        //--- Step 2: Progression ------------------------------------------
        ctx.state.advance_if_due(&ctx.questions, now);
        self.scenes.switch_to(ctx.state.phase(), ctx);

        //--- Step 3: Scene logic ------------------------------------------
        self.scenes.update(ctx, now);
        ctx.state.tick_feedback();
    }

    /// Produces the display list for the current frame.
    pub fn render(&self) -> DisplayList {
        let mut list = DisplayList::new();
        list.push(DrawCommand::Clear(BACKGROUND));
        self.scenes.draw(&self.context, &mut list);
        list
    }

    //--- Accessors --------------------------------------------------------

    pub fn context(&self) -> &QuizContext {
        &self.context
    }

    pub fn phase(&self) -> Phase {
        self.context.state.phase()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
