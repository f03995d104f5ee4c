//=========================================================================
// Canvas Quiz Engine
//
// Main entry point and coordinator for the quiz window.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_questions_path()   ├─ loads QuestionStore (CSV)
//         ├─ with_font_path()        ├─ loads font (file or system)
//         ├─ with_fps()              ├─ builds QuizApp
//         └─ with_advance_delay()    └─ runs platform until window closes
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::path::{Path, PathBuf};
use std::time::Duration;

//=== External Dependencies ===============================================

use log::info;
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::layout::Viewport;
use crate::core::quiz::{QuestionStore, QuizConfig, QuizError};
use crate::core::QuizApp;
use crate::platform::{Platform, PlatformError, Rasterizer, TextRenderer, WindowConfig};

//=== EngineError =========================================================

/// Everything that can stop the quiz from starting or running.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Quiz(#[from] QuizError),

    #[error(transparent)]
    Platform(#[from] PlatformError),
}

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **Questions**: `questions.csv` in the working directory
/// - **Font**: first sans-serif system font
/// - **FPS**: 60
/// - **Window**: 800x600, titled "Canvas Quiz"
/// - **Advance delay**: 1 second
/// - **Feedback fade**: 100 frames
///
/// # Examples
///
/// ```no_run
/// use canvas_quiz::EngineBuilder;
/// use std::time::Duration;
///
/// EngineBuilder::new()
///     .with_questions_path("capitals.csv")
///     .with_fps(30)
///     .with_advance_delay(Duration::from_millis(1500))
///     .build()
///     .run()?;
/// # Ok::<(), canvas_quiz::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct EngineBuilder {
    questions_path: PathBuf,
    font_path: Option<PathBuf>,
    window: WindowConfig,
    quiz: QuizConfig,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            questions_path: PathBuf::from("questions.csv"),
            font_path: None,
            window: WindowConfig::default(),
            quiz: QuizConfig::default(),
        }
    }

    /// CSV file with `id,question,option_a,option_b,option_c,correct_answer` rows.
    pub fn with_questions_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.questions_path = path.into();
        self
    }

    /// Uses this font file instead of searching the system fonts.
    pub fn with_font_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.font_path = Some(path.into());
        self
    }

    /// Sets the target frames per second. Animations are frame-based, so
    /// this also sets their speed.
    ///
    /// Default: 60
    ///
    /// # Panics
    ///
    /// Panics if `fps == 0`.
    pub fn with_fps(mut self, fps: u32) -> Self {
        assert!(fps > 0, "FPS must be positive");
        self.window.fps = fps;
        self
    }

    /// Sets the initial window size in logical pixels.
    ///
    /// # Panics
    ///
    /// Panics if either side is zero.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Window size must be non-zero, got {}x{}", width, height);
        self.window.width = width;
        self.window.height = height;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    /// Time between answering and showing the next question.
    ///
    /// Default: 1 second
    pub fn with_advance_delay(mut self, delay: Duration) -> Self {
        self.quiz.advance_delay = delay;
        self
    }

    /// Number of frames the feedback message takes to fade out.
    ///
    /// Default: 100
    pub fn with_feedback_frames(mut self, frames: u32) -> Self {
        self.quiz.feedback_frames = frames;
        self
    }

    /// Builds the engine instance. Nothing is loaded until [`Engine::run`].
    pub fn build(self) -> Engine {
        info!(
            "Building engine (questions: {}, FPS: {}, window: {}x{})",
            self.questions_path.display(),
            self.window.fps,
            self.window.width,
            self.window.height
        );

        Engine {
            questions_path: self.questions_path,
            font_path: self.font_path,
            window: self.window,
            quiz: self.quiz,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Canvas quiz runtime.
///
/// Create via [`EngineBuilder`] with `EngineBuilder::new().build()`.
///
/// # Architecture
///
/// ```text
/// Engine (Main Thread)
///   ├─► QuestionStore (loaded once, read-only)
///   ├─► QuizApp (state machine + scenes, ticked per frame)
///   └─► Platform (event loop, window, rasterizer)
/// ```
#[derive(Debug)]
pub struct Engine {
    questions_path: PathBuf,
    font_path: Option<PathBuf>,
    window: WindowConfig,
    quiz: QuizConfig,
}

impl Engine {
    /// Loads questions and font, opens the window, and blocks until it
    /// closes.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Quiz`] when the question file cannot be read
    /// or parsed, and [`EngineError::Platform`] when no font, window, or
    /// drawing surface is available.
    pub fn run(self) -> Result<(), EngineError> {
        info!("Engine starting");

        //--- 1. Load questions ---------------------------------------------
        let questions = QuestionStore::from_path(&self.questions_path)?;

        //--- 2. Load font and canvas ---------------------------------------
        let text = load_font(self.font_path.as_deref())?;
        let rasterizer = Rasterizer::new(text, self.window.width, self.window.height)?;

        //--- 3. Build quiz core --------------------------------------------
        let viewport = Viewport::new(self.window.width as f32, self.window.height as f32);
        let app = QuizApp::new(questions, self.quiz, viewport);
        info!("Quiz ready, entering event loop");

        //--- 4. Run platform until the window closes -----------------------
        Platform::new(app, rasterizer, self.window).run()?;

        info!("Engine shutdown complete");
        Ok(())
    }
}

fn load_font(path: Option<&Path>) -> Result<TextRenderer, PlatformError> {
    match path {
        Some(path) => TextRenderer::from_path(path),
        None => TextRenderer::from_system(),
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
