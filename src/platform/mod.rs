//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the quiz core on a single thread.
//
// Architecture:
// ```text
//  Main Thread:
//  ┌─────────────────────────────────────────────────────────┐
//  │  Winit Event Loop                                       │
//  │   ↓                                                     │
//  │  input_processor (Winit → InputEvent, logical pixels)   │
//  │   ↓                                                     │
//  │  InputBuffer                                            │
//  │   ├─ discrete: Vec<>        (button down/up, in order)  │
//  │   └─ continuous: HashSet<>  (cursor, resize: latest)    │
//  │   ↓                                                     │
//  │  RedrawRequested                                        │
//  │   ├─ drain → QuizApp::tick → QuizApp::render            │
//  │   └─ Rasterizer (tiny-skia, × scale) → softbuffer       │
//  └─────────────────────────────────────────────────────────┘
//
//  Frame Boundary: RedrawRequested
//    → All buffered input handed to the core atomically
//    → Redraws are requested at the configured FPS from about_to_wait
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: input, logic, and drawing all
//   happen in one place, so a frame always sees a consistent state
// - **Fatal errors end the loop**: surface or canvas failures are stored,
//   the loop exits, and `run()` returns the error
// - **Logical pixels in the core**: layout and hit tests never see the
//   scale factor; only the rasterizer multiplies by it
// - **Main thread requirement**: Winit mandates main thread on macOS/iOS,
//   so this runs on the thread that called `Engine::run()`
//
// Responsibilities:
// - Create and manage the OS window and its software surface
// - Convert Winit types → core InputEvents
// - Buffer input until frame boundary
// - Pace frames and present each rendered display list
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;
mod raster;
mod text;

pub(crate) use raster::Rasterizer;
pub(crate) use text::TextRenderer;

//=== Standard Library Imports ============================================

use std::num::NonZeroU32;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use log::*;
use softbuffer::{Context, Surface};
use thiserror::Error;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::QuizApp;
use input_buffer::InputBuffer;

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// All of these are fatal: the window cannot be shown or drawn.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("event loop creation failed: {0}")]
    EventLoopCreation(#[source] winit::error::EventLoopError),

    #[error("event loop error: {0}")]
    EventLoopExecution(#[source] winit::error::EventLoopError),

    #[error("window creation failed: {0}")]
    WindowCreation(#[from] winit::error::OsError),

    #[error("drawing surface error: {0}")]
    Surface(String),

    #[error("cannot allocate a {width}x{height} canvas")]
    Canvas { width: u32, height: u32 },

    #[error("no usable system font found")]
    FontNotFound,

    #[error("cannot read font {path}: {source}")]
    FontRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("font data could not be parsed")]
    FontParse,
}

impl From<softbuffer::SoftBufferError> for PlatformError {
    fn from(error: softbuffer::SoftBufferError) -> Self {
        // Flattened: the platform detail inside is neither Send nor Sync
        Self::Surface(error.to_string())
    }
}

//=== WindowConfig ========================================================

/// Window title, initial logical size, and frame rate.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fps: u32,
}

impl WindowConfig {
    /// Time between two requested redraws.
    pub(crate) fn frame_interval(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.fps.max(1)))
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Canvas Quiz".to_string(),
            width: 800,
            height: 600,
            fps: 60,
        }
    }
}

//=== Platform ============================================================

/// Window owner, input aggregator, and frame driver.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(app, rasterizer, config)`
/// 2. **Execution**: `platform.run()` blocks in the Winit event loop
/// 3. **Event processing**: Winit calls `ApplicationHandler` methods
/// 4. **Shutdown**: window closed or fatal error → loop exits → `run()`
///    returns
///
/// This type is NOT Send/Sync; it must remain on the main thread.
pub(crate) struct Platform {
    /// Quiz logic and scene drawing.
    app: QuizApp,

    /// Software canvas the display list is painted into.
    rasterizer: Rasterizer,

    /// OS window handle (None until `resumed()` called).
    window: Option<Rc<Window>>,

    /// Presentation target bound to `window`.
    surface: Option<Surface<Rc<Window>, Rc<Window>>>,

    /// Buffers discrete/continuous input until frame boundary.
    buffer: InputBuffer,

    config: WindowConfig,
    next_frame: Instant,

    /// First fatal error seen inside the loop.
    error: Option<PlatformError>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Does not create the window yet; that happens lazily in `resumed()`.
    pub(crate) fn new(app: QuizApp, rasterizer: Rasterizer, config: WindowConfig) -> Self {
        info!(target: "platform", "Platform subsystem initialized ({} fps)", config.fps);
        Self {
            app,
            rasterizer,
            window: None,
            surface: None,
            buffer: InputBuffer::new(),
            config,
            next_frame: Instant::now(),
            error: None,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot start, or the
    /// first fatal window/surface error that stopped it.
    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;
        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)?;

        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), PlatformError> {
        let attrs = WindowAttributes::default()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        let window = Rc::new(event_loop.create_window(attrs)?);
        let context = Context::new(window.clone())?;
        let surface = Surface::new(&context, window.clone())?;

        let size = window.inner_size();
        info!(
            target: "platform",
            "Window created: {}x{} @ {}x DPI",
            size.width,
            size.height,
            window.scale_factor()
        );

        self.buffer.push(input_processor::process_resize(size, window.scale_factor()));
        window.request_redraw();
        self.window = Some(window);
        self.surface = Some(surface);
        Ok(())
    }

    /// One frame: hand buffered input to the core, then draw and present.
    fn redraw(&mut self) -> Result<(), PlatformError> {
        if !self.buffer.is_empty() {
            trace!(target: "platform::input", "Flushing {} events", self.buffer.len());
        }
        let events = self.buffer.drain();

        self.app.tick(&events, Instant::now());
        let list = self.app.render();

        let (Some(window), Some(surface)) = (&self.window, &mut self.surface) else {
            return Ok(());
        };

        let size = window.inner_size();
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            // Minimized: nothing to present
            return Ok(());
        };

        surface.resize(width, height)?;
        self.rasterizer.resize(width.get(), height.get())?;
        self.rasterizer.draw(&list, window.scale_factor() as f32);

        let mut frame = surface.buffer_mut()?;
        self.rasterizer.copy_to(&mut frame);
        frame.present()?;
        Ok(())
    }

    fn scale_factor(&self) -> f64 {
        self.window.as_ref().map_or(1.0, |window| window.scale_factor())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: PlatformError) {
        error!(target: "platform", "{}", error);
        if self.error.is_none() {
            self.error = Some(error);
        }
        event_loop.exit();
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Called when app becomes active (startup or mobile resume).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        if let Err(e) = self.create_window(event_loop) {
            self.fail(event_loop, e);
        }
    }

    /// Handles per-window events.
    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                event_loop.exit();
            }

            WindowEvent::CursorMoved { position, .. } => {
                let scale = self.scale_factor();
                self.buffer.push(input_processor::process_mouse_move(position, scale));
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.buffer.push(input_processor::process_mouse_button(button, state));
            }

            WindowEvent::Resized(size) => {
                debug!(target: "platform", "Window resized to {}x{}", size.width, size.height);
                let scale = self.scale_factor();
                self.buffer.push(input_processor::process_resize(size, scale));
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                // Same physical size, new logical size; a Resized may follow
                debug!(target: "platform", "Scale factor changed to {}", scale_factor);
                if let Some(window) = &self.window {
                    self.buffer
                        .push(input_processor::process_resize(window.inner_size(), scale_factor));
                    window.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => {
                if let Err(e) = self.redraw() {
                    self.fail(event_loop, e);
                }
            }

            _ => {
                // Ignore: keyboard, focus, scroll, etc.
            }
        }
    }

    /// Requests the next redraw at the configured frame rate.
    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if now >= self.next_frame {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
            self.next_frame = now + self.config.frame_interval();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //=====================================================================
    // WindowConfig Tests
    //=====================================================================

    #[test]
    fn default_window_config() {
        let config = WindowConfig::default();
        assert_eq!((config.width, config.height, config.fps), (800, 600, 60));
        assert_eq!(config.title, "Canvas Quiz");
    }

    #[test]
    fn frame_interval_follows_fps() {
        let config = WindowConfig { fps: 50, ..WindowConfig::default() };
        assert_eq!(config.frame_interval(), Duration::from_millis(20));
    }

    #[test]
    fn zero_fps_does_not_divide_by_zero() {
        let config = WindowConfig { fps: 0, ..WindowConfig::default() };
        assert_eq!(config.frame_interval(), Duration::from_secs(1));
    }

    //=====================================================================
    // Scale Factor Tests
    //=====================================================================

    use crate::core::input::{InputEvent, MouseButton};
    use crate::core::layout::{OptionLayout, Viewport};
    use crate::core::quiz::{OptionKey, Question, QuestionStore, QuizConfig};
    use crate::core::render::DrawCommand;
    use winit::dpi::{PhysicalPosition, PhysicalSize};

    fn quiz(questions: usize) -> QuizApp {
        let questions = QuestionStore::new(
            (1..=questions)
                .map(|i| Question {
                    id: i.to_string(),
                    prompt: format!("Prompt {i}"),
                    options: ["x".to_string(), "y".to_string(), "z".to_string()],
                    correct: OptionKey::A,
                })
                .collect(),
        );
        QuizApp::new(questions, QuizConfig::default(), Viewport::new(800.0, 600.0))
    }

    fn text_position(app: &QuizApp, content: &str) -> Option<(f32, f32, f32)> {
        app.render().commands().iter().find_map(|command| match command {
            DrawCommand::Text { content: c, position, size, .. } if c == content => {
                Some((position.0, position.1, *size))
            }
            _ => None,
        })
    }

    #[test]
    fn hidpi_window_renders_same_layout_as_standard() {
        let now = Instant::now();
        for questions in [0, 1] {
            let mut standard = quiz(questions);
            let mut hidpi = quiz(questions);
            standard.tick(&[input_processor::process_resize(PhysicalSize::new(800, 600), 1.0)], now);
            hidpi.tick(&[input_processor::process_resize(PhysicalSize::new(1600, 1200), 2.0)], now);

            assert_eq!(standard.render(), hidpi.render());
        }
    }

    #[test]
    fn result_title_keeps_its_proportion_on_hidpi() {
        let now = Instant::now();
        let mut app = quiz(0);
        app.tick(&[input_processor::process_resize(PhysicalSize::new(1600, 1200), 2.0)], now);

        let (x, y, size) = text_position(&app, "Quiz Results").unwrap();
        let viewport = app.context().viewport;
        assert_eq!((x / viewport.width, y / viewport.height), (0.5, 100.0 / 600.0));
        assert_eq!(size, 40.0);
    }

    #[test]
    fn hidpi_click_hits_the_button_under_the_cursor() {
        let now = Instant::now();
        let mut app = quiz(2);
        let target = OptionLayout::compute(Viewport::new(800.0, 600.0)).rect(OptionKey::B);

        app.tick(
            &[
                input_processor::process_resize(PhysicalSize::new(1600, 1200), 2.0),
                input_processor::process_mouse_move(
                    PhysicalPosition::new(f64::from(target.cx) * 2.0, f64::from(target.cy) * 2.0),
                    2.0,
                ),
                InputEvent::MouseButtonDown { button: MouseButton::Left },
            ],
            now,
        );

        assert_eq!(app.context().state.selected(), Some(OptionKey::B));
    }

    //=====================================================================
    // PlatformError Tests
    //=====================================================================

    #[test]
    fn platform_error_is_error_trait() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PlatformError>();
    }

    #[test]
    fn platform_error_display_format() {
        let canvas = PlatformError::Canvas { width: 0, height: 10 };
        assert_eq!(canvas.to_string(), "cannot allocate a 0x10 canvas");

        let read = PlatformError::FontRead {
            path: PathBuf::from("missing.ttf"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(read.to_string().contains("missing.ttf"));
        assert!(std::error::Error::source(&read).is_some());
    }
}
