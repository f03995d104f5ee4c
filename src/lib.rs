//=========================================================================
// Canvas Quiz — Library Root
//
// A single-window, three-option multiple-choice quiz drawn frame by frame
// onto a software canvas.
//
// Responsibilities:
// - Expose the engine interface (`Engine`, `EngineBuilder`)
// - Expose the window-independent core (quiz model, layout, scenes,
//   display-list rendering) for embedding and testing
// - Keep the Winit/softbuffer integration (`platform`) private
//
// Typical usage:
// ```no_run
// use canvas_quiz::EngineBuilder;
//
// fn main() -> Result<(), canvas_quiz::EngineError> {
//     EngineBuilder::new().with_questions_path("questions.csv").build().run()
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds everything that does not touch the window system: CSV
// question store, quiz state machine, hit-test layout, scenes, and the
// renderer that turns a frame into a display list.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the window, the event loop, and pixel output.
// `engine` wires the question file, the font, the core, and the platform.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder, EngineError};
pub use platform::PlatformError;
