//=========================================================================
// Quiz Model
//=========================================================================
//
// Question data and the progression state machine.
//
// Architecture:
//   QuestionStore (read-only, loaded once)
//         ↓
//   QuizState::submit_answer() / advance_if_due() / tick_feedback()
//
//=========================================================================

//=== Module Declarations =================================================

mod error;
mod question;
mod state;
mod store;

//=== Public API ==========================================================

pub use error::QuizError;
pub use question::{OptionKey, Question};
pub use state::{Feedback, Phase, QuizConfig, QuizState, Submission};
pub use store::QuestionStore;
